use serde::{Deserialize, Serialize};

/// Parâmetros fixos do cálculo mensal.
pub mod params {
    /// Dias úteis considerados por mês.
    pub const WEEKDAYS_PER_MONTH: f64 = 22.0;
    /// Dias de fim de semana considerados por mês.
    pub const WEEKEND_DAYS_PER_MONTH: f64 = 8.0;
    /// Semanas por mês para a cadência de visitas.
    pub const WEEKS_PER_MONTH: f64 = 4.0;
    /// Teto de horas por visita presencial.
    pub const VISIT_CAP_HOURS: f64 = 4.0;

    pub const DEFAULT_TEAM_SIZE: f64 = 4.0;
    pub const DEFAULT_GLOBAL_MULTIPLIER: f64 = 1.0;
}

/// Nível de complexidade global selecionado na triagem. Define qual
/// multiplicador da tabela de cada categoria está ativo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComplexityLevel {
    Operacional,
    Integrado,
    Sistemico,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 3] = [
        ComplexityLevel::Operacional,
        ComplexityLevel::Integrado,
        ComplexityLevel::Sistemico,
    ];

    pub fn index(self) -> usize {
        match self {
            ComplexityLevel::Operacional => 0,
            ComplexityLevel::Integrado => 1,
            ComplexityLevel::Sistemico => 2,
        }
    }

    pub fn from_index(index: usize) -> ComplexityLevel {
        Self::ALL.get(index).copied().unwrap_or(ComplexityLevel::Operacional)
    }

    pub fn label(self) -> &'static str {
        match self {
            ComplexityLevel::Operacional => "Vetor Operacional",
            ComplexityLevel::Integrado => "Vetor Integrado",
            ComplexityLevel::Sistemico => "Vetor Sistêmico",
        }
    }
}

impl Default for ComplexityLevel {
    fn default() -> Self {
        ComplexityLevel::Operacional
    }
}

/// Uma categoria de trabalho com tarifa base editável, tabela de
/// multiplicadores por nível e as horas lançadas para o mês.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub base_rate: f64,
    pub multipliers: [f64; 3],
    /// Categoria que dirige a cadência de visitas presenciais.
    pub on_site: bool,
    pub hours: f64,
}

impl CategoryInput {
    pub fn new(name: &str, base_rate: f64, multipliers: [f64; 3], on_site: bool) -> Self {
        Self {
            name: name.to_string(),
            base_rate,
            multipliers,
            on_site,
            hours: 0.0,
        }
    }

    pub fn effective_rate(&self, level: ComplexityLevel, global_multiplier: f64) -> f64 {
        self.base_rate * self.multipliers[level.index()] * global_multiplier
    }
}

/// As seis categorias padrão com tarifas em R$/hora.
pub fn default_categories() -> Vec<CategoryInput> {
    vec![
        CategoryInput::new("Diagnóstico e mapeamento", 90.0, [1.0, 1.15, 1.35], false),
        CategoryInput::new("Desenho e padronização de processos", 80.0, [1.0, 1.2, 1.4], false),
        CategoryInput::new("Automação e integrações", 110.0, [1.1, 1.3, 1.6], false),
        CategoryInput::new("Dados e indicadores", 95.0, [1.0, 1.25, 1.5], false),
        CategoryInput::new("Treinamento e documentação", 70.0, [1.0, 1.1, 1.2], false),
        CategoryInput::new("Acompanhamento presencial", 70.0, [1.0, 1.2, 1.4], true),
    ]
}

/// Configuração global do orçamento, fora das categorias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub level: ComplexityLevel,
    pub global_multiplier: f64,
    pub team_size: f64,
    pub months_min: f64,
    pub months_max: f64,
    /// `Some(pct)` quando o trabalho em fim de semana está habilitado;
    /// pct é a produtividade relativa ao dia útil, 0–100.
    pub weekend_pct: Option<f64>,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            level: ComplexityLevel::default(),
            global_multiplier: params::DEFAULT_GLOBAL_MULTIPLIER,
            team_size: params::DEFAULT_TEAM_SIZE,
            months_min: 0.0,
            months_max: 0.0,
            weekend_pct: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub effective_rate: f64,
    pub hours: f64,
    pub subtotal: f64,
}

/// Cadência de presença no cliente derivada das categorias presenciais.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitPlan {
    pub weekly_hours: f64,
    pub visits_per_week: u32,
    pub hours_per_visit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeSummary {
    pub min: f64,
    pub max: f64,
    pub mid: f64,
}

impl RangeSummary {
    fn scaled(per_month: f64, months_min: f64, months_max: f64) -> Self {
        let min = per_month * months_min;
        let max = per_month * months_max;
        Self {
            min,
            max,
            mid: (min + max) / 2.0,
        }
    }
}

/// Conjunto completo de valores derivados de um orçamento. Função pura dos
/// inputs correntes; recalculado inteiro a cada alteração.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub line_items: Vec<LineItem>,
    pub monthly_total: f64,
    pub monthly_hours: f64,
    pub hours_per_person: f64,
    pub weekday_daily_hours: f64,
    /// `None` quando o fim de semana está desabilitado; a métrica some do
    /// resultado em vez de aparecer zerada.
    pub weekend_daily_hours: Option<f64>,
    pub visits: VisitPlan,
    pub project_hours: RangeSummary,
    pub revenue: RangeSummary,
}

/// Coerção de campo numérico de texto livre: vazio ou inválido vira 0,
/// negativos são truncados em 0.
pub fn parse_field(raw: &str) -> f64 {
    let value: f64 = raw.trim().parse().unwrap_or(0.0);
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// Calcula o orçamento mensal e as métricas de planejamento.
pub fn compute_quote(categories: &[CategoryInput], config: &QuoteConfig) -> Quote {
    let line_items: Vec<LineItem> = categories
        .iter()
        .map(|category| {
            let effective_rate = category.effective_rate(config.level, config.global_multiplier);
            LineItem {
                name: category.name.clone(),
                effective_rate,
                hours: category.hours,
                subtotal: effective_rate * category.hours,
            }
        })
        .collect();

    let monthly_total: f64 = line_items.iter().map(|item| item.subtotal).sum();
    let monthly_hours: f64 = categories.iter().map(|category| category.hours).sum();

    let team_size = config.team_size.max(1.0);
    let hours_per_person = monthly_hours / team_size;

    let (weekday_daily_hours, weekend_daily_hours) = match config.weekend_pct {
        Some(pct) => {
            let ratio = pct / 100.0;
            let effective_days =
                params::WEEKDAYS_PER_MONTH + params::WEEKEND_DAYS_PER_MONTH * ratio;
            let weekday = hours_per_person / effective_days;
            (weekday, Some(weekday * ratio))
        }
        None => (hours_per_person / params::WEEKDAYS_PER_MONTH, None),
    };

    let on_site_hours: f64 = categories
        .iter()
        .filter(|category| category.on_site)
        .map(|category| category.hours)
        .sum();
    let weekly_hours = on_site_hours / params::WEEKS_PER_MONTH;
    let visits_per_week = if weekly_hours > 0.0 {
        (weekly_hours / params::VISIT_CAP_HOURS).ceil() as u32
    } else {
        0
    };
    let hours_per_visit = if visits_per_week > 0 {
        weekly_hours / visits_per_week as f64
    } else {
        0.0
    };

    Quote {
        line_items,
        monthly_total,
        monthly_hours,
        hours_per_person,
        weekday_daily_hours,
        weekend_daily_hours,
        visits: VisitPlan {
            weekly_hours,
            visits_per_week,
            hours_per_visit,
        },
        project_hours: RangeSummary::scaled(monthly_hours, config.months_min, config.months_max),
        revenue: RangeSummary::scaled(monthly_total, config.months_min, config.months_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn category(base_rate: f64, multipliers: [f64; 3], hours: f64) -> CategoryInput {
        let mut c = CategoryInput::new("teste", base_rate, multipliers, false);
        c.hours = hours;
        c
    }

    #[test]
    fn total_is_sum_of_line_item_subtotals() {
        let categories = vec![
            category(90.0, [1.0, 1.15, 1.35], 10.0),
            category(110.0, [1.1, 1.3, 1.6], 5.0),
            category(70.0, [1.0, 1.1, 1.2], 0.0),
        ];
        let config = QuoteConfig {
            global_multiplier: 1.5,
            ..QuoteConfig::default()
        };
        let quote = compute_quote(&categories, &config);

        let expected: f64 = quote.line_items.iter().map(|i| i.subtotal).sum();
        assert!(approx(quote.monthly_total, expected));
        assert!(approx(quote.monthly_total, 90.0 * 1.5 * 10.0 + 110.0 * 1.1 * 1.5 * 5.0));
        assert!(approx(quote.monthly_hours, 15.0));
    }

    #[test]
    fn example_effective_rate_and_subtotal() {
        // tarifa 70, nível com multiplicador 1.2, global 1.0, 20 horas
        let categories = vec![category(70.0, [1.0, 1.2, 1.4], 20.0)];
        let config = QuoteConfig {
            level: ComplexityLevel::Integrado,
            ..QuoteConfig::default()
        };
        let quote = compute_quote(&categories, &config);

        assert!(approx(quote.line_items[0].effective_rate, 84.0));
        assert!(approx(quote.line_items[0].subtotal, 1680.0));
    }

    #[test]
    fn level_switch_follows_each_category_table() {
        let flat = category(100.0, [1.2, 1.2, 1.2], 1.0);
        let steep = category(100.0, [1.0, 1.5, 2.0], 1.0);
        let categories = vec![flat, steep];

        let operacional = compute_quote(
            &categories,
            &QuoteConfig {
                level: ComplexityLevel::Operacional,
                ..QuoteConfig::default()
            },
        );
        let sistemico = compute_quote(
            &categories,
            &QuoteConfig {
                level: ComplexityLevel::Sistemico,
                ..QuoteConfig::default()
            },
        );

        // multiplicadores iguais entre níveis: tarifa não muda
        assert!(approx(
            operacional.line_items[0].effective_rate,
            sistemico.line_items[0].effective_rate
        ));
        assert!(approx(operacional.line_items[1].effective_rate, 100.0));
        assert!(approx(sistemico.line_items[1].effective_rate, 200.0));
    }

    #[test]
    fn team_size_zero_is_treated_as_one() {
        let categories = vec![category(100.0, [1.0, 1.0, 1.0], 44.0)];
        let config = QuoteConfig {
            team_size: 0.0,
            ..QuoteConfig::default()
        };
        let quote = compute_quote(&categories, &config);

        assert!(approx(quote.hours_per_person, 44.0));
        assert!(quote.weekday_daily_hours.is_finite());
        assert!(approx(quote.weekday_daily_hours, 2.0));
    }

    #[test]
    fn zero_month_range_zeroes_projections() {
        let categories = vec![category(100.0, [1.0, 1.0, 1.0], 40.0)];
        let quote = compute_quote(&categories, &QuoteConfig::default());

        assert!(approx(quote.project_hours.min, 0.0));
        assert!(approx(quote.project_hours.max, 0.0));
        assert!(approx(quote.revenue.min, 0.0));
        assert!(approx(quote.revenue.max, 0.0));
        assert!(approx(quote.revenue.mid, 0.0));
    }

    #[test]
    fn revenue_range_and_midpoint_scale_with_months() {
        // total mensal de 10.000: 100 horas a R$ 100
        let categories = vec![category(100.0, [1.0, 1.0, 1.0], 100.0)];
        let config = QuoteConfig {
            months_min: 4.0,
            months_max: 6.0,
            ..QuoteConfig::default()
        };
        let quote = compute_quote(&categories, &config);

        assert!(approx(quote.monthly_total, 10_000.0));
        assert!(approx(quote.revenue.min, 40_000.0));
        assert!(approx(quote.revenue.max, 60_000.0));
        assert!(approx(quote.revenue.mid, 50_000.0));
        assert!(approx(quote.project_hours.min, 400.0));
        assert!(approx(quote.project_hours.max, 600.0));
    }

    #[test]
    fn visit_count_is_ceiling_of_weekly_load() {
        // 40 horas presenciais no mês = 10 por semana -> 3 visitas de 3,33h
        let mut on_site = CategoryInput::new("presencial", 70.0, [1.0, 1.2, 1.4], true);
        on_site.hours = 40.0;
        let quote = compute_quote(&[on_site.clone()], &QuoteConfig::default());

        assert!(approx(quote.visits.weekly_hours, 10.0));
        assert_eq!(quote.visits.visits_per_week, 3);
        assert!(approx(quote.visits.hours_per_visit, 10.0 / 3.0));

        on_site.hours = 0.0;
        let empty = compute_quote(&[on_site], &QuoteConfig::default());
        assert_eq!(empty.visits.visits_per_week, 0);
        assert!(approx(empty.visits.hours_per_visit, 0.0));
    }

    #[test]
    fn only_on_site_categories_drive_visits() {
        let mut remote = category(100.0, [1.0, 1.0, 1.0], 80.0);
        remote.on_site = false;
        let quote = compute_quote(&[remote], &QuoteConfig::default());
        assert_eq!(quote.visits.visits_per_week, 0);
    }

    #[test]
    fn weekend_disabled_omits_weekend_metric() {
        let categories = vec![category(100.0, [1.0, 1.0, 1.0], 88.0)];
        let quote = compute_quote(&categories, &QuoteConfig::default());

        assert!(quote.weekend_daily_hours.is_none());
        assert!(approx(quote.weekday_daily_hours, 88.0 / 4.0 / 22.0));
    }

    #[test]
    fn weekend_percentage_redistributes_daily_load() {
        // 104 horas por pessoa, 50% de produtividade no fim de semana:
        // 22 + 8 * 0.5 = 26 dias efetivos -> 4h/dia útil, 2h/dia de fds
        let categories = vec![category(100.0, [1.0, 1.0, 1.0], 104.0)];
        let config = QuoteConfig {
            team_size: 1.0,
            weekend_pct: Some(50.0),
            ..QuoteConfig::default()
        };
        let quote = compute_quote(&categories, &config);

        assert!(approx(quote.weekday_daily_hours, 4.0));
        assert!(approx(quote.weekend_daily_hours.unwrap(), 2.0));
    }

    #[test]
    fn parse_field_coerces_silently() {
        assert!(approx(parse_field(""), 0.0));
        assert!(approx(parse_field("   "), 0.0));
        assert!(approx(parse_field("abc"), 0.0));
        assert!(approx(parse_field("-5"), 0.0));
        assert!(approx(parse_field("NaN"), 0.0));
        assert!(approx(parse_field("12.5"), 12.5));
        assert!(approx(parse_field(" 7 "), 7.0));
    }

    #[test]
    fn default_categories_have_one_on_site() {
        let categories = default_categories();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories.iter().filter(|c| c.on_site).count(), 1);
    }
}
