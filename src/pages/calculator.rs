use yew::prelude::*;
use web_sys::{Event, HtmlCanvasElement, HtmlInputElement, HtmlSelectElement};
use wasm_bindgen::JsCast;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;

use crate::pricing::engine::{
    compute_quote, default_categories, parse_field, ComplexityLevel, LineItem, QuoteConfig,
};

/// Formata um valor em reais: R$ 1.680,00.
fn format_brl(value: f64) -> String {
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let integer = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::new();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("R$ {}{},{:02}", sign, grouped, fraction)
}

fn format_hours(value: f64) -> String {
    format!("{:.1}h", value)
}

#[derive(Properties, PartialEq)]
struct SubtotalChartProps {
    items: Vec<LineItem>,
}

/// Gráfico de barras dos subtotais por categoria, desenhado no canvas.
#[function_component(SubtotalChart)]
fn subtotal_chart(props: &SubtotalChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let items = props.items.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .unwrap()
                        .unwrap()
                        .dyn_into::<web_sys::CanvasRenderingContext2d>()
                        .unwrap();
                    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

                    canvas.set_width(640);
                    canvas.set_height(320);

                    let max_subtotal = items
                        .iter()
                        .map(|item| item.subtotal)
                        .fold(0.0_f64, f64::max);
                    if max_subtotal > 0.0 {
                        let backend = CanvasBackend::with_canvas_object(canvas).unwrap();
                        let root = backend.into_drawing_area();
                        root.fill(&RGBColor(20, 24, 22)).unwrap();

                        let mut chart = ChartBuilder::on(&root)
                            .margin(12)
                            .caption(
                                "Subtotal por categoria (R$)",
                                ("sans-serif", 18).into_font().color(&WHITE),
                            )
                            .x_label_area_size(30)
                            .y_label_area_size(70)
                            .build_cartesian_2d(0..items.len(), 0.0..max_subtotal * 1.1)
                            .unwrap();

                        chart
                            .configure_mesh()
                            .disable_x_mesh()
                            .x_labels(items.len())
                            .x_label_formatter(&|index| format!("C{}", index + 1))
                            .label_style(
                                ("sans-serif", 12)
                                    .into_font()
                                    .color(&RGBColor(153, 153, 153)),
                            )
                            .axis_style(&RGBColor(90, 90, 90))
                            .light_line_style(&RGBColor(40, 46, 43))
                            .draw()
                            .unwrap();

                        chart
                            .draw_series(items.iter().enumerate().map(|(index, item)| {
                                Rectangle::new(
                                    [(index, 0.0), (index + 1, item.subtotal)],
                                    RGBColor(52, 211, 153).filled(),
                                )
                            }))
                            .unwrap();

                        root.present().unwrap();
                    }
                }
                || ()
            },
            props.items.clone(),
        );
    }

    html! { <canvas ref={canvas_ref} class="subtotal-chart" /> }
}

#[function_component(Calculator)]
pub fn calculator() -> Html {
    let defs = default_categories();

    let base_rates = use_state(|| {
        default_categories()
            .iter()
            .map(|c| c.base_rate.to_string())
            .collect::<Vec<String>>()
    });
    let hours = use_state(|| vec![String::new(); defs.len()]);
    let level = use_state(ComplexityLevel::default);
    let global_multiplier = use_state(|| "1.0".to_string());
    let team_size = use_state(|| "4".to_string());
    let months_min = use_state(String::new);
    let months_max = use_state(String::new);
    let weekend_enabled = use_state(|| false);
    let weekend_pct = use_state(|| "50".to_string());

    // Derivação pura: tudo recalculado a cada render a partir dos campos.
    let categories: Vec<_> = defs
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let mut category = def.clone();
            category.base_rate = parse_field(&base_rates[index]);
            category.hours = parse_field(&hours[index]);
            category
        })
        .collect();

    let config = QuoteConfig {
        level: *level,
        global_multiplier: parse_field(&global_multiplier),
        team_size: parse_field(&team_size),
        months_min: parse_field(&months_min),
        months_max: parse_field(&months_max),
        weekend_pct: if *weekend_enabled {
            Some(parse_field(&weekend_pct).min(100.0))
        } else {
            None
        },
    };

    let quote = compute_quote(&categories, &config);

    let on_level_change = {
        let level = level.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let index = select.value().parse::<usize>().unwrap_or(0);
            level.set(ComplexityLevel::from_index(index));
        })
    };

    let text_input = |state: UseStateHandle<String>| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let vec_input = |state: UseStateHandle<Vec<String>>, index: usize| {
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut values = (*state).clone();
            values[index] = input.value();
            state.set(values);
        })
    };

    let on_weekend_toggle = {
        let weekend_enabled = weekend_enabled.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            weekend_enabled.set(input.checked());
        })
    };

    html! {
        <div class="calculator-page">
            <div class="calculator-container">
                <div class="calculator-header">
                    <h1>{"Calculadora de Precificação por Horas"}</h1>
                    <p>
                        {"Lance as horas previstas por categoria, ajuste os multiplicadores e veja o valor mensal e as métricas de planejamento do projeto."}
                    </p>
                </div>

                <div class="calculator-block">
                    <h2>{"Configuração"}</h2>
                    <div class="config-grid">
                        <label>
                            {"Nível de complexidade"}
                            <select onchange={on_level_change}>
                                {
                                    ComplexityLevel::ALL.iter().map(|l| html! {
                                        <option
                                            value={l.index().to_string()}
                                            selected={*l == *level}
                                        >
                                            {l.label()}
                                        </option>
                                    }).collect::<Html>()
                                }
                            </select>
                        </label>
                        <label>
                            {"Multiplicador global"}
                            <input
                                type="text"
                                inputmode="decimal"
                                value={(*global_multiplier).clone()}
                                oninput={text_input(global_multiplier.clone())}
                            />
                        </label>
                        <label>
                            {"Tamanho do time"}
                            <input
                                type="text"
                                inputmode="numeric"
                                value={(*team_size).clone()}
                                oninput={text_input(team_size.clone())}
                            />
                        </label>
                        <label>
                            {"Duração mínima (meses)"}
                            <input
                                type="text"
                                inputmode="decimal"
                                value={(*months_min).clone()}
                                oninput={text_input(months_min.clone())}
                            />
                        </label>
                        <label>
                            {"Duração máxima (meses)"}
                            <input
                                type="text"
                                inputmode="decimal"
                                value={(*months_max).clone()}
                                oninput={text_input(months_max.clone())}
                            />
                        </label>
                        <label class="weekend-toggle">
                            <input
                                type="checkbox"
                                checked={*weekend_enabled}
                                onchange={on_weekend_toggle}
                            />
                            {"Incluir fins de semana"}
                        </label>
                        {
                            if *weekend_enabled {
                                html! {
                                    <label>
                                        {"Produtividade no fim de semana (%)"}
                                        <input
                                            type="text"
                                            inputmode="numeric"
                                            value={(*weekend_pct).clone()}
                                            oninput={text_input(weekend_pct.clone())}
                                        />
                                    </label>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>

                <div class="calculator-block">
                    <h2>{"Categorias"}</h2>
                    <table class="category-table">
                        <thead>
                            <tr>
                                <th>{"Categoria"}</th>
                                <th>{"Tarifa base (R$/h)"}</th>
                                <th>{"Horas no mês"}</th>
                                <th>{"Tarifa efetiva"}</th>
                                <th>{"Subtotal"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                defs.iter().enumerate().map(|(index, def)| {
                                    let item = &quote.line_items[index];
                                    html! {
                                        <tr>
                                            <td>
                                                {&def.name}
                                                { if def.on_site { html! { <span class="on-site-tag">{"presencial"}</span> } } else { html! {} } }
                                            </td>
                                            <td>
                                                <input
                                                    type="text"
                                                    inputmode="decimal"
                                                    value={base_rates[index].clone()}
                                                    oninput={vec_input(base_rates.clone(), index)}
                                                />
                                            </td>
                                            <td>
                                                <input
                                                    type="text"
                                                    inputmode="decimal"
                                                    placeholder="0"
                                                    value={hours[index].clone()}
                                                    oninput={vec_input(hours.clone(), index)}
                                                />
                                            </td>
                                            <td>{format_brl(item.effective_rate)}</td>
                                            <td>{format_brl(item.subtotal)}</td>
                                        </tr>
                                    }
                                }).collect::<Html>()
                            }
                        </tbody>
                    </table>
                </div>

                <div class="calculator-block results-block">
                    <h2>{"Resultado mensal"}</h2>
                    <div class="results-grid">
                        <div class="result-item">
                            <span class="result-label">{"Valor mensal"}</span>
                            <span class="result-value total">{format_brl(quote.monthly_total)}</span>
                        </div>
                        <div class="result-item">
                            <span class="result-label">{"Horas no mês"}</span>
                            <span class="result-value">{format_hours(quote.monthly_hours)}</span>
                        </div>
                        <div class="result-item">
                            <span class="result-label">{"Horas por pessoa"}</span>
                            <span class="result-value">{format_hours(quote.hours_per_person)}</span>
                        </div>
                        <div class="result-item">
                            <span class="result-label">{"Carga diária (dias úteis)"}</span>
                            <span class="result-value">{format_hours(quote.weekday_daily_hours)}</span>
                        </div>
                        {
                            if let Some(weekend) = quote.weekend_daily_hours {
                                html! {
                                    <div class="result-item">
                                        <span class="result-label">{"Carga diária (fim de semana)"}</span>
                                        <span class="result-value">{format_hours(weekend)}</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <div class="result-item">
                            <span class="result-label">{"Visitas presenciais"}</span>
                            <span class="result-value">
                                {
                                    if quote.visits.visits_per_week > 0 {
                                        format!(
                                            "{} por semana, {} cada",
                                            quote.visits.visits_per_week,
                                            format_hours(quote.visits.hours_per_visit)
                                        )
                                    } else {
                                        "nenhuma".to_string()
                                    }
                                }
                            </span>
                        </div>
                    </div>

                    <SubtotalChart items={quote.line_items.clone()} />
                    <p class="chart-legend">
                        {
                            defs.iter().enumerate().map(|(index, def)| {
                                format!("C{} = {}", index + 1, def.name)
                            }).collect::<Vec<_>>().join("  ·  ")
                        }
                    </p>
                </div>

                <div class="calculator-block">
                    <h2>{"Projeção do projeto"}</h2>
                    <div class="results-grid">
                        <div class="result-item">
                            <span class="result-label">{"Horas totais"}</span>
                            <span class="result-value">
                                {format!(
                                    "{} – {} (média {})",
                                    format_hours(quote.project_hours.min),
                                    format_hours(quote.project_hours.max),
                                    format_hours(quote.project_hours.mid),
                                )}
                            </span>
                        </div>
                        <div class="result-item">
                            <span class="result-label">{"Receita"}</span>
                            <span class="result-value">
                                {format!(
                                    "{} – {}",
                                    format_brl(quote.revenue.min),
                                    format_brl(quote.revenue.max),
                                )}
                            </span>
                        </div>
                        <div class="result-item">
                            <span class="result-label">{"Receita média"}</span>
                            <span class="result-value">{format_brl(quote.revenue.mid)}</span>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .calculator-page {
                    min-height: 100vh;
                    padding: 6rem 1rem 4rem;
                    background: #0c0f0d;
                    color: #fff;
                }

                .calculator-container {
                    max-width: 960px;
                    margin: 0 auto;
                }

                .calculator-header h1 {
                    font-size: 1.8rem;
                    margin-bottom: 0.75rem;
                }

                .calculator-header p {
                    color: #999;
                    max-width: 640px;
                    margin-bottom: 2.5rem;
                    line-height: 1.6;
                }

                .calculator-block {
                    margin-bottom: 2rem;
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(20, 24, 22, 0.85);
                }

                .calculator-block h2 {
                    font-size: 1.2rem;
                    margin-bottom: 1.5rem;
                }

                .config-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.25rem;
                }

                .config-grid label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    color: #999;
                    font-size: 0.9rem;
                }

                .config-grid input,
                .config-grid select,
                .category-table input {
                    padding: 0.6rem 0.75rem;
                    border: 1px solid rgba(52, 211, 153, 0.3);
                    border-radius: 8px;
                    background: rgba(12, 15, 13, 0.8);
                    color: #fff;
                    font-size: 0.95rem;
                }

                .config-grid input:focus,
                .config-grid select:focus,
                .category-table input:focus {
                    outline: none;
                    border-color: rgba(52, 211, 153, 0.8);
                }

                .weekend-toggle {
                    flex-direction: row !important;
                    align-items: center;
                    gap: 0.6rem !important;
                }

                .category-table {
                    width: 100%;
                    border-collapse: collapse;
                }

                .category-table th,
                .category-table td {
                    padding: 0.75rem 0.75rem;
                    text-align: left;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    color: #ccc;
                    font-size: 0.95rem;
                }

                .category-table th {
                    color: #999;
                    font-weight: normal;
                    font-size: 0.85rem;
                }

                .category-table input {
                    width: 90px;
                }

                .on-site-tag {
                    margin-left: 0.5rem;
                    padding: 0.15rem 0.5rem;
                    border-radius: 9999px;
                    background: rgba(52, 211, 153, 0.15);
                    color: #34d399;
                    font-size: 0.7rem;
                }

                .results-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.25rem;
                }

                .result-item {
                    display: flex;
                    flex-direction: column;
                    gap: 0.3rem;
                }

                .result-label {
                    color: #999;
                    font-size: 0.85rem;
                }

                .result-value {
                    font-size: 1.15rem;
                    font-weight: 600;
                }

                .result-value.total {
                    color: #34d399;
                    font-size: 1.6rem;
                }

                .subtotal-chart {
                    width: 100%;
                    max-width: 640px;
                    margin-top: 2rem;
                }

                .chart-legend {
                    margin-top: 0.75rem;
                    color: #777;
                    font-size: 0.8rem;
                }

                @media (max-width: 768px) {
                    .calculator-block {
                        padding: 1.25rem;
                    }

                    .category-table input {
                        width: 70px;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_brl;

    #[test]
    fn brl_formatting_groups_thousands() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(1680.0), "R$ 1.680,00");
        assert_eq!(format_brl(50_000.0), "R$ 50.000,00");
        assert_eq!(format_brl(1_234_567.89), "R$ 1.234.567,89");
    }
}
