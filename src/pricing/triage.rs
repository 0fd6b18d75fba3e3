/// Calculadora de triagem: cinco blocos de perguntas, cada resposta vale de
/// 1 a 4. A soma classifica o processo numa faixa de preço sugerida.

pub struct Block {
    pub title: &'static str,
    pub question: &'static str,
    pub options: [&'static str; 4],
}

pub const BLOCKS: [Block; 5] = [
    Block {
        title: "Impacto Real do Gargalo",
        question: "Como esse processo impacta o negócio?",
        options: [
            "Impacto local (1 área, sem afetar receita)",
            "Impacto operacional (custo, prazo ou retrabalho)",
            "Impacto financeiro direto (receita, margem ou caixa)",
            "Impacto sistêmico (financeiro + operação + cliente)",
        ],
    },
    Block {
        title: "Alcance no Sistema",
        question: "Quantas partes do sistema esse processo afeta?",
        options: [
            "Uma área, fluxo simples",
            "Duas áreas ou um sistema central",
            "Múltiplas áreas com dependências",
            "Várias áreas + sistemas + exceções",
        ],
    },
    Block {
        title: "Estado Atual do Processo",
        question: "Como esse processo funciona hoje?",
        options: [
            "Funciona, mas é manual",
            "Funciona com retrabalho frequente",
            "Funciona de forma instável",
            "Não funciona de forma previsível",
        ],
    },
    Block {
        title: "Risco Assumido pela Vert",
        question: "O que acontece se a solução falhar?",
        options: [
            "Baixo impacto, fácil correção",
            "Impacto operacional controlável",
            "Impacto relevante para o negócio",
            "Exposição direta para liderança ou operação crítica",
        ],
    },
    Block {
        title: "Esforço Tecnológico",
        question: "O que é necessário tecnicamente?",
        options: [
            "Ajuste simples ou configuração",
            "Automação ou script isolado",
            "Integração entre sistemas",
            "Solução técnica estruturante (base para outros processos)",
        ],
    },
];

pub struct PriceBand {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
    pub range: &'static str,
}

pub const PRICE_BANDS: [PriceBand; 4] = [
    PriceBand {
        min: 5,
        max: 7,
        label: "Processo operacional simples",
        range: "R$ 6.000 – R$ 10.000",
    },
    PriceBand {
        min: 8,
        max: 11,
        label: "Processo estruturante",
        range: "R$ 10.000 – R$ 18.000",
    },
    PriceBand {
        min: 12,
        max: 15,
        label: "Processo sistêmico",
        range: "R$ 18.000 – R$ 30.000",
    },
    PriceBand {
        min: 16,
        max: 20,
        label: "Processo crítico",
        range: "R$ 30.000 – R$ 50.000+",
    },
];

/// Soma das respostas; blocos sem resposta contam 0.
pub fn total_level(answers: &[u32]) -> u32 {
    answers.iter().sum()
}

/// Faixa correspondente ao nível total. `None` quando o total fica fora de
/// todas as faixas (formulário incompleto).
pub fn classify(total: u32) -> Option<&'static PriceBand> {
    PRICE_BANDS
        .iter()
        .find(|band| total >= band.min && total <= band.max)
}

/// Texto com os fatores considerados, um por bloco respondido.
pub fn explanation(answers: &[u32]) -> String {
    let factors: Vec<String> = BLOCKS
        .iter()
        .zip(answers.iter())
        .filter(|(_, answer)| (1..=4).contains(*answer))
        .map(|(block, answer)| {
            format!("{}: {}", block.title, block.options[(*answer - 1) as usize])
        })
        .collect();
    format!("A faixa é maior porque {}.", factors.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert!(classify(4).is_none());
        assert_eq!(classify(5).unwrap().label, "Processo operacional simples");
        assert_eq!(classify(7).unwrap().label, "Processo operacional simples");
        assert_eq!(classify(8).unwrap().label, "Processo estruturante");
        assert_eq!(classify(11).unwrap().label, "Processo estruturante");
        assert_eq!(classify(12).unwrap().label, "Processo sistêmico");
        assert_eq!(classify(15).unwrap().label, "Processo sistêmico");
        assert_eq!(classify(16).unwrap().label, "Processo crítico");
        assert_eq!(classify(20).unwrap().label, "Processo crítico");
        assert!(classify(21).is_none());
    }

    #[test]
    fn unanswered_form_has_no_band() {
        let answers = [0, 0, 0, 0, 0];
        assert_eq!(total_level(&answers), 0);
        assert!(classify(total_level(&answers)).is_none());
    }

    #[test]
    fn total_is_sum_of_answers() {
        assert_eq!(total_level(&[1, 2, 3, 4, 1]), 11);
        assert_eq!(classify(11).unwrap().range, "R$ 10.000 – R$ 18.000");
    }

    #[test]
    fn explanation_lists_answered_blocks_only() {
        let text = explanation(&[2, 0, 4, 0, 0]);
        assert!(text.starts_with("A faixa é maior porque "));
        assert!(text.contains("Impacto Real do Gargalo: Impacto operacional (custo, prazo ou retrabalho)"));
        assert!(text.contains("Estado Atual do Processo: Não funciona de forma previsível"));
        assert!(!text.contains("Alcance no Sistema"));
    }
}
