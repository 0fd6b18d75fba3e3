use yew::prelude::*;
use web_sys::{Event, MouseEvent};

use crate::pricing::triage::{classify, explanation, total_level, BLOCKS};

struct TriageResult {
    total: u32,
    label: &'static str,
    range: &'static str,
    explanation: String,
}

#[function_component(TriageCalculator)]
pub fn triage_calculator() -> Html {
    let answers = use_state(|| vec![0_u32; BLOCKS.len()]);
    let result = use_state(|| None::<std::rc::Rc<TriageResult>>);

    let on_answer = |block_index: usize, value: u32| {
        let answers = answers.clone();
        Callback::from(move |_: Event| {
            let mut updated = (*answers).clone();
            updated[block_index] = value;
            answers.set(updated);
        })
    };

    let on_calculate = {
        let answers = answers.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            let total = total_level(&answers);
            result.set(classify(total).map(|band| {
                std::rc::Rc::new(TriageResult {
                    total,
                    label: band.label,
                    range: band.range,
                    explanation: explanation(&answers),
                })
            }));
        })
    };

    let on_reset = {
        let answers = answers.clone();
        let result = result.clone();
        Callback::from(move |_: MouseEvent| {
            answers.set(vec![0; BLOCKS.len()]);
            result.set(None);
        })
    };

    html! {
        <div class="triage-page">
            <div class="triage-container">
                <div class="triage-header">
                    <h1>{"Calculadora Interna de Precificação"}</h1>
                    <p>
                        {"A Vert não vende horas. Assume responsabilidade sobre processos. Use esta calculadora para entender o nível de responsabilidade sistêmica e a faixa de preço sugerida."}
                    </p>
                </div>

                {
                    BLOCKS.iter().enumerate().map(|(block_index, block)| html! {
                        <div class="triage-block">
                            <h2>{block.title}</h2>
                            <p class="triage-question">{block.question}</p>
                            <div class="triage-options">
                                {
                                    block.options.iter().enumerate().map(|(option_index, option)| {
                                        let value = (option_index + 1) as u32;
                                        let id = format!("block-{}-option-{}", block_index, option_index);
                                        html! {
                                            <div class="triage-option">
                                                <input
                                                    type="radio"
                                                    id={id.clone()}
                                                    name={format!("block-{}", block_index)}
                                                    checked={answers[block_index] == value}
                                                    onchange={on_answer(block_index, value)}
                                                />
                                                <label for={id}>{*option}</label>
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    }).collect::<Html>()
                }

                {
                    if let Some(result) = (*result).as_ref() {
                        html! {
                            <div class="triage-result">
                                <h3>{"Resultado"}</h3>
                                <p class="result-label">{"Nível total de responsabilidade"}</p>
                                <p class="result-level">{result.total}</p>
                                <p class="result-label">{"Tipo de processo"}</p>
                                <p class="result-strong">{result.label}</p>
                                <p class="result-label">{"Faixa de preço sugerida"}</p>
                                <p class="result-strong">{result.range}</p>
                                <p class="result-label">{"Fatores considerados"}</p>
                                <p class="result-text">{&result.explanation}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="triage-actions">
                    <button class="calculate-button" onclick={on_calculate}>{"Calcular"}</button>
                    <button class="reset-button" onclick={on_reset}>{"Resetar"}</button>
                </div>
            </div>

            <style>
                {r#"
                .triage-page {
                    min-height: 100vh;
                    padding: 6rem 1rem 4rem;
                    background: #0c0f0d;
                    color: #fff;
                }

                .triage-container {
                    max-width: 760px;
                    margin: 0 auto;
                }

                .triage-header h1 {
                    font-size: 1.8rem;
                    margin-bottom: 0.75rem;
                }

                .triage-header p {
                    color: #999;
                    line-height: 1.6;
                    margin-bottom: 2.5rem;
                }

                .triage-block {
                    margin-bottom: 2rem;
                    padding: 1.75rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(20, 24, 22, 0.85);
                }

                .triage-block h2 {
                    font-size: 1.15rem;
                    margin-bottom: 0.5rem;
                }

                .triage-question {
                    color: #999;
                    font-size: 0.9rem;
                    margin-bottom: 1.25rem;
                }

                .triage-option {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.4rem 0;
                }

                .triage-option label {
                    font-size: 0.95rem;
                    color: #ccc;
                    cursor: pointer;
                }

                .triage-result {
                    margin-bottom: 2rem;
                    padding: 2rem;
                    border-radius: 16px;
                    border: 2px solid rgba(52, 211, 153, 0.3);
                    background: linear-gradient(135deg, rgba(52, 211, 153, 0.1), transparent);
                }

                .triage-result h3 {
                    font-size: 1.2rem;
                    margin-bottom: 1rem;
                }

                .result-label {
                    color: #999;
                    font-size: 0.85rem;
                    margin-top: 1rem;
                }

                .result-level {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #34d399;
                }

                .result-strong {
                    font-size: 1.4rem;
                    font-weight: 700;
                }

                .result-text {
                    font-size: 0.9rem;
                    line-height: 1.6;
                }

                .triage-actions {
                    display: flex;
                    justify-content: space-between;
                    margin-top: 2rem;
                }

                .calculate-button {
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 8px;
                    background: #34d399;
                    color: #0c0f0d;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .calculate-button:hover {
                    background: #6ee7b7;
                }

                .reset-button {
                    padding: 0.75rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 8px;
                    background: none;
                    color: #999;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .reset-button:hover {
                    color: #fff;
                    background: rgba(255, 255, 255, 0.05);
                }
                "#}
            </style>
        </div>
    }
}
