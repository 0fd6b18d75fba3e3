use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::config;

#[derive(Properties, PartialEq)]
pub struct GateProps {
    pub children: Children,
}

/// Portão das ferramentas internas: senha estática comparada por igualdade
/// exata. Sem armazenamento, sem sessão; recarregar a página tranca de novo.
#[function_component(Gate)]
pub fn gate(props: &GateProps) -> Html {
    let unlocked = use_state(|| false);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let unlocked = unlocked.clone();
        let password = password.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *password == config::get_internal_password() {
                error.set(None);
                unlocked.set(true);
            } else {
                error.set(Some("Senha incorreta.".to_string()));
            }
        })
    };

    if *unlocked {
        return html! { <>{ for props.children.iter() }</> };
    }

    html! {
        <div class="gate-page">
            <div class="gate-card">
                <h1>{"Área interna"}</h1>
                <p>{"Ferramenta de uso interno da Vert. Digite a senha para continuar."}</p>
                {
                    if let Some(message) = (*error).as_ref() {
                        html! { <div class="gate-error">{message}</div> }
                    } else {
                        html! {}
                    }
                }
                <form onsubmit={onsubmit}>
                    <input
                        type="password"
                        placeholder="Senha"
                        value={(*password).clone()}
                        oninput={let password = password.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            password.set(input.value());
                        }}
                    />
                    <button type="submit">{"Entrar"}</button>
                </form>
            </div>

            <style>
                {r#"
                .gate-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem 1rem;
                    background: #0c0f0d;
                }

                .gate-card {
                    width: 100%;
                    max-width: 380px;
                    padding: 2.5rem 2rem;
                    border: 1px solid rgba(52, 211, 153, 0.2);
                    border-radius: 16px;
                    background: rgba(20, 24, 22, 0.9);
                    color: #fff;
                    text-align: center;
                }

                .gate-card h1 {
                    font-size: 1.5rem;
                    margin-bottom: 0.75rem;
                }

                .gate-card p {
                    color: #999;
                    font-size: 0.9rem;
                    margin-bottom: 1.5rem;
                }

                .gate-error {
                    color: #f87171;
                    font-size: 0.9rem;
                    margin-bottom: 1rem;
                }

                .gate-card input {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    margin-bottom: 1rem;
                    border: 1px solid rgba(52, 211, 153, 0.3);
                    border-radius: 8px;
                    background: rgba(12, 15, 13, 0.8);
                    color: #fff;
                    font-size: 1rem;
                }

                .gate-card input:focus {
                    outline: none;
                    border-color: rgba(52, 211, 153, 0.8);
                }

                .gate-card button {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: none;
                    border-radius: 8px;
                    background: #34d399;
                    color: #0c0f0d;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }

                .gate-card button:hover {
                    background: #6ee7b7;
                }
                "#}
            </style>
        </div>
    }
}
