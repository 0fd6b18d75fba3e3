use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use gloo_timers::callback::Timeout;
use crate::config;

const HERO_TITLES: [&str; 4] = [
    "Sua empresa cresce, mas você não descansa.",
    "Tudo depende de você. Sempre você.",
    "Processos mudam toda semana.",
    "Você não confia nos números que recebe.",
];

const PROBLEMS: [&str; 4] = [
    "processos estão soltos",
    "decisões são feitas no improviso",
    "retrabalho e erros se repetem",
    "oportunidades passam despercebidas",
];

const RESULTS: [&str; 3] = [
    "Processos claros e organizados",
    "Operação mais previsível",
    "Base real para escalar",
];

const STEPS: [(&str, &str, &str); 3] = [
    (
        "Triagem",
        "Entender o sistema",
        "Uma conversa estruturada para entender como sua empresa funciona de verdade. Não é diagnóstico profundo, é classificação. Ao final, sabemos exatamente o que faz sentido propor.",
    ),
    (
        "Execução",
        "Mão na massa",
        "Entramos na operação. Sentamos com líderes, acompanhamos processos reais, desenhamos soluções que funcionam no seu contexto, não no PowerPoint.",
    ),
    (
        "Mesa de Controle",
        "Todo mês, juntos",
        "O momento de transparência total. Mostramos o que foi feito, as decisões tomadas, os avanços reais. Ajustamos o rumo juntos. Nada é escondido.",
    ),
];

const SERVICES: [(&str, &str, &str); 5] = [
    ("Mapear", "Entendemos sua operação hoje e documentamos cada etapa.", "Visão clara do negócio"),
    ("Diagnosticar", "Revelamos gargalos e oportunidades reais.", "Problemas reais expostos"),
    ("Estruturar", "Organizamos processos e implementamos melhorias.", "Processos que funcionam"),
    ("Automatizar", "Aplicamos tecnologia onde ela faz sentido.", "Tecnologia com propósito"),
    ("Escalar", "Monitoramos, ajustamos e guiamos a evolução.", "Pronto para crescer"),
];

const COMPLEXITY_LEVELS: [(u32, &str, &str, [&str; 4]); 3] = [
    (
        1,
        "Vetor Operacional",
        "Poucos setores, baixa dependência entre eles, decisões centralizadas.",
        ["Estrutura enxuta", "Processos simples", "Decisões rápidas", "Dados básicos"],
    ),
    (
        2,
        "Vetor Integrado",
        "Vários setores, dependência moderada, falhas pontuais de processo.",
        ["Múltiplas áreas", "Integração necessária", "Gargalos identificáveis", "Dados dispersos"],
    ),
    (
        3,
        "Vetor Sistêmico",
        "Múltiplos setores, forte interdependência, gargalos recorrentes, dados inconsistentes.",
        ["Alta complexidade", "Interdependência total", "Processos críticos", "Decisões de alto impacto"],
    ),
];

const FAQ_ITEMS: [(&str, &str); 8] = [
    (
        "\"Já fiz consultoria antes e não mudou nada.\"",
        "Consultoria tradicional entrega um PowerPoint bonito, propõe um monte de coisa pra você fazer e some. A Vert é diferente: a gente constrói. Desenvolvemos soluções reais com tecnologia, implementamos junto e só saímos quando está rodando de verdade.",
    ),
    (
        "\"Isso é só mais uma consultoria?\"",
        "Não. É diagnóstico + execução + acompanhamento; e, quando existe oportunidade escalável, co-construção da solução. A gente coloca a mão na massa.",
    ),
    (
        "\"Minha empresa é muito bagunçada, não tem jeito.\"",
        "Quanto mais caos, mais impacto a organização gera. Já vimos empresas saírem do improviso total para operações previsíveis em semanas. O primeiro passo é ter clareza, e isso a gente resolve rápido.",
    ),
    (
        "\"Vai virar um monte de documento que ninguém lê?\"",
        "Zero. Mapeamento existe para dar visão e destravar implementação, não para encher gaveta. Se não for prático, não fazemos.",
    ),
    (
        "\"Quanto tempo leva para ver resultados?\"",
        "Depende do contexto, mas geralmente em 2-4 semanas já existe clareza sobre os gargalos e um plano de ação rodando. Resultados concretos aparecem entre 1-3 meses.",
    ),
    (
        "\"Vocês desenvolvem software?\"",
        "Sim, quando faz sentido. Se identificamos uma dor recorrente com potencial, construímos soluções sob medida que podem virar produto escalável ou ferramenta interna.",
    ),
    (
        "\"Como funciona o modelo de parceria?\"",
        "Se você tem uma ideia ou identificou uma dor no mercado que pode virar produto, a gente desenvolve junto. Construímos a solução, você comercializa, e a Vert entra com participação no resultado. Nosso sucesso depende do seu, então estamos 100% comprometidos em fazer dar certo.",
    ),
    (
        "\"Por que a Vert se existem empresas maiores no mercado?\"",
        "Empresas grandes te tratam como mais um ticket. A Vert é um grupo enxuto que cresce junto com você. Conhecemos seu negócio de verdade, temos pele em jogo e não descansamos até o resultado aparecer. Aqui você não é cliente, é parceiro.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    answer: String,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            {
                if *is_open {
                    html! { <div class="faq-answer"><p>{&props.answer}</p></div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Barra fina no topo que acompanha o progresso de rolagem da página.
#[function_component(SectionProgress)]
fn section_progress() -> Html {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(root) = document.document_element() {
                    let scroll_top = root.scroll_top() as f64;
                    let max_scroll = (root.scroll_height() - root.client_height()) as f64;
                    if max_scroll > 0.0 {
                        progress.set((scroll_top / max_scroll * 100.0).clamp(0.0, 100.0));
                    }
                }
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    html! {
        <div class="section-progress">
            <div class="section-progress-bar" style={format!("width: {:.2}%;", *progress)}></div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let current_title = use_state(|| 0_usize);

    // Volta ao topo só na montagem inicial
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Rotação das frases do hero
    {
        let current_title = current_title.clone();
        let current = *current_title;
        use_effect_with_deps(
            move |_| {
                let next = (current + 1) % HERO_TITLES.len();
                let timeout = Timeout::new(3_500, move || {
                    current_title.set(next);
                });
                timeout.forget();
                || ()
            },
            current,
        );
    }

    html! {
        <div class="landing-page">
            <SectionProgress />

            <header class="hero" id="hero">
                <div class="hero-glow"></div>
                <div class="hero-content">
                    <h1 class="hero-title">{HERO_TITLES[*current_title]}</h1>
                    <p class="hero-highlight">{"A gente resolve isso."}</p>
                    <p class="hero-description">
                        {"Organizamos operações de verdade. Sem promessas vazias, sem PowerPoint bonito que vira gaveta. Entramos na sua empresa, entendemos o sistema e construímos junto."}
                    </p>
                    <div class="hero-cta-group">
                        <a href={config::get_contact_url()} target="_blank" rel="noopener noreferrer">
                            <button class="hero-cta">{"Quero organizar minha operação"}</button>
                        </a>
                    </div>
                </div>
            </header>

            <section class="problem-section" id="problema">
                <h2>{"Seu negócio pode crescer ainda mais"}</h2>
                <p class="section-subtitle">{"— mas hoje:"}</p>
                <div class="problem-grid">
                    {
                        PROBLEMS.iter().map(|text| html! {
                            <div class="problem-card">
                                <span class="problem-mark">{"✕"}</span>
                                <span>{*text}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <p class="problem-cost">
                    {"Isso custa "}<strong>{"tempo"}</strong>{", "}<strong>{"dinheiro"}</strong>{" e "}<strong>{"energia"}</strong>{"."}
                </p>
            </section>

            <section class="solution-section" id="solucao">
                <div class="section-badge">{"A solução existe"}</div>
                <h2>{"Existimos para que isso deixe de acontecer"}</h2>
                <p class="section-subtitle">{"Vert trabalha em duas frentes — você pode precisar de uma ou das duas:"}</p>
                <div class="solution-grid">
                    <div class="solution-card">
                        <h3>{"Guiar processos"}</h3>
                        <p>{"Mapeamos e organizamos a operação para reduzir improviso e retrabalho, e deixar a empresa mais previsível e pronta para crescer."}</p>
                    </div>
                    <div class="solution-card">
                        <h3>{"Construir negócios"}</h3>
                        <p>{"Quando existe uma dor recorrente com potencial, estruturamos e colocamos de pé uma solução que pode virar produto escalável, solução reutilizável ou nova linha de receita."}</p>
                    </div>
                </div>
                <div class="solution-badges">
                    <span>{"Clareza de processo"}</span>
                    <span>{"Métricas que guiam"}</span>
                    <span>{"Menos retrabalho"}</span>
                </div>
            </section>

            <section class="steps-section" id="como-funciona">
                <h2>{"Como funciona"}</h2>
                <div class="steps-grid">
                    {
                        STEPS.iter().enumerate().map(|(index, (title, subtitle, description))| html! {
                            <div class="step-card">
                                <div class="step-number">{index + 1}</div>
                                <h3>{*title}</h3>
                                <span class="step-subtitle">{*subtitle}</span>
                                <p>{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="services-section" id="solucoes">
                <h2>{"O que fazemos"}</h2>
                <div class="services-grid">
                    {
                        SERVICES.iter().map(|(title, description, highlight)| html! {
                            <div class="service-card">
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                                <span class="service-highlight">{*highlight}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="complexity-section" id="complexidade">
                <div class="section-badge">{"Cada empresa é única"}</div>
                <h2>{"Entendemos seu sistema"}</h2>
                <p class="section-subtitle">
                    {"Na triagem, classificamos o nível de complexidade da sua empresa. Isso nos ajuda a propor exatamente o que faz sentido, sem exagero, sem lacuna."}
                </p>
                <div class="complexity-grid">
                    {
                        COMPLEXITY_LEVELS.iter().map(|(level, name, description, characteristics)| html! {
                            <div class={classes!("complexity-card", format!("level-{}", level))}>
                                <span class="complexity-number">{*level}</span>
                                <h3>{*name}</h3>
                                <p>{*description}</p>
                                <ul>
                                    { characteristics.iter().map(|c| html! { <li>{*c}</li> }).collect::<Html>() }
                                </ul>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <div class="complexity-info">
                    <h4>{"Por que isso importa?"}</h4>
                    <p>
                        {"Uma empresa com 3 setores não precisa do mesmo trabalho que uma com 15 áreas interdependentes. Entender a complexidade nos permite propor o que realmente faz sentido: nem mais, nem menos. Tudo é definido na triagem, antes de começar."}
                    </p>
                </div>
            </section>

            <section class="results-section" id="resultados">
                <h2>{"O resultado"}</h2>
                <p class="section-subtitle">{"Depois de trabalhar com a Vert:"}</p>
                <div class="results-grid">
                    {
                        RESULTS.iter().map(|text| html! {
                            <div class="result-card">
                                <span class="result-check">{"✓"}</span>
                                <span>{*text}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="partnership-section" id="parceria">
                <h2>{"Boas ideias não deveriam morrer dentro das empresas."}</h2>
                <p class="section-subtitle">{"Quando estruturadas, dores específicas podem se transformar em:"}</p>
                <ul class="partnership-list">
                    <li>{"Produtos escaláveis"}</li>
                    <li>{"Soluções reutilizáveis"}</li>
                    <li>{"Novas linhas de receita"}</li>
                </ul>
                <h3>{"Com quem trabalhamos"}</h3>
                <p class="section-subtitle">{"Empreendedores e investidores que valorizam:"}</p>
                <ul class="partnership-list">
                    <li>{"Decisões responsáveis"}</li>
                    <li>{"Uso inteligente de tempo e capital"}</li>
                    <li>{"Inovação com propósito — não por impulso"}</li>
                </ul>
            </section>

            <section class="triagem-section" id="triagem">
                <div class="section-badge">{"Triagem gratuita, presencial e personalizada."}</div>
                <h2>{"Antes de qualquer proposta, a gente vai até você"}</h2>
                <p class="section-subtitle">
                    {"A triagem é o nosso jeito de entender de verdade o seu contexto. Nada de diagnóstico genérico: sentamos com você, acompanhamos processos reais e mapeamos juntos o que trava o crescimento da sua empresa."}
                </p>
                <div class="triagem-grid">
                    <div class="triagem-card">
                        <div class="triagem-title">{"Duração média"}</div>
                        <div class="triagem-text">{"4 horas de imersão prática na sua operação"}</div>
                    </div>
                    <div class="triagem-card">
                        <div class="triagem-title">{"Onde acontece"}</div>
                        <div class="triagem-text">{"Presencial, na sua empresa, lado a lado com o seu time"}</div>
                    </div>
                    <div class="triagem-card">
                        <div class="triagem-title">{"O que você recebe"}</div>
                        <div class="triagem-text">{"Proposta detalhada em até 3 dias úteis, com tudo que importa. Sem solução pronta, sem software, só clareza"}</div>
                    </div>
                </div>
            </section>

            <section class="cta-section" id="cta">
                <h2>{"Cansou de crescer no improviso?"}</h2>
                <p class="section-subtitle">{"Vamos conversar. Sem compromisso, sem proposta na primeira conversa."}</p>
                <a href={config::get_contact_url()} target="_blank" rel="noopener noreferrer">
                    <button class="hero-cta">{"Quero organizar minha operação"}</button>
                </a>
                <p class="cta-note">{"15 minutos: entendemos o contexto e mostramos caminhos possíveis"}</p>
            </section>

            <section class="faq-section" id="faq">
                <h2>{"Perguntas frequentes"}</h2>
                {
                    FAQ_ITEMS.iter().map(|(question, answer)| html! {
                        <FaqItem question={question.to_string()} answer={answer.to_string()} />
                    }).collect::<Html>()
                }
            </section>

            <footer class="footer">
                <div class="footer-content">
                    <div class="footer-brand">
                        <span class="footer-logo">{"Vert Group"}</span>
                        <a href={config::get_instagram_url()} target="_blank" rel="noopener noreferrer">
                            {"Instagram"}
                        </a>
                    </div>
                    <div class="footer-links">
                        <div class="footer-column">
                            <h4>{"Navegação"}</h4>
                            <a href="/#problema">{"O Problema"}</a>
                            <a href="/#solucao">{"Solução"}</a>
                            <a href="/#como-funciona">{"Como Funciona"}</a>
                            <a href="/#solucoes">{"Método"}</a>
                        </div>
                        <div class="footer-column">
                            <h4>{"Mais"}</h4>
                            <a href="/#parceria">{"Parceria"}</a>
                            <a href="/#resultados">{"Resultados"}</a>
                            <a href="/#faq">{"FAQ"}</a>
                        </div>
                    </div>
                </div>
            </footer>

            <style>
                {r#"
                .landing-page {
                    background: #0c0f0d;
                    color: #ffffff;
                    min-height: 100vh;
                }

                .section-progress {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 3px;
                    background: rgba(255, 255, 255, 0.05);
                    z-index: 1001;
                }

                .section-progress-bar {
                    height: 100%;
                    background: linear-gradient(90deg, #34d399, #6ee7b7);
                    transition: width 0.1s linear;
                }

                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1rem 4rem;
                }

                .hero-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 600px;
                    height: 400px;
                    background: rgba(52, 211, 153, 0.15);
                    border-radius: 50%;
                    filter: blur(110px);
                    pointer-events: none;
                }

                .hero-content {
                    position: relative;
                    max-width: 860px;
                }

                .hero-title {
                    font-size: 2.8rem;
                    line-height: 1.2;
                    min-height: 7rem;
                }

                .hero-highlight {
                    font-size: 2rem;
                    font-weight: 700;
                    color: #34d399;
                    margin-top: 1rem;
                }

                .hero-description {
                    color: #999;
                    font-size: 1.15rem;
                    line-height: 1.6;
                    margin: 1.5rem auto 0;
                    max-width: 620px;
                }

                .hero-cta-group {
                    margin-top: 2.5rem;
                }

                .hero-cta {
                    padding: 1rem 2.5rem;
                    font-size: 1.1rem;
                    font-weight: 600;
                    color: #0c0f0d;
                    background: #34d399;
                    border: none;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    background: #6ee7b7;
                    transform: translateY(-2px);
                }

                section {
                    padding: 6rem 1rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                section h2 {
                    font-size: 2.2rem;
                    text-align: center;
                    margin-bottom: 1rem;
                }

                .section-subtitle {
                    text-align: center;
                    color: #999;
                    font-size: 1.15rem;
                    max-width: 680px;
                    margin: 0 auto 3rem;
                }

                .section-badge {
                    display: block;
                    width: fit-content;
                    margin: 0 auto 1.5rem;
                    padding: 0.6rem 1.25rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(52, 211, 153, 0.3);
                    background: rgba(52, 211, 153, 0.1);
                    color: #34d399;
                    font-size: 0.9rem;
                }

                .problem-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1rem;
                }

                .problem-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem;
                    border-radius: 16px;
                    border: 1px solid rgba(248, 113, 113, 0.25);
                    background: rgba(248, 113, 113, 0.05);
                    font-size: 1.05rem;
                }

                .problem-mark {
                    color: #f87171;
                    font-weight: 700;
                }

                .problem-cost {
                    text-align: center;
                    margin-top: 2.5rem;
                    color: #999;
                    font-size: 1.1rem;
                }

                .problem-cost strong {
                    color: #f87171;
                }

                .solution-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }

                .solution-card {
                    padding: 2.5rem;
                    border-radius: 24px;
                    background: linear-gradient(135deg, #059669, #0d9488);
                }

                .solution-card h3 {
                    font-size: 1.6rem;
                    margin-bottom: 1rem;
                }

                .solution-card p {
                    color: rgba(255, 255, 255, 0.9);
                    line-height: 1.6;
                }

                .solution-badges {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2.5rem;
                }

                .solution-badges span {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(52, 211, 153, 0.2);
                    background: rgba(52, 211, 153, 0.05);
                    font-size: 0.9rem;
                }

                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .step-card {
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(20, 24, 22, 0.8);
                }

                .step-number {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: rgba(52, 211, 153, 0.15);
                    color: #34d399;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .step-subtitle {
                    display: block;
                    color: #34d399;
                    font-size: 0.9rem;
                    margin-bottom: 0.75rem;
                }

                .step-card p {
                    color: #999;
                    line-height: 1.6;
                }

                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(190px, 1fr));
                    gap: 1rem;
                }

                .service-card {
                    padding: 1.5rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(20, 24, 22, 0.8);
                    transition: border-color 0.3s ease;
                }

                .service-card:hover {
                    border-color: rgba(52, 211, 153, 0.4);
                }

                .service-card p {
                    color: #999;
                    font-size: 0.9rem;
                    line-height: 1.5;
                    margin: 0.75rem 0;
                }

                .service-highlight {
                    color: #34d399;
                    font-size: 0.85rem;
                }

                .complexity-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .complexity-card {
                    padding: 2rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(20, 24, 22, 0.8);
                    position: relative;
                }

                .complexity-card.level-1 { border-color: rgba(52, 211, 153, 0.3); }
                .complexity-card.level-2 { border-color: rgba(245, 158, 11, 0.3); }
                .complexity-card.level-3 { border-color: rgba(244, 63, 94, 0.3); }

                .complexity-number {
                    position: absolute;
                    top: 1.25rem;
                    right: 1.5rem;
                    font-size: 2.5rem;
                    font-weight: 700;
                    opacity: 0.2;
                }

                .complexity-card p {
                    color: #999;
                    font-size: 0.95rem;
                    margin: 0.75rem 0 1.25rem;
                    line-height: 1.5;
                }

                .complexity-card ul {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                }

                .complexity-card li {
                    padding: 0.3rem 0;
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.9rem;
                }

                .complexity-card li::before {
                    content: '✓ ';
                    color: #34d399;
                }

                .complexity-info {
                    margin-top: 3rem;
                    padding: 1.5rem 2rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    background: rgba(255, 255, 255, 0.03);
                }

                .complexity-info p {
                    color: #999;
                    line-height: 1.6;
                    margin-top: 0.5rem;
                }

                .results-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                }

                .result-card {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.5rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(20, 24, 22, 0.8);
                    font-size: 1.05rem;
                }

                .result-check {
                    color: #34d399;
                    font-weight: 700;
                    font-size: 1.25rem;
                }

                .partnership-section h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    margin: 3rem 0 1rem;
                }

                .partnership-list {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                }

                .partnership-list li {
                    padding: 0.6rem 1.25rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(52, 211, 153, 0.25);
                    background: rgba(52, 211, 153, 0.07);
                }

                .triagem-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 1.5rem;
                }

                .triagem-card {
                    padding: 1.75rem;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(20, 24, 22, 0.8);
                    text-align: center;
                }

                .triagem-title {
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }

                .triagem-text {
                    color: #999;
                    font-size: 0.9rem;
                    line-height: 1.5;
                }

                .cta-section {
                    text-align: center;
                }

                .cta-note {
                    margin-top: 1.5rem;
                    color: #999;
                }

                .faq-section {
                    max-width: 800px;
                }

                .faq-item {
                    border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 1.25rem 0;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }

                .toggle-icon {
                    color: #34d399;
                    font-size: 1.5rem;
                }

                .faq-answer {
                    padding-bottom: 1.25rem;
                    color: #999;
                    line-height: 1.6;
                }

                .footer {
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 3rem 1rem;
                }

                .footer-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .footer-logo {
                    font-size: 1.25rem;
                    font-weight: 700;
                    display: block;
                    margin-bottom: 0.75rem;
                }

                .footer-brand a,
                .footer-column a {
                    display: block;
                    color: #999;
                    text-decoration: none;
                    padding: 0.2rem 0;
                    transition: color 0.3s ease;
                }

                .footer-brand a:hover,
                .footer-column a:hover {
                    color: #34d399;
                }

                .footer-links {
                    display: flex;
                    gap: 4rem;
                }

                .footer-column h4 {
                    margin-bottom: 0.75rem;
                    color: #fff;
                }

                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2rem;
                        min-height: 9rem;
                    }

                    section {
                        padding: 4rem 1rem;
                    }

                    section h2 {
                        font-size: 1.7rem;
                    }

                    .footer-links {
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
