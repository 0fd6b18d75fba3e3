use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod gate;
mod pricing {
    pub mod engine;
    pub mod triage;
}
mod pages {
    pub mod home;
    pub mod calculator;
    pub mod triage;
}

use pages::{
    home::Home,
    calculator::Calculator,
    triage::TriageCalculator,
};
use gate::Gate;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/calculadora")]
    Calculator,
    #[at("/calculadora-triagem")]
    TriageCalculator,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Calculator => {
            info!("Rendering internal Calculator page");
            html! {
                <Gate>
                    <Calculator />
                </Gate>
            }
        }
        Route::TriageCalculator => {
            info!("Rendering internal TriageCalculator page");
            html! {
                <Gate>
                    <TriageCalculator />
                </Gate>
            }
        }
    }
}

const NAV_SECTIONS: [(&str, &str); 5] = [
    ("O Problema", "#problema"),
    ("Solução", "#solucao"),
    ("Como Funciona", "#como-funciona"),
    ("Método", "#solucoes"),
    ("FAQ", "#faq"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 80);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Vert Group"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_SECTIONS.iter().map(|(name, anchor)| {
                            html! {
                                <a href={format!("/{}", anchor)} class="nav-link" onclick={close_menu.clone()}>
                                    {*name}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                    <a
                        href={config::get_contact_url()}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="nav-cta"
                        onclick={close_menu.clone()}
                    >
                        {"Falar com a Vert"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
