use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{FOUNDED_YEAR, HERO_STATS};
use crate::dom;
use crate::scroll::parallax_transform;
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub navigate: Callback<Section>,
}

// Writes the transform straight onto the background so scrolling never
// re-renders the hero.
fn apply_parallax(background: &NodeRef) {
    if let (Some(element), Some(scroll_y)) = (background.cast::<Element>(), dom::scroll_y()) {
        let _ = element.set_attribute("style", &parallax_transform(scroll_y));
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let background = use_node_ref();

    {
        let background = background.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                apply_parallax(&background);

                let listener = window.map(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        apply_parallax(&background);
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("could not attach parallax scroll listener");
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let to_contact = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Section::Contact))
    };
    let to_services = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Section::Services))
    };

    html! {
        <section id={Section::Home.id()} class="hero">
            <div class="hero-background" ref={background}>
                <img src="/images/hero-background.png" alt="Almeida e Araujo Advocacia" />
            </div>
            <div class="hero-overlay"></div>

            <div class="container hero-content">
                <div class="hero-inner">
                    <div class="hero-badge rise" style="animation-delay: 0.2s">
                        { format!("Excelência Jurídica desde {}", FOUNDED_YEAR) }
                    </div>

                    <h1 class="hero-title rise" style="animation-delay: 0.3s">
                        <span class="block">{"Araujo"}</span>
                        <span class="block">
                            <span class="text-primary">{"Advocacia"}</span>{" Especializada"}
                        </span>
                    </h1>

                    <p class="hero-subtitle rise" style="animation-delay: 0.4s">
                        {"Defendendo seus direitos com dedicação e profissionalismo. Soluções jurídicas personalizadas para cada cliente."}
                    </p>

                    <div class="hero-cta-group rise" style="animation-delay: 0.5s">
                        <button class="button button-primary button-lg group" onclick={to_contact}>
                            <span>{"Agende uma Consulta"}</span>
                            <IconView icon={Icon::ArrowRight} size={16} class="slide-right" />
                        </button>
                        <button class="button button-outline-light button-lg group" onclick={to_services}>
                            <span>{"Nossos Serviços"}</span>
                            <IconView icon={Icon::ChevronDown} size={16} class="slide-down" />
                        </button>
                    </div>

                    <div class="hero-stats">
                        { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                            <div class="hero-stat rise" style={format!("animation-delay: {:.1}s", 0.8 + 0.1 * i as f64)}>
                                <div class="hero-stat-value">{stat.value}</div>
                                <div class="hero-stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="scroll-indicator">
                <IconView icon={Icon::ChevronDown} size={32} />
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        max-height: 800px;
                        overflow: hidden;
                        padding-top: 4rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                        will-change: transform;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        z-index: 10;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 20;
                        display: flex;
                        height: 100%;
                        flex-direction: column;
                        justify-content: center;
                        color: #fff;
                    }
                    .hero-inner {
                        width: 100%;
                        max-width: 56rem;
                    }
                    .hero-badge {
                        display: inline-block;
                        background: var(--primary-soft);
                        backdrop-filter: blur(4px);
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        margin-bottom: 1.5rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .hero-title {
                        font-size: clamp(1.875rem, 6vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        letter-spacing: -0.02em;
                    }
                    .hero-title .block {
                        display: block;
                        margin-top: 0.25rem;
                    }
                    .hero-subtitle {
                        max-width: 600px;
                        font-size: 1.125rem;
                        color: rgba(255, 255, 255, 0.9);
                        margin-top: 1.5rem;
                        line-height: 1.6;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .hero-stats {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 1rem;
                        margin-top: 4rem;
                    }
                    .hero-stat {
                        text-align: center;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                        border-radius: 0.5rem;
                        padding: 1rem;
                    }
                    .hero-stat-value {
                        font-size: 1.875rem;
                        font-weight: 700;
                        color: var(--primary);
                        margin-bottom: 0.25rem;
                    }
                    .hero-stat-label {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 20;
                        color: rgba(255, 255, 255, 0.7);
                        animation: bob 1.2s ease-in-out 1.2s infinite alternate;
                    }
                    @keyframes bob {
                        from { transform: translate(-50%, -20px); opacity: 0; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }
                    @media (max-width: 640px) {
                        .hero-stats {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                        .hero-cta-group .button {
                            width: 100%;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
