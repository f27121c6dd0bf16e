use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::{ABOUT_PARAGRAPHS, FIRM_VALUES};
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub navigate: Callback<Section>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let to_team = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Section::Team))
    };

    html! {
        <section id={Section::About.id()} class="section">
            <div class="container about-grid">
                <div>
                    <div class="pill">{"Sobre Nós"}</div>
                    <h2 class="about-title">{"Tradição e Excelência em Advocacia"}</h2>
                    { for ABOUT_PARAGRAPHS.iter().map(|p| html! { <p class="muted about-paragraph">{*p}</p> }) }

                    <div class="value-grid">
                        { for FIRM_VALUES.iter().map(|value| html! {
                            <div class="value">
                                <div class="icon-badge">
                                    <IconView icon={value.icon} size={20} />
                                </div>
                                <div>
                                    <h4 class="value-title">{value.title}</h4>
                                    <p class="muted small">{value.subtitle}</p>
                                </div>
                            </div>
                        }) }
                    </div>

                    <button class="button button-primary group about-cta" onclick={to_team}>
                        {"Conheça Nossa Equipe"}
                        <IconView icon={Icon::ArrowRight} size={16} class="slide-right" />
                    </button>
                </div>

                <div class="about-visual">
                    <div class="about-photo">
                        <img src="/esc-almeida.jpg" alt="Escritório Almeida e Araujo Advocacia" loading="lazy" />
                        <div class="image-fade"></div>
                        <div class="commitment">
                            <h3>{"Nosso Compromisso"}</h3>
                            <p class="muted">
                                {"\"Buscamos não apenas resolver problemas jurídicos, mas construir relacionamentos de confiança com nossos clientes.\""}
                            </p>
                            <div class="founder">
                                <img src="/images/dr-almeida-founder.png" alt="Dr. Araujo" width="40" height="40" />
                                <div>
                                    <h4>{"Dr. Araujo"}</h4>
                                    <p class="small text-primary">{"Sócio Fundador"}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                    <div class="corner corner-top-left"></div>
                    <div class="corner corner-bottom-right"></div>
                </div>
            </div>

            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .about-title {
                        margin-bottom: 1.5rem;
                    }
                    .about-paragraph {
                        margin-bottom: 1rem;
                    }
                    .value-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .value {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .value-title {
                        font-weight: 500;
                    }
                    .about-cta {
                        margin-top: 2rem;
                    }
                    .about-visual {
                        position: relative;
                    }
                    .about-photo {
                        position: relative;
                        height: 500px;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    }
                    .about-photo > img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .commitment {
                        position: absolute;
                        left: 1.5rem;
                        right: 1.5rem;
                        bottom: 1.5rem;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: var(--background-translucent);
                        backdrop-filter: blur(4px);
                    }
                    .commitment h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .founder {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-top: 1rem;
                    }
                    .founder img {
                        border-radius: 9999px;
                        object-fit: cover;
                        background: var(--primary-soft);
                    }
                    .corner {
                        position: absolute;
                        width: 6rem;
                        height: 6rem;
                        border-color: var(--primary-soft);
                        border-style: solid;
                        border-width: 0;
                    }
                    .corner-top-left {
                        top: -1rem;
                        left: -1rem;
                        border-top-width: 2px;
                        border-left-width: 2px;
                        border-top-left-radius: 0.5rem;
                    }
                    .corner-bottom-right {
                        bottom: -1rem;
                        right: -1rem;
                        border-bottom-width: 2px;
                        border-right-width: 2px;
                        border-bottom-right-radius: 0.5rem;
                    }
                    @media (max-width: 1024px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 640px) {
                        .value-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
