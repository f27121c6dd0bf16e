use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::nav_link::{on_navigate, NavLink};
use crate::content::{PRACTICE_AREAS, SERVICES};
use crate::section::Section;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ServicesTab {
    Cards,
    Areas,
}

impl ServicesTab {
    fn label(self) -> &'static str {
        match self {
            ServicesTab::Cards => "Serviços",
            ServicesTab::Areas => "Áreas de Atuação",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub navigate: Callback<Section>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let tab = use_state(|| ServicesTab::Cards);

    let tab_button = |value: ServicesTab| {
        let onclick = {
            let tab = tab.clone();
            Callback::from(move |_: MouseEvent| tab.set(value))
        };
        html! {
            <button
                class={classes!("tab-trigger", (*tab == value).then_some("active"))}
                role="tab"
                aria-selected={(*tab == value).to_string()}
                {onclick}
            >
                { value.label() }
            </button>
        }
    };

    let body = match *tab {
        ServicesTab::Cards => html! {
            <div class="service-grid">
                { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                    <div class="card service-card lift group rise-in-view" style={format!("animation-delay: {:.1}s", 0.1 * i as f64)}>
                        <div class="service-image">
                            <img src={service.image} alt={service.title} loading="lazy" />
                            <div class="image-fade"></div>
                        </div>
                        <div class="card-content">
                            <div class="icon-badge">
                                <IconView icon={service.icon} size={20} />
                            </div>
                            <h3 class="service-title">{service.title}</h3>
                            <p class="muted">{service.description}</p>
                            <NavLink section={Section::Contact} navigate={props.navigate.clone()} class="text-link">
                                {"Saiba mais"}
                                <IconView icon={Icon::ChevronRight} size={16} class="slide-right" />
                            </NavLink>
                        </div>
                    </div>
                }) }
            </div>
        },
        ServicesTab::Areas => html! {
            <div class="area-grid">
                { for PRACTICE_AREAS.iter().map(|area| html! {
                    <div class="card area-card lift">
                        <div class="icon-badge">
                            <IconView icon={Icon::CheckCircle} size={20} />
                        </div>
                        <div>
                            <h3 class="area-title">{*area}</h3>
                            <NavLink section={Section::Contact} navigate={props.navigate.clone()} class="text-link small">
                                {"Consulte um especialista"}
                            </NavLink>
                        </div>
                    </div>
                }) }
            </div>
        },
    };

    html! {
        <section id={Section::Services.id()} class="section section-muted">
            <div class="container">
                <div class="section-heading">
                    <div class="pill">{"Nossos Serviços"}</div>
                    <h2>{"Soluções Jurídicas Especializadas"}</h2>
                    <p class="muted">
                        {"Oferecemos soluções jurídicas personalizadas para atender às suas necessidades específicas, com foco em resultados e excelência no atendimento."}
                    </p>
                </div>

                <div class="tab-list" role="tablist">
                    { tab_button(ServicesTab::Cards) }
                    { tab_button(ServicesTab::Areas) }
                </div>

                { body }

                <div class="section-cta">
                    <a
                        href={Section::Contact.href()}
                        class="button button-primary button-lg group"
                        onclick={on_navigate(&props.navigate, Section::Contact)}
                    >
                        {"Agende uma Consulta Especializada"}
                        <IconView icon={Icon::ArrowRight} size={16} class="slide-right" />
                    </a>
                </div>
            </div>

            <style>
                {r#"
                    .tab-list {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        max-width: 28rem;
                        margin: 0 auto 3rem;
                        padding: 0.25rem;
                        border-radius: 0.5rem;
                        background: var(--muted);
                    }
                    .tab-trigger {
                        border: none;
                        background: transparent;
                        padding: 0.5rem 1rem;
                        border-radius: 0.375rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: var(--foreground-muted);
                        cursor: pointer;
                    }
                    .tab-trigger.active {
                        background: var(--background);
                        color: var(--foreground);
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 2rem;
                    }
                    .service-image {
                        position: relative;
                        height: 12rem;
                        overflow: hidden;
                    }
                    .service-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .service-card:hover .service-image img {
                        transform: scale(1.1);
                    }
                    .service-title {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                        transition: color 0.2s ease;
                    }
                    .service-card:hover .service-title {
                        color: var(--primary);
                    }
                    .area-grid {
                        display: grid;
                        grid-template-columns: repeat(2, minmax(0, 1fr));
                        gap: 1.5rem;
                    }
                    .area-card {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.5rem;
                    }
                    .area-title {
                        font-weight: 500;
                    }
                    @media (max-width: 1024px) {
                        .service-grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }
                    @media (max-width: 768px) {
                        .service-grid,
                        .area-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
