use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::TEAM;
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub navigate: Callback<Section>,
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    let to_contact = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Section::Contact))
    };

    html! {
        <section id={Section::Team.id()} class="section section-muted">
            <div class="container">
                <div class="section-heading">
                    <div class="pill">{"Nossa Equipe"}</div>
                    <h2>{"Profissionais Especializados"}</h2>
                    <p class="muted">
                        {"Conheça os profissionais dedicados que compõem nossa equipe, prontos para oferecer o melhor atendimento e as soluções jurídicas mais adequadas para o seu caso."}
                    </p>
                </div>

                <div class="team-grid">
                    { for TEAM.iter().map(|member| html! {
                        <div class="card team-card lift" key={member.name}>
                            <div class="team-photo">
                                <img src={member.image} alt={member.name} loading="lazy" />
                                <div class="image-fade"></div>
                            </div>
                            <div class="card-content">
                                <h3 class="team-name">{member.name}</h3>
                                <p class="text-primary team-position">{member.position}</p>
                                <p class="muted">{member.description}</p>
                                <div class="specialties">
                                    { for member.specialties.iter().map(|s| html! {
                                        <span class="specialty">{*s}</span>
                                    }) }
                                </div>
                                <button class="button button-outline button-sm" onclick={to_contact.clone()}>
                                    {"Contato"}
                                </button>
                            </div>
                        </div>
                    }) }
                </div>

                <div class="section-cta">
                    <button class="button button-outline button-lg group" onclick={to_contact}>
                        {"Entre em Contato com Nossa Equipe"}
                        <IconView icon={Icon::ArrowRight} size={16} class="slide-right" />
                    </button>
                </div>
            </div>

            <style>
                {r#"
                    .team-grid {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 2rem;
                    }
                    .team-photo {
                        position: relative;
                        height: 300px;
                        overflow: hidden;
                    }
                    .team-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s ease;
                    }
                    .team-photo img:hover {
                        transform: scale(1.05);
                    }
                    .team-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 0.25rem;
                    }
                    .team-position {
                        margin-bottom: 0.75rem;
                    }
                    .specialties {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin: 1rem 0;
                    }
                    .specialty {
                        background: var(--primary-soft);
                        color: var(--primary);
                        font-size: 0.75rem;
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                    }
                    @media (max-width: 1024px) {
                        .team-grid {
                            grid-template-columns: repeat(2, minmax(0, 1fr));
                        }
                    }
                    @media (max-width: 768px) {
                        .team-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
