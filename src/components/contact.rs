use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::contact::{ContactField, ContactForm, ServiceCategory};
use crate::content::CONTACT_DETAILS;
use crate::links::{SocialNetwork, MAP_EMBED_URL, SOCIAL_LINKS};
use crate::section::Section;

pub fn social_icon(network: SocialNetwork) -> Icon {
    match network {
        SocialNetwork::Instagram => Icon::Instagram,
        SocialNetwork::Facebook => Icon::Facebook,
        SocialNetwork::LinkedIn => Icon::LinkedIn,
        SocialNetwork::YouTube => Icon::YouTube,
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);

    let on_input = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(form.with_field(field, input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(form.with_field(ContactField::Message, input.value()));
        })
    };

    let on_service = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.set(form.with_service(&select.value()));
        })
    };

    // No backend is wired to the form yet; keep the page from reloading.
    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_blank() {
                return;
            }
            match serde_json::to_string(&*form) {
                Ok(payload) => info!("contact form submitted without a handler: {}", payload),
                Err(err) => warn!("could not serialize contact form: {}", err),
            }
        })
    };

    let selected = form.service.map(|s| s.value()).unwrap_or("");

    html! {
        <section id={Section::Contact.id()} class="section section-muted">
            <div class="container">
                <div class="section-heading">
                    <div class="pill">{"Contato"}</div>
                    <h2>{"Entre em Contato"}</h2>
                    <p class="muted">
                        {"Estamos à disposição para atender suas necessidades jurídicas. Entre em contato conosco para agendar uma consulta ou obter mais informações sobre nossos serviços."}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="card contact-card">
                        <div class="card-content contact-form-body">
                            <h3 class="contact-heading">{"Agende uma Consulta"}</h3>
                            <form class="contact-form" {onsubmit}>
                                <div class="form-row">
                                    <div class="form-field">
                                        <label for="name">{"Nome"}</label>
                                        <input
                                            id="name"
                                            class="input"
                                            placeholder="Seu nome"
                                            value={form.name.clone()}
                                            oninput={on_input(ContactField::Name)}
                                        />
                                    </div>
                                    <div class="form-field">
                                        <label for="email">{"Email"}</label>
                                        <input
                                            id="email"
                                            type="email"
                                            class="input"
                                            placeholder="seu.email@exemplo.com"
                                            value={form.email.clone()}
                                            oninput={on_input(ContactField::Email)}
                                        />
                                    </div>
                                </div>
                                <div class="form-field">
                                    <label for="phone">{"Telefone"}</label>
                                    <input
                                        id="phone"
                                        class="input"
                                        placeholder="(21) 00000-0000"
                                        value={form.phone.clone()}
                                        oninput={on_input(ContactField::Phone)}
                                    />
                                </div>
                                <div class="form-field">
                                    <label for="service">{"Área de Interesse"}</label>
                                    <select id="service" class="input" onchange={on_service}>
                                        <option value="" selected={selected.is_empty()}>{"Selecione uma área"}</option>
                                        { for ServiceCategory::ALL.iter().map(|category| html! {
                                            <option value={category.value()} selected={selected == category.value()}>
                                                {category.label()}
                                            </option>
                                        }) }
                                    </select>
                                </div>
                                <div class="form-field">
                                    <label for="message">{"Mensagem"}</label>
                                    <textarea
                                        id="message"
                                        class="input textarea"
                                        placeholder="Descreva brevemente sua necessidade jurídica"
                                        value={form.message.clone()}
                                        oninput={on_message}
                                    />
                                </div>
                                <button type="submit" class="button button-primary full-width">
                                    {"Enviar Mensagem"}
                                    <IconView icon={Icon::ArrowRight} size={16} />
                                </button>
                            </form>
                        </div>
                    </div>

                    <div>
                        <h3 class="contact-heading">{"Informações de Contato"}</h3>
                        <div class="contact-details">
                            { for CONTACT_DETAILS.iter().map(|detail| html! {
                                <div class="contact-detail">
                                    <div class="icon-badge icon-badge-lg">
                                        <IconView icon={detail.icon} size={24} />
                                    </div>
                                    <div>
                                        <h4 class="detail-title">{detail.title}</h4>
                                        { for detail.lines.iter().map(|line| html! { <p class="muted">{*line}</p> }) }
                                    </div>
                                </div>
                            }) }
                        </div>

                        <div class="contact-block">
                            <h4 class="detail-title">{"Siga-nos nas Redes Sociais"}</h4>
                            <div class="social-links">
                                { for SOCIAL_LINKS.iter().map(|link| html! {
                                    <a
                                        href={link.url}
                                        class="social-link"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label={link.network.label()}
                                    >
                                        <IconView icon={social_icon(link.network)} size={20} />
                                    </a>
                                }) }
                            </div>
                        </div>

                        <div class="contact-block">
                            <h4 class="detail-title">{"Localização"}</h4>
                            <div class="map-frame">
                                <iframe
                                    src={MAP_EMBED_URL}
                                    width="100%"
                                    height="250"
                                    style="border: 0"
                                    allowfullscreen={true}
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                    title="Localização do Escritório"
                                ></iframe>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                    }
                    .contact-form-body {
                        padding: 2rem;
                    }
                    .contact-heading {
                        font-size: 1.5rem;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .form-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .form-field {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .form-field label {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .input {
                        height: 2.5rem;
                        width: 100%;
                        border-radius: 0.375rem;
                        border: 1px solid var(--border);
                        background: var(--background);
                        color: var(--foreground);
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        box-sizing: border-box;
                    }
                    .input:focus-visible {
                        outline: 2px solid var(--primary);
                        outline-offset: 2px;
                    }
                    .textarea {
                        min-height: 120px;
                        resize: vertical;
                    }
                    .contact-details {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-detail {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        transition: transform 0.2s ease;
                    }
                    .contact-detail:hover {
                        transform: translateX(5px);
                    }
                    .detail-title {
                        font-weight: 500;
                        margin-bottom: 0.25rem;
                    }
                    .contact-block {
                        margin-top: 2.5rem;
                    }
                    .contact-block .detail-title {
                        margin-bottom: 1rem;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-link {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        border: 1px solid var(--border);
                        background: var(--card);
                        color: var(--primary);
                        transition: background 0.2s ease, border-color 0.2s ease, transform 0.2s ease;
                    }
                    .social-link:hover {
                        background: var(--primary-soft);
                        border-color: var(--primary);
                        transform: translateY(-3px);
                    }
                    .map-frame {
                        height: 250px;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        border: 1px solid var(--border);
                    }
                    @media (max-width: 1024px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 640px) {
                        .form-row {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
