use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::content::URGENT_PERKS;
use crate::links::whatsapp_greeting_link;

#[function_component(WhatsAppCta)]
pub fn whatsapp_cta() -> Html {
    html! {
        <section class="section whatsapp-cta">
            <div class="container">
                <div class="whatsapp-cta-inner">
                    <div class="pill pill-green">{"Atendimento Imediato"}</div>
                    <h2>{"Precisa de Orientação Jurídica Urgente?"}</h2>
                    <p class="muted lead">
                        {"Entre em contato conosco pelo WhatsApp e receba atendimento personalizado. Nossa equipe está pronta para esclarecer suas dúvidas e oferecer a melhor solução jurídica para o seu caso."}
                    </p>

                    <div class="whatsapp-actions">
                        <a
                            href={whatsapp_greeting_link()}
                            target="_blank"
                            rel="noopener noreferrer"
                            class="whatsapp-button group"
                        >
                            <IconView icon={Icon::WhatsApp} size={24} />
                            {"Falar no WhatsApp"}
                            <IconView icon={Icon::ArrowRight} size={20} class="slide-right" />
                        </a>
                        <div class="response-time muted">
                            <IconView icon={Icon::Clock} size={16} />
                            <span>{"Resposta em até 30 minutos"}</span>
                        </div>
                    </div>

                    <div class="perk-grid">
                        { for URGENT_PERKS.iter().map(|perk| html! {
                            <div class="perk">
                                <IconView icon={Icon::CheckCircle} size={20} class="perk-icon" />
                                <span>{*perk}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .whatsapp-cta {
                        background: var(--green-soft);
                    }
                    .whatsapp-cta-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .pill-green {
                        background: var(--green-pill);
                        color: var(--green-text);
                    }
                    .lead {
                        font-size: 1.125rem;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .whatsapp-actions {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                    }
                    .whatsapp-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem 2rem;
                        background: #22c55e;
                        color: #fff;
                        font-weight: 600;
                        border-radius: 0.5rem;
                        text-decoration: none;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                        transition: background 0.3s ease, transform 0.2s ease;
                    }
                    .whatsapp-button:hover {
                        background: #16a34a;
                        transform: scale(1.05);
                    }
                    .response-time {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .perk-grid {
                        display: grid;
                        grid-template-columns: repeat(3, minmax(0, 1fr));
                        gap: 1.5rem;
                        margin-top: 3rem;
                    }
                    .perk {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: var(--surface-translucent);
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .perk-icon {
                        color: #16a34a;
                    }
                    @media (max-width: 768px) {
                        .perk-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
