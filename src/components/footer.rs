use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact::social_icon;
use crate::components::icons::{Icon, IconView};
use crate::components::nav_link::NavLink;
use crate::content::{FIRM_NAME, FOOTER_ADDRESS, FOOTER_EMAIL, FOOTER_PHONE, FOUNDED_YEAR};
use crate::links::SOCIAL_LINKS;
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub navigate: Callback<Section>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-body">
                <div class="footer-grid">
                    <div class="footer-about">
                        <div class="brand">
                            <IconView icon={Icon::Scale} size={24} class="brand-icon" />
                            <span class="brand-name">{FIRM_NAME}</span>
                        </div>
                        <p class="muted footer-blurb">
                            { format!(
                                "Excelência jurídica e compromisso com resultados. Defendendo seus direitos com dedicação e profissionalismo desde {}.",
                                FOUNDED_YEAR
                            ) }
                        </p>
                        <div class="footer-social">
                            // YouTube is only listed in the contact section
                            { for SOCIAL_LINKS.iter().take(3).map(|link| html! {
                                <a
                                    href={link.url}
                                    class="social-link social-link-sm"
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={link.network.label()}
                                >
                                    <IconView icon={social_icon(link.network)} size={16} />
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Links Rápidos"}</h4>
                        <nav class="footer-links">
                            { for Section::ALL.iter().map(|section| html! {
                                <NavLink section={*section} navigate={props.navigate.clone()} class="footer-link">
                                    { section.footer_label() }
                                </NavLink>
                            }) }
                        </nav>
                    </div>

                    <div>
                        <h4 class="footer-heading">{"Contato"}</h4>
                        <div class="footer-contact">
                            <div class="footer-contact-row">
                                <IconView icon={Icon::MapPin} size={20} class="text-primary" />
                                <span class="muted">
                                    { for FOOTER_ADDRESS.iter().enumerate().map(|(i, line)| html! {
                                        <>
                                            if i > 0 { <br /> }
                                            { *line }
                                        </>
                                    }) }
                                </span>
                            </div>
                            <div class="footer-contact-row">
                                <IconView icon={Icon::Phone} size={20} class="text-primary" />
                                <span class="muted">{FOOTER_PHONE}</span>
                            </div>
                            <div class="footer-contact-row">
                                <IconView icon={Icon::Mail} size={20} class="text-primary" />
                                <span class="muted">{FOOTER_EMAIL}</span>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="muted small">
                        { format!("© {} {} Advocacia. Todos os direitos reservados.", year, FIRM_NAME) }
                    </p>
                    <div class="legal-links muted small">
                        <a href="#" class="footer-link">{"Política de Privacidade"}</a>
                        <a href="#" class="footer-link">{"Termos de Uso"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        border-top: 1px solid var(--border);
                        background: var(--background);
                    }
                    .footer-body {
                        padding-top: 2.5rem;
                        padding-bottom: 2.5rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 2rem;
                    }
                    .footer-about .brand {
                        margin-bottom: 1rem;
                    }
                    .footer-blurb {
                        max-width: 28rem;
                        margin-bottom: 1rem;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-link-sm {
                        width: 2rem;
                        height: 2rem;
                        color: var(--foreground);
                    }
                    .footer-heading {
                        font-weight: 500;
                        font-size: 1.125rem;
                        margin-bottom: 1rem;
                    }
                    .footer-links {
                        display: flex;
                        flex-direction: column;
                        gap: 0.5rem;
                    }
                    .footer-link {
                        color: var(--foreground-muted);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .footer-link:hover {
                        color: var(--primary);
                    }
                    .footer-contact {
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .footer-contact-row {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.5rem;
                    }
                    .footer-bottom {
                        border-top: 1px solid var(--border);
                        margin-top: 2.5rem;
                        padding-top: 1.5rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                    }
                    .legal-links {
                        display: flex;
                        gap: 1rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
