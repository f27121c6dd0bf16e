use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::nav_link::{on_navigate, NavLink};
use crate::content::FIRM_SHORT_NAME;
use crate::navigation::MenuState;
use crate::section::Section;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub scrolled: bool,
    pub visible: Section,
    pub menu: MenuState,
    pub on_toggle_menu: Callback<()>,
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub navigate: Callback<Section>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let nav_items = |extra: &'static str| -> Html {
        Section::ALL
            .iter()
            .map(|section| {
                let active = *section == props.visible;
                html! {
                    <NavLink
                        section={*section}
                        navigate={props.navigate.clone()}
                        class={classes!("nav-link", extra, active.then_some("active"))}
                    >
                        { section.nav_label() }
                    </NavLink>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("site-header", props.scrolled.then_some("scrolled"))}>
            <div class="container header-content">
                <div class="brand">
                    <IconView icon={Icon::Scale} size={24} class="brand-icon" />
                    <span class="brand-name">{FIRM_SHORT_NAME}</span>
                </div>

                <nav class="desktop-nav">
                    { nav_items("") }
                </nav>

                <div class="header-actions">
                    <button
                        class="icon-button theme-toggle"
                        onclick={toggle_theme}
                        aria-label={props.theme.toggle_label()}
                        title={props.theme.toggle_label()}
                    >
                        <IconView icon={if props.theme.is_dark() { Icon::Sun } else { Icon::Moon }} />
                    </button>
                    <a
                        href={Section::Contact.href()}
                        class="button button-primary button-sm desktop-only group"
                        onclick={on_navigate(&props.navigate, Section::Contact)}
                    >
                        {"Agende uma Consulta"}
                        <IconView icon={Icon::ArrowRight} size={16} class="slide-right" />
                    </a>
                    <button class="icon-button burger-menu" onclick={toggle_menu} aria-label="Menu">
                        <IconView icon={if props.menu.is_open() { Icon::X } else { Icon::Menu }} />
                    </button>
                </div>
            </div>

            <div class={classes!("mobile-nav", props.menu.is_open().then_some("open"))}>
                <nav class="container mobile-nav-links">
                    { nav_items("mobile") }
                    <a
                        href={Section::Contact.href()}
                        class="button button-primary button-sm"
                        onclick={on_navigate(&props.navigate, Section::Contact)}
                    >
                        {"Agende uma Consulta"}
                    </a>
                </nav>
            </div>

            <style>
                {r#"
                    .site-header {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 40;
                        border-bottom: 1px solid transparent;
                        background: transparent;
                        backdrop-filter: blur(8px);
                        transition: background 0.3s ease, border-color 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: var(--background-translucent);
                        border-bottom-color: var(--border);
                    }
                    .header-content {
                        display: flex;
                        height: 4rem;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        animation: fadeIn 0.5s ease-out;
                    }
                    .brand-icon {
                        color: var(--primary);
                    }
                    .brand-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .desktop-nav {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        font-size: 0.875rem;
                    }
                    .nav-link {
                        position: relative;
                        color: var(--foreground-muted);
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover,
                    .nav-link.active {
                        color: var(--primary);
                    }
                    .nav-link.active {
                        font-weight: 500;
                    }
                    .desktop-nav .nav-link.active::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -0.25rem;
                        height: 2px;
                        background: var(--primary);
                    }
                    .header-actions {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }
                    .burger-menu {
                        display: none;
                    }
                    .mobile-nav {
                        display: none;
                        max-height: 0;
                        overflow: hidden;
                        opacity: 0;
                        transition: max-height 0.3s ease, opacity 0.3s ease;
                        background: var(--background-translucent);
                    }
                    .mobile-nav.open {
                        max-height: 30rem;
                        opacity: 1;
                        border-top: 1px solid var(--border);
                    }
                    .mobile-nav-links {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding-top: 1rem;
                        padding-bottom: 1rem;
                    }
                    .nav-link.mobile {
                        padding: 0.5rem 0;
                    }
                    @media (max-width: 768px) {
                        .desktop-nav,
                        .desktop-only {
                            display: none;
                        }
                        .burger-menu {
                            display: flex;
                        }
                        .mobile-nav {
                            display: flex;
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </header>
    }
}
