use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::floating::FloatingActions;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::services::Services;
use crate::components::team::Team;
use crate::components::testimonials::Testimonials;
use crate::components::whatsapp_cta::WhatsAppCta;
use crate::config;
use crate::dom;
use crate::navigation::{self, MenuState};
use crate::scroll::{ScrollSample, ScrollState};
use crate::section::Section;
use crate::theme::{Theme, DARK_MEDIA_QUERY};

fn sample_viewport() -> Option<ScrollSample> {
    let scroll_y = dom::scroll_y()?;
    Some(ScrollSample::take(scroll_y, dom::section_rect))
}

/// The whole site. Owns the scroll, menu and theme state and hands the
/// sections read-only props plus the single `navigate` callback.
#[function_component(Home)]
pub fn home() -> Html {
    let scroll = use_reducer_eq(ScrollState::default);
    let menu = use_state_eq(MenuState::default);
    let theme_state = use_state_eq(|| Theme::from_system(dom::media_matches(DARK_MEDIA_QUERY)));
    let theme = *theme_state;

    // Scroll tracker
    {
        let dispatcher = scroll.dispatcher();
        use_effect_with_deps(
            move |_| {
                if let Some(sample) = sample_viewport() {
                    dispatcher.dispatch(sample);
                }

                let listener = web_sys::window().map(|window| {
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        if let Some(sample) = sample_viewport() {
                            dispatcher.dispatch(sample);
                        }
                    }) as Box<dyn FnMut()>);

                    if window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        warn!("could not attach scroll tracker");
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

    {
        let visible = scroll.visible;
        use_effect_with_deps(
            move |visible| {
                debug!("visible section: {}", visible.id());
                || ()
            },
            visible,
        );
    }

    use_effect_with_deps(
        move |theme| {
            theme.apply();
            || ()
        },
        theme,
    );

    let navigate = {
        let menu = menu.clone();
        Callback::from(move |section: Section| {
            menu.set(menu.navigated());
            navigation::scroll_to_section(section);
        })
    };

    let on_toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: ()| menu.set(menu.toggle()))
    };

    let on_toggle_theme = {
        let theme_state = theme_state.clone();
        Callback::from(move |_: ()| {
            let next = theme_state.toggle();
            info!("switching theme to {:?}", next);
            theme_state.set(next);
        })
    };

    html! {
        <div class="site">
            <Header
                scrolled={scroll.scrolled}
                visible={scroll.visible}
                menu={*menu}
                on_toggle_menu={on_toggle_menu}
                theme={theme}
                on_toggle_theme={on_toggle_theme}
                navigate={navigate.clone()}
            />

            <main>
                <Hero navigate={navigate.clone()} />
                <Services navigate={navigate.clone()} />
                <WhatsAppCta />
                <About navigate={navigate.clone()} />
                <Team navigate={navigate.clone()} />
                if config::testimonials_enabled() {
                    <Testimonials />
                }
                <Contact />
            </main>

            <Footer navigate={navigate.clone()} />
            <FloatingActions scrolled={scroll.scrolled} navigate={navigate} />

            <style>
                {r#"
                    :root {
                        --background: #ffffff;
                        --background-translucent: rgba(255, 255, 255, 0.85);
                        --foreground: #0f172a;
                        --foreground-muted: #64748b;
                        --muted: #f1f5f9;
                        --muted-section: rgba(241, 245, 249, 0.5);
                        --card: #ffffff;
                        --border: #e2e8f0;
                        --primary: #b8860b;
                        --primary-foreground: #ffffff;
                        --primary-soft: rgba(184, 134, 11, 0.15);
                        --surface-translucent: rgba(255, 255, 255, 0.5);
                        --green-soft: #f0fdf4;
                        --green-pill: #dcfce7;
                        --green-text: #15803d;
                    }
                    :root.dark {
                        --background: #0b1120;
                        --background-translucent: rgba(11, 17, 32, 0.85);
                        --foreground: #f8fafc;
                        --foreground-muted: #94a3b8;
                        --muted: #1e293b;
                        --muted-section: rgba(30, 41, 59, 0.3);
                        --card: #111827;
                        --border: #1e293b;
                        --primary: #d4a62a;
                        --primary-foreground: #0b1120;
                        --primary-soft: rgba(212, 166, 42, 0.15);
                        --surface-translucent: rgba(11, 17, 32, 0.5);
                        --green-soft: rgba(5, 46, 22, 0.2);
                        --green-pill: rgba(20, 83, 45, 0.3);
                        --green-text: #86efac;
                    }
                    *, *::before, *::after {
                        box-sizing: border-box;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: var(--background);
                        color: var(--foreground);
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    h1, h2, h3, h4, p {
                        margin: 0;
                    }
                    .site {
                        min-height: 100vh;
                    }
                    .container {
                        width: 100%;
                        max-width: 1400px;
                        margin: 0 auto;
                        padding-left: 2rem;
                        padding-right: 2rem;
                    }
                    .section {
                        padding: 5rem 0;
                    }
                    .section-muted {
                        background: var(--muted-section);
                    }
                    .section-heading {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    h2 {
                        font-size: clamp(1.875rem, 4vw, 2.25rem);
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        margin-bottom: 1rem;
                    }
                    .section-heading p {
                        max-width: 800px;
                    }
                    .section-cta {
                        display: flex;
                        justify-content: center;
                        margin-top: 3rem;
                    }
                    .pill {
                        display: inline-block;
                        background: var(--primary-soft);
                        color: var(--primary);
                        padding: 0.25rem 1rem;
                        border-radius: 9999px;
                        margin-bottom: 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .muted {
                        color: var(--foreground-muted);
                        line-height: 1.6;
                    }
                    .small {
                        font-size: 0.875rem;
                    }
                    .text-primary {
                        color: var(--primary);
                    }
                    .card {
                        background: var(--card);
                        border-radius: 0.5rem;
                        overflow: hidden;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
                        transition: box-shadow 0.3s ease, transform 0.2s ease;
                    }
                    .card:hover {
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12);
                    }
                    .card-content {
                        padding: 1.5rem;
                    }
                    .lift:hover {
                        transform: translateY(-5px);
                    }
                    .image-fade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to top, var(--background), transparent);
                        pointer-events: none;
                    }
                    .icon-badge {
                        display: flex;
                        flex-shrink: 0;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: var(--primary-soft);
                        color: var(--primary);
                        margin-bottom: 1rem;
                    }
                    .value .icon-badge,
                    .area-card .icon-badge,
                    .contact-detail .icon-badge {
                        margin-bottom: 0;
                    }
                    .icon-badge-lg {
                        width: 3rem;
                        height: 3rem;
                        margin-top: 0.25rem;
                    }
                    .button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        border-radius: 0.375rem;
                        border: 1px solid transparent;
                        font-size: 0.875rem;
                        font-weight: 500;
                        padding: 0.5rem 1rem;
                        cursor: pointer;
                        text-decoration: none;
                        transition: background 0.2s ease, color 0.2s ease;
                    }
                    .button-primary {
                        background: var(--primary);
                        color: var(--primary-foreground);
                    }
                    .button-primary:hover {
                        filter: brightness(0.92);
                    }
                    .button-outline {
                        background: transparent;
                        border-color: var(--border);
                        color: var(--foreground);
                    }
                    .button-outline:hover {
                        background: var(--muted);
                    }
                    .button-outline-light {
                        background: transparent;
                        border-color: #fff;
                        color: #fff;
                    }
                    .button-outline-light:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .button-sm {
                        padding: 0.375rem 0.75rem;
                    }
                    .button-lg {
                        padding: 0.875rem 2rem;
                        font-size: 1rem;
                    }
                    .full-width {
                        width: 100%;
                    }
                    .icon-button {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: transparent;
                        color: inherit;
                        cursor: pointer;
                    }
                    .icon-button:hover {
                        background: var(--muted);
                    }
                    .text-link {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.25rem;
                        color: var(--primary);
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                        margin-top: 1rem;
                    }
                    .text-link.small {
                        margin-top: 0;
                    }
                    .text-link.small:hover {
                        text-decoration: underline;
                    }
                    .group .slide-right {
                        transition: transform 0.2s ease;
                    }
                    .group:hover .slide-right {
                        transform: translateX(4px);
                    }
                    .group .slide-down {
                        transition: transform 0.2s ease;
                    }
                    .group:hover .slide-down {
                        transform: translateY(4px);
                    }
                    .rise {
                        animation: rise 0.6s ease-out both;
                    }
                    @keyframes rise {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    @media (max-width: 640px) {
                        .container {
                            padding-left: 1rem;
                            padding-right: 1rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
