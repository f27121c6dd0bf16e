use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::links::whatsapp_greeting_link;
use crate::section::Section;

#[derive(Properties, PartialEq)]
pub struct FloatingActionsProps {
    pub scrolled: bool,
    pub navigate: Callback<Section>,
}

/// WhatsApp shortcut (always shown) and back-to-top (only once scrolled).
#[function_component(FloatingActions)]
pub fn floating_actions(props: &FloatingActionsProps) -> Html {
    let back_to_top = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Section::Home))
    };

    html! {
        <>
            <a
                href={whatsapp_greeting_link()}
                target="_blank"
                rel="noopener noreferrer"
                class="floating-whatsapp"
                aria-label="Falar no WhatsApp"
            >
                <IconView icon={Icon::WhatsApp} size={28} />
            </a>

            if props.scrolled {
                <button class="back-to-top" onclick={back_to_top} aria-label="Voltar ao topo">
                    <IconView icon={Icon::ChevronUp} />
                </button>
            }

            <style>
                {r#"
                    .floating-whatsapp {
                        position: fixed;
                        bottom: 1.5rem;
                        right: 1.5rem;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 9999px;
                        background: #22c55e;
                        color: #fff;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                        animation: popIn 0.4s cubic-bezier(0.34, 1.56, 0.64, 1) 1.5s both;
                        transition: background 0.2s ease, transform 0.2s ease;
                    }
                    .floating-whatsapp:hover {
                        background: #16a34a;
                        transform: scale(1.1);
                    }
                    .back-to-top {
                        position: fixed;
                        bottom: 1.5rem;
                        left: 1.5rem;
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2.5rem;
                        height: 2.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: var(--primary);
                        color: var(--primary-foreground);
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.15);
                        cursor: pointer;
                        animation: riseIn 0.3s ease-out;
                    }
                    .back-to-top:hover {
                        transform: scale(1.1);
                    }
                    @keyframes popIn {
                        from { transform: scale(0); }
                        to { transform: scale(1); }
                    }
                    @keyframes riseIn {
                        from { transform: translateY(100px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
        </>
    }
}
