use yew::prelude::*;
use log::info;

mod config;
mod carousel;
mod contact;
mod content;
mod dom;
mod links;
mod navigation;
mod scroll;
mod section;
mod theme;
mod components {
    pub mod about;
    pub mod contact;
    pub mod floating;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod nav_link;
    pub mod services;
    pub mod team;
    pub mod testimonials;
    pub mod whatsapp_cta;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <Home />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
