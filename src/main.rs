use log::info;
use yew::prelude::*;

mod config;
mod content;
mod lead {
    pub mod encode;
    pub mod form_state;
    pub mod submit;
}
mod components {
    pub mod demo_overlay;
    pub mod faq_item;
    pub mod lead_form;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
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
