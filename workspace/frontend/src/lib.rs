use yew::prelude::*;

mod components;
mod files;
mod geolocation;
mod interop;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod shared;

use components::dashboard::Dashboard;
use shared::toast::ToastProvider;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <Dashboard />
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== CoastWatch Dashboard Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: {}", settings.config.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
