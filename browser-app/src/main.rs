// Teametric Config Panel Browser Application

use teametric_config_core::PanelSettings;
use teametric_config_web_ui::{App, AppProps};

mod logging;

/// Settings from the page query string (defaults when unavailable)
fn load_settings() -> PanelSettings {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .map(|query| PanelSettings::from_query(&query))
        .unwrap_or_default()
}

pub fn run_app() {
    let settings = load_settings();
    logging::init(&settings.log_level);
    tracing::info!(
        target_origin = %settings.target_origin,
        allowed_origin = ?settings.allowed_origin,
        "starting config panel"
    );

    yew::Renderer::<App>::with_props(AppProps { settings }).render();
}

fn main() {
    run_app();
}
