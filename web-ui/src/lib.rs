// Web UI library for the Teametric config panel
//
// This crate provides the Yew components for the embedded configuration
// panel and a host App that wires the panel to the browser window channel.

use yew::prelude::*;

pub mod channel;
pub mod components;
pub mod messages;

// Re-export components
pub use channel::ChannelHandle;
pub use components::*;

use teametric_config_core::{ChannelError, PanelSettings};
use teametric_config_messaging::WindowChannel;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_default]
    pub settings: PanelSettings,
}

/// Main application component（ウィンドウチャネルの生成とパネルの描画）
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let channel = use_state(|| -> Result<ChannelHandle, ChannelError> {
        let channel = WindowChannel::new(props.settings.target_origin.clone()).map(|channel| {
            tracing::debug!(target_origin = channel.target_origin(), "bound window channel");
            ChannelHandle::new(channel)
        });
        if let Err(e) = &channel {
            tracing::error!(error = %e, "message channel unavailable");
        }
        channel
    });

    let on_config_saved = use_callback((), |payload: serde_json::Value, _| {
        tracing::info!(%payload, "host confirmed configuration save");
    });

    match &*channel {
        Ok(handle) => html! {
            <ConfigPanel
                initial_endpoint_url={props.settings.initial_endpoint_url.clone()}
                initial_schedule_interval={props.settings.initial_schedule_interval.clone()}
                on_config_saved={on_config_saved}
                channel={handle.clone()}
                origin_policy={props.settings.origin_policy()}
            />
        },
        Err(e) => html! {
            <div class="message-text error" role="alert">{ e.to_string() }</div>
        },
    }
}
