// Browser tests for the ConfigPanel component (run with wasm-pack test --headless)
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use serde_json::json;
use teametric_config_core::{OutboundMessage, SAVED_STATUS_MESSAGE};
use teametric_config_messaging::MemoryChannel;
use teametric_config_web_ui::{ChannelHandle, ConfigPanel, ConfigPanelProps};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

// ========================================
// テスト用ヘルパー関数
// ========================================

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Fresh mount point appended to <body>
fn mount_root() -> web_sys::Element {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    root
}

fn click(root: &web_sys::Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

/// Replace an input's text and fire the bubbling `input` event a keystroke would
fn type_into(root: &web_sys::Element, selector: &str, value: &str) {
    let input = root
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(value);

    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict("input", &init).unwrap();
    input.dispatch_event(&event).unwrap();
}

fn attribute_of(root: &web_sys::Element, selector: &str, name: &str) -> Option<String> {
    root.query_selector(selector)
        .unwrap()
        .and_then(|element| element.get_attribute(name))
}

fn text_of(root: &web_sys::Element, selector: &str) -> Option<String> {
    root.query_selector(selector)
        .unwrap()
        .and_then(|element| element.text_content())
}

async fn settle() {
    sleep(Duration::from_millis(10)).await;
}

fn props(channel: &MemoryChannel, endpoint: &str, interval: &str) -> ConfigPanelProps {
    ConfigPanelProps {
        initial_endpoint_url: endpoint.to_string(),
        initial_schedule_interval: interval.to_string(),
        on_config_saved: None,
        channel: ChannelHandle::new(channel.clone()),
        origin_policy: Default::default(),
    }
}

// ========================================
// ConfigPanel のテスト
// ========================================

#[wasm_bindgen_test]
async fn test_save_with_empty_fields_shows_errors() {
    let channel = MemoryChannel::new();
    let root = mount_root();
    yew::Renderer::<ConfigPanel>::with_root_and_props(root.clone(), props(&channel, "", "")).render();
    settle().await;

    assert!(text_of(&root, "#endpoint-url-error").is_none());

    click(&root, "#save-config");
    settle().await;

    assert_eq!(
        text_of(&root, "#endpoint-url-error").as_deref(),
        Some("Endpoint URL is required.")
    );
    assert_eq!(
        text_of(&root, "#schedule-interval-error").as_deref(),
        Some("Schedule interval is required.")
    );
    assert!(channel.sent().is_empty());
}

#[wasm_bindgen_test]
async fn test_save_with_valid_fields_posts_message() {
    let channel = MemoryChannel::new();
    let root = mount_root();
    yew::Renderer::<ConfigPanel>::with_root_and_props(
        root.clone(),
        props(&channel, "https://api.example.com", "30"),
    )
    .render();
    settle().await;

    click(&root, "#save-config");
    settle().await;

    assert!(root.query_selector(".error-message").unwrap().is_none());
    assert_eq!(
        serde_json::to_value(&channel.sent()).unwrap(),
        json!([{
            "type": "save-config",
            "payload": { "endpointUrl": "https://api.example.com", "scheduleInterval": "30" }
        }])
    );
}

#[wasm_bindgen_test]
async fn test_typed_values_are_posted() {
    let channel = MemoryChannel::new();
    let root = mount_root();
    yew::Renderer::<ConfigPanel>::with_root_and_props(root.clone(), props(&channel, "", "")).render();
    settle().await;

    type_into(&root, "#endpoint-url", "https://typed.example.com/hook");
    type_into(&root, "#schedule-interval", "45");
    settle().await;
    assert_eq!(attribute_of(&root, "#endpoint-url", "data-state").as_deref(), Some("dirty"));

    click(&root, "#save-config");
    settle().await;

    assert_eq!(
        serde_json::to_value(&channel.sent()).unwrap(),
        json!([{
            "type": "save-config",
            "payload": { "endpointUrl": "https://typed.example.com/hook", "scheduleInterval": "45" }
        }])
    );
    assert_eq!(
        attribute_of(&root, "#sidebar-container", "data-phase").as_deref(),
        Some("submitted")
    );
}

#[wasm_bindgen_test]
async fn test_errors_stay_until_next_save() {
    let channel = MemoryChannel::new();
    let root = mount_root();
    yew::Renderer::<ConfigPanel>::with_root_and_props(root.clone(), props(&channel, "", "")).render();
    settle().await;

    click(&root, "#save-config");
    settle().await;
    assert_eq!(
        text_of(&root, "#endpoint-url-error").as_deref(),
        Some("Endpoint URL is required.")
    );

    // Editing leaves the previous message in place
    type_into(&root, "#endpoint-url", "not a url");
    settle().await;
    assert_eq!(
        text_of(&root, "#endpoint-url-error").as_deref(),
        Some("Endpoint URL is required.")
    );
    assert_eq!(
        attribute_of(&root, "#endpoint-url", "aria-invalid").as_deref(),
        Some("true")
    );

    click(&root, "#save-config");
    settle().await;
    assert_eq!(text_of(&root, "#endpoint-url-error").as_deref(), Some("Enter a valid URL."));
    assert!(channel.sent().is_empty());
}

#[wasm_bindgen_test]
async fn test_route_marker_only_on_endpoint() {
    let channel = MemoryChannel::new();
    let root = mount_root();
    yew::Renderer::<ConfigPanel>::with_root_and_props(root.clone(), props(&channel, "", "")).render();
    settle().await;

    assert_eq!(
        attribute_of(&root, "#endpoint-url", "data-route").as_deref(),
        Some("endpoint-url")
    );
    assert!(attribute_of(&root, "#schedule-interval", "data-route").is_none());
}

#[wasm_bindgen_test]
async fn test_run_now_always_posts() {
    let channel = MemoryChannel::new();
    let root = mount_root();
    yew::Renderer::<ConfigPanel>::with_root_and_props(root.clone(), props(&channel, "", "")).render();
    settle().await;

    click(&root, "#run-now");
    settle().await;

    assert_eq!(channel.sent(), vec![OutboundMessage::RunNow]);
}

#[wasm_bindgen_test]
async fn test_ack_shows_status_and_calls_back() {
    let channel = MemoryChannel::new();
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();

    let mut panel_props = props(&channel, "", "");
    panel_props.on_config_saved = Some(Callback::from(move |payload| sink.borrow_mut().push(payload)));

    let root = mount_root();
    yew::Renderer::<ConfigPanel>::with_root_and_props(root.clone(), panel_props).render();
    settle().await;
    assert_eq!(channel.listener_count(), 1);

    channel.post("https://host.example.com", json!({ "type": "config-saved", "payload": { "ok": true } }));
    settle().await;

    assert_eq!(text_of(&root, "[role=status]").as_deref(), Some(SAVED_STATUS_MESSAGE));
    assert_eq!(*received.borrow(), vec![json!({ "ok": true })]);
    assert_eq!(
        attribute_of(&root, "#sidebar-container", "data-phase").as_deref(),
        Some("confirmed")
    );
}

#[wasm_bindgen_test]
async fn test_destroy_removes_listener() {
    let channel = MemoryChannel::new();
    let root = mount_root();
    let handle =
        yew::Renderer::<ConfigPanel>::with_root_and_props(root.clone(), props(&channel, "", "")).render();
    settle().await;
    assert_eq!(channel.listener_count(), 1);

    handle.destroy();
    settle().await;
    assert_eq!(channel.listener_count(), 0);
}
