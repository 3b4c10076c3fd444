// Browser window channel backend (window.postMessage)

use teametric_config_core::{ChannelError, InboundHandler, MessageChannel, OutboundMessage, Subscription};

/// Channel to the enclosing browser context
///
/// Outbound messages go to `window.parent` (the window itself when the panel
/// is not framed); inbound messages are the window's `message` events.
pub struct WindowChannel {
    target_origin: String,
    #[cfg(target_arch = "wasm32")]
    window: web_sys::Window,
}

impl WindowChannel {
    pub fn target_origin(&self) -> &str {
        &self.target_origin
    }
}

// WASM implementation using web-sys
#[cfg(target_arch = "wasm32")]
mod wasm_impl {
    use super::*;
    use teametric_config_core::Envelope;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    fn describe(value: &JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }

    impl WindowChannel {
        /// Bind to the current window
        pub fn new(target_origin: impl Into<String>) -> Result<Self, ChannelError> {
            let window = web_sys::window()
                .ok_or_else(|| ChannelError::Unavailable("no global window".to_string()))?;
            Ok(Self {
                target_origin: target_origin.into(),
                window,
            })
        }

        fn host(&self) -> web_sys::Window {
            match self.window.parent() {
                Ok(Some(parent)) => parent,
                _ => self.window.clone(),
            }
        }
    }

    /// Convert a MessageEvent into an Envelope via its JSON representation
    fn envelope_from_event(event: &web_sys::MessageEvent) -> Option<Envelope> {
        let json = js_sys::JSON::stringify(&event.data()).ok()?.as_string()?;
        let data = serde_json::from_str(&json).ok()?;
        Some(Envelope::new(event.origin(), data))
    }

    impl MessageChannel for WindowChannel {
        fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError> {
            let json = serde_json::to_string(message)?;
            let value = js_sys::JSON::parse(&json).map_err(|e| ChannelError::Send(describe(&e)))?;

            self.host()
                .post_message(&value, &self.target_origin)
                .map_err(|e| ChannelError::Send(describe(&e)))?;

            tracing::debug!(kind = message.kind(), target_origin = %self.target_origin, "posted message to host");
            Ok(())
        }

        fn subscribe(&self, handler: InboundHandler) -> Result<Subscription, ChannelError> {
            let listener = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(
                move |event: web_sys::MessageEvent| match envelope_from_event(&event) {
                    Some(envelope) => handler(envelope),
                    None => tracing::debug!(origin = %event.origin(), "dropping non-JSON message event"),
                },
            );

            let target: web_sys::EventTarget = self.window.clone().into();
            target
                .add_event_listener_with_callback("message", listener.as_ref().unchecked_ref())
                .map_err(|e| ChannelError::Subscribe(describe(&e)))?;

            Ok(Subscription::new(move || {
                if let Err(e) = target
                    .remove_event_listener_with_callback("message", listener.as_ref().unchecked_ref())
                {
                    tracing::warn!(error = %describe(&e), "failed to remove message listener");
                }
            }))
        }
    }
}

// Stub implementation for non-WASM targets (there is no window to talk to)
#[cfg(not(target_arch = "wasm32"))]
impl WindowChannel {
    pub fn new(_target_origin: impl Into<String>) -> Result<Self, ChannelError> {
        Err(ChannelError::Unavailable(
            "WindowChannel is only available on WASM targets".to_string(),
        ))
    }
}

// Never reached since `new` always fails here, but the web-ui App hands a
// WindowChannel to ChannelHandle::new and has to type-check on native test builds.
#[cfg(not(target_arch = "wasm32"))]
impl MessageChannel for WindowChannel {
    fn send(&self, _message: &OutboundMessage) -> Result<(), ChannelError> {
        Err(ChannelError::Unavailable(format!(
            "no window to post to (target origin {})",
            self.target_origin
        )))
    }

    fn subscribe(&self, _handler: InboundHandler) -> Result<Subscription, ChannelError> {
        Err(ChannelError::Unavailable("no window to listen on".to_string()))
    }
}
