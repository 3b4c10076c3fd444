// Channel handle usable as a Yew property

use std::rc::Rc;

use teametric_config_core::{ChannelError, InboundHandler, MessageChannel, OutboundMessage, Subscription};

/// Shared reference to a message channel
///
/// Two handles are equal when they point at the same channel, so passing the
/// same handle again does not re-run the panel's mount effect.
#[derive(Clone)]
pub struct ChannelHandle(Rc<dyn MessageChannel>);

impl ChannelHandle {
    pub fn new(channel: impl MessageChannel + 'static) -> Self {
        Self(Rc::new(channel))
    }
}

impl PartialEq for ChannelHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl MessageChannel for ChannelHandle {
    fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError> {
        self.0.send(message)
    }

    fn subscribe(&self, handler: InboundHandler) -> Result<Subscription, ChannelError> {
        self.0.subscribe(handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use teametric_config_core::{ConfigPanel, Field, PanelOptions, PanelPhase, SaveOutcome};
    use teametric_config_messaging::MemoryChannel;

    #[test]
    fn test_handle_equality_is_identity() {
        let channel = MemoryChannel::new();
        let a = ChannelHandle::new(channel.clone());
        let b = a.clone();
        let c = ChannelHandle::new(channel.clone());

        assert!(a == b);
        assert!(a != c);
    }

    #[test]
    fn test_handle_forwards_to_channel() {
        let channel = MemoryChannel::new();
        let handle = ChannelHandle::new(channel.clone());

        handle.send(&OutboundMessage::RunNow).unwrap();
        assert_eq!(channel.sent(), vec![OutboundMessage::RunNow]);
    }

    #[test]
    fn test_handle_drives_headless_panel() {
        let channel = MemoryChannel::new();
        let mut panel =
            ConfigPanel::mount(ChannelHandle::new(channel.clone()), PanelOptions::default()).unwrap();
        assert_eq!(channel.listener_count(), 1);

        panel.edit(Field::EndpointUrl, "https://api.example.com");
        panel.edit(Field::ScheduleInterval, "5");
        assert_eq!(panel.save().unwrap(), SaveOutcome::Sent);

        channel.post("https://host.example.com", json!({ "type": "config-saved" }));
        assert_eq!(panel.phase(), PanelPhase::Confirmed);

        panel.unmount();
        assert_eq!(channel.listener_count(), 0);
    }
}
