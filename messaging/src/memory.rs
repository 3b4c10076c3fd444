// In-memory channel backend

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use teametric_config_core::{
    ChannelError, Envelope, InboundHandler, InboundMessage, MessageChannel, OutboundMessage,
    Subscription,
};

#[derive(Default)]
struct Inner {
    sent: Vec<OutboundMessage>,
    listeners: Vec<(u64, InboundHandler)>,
    next_id: u64,
}

/// Shared in-process channel
///
/// Clones share the same state, so a test can keep one handle and give
/// another to the panel.
#[derive(Clone, Default)]
pub struct MemoryChannel {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every outbound message sent so far, oldest first
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.inner.borrow().sent.clone()
    }

    /// Drain the outbound log
    pub fn take_sent(&self) -> Vec<OutboundMessage> {
        std::mem::take(&mut self.inner.borrow_mut().sent)
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Deliver raw message data to every current listener
    pub fn post(&self, origin: &str, data: serde_json::Value) {
        // Snapshot so listeners may (un)subscribe while being called
        let listeners: Vec<InboundHandler> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        tracing::debug!(origin, listeners = listeners.len(), "delivering inbound message");
        for handler in listeners {
            handler(Envelope::new(origin, data.clone()));
        }
    }

    /// Encode and deliver a protocol message
    pub fn post_message(&self, origin: &str, message: &InboundMessage) -> Result<(), ChannelError> {
        let data = serde_json::to_value(message)?;
        self.post(origin, data);
        Ok(())
    }
}

impl MessageChannel for MemoryChannel {
    fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError> {
        tracing::debug!(kind = message.kind(), "memory channel send");
        self.inner.borrow_mut().sent.push(message.clone());
        Ok(())
    }

    fn subscribe(&self, handler: InboundHandler) -> Result<Subscription, ChannelError> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, handler));
            id
        };

        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(listener, _)| *listener != id);
            }
        }))
    }
}
