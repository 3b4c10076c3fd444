// Message channel abstraction
//
// The host window's message bus is ambient shared state; the panel only ever
// talks to it through this trait so that tests can swap in an in-memory fake.

use std::fmt;
use std::rc::Rc;

use crate::protocol::OutboundMessage;

/// One inbound message as delivered by the channel
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Origin of the sender ("" when the channel cannot tell)
    pub origin: String,
    /// Raw, not yet decoded message data
    pub data: serde_json::Value,
}

impl Envelope {
    pub fn new(origin: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            origin: origin.into(),
            data,
        }
    }
}

/// Listener invoked for every inbound message
pub type InboundHandler = Rc<dyn Fn(Envelope)>;

/// Channel errors
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("message channel unavailable: {0}")]
    Unavailable(String),

    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to send message: {0}")]
    Send(String),

    #[error("failed to register listener: {0}")]
    Subscribe(String),
}

/// Bidirectional message channel to the host context
#[cfg_attr(test, mockall::automock)]
pub trait MessageChannel {
    /// Fire-and-forget send to the host
    fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError>;

    /// Register a listener; it stays registered until the returned token is dropped
    fn subscribe(&self, handler: InboundHandler) -> Result<Subscription, ChannelError>;
}

impl<C: MessageChannel + ?Sized> MessageChannel for Rc<C> {
    fn send(&self, message: &OutboundMessage) -> Result<(), ChannelError> {
        (**self).send(message)
    }

    fn subscribe(&self, handler: InboundHandler) -> Result<Subscription, ChannelError> {
        (**self).subscribe(handler)
    }
}

/// Unsubscribe token returned by [`MessageChannel::subscribe`]
///
/// Removes the listener on [`Subscription::unsubscribe`] or on drop.
#[must_use = "dropping a Subscription removes the listener immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Token with nothing to remove
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
