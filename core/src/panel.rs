// Headless configuration panel
//
// Owns the form, validation and acknowledgement state for one mounted panel
// and relays save / run-now intents through a MessageChannel. UI layers
// render from the accessors and forward user events to the methods here.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::channel::{ChannelError, Envelope, InboundHandler, MessageChannel, Subscription};
use crate::models::{
    Field, FieldStatus, FieldTracker, FormState, PanelPhase, ValidationErrors,
    SAVED_STATUS_MESSAGE,
};
use crate::protocol::{InboundMessage, OriginPolicy, OutboundMessage};
use crate::validation::validate_form;

/// Callback receiving the payload of each config-saved acknowledgement
pub type ConfigSavedCallback = Rc<dyn Fn(serde_json::Value)>;

/// Construction parameters
#[derive(Clone, Default)]
pub struct PanelOptions {
    pub initial_endpoint_url: String,
    pub initial_schedule_interval: String,
    pub on_config_saved: Option<ConfigSavedCallback>,
    pub origin_policy: OriginPolicy,
}

impl fmt::Debug for PanelOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelOptions")
            .field("initial_endpoint_url", &self.initial_endpoint_url)
            .field("initial_schedule_interval", &self.initial_schedule_interval)
            .field("on_config_saved", &self.on_config_saved.is_some())
            .field("origin_policy", &self.origin_policy)
            .finish()
    }
}

/// Result of a save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Validation failed; nothing was sent
    Invalid,
    /// save-config was sent
    Sent,
}

/// State mutated from the inbound listener
#[derive(Debug, Default)]
struct AckState {
    status_message: Option<String>,
    phase: PanelPhase,
}

/// Decide what an inbound envelope means for a panel
///
/// Returns the acknowledgement payload when the envelope is a config-saved
/// message from an allowed origin, `None` otherwise.
pub fn acknowledgement(envelope: &Envelope, policy: &OriginPolicy) -> Option<serde_json::Value> {
    if !policy.allows(&envelope.origin) {
        tracing::warn!(origin = %envelope.origin, "ignoring message from disallowed origin");
        return None;
    }

    match InboundMessage::from_value(&envelope.data) {
        Ok(InboundMessage::ConfigSaved { payload }) => Some(payload),
        Err(e) => {
            tracing::debug!(origin = %envelope.origin, error = %e, "ignoring inbound message");
            None
        }
    }
}

/// A mounted configuration panel
pub struct ConfigPanel<C: MessageChannel> {
    channel: C,
    form: FormState,
    errors: ValidationErrors,
    fields: FieldTracker,
    ack: Rc<RefCell<AckState>>,
    subscription: Option<Subscription>,
}

impl<C: MessageChannel> ConfigPanel<C> {
    /// Mount the panel and register its inbound listener
    pub fn mount(channel: C, options: PanelOptions) -> Result<Self, ChannelError> {
        let ack = Rc::new(RefCell::new(AckState::default()));

        let handler: InboundHandler = {
            let ack = ack.clone();
            let on_config_saved = options.on_config_saved.clone();
            let policy = options.origin_policy.clone();
            Rc::new(move |envelope: Envelope| {
                let Some(payload) = acknowledgement(&envelope, &policy) else {
                    return;
                };
                tracing::info!(origin = %envelope.origin, "configuration save acknowledged");
                {
                    let mut ack = ack.borrow_mut();
                    ack.status_message = Some(SAVED_STATUS_MESSAGE.to_string());
                    ack.phase = PanelPhase::Confirmed;
                }
                if let Some(callback) = &on_config_saved {
                    callback(payload);
                }
            })
        };
        let subscription = channel.subscribe(handler)?;
        tracing::debug!("config panel mounted");

        Ok(Self {
            channel,
            form: FormState::new(options.initial_endpoint_url, options.initial_schedule_interval),
            errors: ValidationErrors::new(),
            fields: FieldTracker::default(),
            ack,
            subscription: Some(subscription),
        })
    }

    /// Deregister the inbound listener and discard all state
    pub fn unmount(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        tracing::debug!("config panel unmounted");
    }

    /// Replace a field's raw text; no validation happens here
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.fields.mark_edited(field);
        self.ack.borrow_mut().phase = PanelPhase::Editing;
    }

    /// Re-run every rule, replacing the current errors
    pub fn validate(&mut self) -> bool {
        self.errors = validate_form(&self.form);
        self.fields.mark_validated(&self.errors);
        self.errors.is_empty()
    }

    /// Validate and, if everything passes, send save-config
    pub fn save(&mut self) -> Result<SaveOutcome, ChannelError> {
        if !self.validate() {
            tracing::debug!(failing = self.errors.len(), "save blocked by validation");
            return Ok(SaveOutcome::Invalid);
        }

        self.channel.send(&OutboundMessage::save_config(&self.form))?;
        self.ack.borrow_mut().phase = PanelPhase::Submitted;
        tracing::info!(endpoint_url = %self.form.endpoint_url, "save-config sent");
        Ok(SaveOutcome::Sent)
    }

    /// Send run-now regardless of the form's validity
    pub fn run_now(&self) -> Result<(), ChannelError> {
        self.channel.send(&OutboundMessage::RunNow)?;
        tracing::info!("run-now sent");
        Ok(())
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status_message(&self) -> Option<String> {
        self.ack.borrow().status_message.clone()
    }

    pub fn phase(&self) -> PanelPhase {
        self.ack.borrow().phase
    }

    pub fn field_status(&self, field: Field) -> FieldStatus {
        self.fields.status(field)
    }
}
