// Core data models for the configuration panel

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::validation::FieldError;

/// Fixed text shown once the host acknowledges a save
pub const SAVED_STATUS_MESSAGE: &str = "Configuration saved successfully.";

/// Editable form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    EndpointUrl,
    ScheduleInterval,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::EndpointUrl, Field::ScheduleInterval];

    /// Wire / error-map name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::EndpointUrl => "endpointUrl",
            Field::ScheduleInterval => "scheduleInterval",
        }
    }
}

/// Raw text of both inputs, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub endpoint_url: String,
    pub schedule_interval: String,
}

impl FormState {
    pub fn new(endpoint_url: impl Into<String>, schedule_interval: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            schedule_interval: schedule_interval.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EndpointUrl => &self.endpoint_url,
            Field::ScheduleInterval => &self.schedule_interval,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::EndpointUrl => self.endpoint_url = value,
            Field::ScheduleInterval => self.schedule_interval = value,
        }
    }

    /// Copy of this form with one field replaced
    pub fn with(&self, field: Field, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.set(field, value);
        next
    }
}

/// Failing fields of the most recent validation pass
///
/// Always rebuilt as a whole by [`crate::validation::validate_form`]; a field is
/// present only if it failed that pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Human readable message for a field, if it failed
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

/// Per-field lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Never edited nor validated
    #[default]
    Untouched,
    /// Edited since the last validation pass
    Dirty,
    /// Failed the last validation pass and not edited since
    Invalid,
    /// Passed the last validation pass and not edited since
    Valid,
}

impl FieldStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Untouched => "untouched",
            FieldStatus::Dirty => "dirty",
            FieldStatus::Invalid => "invalid",
            FieldStatus::Valid => "valid",
        }
    }
}

/// Whole-form lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Editing,
    /// save-config was sent, no acknowledgement yet
    Submitted,
    /// config-saved was received
    Confirmed,
}

impl PanelPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelPhase::Editing => "editing",
            PanelPhase::Submitted => "submitted",
            PanelPhase::Confirmed => "confirmed",
        }
    }
}

/// Tracks [`FieldStatus`] for both fields
#[derive(Debug, Clone, Default)]
pub struct FieldTracker {
    endpoint_url: FieldStatus,
    schedule_interval: FieldStatus,
}

impl FieldTracker {
    pub fn status(&self, field: Field) -> FieldStatus {
        match field {
            Field::EndpointUrl => self.endpoint_url,
            Field::ScheduleInterval => self.schedule_interval,
        }
    }

    fn slot(&mut self, field: Field) -> &mut FieldStatus {
        match field {
            Field::EndpointUrl => &mut self.endpoint_url,
            Field::ScheduleInterval => &mut self.schedule_interval,
        }
    }

    pub fn mark_edited(&mut self, field: Field) {
        *self.slot(field) = FieldStatus::Dirty;
    }

    /// Apply the outcome of a validation pass to every field
    pub fn mark_validated(&mut self, errors: &ValidationErrors) {
        for field in Field::ALL {
            *self.slot(field) = if errors.contains(field) {
                FieldStatus::Invalid
            } else {
                FieldStatus::Valid
            };
        }
    }
}
