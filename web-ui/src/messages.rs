// UI text and DOM naming for the config panel

use teametric_config_core::Field;

/// aria-label of the panel region
pub const REGION_LABEL: &str = "Teametric configuration";

pub const SAVE_BUTTON_LABEL: &str = "Save Configuration";
pub const RUN_NOW_BUTTON_LABEL: &str = "Run Now";

/// Visible label for a field
pub fn field_label(field: Field) -> &'static str {
    match field {
        Field::EndpointUrl => "API Endpoint URL",
        Field::ScheduleInterval => "Schedule Interval (minutes)",
    }
}

/// `type` attribute of a field's input
pub fn field_input_type(field: Field) -> &'static str {
    match field {
        Field::EndpointUrl => "url",
        Field::ScheduleInterval => "text",
    }
}

/// DOM id of a field's input
pub fn field_dom_id(field: Field) -> &'static str {
    match field {
        Field::EndpointUrl => "endpoint-url",
        Field::ScheduleInterval => "schedule-interval",
    }
}

/// DOM id of a field's error text
pub fn error_dom_id(field: Field) -> &'static str {
    match field {
        Field::EndpointUrl => "endpoint-url-error",
        Field::ScheduleInterval => "schedule-interval-error",
    }
}

/// CSS class for an input given whether it currently has an error
pub fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "error-state"
    } else {
        ""
    }
}
