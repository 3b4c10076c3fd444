// Components module

pub mod action_buttons;
pub mod config_panel;
pub mod field_input;
pub mod status_line;

pub use action_buttons::ActionButtons;
pub use config_panel::{ConfigPanel, ConfigPanelProps};
pub use field_input::FieldInput;
pub use status_line::StatusLine;
