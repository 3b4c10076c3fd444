// Teametric Config Panel - Core Library
//
// Form model, validation rules, host message protocol and the headless
// panel controller shared by the web UI and tests.

pub mod channel;
pub mod models;
pub mod panel;
pub mod protocol;
pub mod settings;
pub mod validation;

pub use channel::*;
pub use models::*;
pub use panel::*;
pub use protocol::*;
pub use settings::*;
pub use validation::*;
