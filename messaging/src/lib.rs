// Message channel backends for the config panel
//
// This crate provides MessageChannel implementations: an in-memory channel
// for tests and headless embedding, and the browser window channel.

pub mod memory;
pub mod window;

pub use memory::MemoryChannel;
pub use window::WindowChannel;

pub use teametric_config_core::{ChannelError, Envelope, InboundHandler, MessageChannel, Subscription};
