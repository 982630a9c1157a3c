//! wsclient - an interactive WebSocket client
//!
//! Connects to one endpoint, prints every message it receives and sends
//! each line typed at the prompt, with a few local commands for switching
//! between text and binary messages and sending file contents.

pub mod cli;
pub mod commands;
pub mod common;
pub mod endpoint;
pub mod session;
pub mod transport;

// Re-export commonly used types
pub use common::{Error, Result};
pub use endpoint::Endpoint;
pub use transport::{Frame, FrameKind, Transport};
