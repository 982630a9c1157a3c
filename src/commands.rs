//! CLI argument definitions

use clap::Parser;

use crate::transport::FrameKind;

/// Interactive WebSocket client
///
/// Lines typed at the prompt are sent as messages; received messages are
/// printed as they arrive. Type `help` in a session for local commands.
#[derive(Parser, Debug)]
#[command(name = "wsclient", version, long_about = None)]
pub struct Cli {
    /// Endpoint to connect to, as <host>/<path> (e.g. localhost:8080/ws)
    pub endpoint: Option<String>,

    /// Connect to the built-in local endpoint localhost:8080/ws
    #[arg(long, conflicts_with = "endpoint")]
    pub local: bool,

    /// Show endpoint and write mode in the prompt
    #[arg(long, short)]
    pub verbose: bool,

    /// Initial outgoing message type: text or binary
    #[arg(long)]
    pub mode: Option<FrameKind>,
}
