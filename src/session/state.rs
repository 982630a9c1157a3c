//! Session state owned by the writer loop

use crate::endpoint::Endpoint;
use crate::transport::FrameKind;

/// How much connection detail the prompt shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    #[default]
    Short,
    Verbose,
}

/// Per-session state
///
/// The endpoint is fixed at construction; only the outgoing kind changes
/// during a session, in response to `mode` commands.
#[derive(Debug, Clone)]
pub struct SessionState {
    connected: bool,
    verbosity: Verbosity,
    endpoint: Endpoint,
    outgoing_kind: FrameKind,
}

impl SessionState {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            connected: true,
            verbosity: Verbosity::Short,
            endpoint,
            outgoing_kind: FrameKind::Text,
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_outgoing_kind(mut self, kind: FrameKind) -> Self {
        self.outgoing_kind = kind;
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn host(&self) -> &str {
        self.endpoint.host()
    }

    pub fn path(&self) -> &str {
        self.endpoint.path()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn outgoing_kind(&self) -> FrameKind {
        self.outgoing_kind
    }

    pub fn set_outgoing_kind(&mut self, kind: FrameKind) {
        self.outgoing_kind = kind;
    }

    /// Prompt text printed before each input line (no trailing newline)
    pub fn prompt(&self) -> String {
        if !self.connected {
            return "(not connected):".to_string();
        }
        match self.verbosity {
            Verbosity::Short => "(connected):".to_string(),
            Verbosity::Verbose => format!(
                "(connected - {}{} - writemode: {}) :",
                self.host(),
                self.path(),
                self.outgoing_kind.label()
            ),
        }
    }
}
