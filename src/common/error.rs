//! Error types for the WebSocket client
//!
//! Every error is reported to the user at the point it is detected; only
//! connection and configuration failures make it back to `main`.

use std::io;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the WebSocket client
#[derive(Error, Debug)]
pub enum Error {
    // === Endpoint Errors ===
    #[error("Invalid endpoint '{0}': expected <host>/<path>, e.g. localhost:8080/ws")]
    InvalidEndpoint(String),

    // === Connection Errors ===
    #[error("Error while dialing {url}: {source}")]
    ConnectFailed {
        url: String,
        #[source]
        source: Box<tungstenite::Error>,
    },

    #[error("Connection closed by peer")]
    ConnectionClosed,

    #[error("{0}")]
    Receive(#[source] Box<tungstenite::Error>),

    #[error("{0}")]
    Send(#[source] Box<tungstenite::Error>),

    #[error("{0}")]
    Close(#[source] Box<tungstenite::Error>),

    // === File Substitution Errors ===
    #[error("No file given. Usage: from file <path>")]
    MissingFilePath,

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create a dial failure error for the given URL
    pub fn connect_failed(url: &str, source: tungstenite::Error) -> Self {
        Self::ConnectFailed {
            url: url.to_string(),
            source: Box::new(source),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Whether this error means the connection has already gone away
    pub fn is_closed(&self) -> bool {
        match self {
            Self::ConnectionClosed => true,
            Self::Receive(e) | Self::Send(e) | Self::Close(e) => matches!(
                **e,
                tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed
            ),
            _ => false,
        }
    }
}
