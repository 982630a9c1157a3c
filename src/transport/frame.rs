//! Frame types exchanged over the transport in both directions

use serde::Deserialize;

/// Payload kind of a frame
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FrameKind {
    /// UTF-8 text message
    #[default]
    Text,
    /// Raw binary message
    Binary,
}

impl FrameKind {
    /// Label shown in prompts and `mode` output
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "TextMessage",
            Self::Binary => "BinaryMessage",
        }
    }
}

impl std::fmt::Display for FrameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Binary => write!(f, "binary"),
        }
    }
}

impl std::str::FromStr for FrameKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "binary" => Ok(Self::Binary),
            other => Err(format!("unknown message type '{}', expected text or binary", other)),
        }
    }
}

/// One discrete message on the connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub kind: FrameKind,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(kind: FrameKind, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            payload: payload.into(),
        }
    }

    pub fn text(payload: impl Into<String>) -> Self {
        Self::new(FrameKind::Text, payload.into().into_bytes())
    }

    pub fn binary(payload: impl Into<Vec<u8>>) -> Self {
        Self::new(FrameKind::Binary, payload)
    }
}
