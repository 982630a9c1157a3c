//! Duplex message-stream transport
//!
//! The session only talks to the connection through the [`Transport`] trait.
//! All operations take `&self` so a single `Arc` handle can be shared by the
//! reader loop, the writer loop and the coordinator at the same time.

mod frame;
#[cfg(test)]
pub(crate) mod mock;
pub mod websocket;

use async_trait::async_trait;

use crate::common::Result;

pub use frame::{Frame, FrameKind};
pub use websocket::WsTransport;

/// A full-duplex, message-framed connection
///
/// Implementations must tolerate `send`, `receive` and `close` being called
/// concurrently from different tasks.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one frame
    async fn send(&self, frame: Frame) -> Result<()>;

    /// Wait for the next data frame
    ///
    /// Returns `Error::ConnectionClosed` once the peer has closed the connection.
    async fn receive(&self) -> Result<Frame>;

    /// Close the connection. Calling this on an already closed connection is not an error.
    async fn close(&self) -> Result<()>;
}
