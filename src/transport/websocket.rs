//! WebSocket transport over tokio-tungstenite
//!
//! The socket is split into its sink and stream halves, each behind its own
//! lock, so a pending `receive` never blocks `send` or `close`.

use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};

use crate::common::{Error, Result};

use super::{Frame, FrameKind, Transport};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// WebSocket client connection
pub struct WsTransport {
    sink: Mutex<SplitSink<WsStream, Message>>,
    stream: Mutex<SplitStream<WsStream>>,
}

impl WsTransport {
    /// Dial a `ws://` URL and complete the upgrade handshake
    pub async fn connect(url: &str) -> Result<Self> {
        tracing::debug!(url, "Dialing");
        let (socket, response) = connect_async(url)
            .await
            .map_err(|e| Error::connect_failed(url, e))?;
        tracing::info!(url, status = %response.status(), "Connected");

        let (sink, stream) = socket.split();
        Ok(Self {
            sink: Mutex::new(sink),
            stream: Mutex::new(stream),
        })
    }
}

/// Convert an outgoing frame into a WebSocket message
fn to_message(frame: Frame) -> Message {
    match frame.kind {
        FrameKind::Binary => Message::binary(frame.payload),
        FrameKind::Text => match String::from_utf8(frame.payload) {
            Ok(text) => Message::text(text),
            Err(e) => {
                tracing::warn!("Text payload is not valid UTF-8, sending with replacement characters");
                Message::text(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        },
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn send(&self, frame: Frame) -> Result<()> {
        let len = frame.payload.len();
        let kind = frame.kind;
        self.sink
            .lock()
            .await
            .send(to_message(frame))
            .await
            .map_err(|e| Error::Send(Box::new(e)))?;
        tracing::debug!(%kind, len, "Sent frame");
        Ok(())
    }

    async fn receive(&self) -> Result<Frame> {
        let mut stream = self.stream.lock().await;
        loop {
            let message = match stream.next().await {
                Some(Ok(message)) => message,
                Some(Err(e)) => return Err(Error::Receive(Box::new(e))),
                None => return Err(Error::ConnectionClosed),
            };

            match message {
                Message::Text(text) => return Ok(Frame::text(text.as_str())),
                Message::Binary(bytes) => return Ok(Frame::binary(bytes.to_vec())),
                Message::Close(close) => {
                    tracing::debug!(?close, "Peer sent close frame");
                    return Err(Error::ConnectionClosed);
                }
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {
                    tracing::trace!("Skipping control frame");
                }
            }
        }
    }

    async fn close(&self) -> Result<()> {
        match self.sink.lock().await.close().await {
            Ok(()) => Ok(()),
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => Ok(()),
            Err(e) => Err(Error::Close(Box::new(e))),
        }
    }
}
