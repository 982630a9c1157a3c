//! In-memory transport for session tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex as StdMutex;

use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};
use tokio_tungstenite::tungstenite;

use crate::common::{Error, Result};

use super::{Frame, Transport};

/// Records sent frames and closes; receive results are scripted through a channel.
///
/// `receive` stays pending while the script sender is alive and empty, and
/// returns `ConnectionClosed` once the sender is dropped.
pub(crate) struct MockTransport {
    sent: StdMutex<Vec<Frame>>,
    incoming: Mutex<mpsc::UnboundedReceiver<Result<Frame>>>,
    closes: AtomicUsize,
    fail_send: AtomicBool,
}

impl MockTransport {
    pub(crate) fn new() -> (Self, mpsc::UnboundedSender<Result<Frame>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let transport = Self {
            sent: StdMutex::new(Vec::new()),
            incoming: Mutex::new(rx),
            closes: AtomicUsize::new(0),
            fail_send: AtomicBool::new(false),
        };
        (transport, tx)
    }

    /// Make every subsequent send fail
    pub(crate) fn fail_sends(&self) {
        self.fail_send.store(true, Ordering::SeqCst);
    }

    pub(crate) fn sent(&self) -> Vec<Frame> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn close_count(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, frame: Frame) -> Result<()> {
        if self.fail_send.load(Ordering::SeqCst) {
            return Err(Error::Send(Box::new(tungstenite::Error::AlreadyClosed)));
        }
        self.sent.lock().unwrap().push(frame);
        Ok(())
    }

    async fn receive(&self) -> Result<Frame> {
        match self.incoming.lock().await.recv().await {
            Some(result) => result,
            None => Err(Error::ConnectionClosed),
        }
    }

    async fn close(&self) -> Result<()> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
