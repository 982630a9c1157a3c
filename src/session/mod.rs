//! Interactive duplex session
//!
//! A session runs two loops concurrently over one connection:
//! 1. The reader loop prints every received frame
//! 2. The writer loop reads user input, runs local commands and sends messages
//!
//! Whichever loop exits first ends the session. The coordinator closes the
//! transport exactly once and stops the other loop.

pub mod command;
pub mod input;
pub mod reader;
pub mod state;
pub mod writer;

use std::io::Write;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{Error, Result};
use crate::transport::{Transport, WsTransport};

pub use state::{SessionState, Verbosity};
pub use writer::{Writer, WriterExit};

/// First loop exit observed by the coordinator
#[derive(Debug)]
pub enum LoopExit {
    /// The reader loop stopped on a receive failure or peer close
    Reader(Error),
    /// The writer loop stopped
    Writer(WriterExit),
    /// Both loops ended without signalling (a loop task panicked)
    Aborted,
}

/// One connection plus the state needed to drive it interactively
pub struct Session<T: ?Sized> {
    transport: Arc<T>,
    state: SessionState,
}

impl<T> Session<T>
where
    T: Transport + ?Sized + 'static,
{
    pub fn new(transport: Arc<T>, state: SessionState) -> Self {
        Self { transport, state }
    }

    /// Run both loops until the first one exits, then close the connection
    pub async fn run<R, W>(
        self,
        input: mpsc::Receiver<Vec<u8>>,
        reader_out: R,
        writer_out: W,
    ) -> LoopExit
    where
        R: Write + Send + 'static,
        W: Write + Send + 'static,
    {
        let Self { transport, state } = self;

        // Each loop signals once; capacity 2 means neither send can block
        let (done_tx, mut done_rx) = mpsc::channel::<LoopExit>(2);

        let reader_task = {
            let transport = Arc::clone(&transport);
            let done = done_tx.clone();
            let mut out = reader_out;
            tokio::spawn(async move {
                let error = reader::run(&*transport, &mut out).await;
                let _ = done.try_send(LoopExit::Reader(error));
            })
        };

        let writer_task = {
            let transport = Arc::clone(&transport);
            let done = done_tx;
            tokio::spawn(async move {
                let mut writer = Writer::new(transport, state, input, writer_out);
                let exit = writer.run().await;
                let _ = done.try_send(LoopExit::Writer(exit));
            })
        };

        let exit = done_rx.recv().await.unwrap_or(LoopExit::Aborted);
        tracing::debug!(?exit, "Session loop finished, shutting down");

        if let Err(e) = transport.close().await {
            eprintln!("Error while closing connection: {}", e);
        }

        reader_task.abort();
        writer_task.abort();

        eprintln!("Good bye!");
        exit
    }
}

/// Connect to the session's endpoint and run it on the terminal
///
/// Only a failed dial is returned as an error; everything that happens once
/// the session is running is reported in place and ends the session normally.
pub async fn run(state: SessionState) -> Result<()> {
    let url = state.endpoint().url();
    let transport = Arc::new(WsTransport::connect(&url).await?);
    let input = input::stdin_lines()?;

    tracing::info!(endpoint = %state.endpoint(), "Session started");
    let exit = Session::new(transport, state)
        .run(input, std::io::stdout(), std::io::stdout())
        .await;
    tracing::info!(?exit, "Session ended");

    Ok(())
}
