//! Line input for the writer loop
//!
//! Terminal reads block, so they run on a dedicated OS thread that forwards
//! each line over a channel. The channel closes at end of input.
//!
//! Lines are raw bytes: input that is not UTF-8 is forwarded as typed.

use std::io::BufRead;

use tokio::sync::mpsc;

use crate::common::Result;

/// Lines buffered between the input thread and the writer loop
const INPUT_BUFFER: usize = 16;

/// Spawn a thread that reads lines from `reader` into a channel
///
/// The thread is detached: if the session ends while it is blocked on a read,
/// it is torn down with the process.
pub fn spawn_line_reader<R>(mut reader: R) -> Result<mpsc::Receiver<Vec<u8>>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(INPUT_BUFFER);

    std::thread::Builder::new()
        .name("input".to_string())
        .spawn(move || {
            loop {
                let mut line = Vec::new();
                match reader.read_until(b'\n', &mut line) {
                    Ok(0) => break,
                    Ok(_) => {
                        strip_line_ending(&mut line);
                        if tx.blocking_send(line).is_err() {
                            // Writer loop is gone
                            break;
                        }
                    }
                    Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                    Err(e) => {
                        tracing::warn!("Failed to read input: {}", e);
                        break;
                    }
                }
            }
            tracing::debug!("Input reader finished");
        })?;

    Ok(rx)
}

/// Remove a trailing `\n` or `\r\n`
fn strip_line_ending(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
}

/// Spawn the line reader over the process's standard input
pub fn stdin_lines() -> Result<mpsc::Receiver<Vec<u8>>> {
    spawn_line_reader(std::io::BufReader::new(std::io::stdin()))
}
