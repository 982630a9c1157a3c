//! Reader loop: prints every frame received from the transport

use std::io::Write;

use crate::common::Error;
use crate::transport::{Frame, FrameKind, Transport};

/// Receive and print frames until the transport fails or is closed
///
/// The failure is reported and returned; it is the loop's only exit.
pub async fn run<T, W>(transport: &T, out: &mut W) -> Error
where
    T: Transport + ?Sized,
    W: Write,
{
    loop {
        match transport.receive().await {
            Ok(frame) => print_frame(out, &frame),
            Err(e) => {
                eprintln!("Error while reading message: {}", e);
                return e;
            }
        }
    }
}

fn print_frame<W: Write>(out: &mut W, frame: &Frame) {
    let _ = match frame.kind {
        FrameKind::Text => writeln!(
            out,
            "Received {} message: {}",
            frame.kind,
            String::from_utf8_lossy(&frame.payload)
        ),
        FrameKind::Binary => writeln!(
            out,
            "Received {} message ({} bytes)",
            frame.kind,
            frame.payload.len()
        ),
    };
    let _ = out.flush();
}
