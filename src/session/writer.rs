//! Writer loop: reads user input, runs local commands and sends everything else

use std::io::Write;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{Error, Result};
use crate::transport::{Frame, Transport};

use super::command::{self, Command, HELP_TEXT};
use super::state::SessionState;

/// Why the writer loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriterExit {
    /// The user typed `exit`
    Requested,
    /// Input reached end of file
    InputClosed,
    /// The transport rejected a frame
    SendFailed,
}

/// Writer loop, sole owner of the session state
pub struct Writer<T: ?Sized, W> {
    transport: Arc<T>,
    state: SessionState,
    input: mpsc::Receiver<Vec<u8>>,
    out: W,
}

impl<T, W> Writer<T, W>
where
    T: Transport + ?Sized,
    W: Write,
{
    pub fn new(
        transport: Arc<T>,
        state: SessionState,
        input: mpsc::Receiver<Vec<u8>>,
        out: W,
    ) -> Self {
        Self {
            transport,
            state,
            input,
            out,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until `exit`, end of input, or a send failure
    pub async fn run(&mut self) -> WriterExit {
        self.print_prompt();

        while let Some(line) = self.input.recv().await {
            let input = match self.effective_input(line).await {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("Error while reading from file: {}", e);
                    self.print_prompt();
                    continue;
                }
            };

            match Command::parse(&input) {
                Command::Exit => {
                    tracing::debug!("Exit requested");
                    return WriterExit::Requested;
                }
                Command::Help => self.print(format_args!("{}\n\n", HELP_TEXT)),
                Command::Host => {
                    let host = self.state.host().to_owned();
                    let path = self.state.path().to_owned();
                    self.print(format_args!("host: {}\tpath: {}\n", host, path));
                }
                Command::SetMode(kind) => {
                    self.state.set_outgoing_kind(kind);
                    self.print(format_args!("Changed message type to {}\n", kind));
                }
                Command::ShowMode => {
                    let label = self.state.outgoing_kind().label();
                    self.print(format_args!("Message type is: {}\n", label));
                }
                Command::Send(payload) => {
                    let frame = Frame::new(self.state.outgoing_kind(), payload);
                    if let Err(e) = self.transport.send(frame).await {
                        eprintln!("Error while sending message: {}", e);
                        return WriterExit::SendFailed;
                    }
                }
            }

            self.print_prompt();
        }

        tracing::debug!("Input exhausted");
        WriterExit::InputClosed
    }

    /// Apply `from file` substitution to a raw input line
    async fn effective_input(&mut self, line: Vec<u8>) -> Result<Vec<u8>> {
        let Some(path) = command::file_directive(&line) else {
            return Ok(line);
        };

        let path = path?;
        let content = tokio::fs::read(&path)
            .await
            .map_err(|e| Error::file_read(&path, &e))?;
        tracing::debug!(path = %path.display(), len = content.len(), "Substituted file contents");
        self.print(format_args!("sending from file "));
        Ok(content)
    }

    fn print_prompt(&mut self) {
        let prompt = self.state.prompt();
        self.print(format_args!("{}", prompt));
    }

    fn print(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = self.out.write_fmt(args);
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Endpoint;
    use crate::session::state::Verbosity;
    use crate::transport::mock::MockTransport;
    use crate::transport::FrameKind;

    fn state() -> SessionState {
        SessionState::new(Endpoint::parse("example.com:80/chat").unwrap())
    }

    /// Feed `lines` to a writer over a mock transport, then end the input
    async fn run_lines(
        transport: Arc<MockTransport>,
        state: SessionState,
        lines: &[&str],
    ) -> (WriterExit, Writer<MockTransport, Vec<u8>>) {
        let lines: Vec<&[u8]> = lines.iter().map(|line| line.as_bytes()).collect();
        run_raw_lines(transport, state, &lines).await
    }

    async fn run_raw_lines(
        transport: Arc<MockTransport>,
        state: SessionState,
        lines: &[&[u8]],
    ) -> (WriterExit, Writer<MockTransport, Vec<u8>>) {
        let (tx, rx) = mpsc::channel(lines.len().max(1));
        for line in lines {
            tx.send(line.to_vec()).await.unwrap();
        }
        drop(tx);

        let mut writer = Writer::new(transport, state, rx, Vec::new());
        let exit = writer.run().await;
        (exit, writer)
    }

    fn output(writer: &Writer<MockTransport, Vec<u8>>) -> String {
        String::from_utf8_lossy(writer.output()).into_owned()
    }

    #[tokio::test]
    async fn test_default_kind_is_text() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        let (exit, _) = run_lines(Arc::clone(&transport), state(), &["hello"]).await;

        assert_eq!(exit, WriterExit::InputClosed);
        assert_eq!(transport.sent(), vec![Frame::text("hello")]);
    }

    #[tokio::test]
    async fn test_non_utf8_text_line_is_sent_as_typed() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        let (exit, writer) = run_raw_lines(
            Arc::clone(&transport),
            state(),
            &[b"caf\xe9", b"after", b"mode binary", b"\xff\x00"],
        )
        .await;

        assert_eq!(exit, WriterExit::InputClosed);
        assert_eq!(
            transport.sent(),
            vec![
                Frame::new(FrameKind::Text, b"caf\xe9".to_vec()),
                Frame::text("after"),
                Frame::binary(b"\xff\x00".to_vec()),
            ]
        );
        assert_eq!(writer.state().outgoing_kind(), FrameKind::Binary);
    }

    #[tokio::test]
    async fn test_mode_binary_then_message() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        let (_, writer) =
            run_lines(Arc::clone(&transport), state(), &["mode binary", "abc"]).await;

        assert_eq!(transport.sent(), vec![Frame::binary(b"abc".to_vec())]);
        assert_eq!(writer.state().outgoing_kind(), FrameKind::Binary);
        assert!(output(&writer).contains("Changed message type to binary\n"));
    }

    #[tokio::test]
    async fn test_mode_text_restores_text() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        run_lines(
            Arc::clone(&transport),
            state(),
            &["mode binary", "mode text", "x"],
        )
        .await;

        assert_eq!(transport.sent(), vec![Frame::text("x")]);
    }

    #[tokio::test]
    async fn test_exit_is_never_sent() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        let (exit, _) = run_lines(Arc::clone(&transport), state(), &["exit", "after"]).await;

        assert_eq!(exit, WriterExit::Requested);
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_miscased_command_is_sent() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        let (_, writer) = run_lines(Arc::clone(&transport), state(), &["mode Text"]).await;

        assert_eq!(transport.sent(), vec![Frame::text("mode Text")]);
        assert_eq!(writer.state().outgoing_kind(), FrameKind::Text);
    }

    #[tokio::test]
    async fn test_from_file_without_path() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        let (exit, writer) =
            run_lines(Arc::clone(&transport), state(), &["from file", "next"]).await;

        assert_eq!(exit, WriterExit::InputClosed);
        assert_eq!(transport.sent(), vec![Frame::text("next")]);
        // Initial prompt, reprint after the failed line, reprint after "next"
        assert_eq!(output(&writer).matches("(connected):").count(), 3);
    }

    #[tokio::test]
    async fn test_from_file_missing_file() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.txt");
        let line = format!("from file {}", missing.display());

        let (exit, writer) = run_lines(Arc::clone(&transport), state(), &[line.as_str()]).await;

        assert_eq!(exit, WriterExit::InputClosed);
        assert!(transport.sent().is_empty());
        assert_eq!(writer.state().outgoing_kind(), FrameKind::Text);
        assert_eq!(output(&writer), "(connected):(connected):");
    }

    #[tokio::test]
    async fn test_from_file_sends_contents() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("payload.bin");
        let content = vec![0u8, 0xff, b'\n', b'h', b'i'];
        std::fs::write(&file, &content).unwrap();
        let line = format!("from file {}", file.display());

        let (_, writer) =
            run_lines(Arc::clone(&transport), state(), &["mode binary", line.as_str()]).await;

        assert_eq!(transport.sent(), vec![Frame::binary(content)]);
        assert!(output(&writer).contains("sending from file "));
    }

    #[tokio::test]
    async fn test_from_file_quoted_path() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("hello world.txt");
        std::fs::write(&file, "{\"type\":\"ping\"}").unwrap();
        let line = format!("from file \"{}\"", file.display());

        run_lines(Arc::clone(&transport), state(), &[line.as_str()]).await;

        assert_eq!(transport.sent(), vec![Frame::text("{\"type\":\"ping\"}")]);
    }

    #[tokio::test]
    async fn test_host_reports_endpoint() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        let (_, writer) =
            run_lines(Arc::clone(&transport), state(), &["mode binary", "host"]).await;

        let out = output(&writer);
        assert!(out.contains("host: example.com:80\tpath: /chat\n"));
        assert!(out.ends_with("/chat\n(connected):"));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_mode_and_help_are_local() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);

        let (_, writer) = run_lines(Arc::clone(&transport), state(), &["mode", "help"]).await;

        let out = output(&writer);
        assert!(out.contains("Message type is: TextMessage\n"));
        assert!(out.contains("mode binary: changes the message type to binary message"));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_send_failure_stops_loop() {
        let (transport, _script) = MockTransport::new();
        transport.fail_sends();
        let transport = Arc::new(transport);

        let (exit, writer) =
            run_lines(Arc::clone(&transport), state(), &["boom", "mode binary"]).await;

        assert_eq!(exit, WriterExit::SendFailed);
        assert_eq!(writer.state().outgoing_kind(), FrameKind::Text);
        assert_eq!(output(&writer), "(connected):");
    }

    #[tokio::test]
    async fn test_verbose_prompt() {
        let (transport, _script) = MockTransport::new();
        let transport = Arc::new(transport);
        let state = state().with_verbosity(Verbosity::Verbose);

        let (_, writer) = run_lines(Arc::clone(&transport), state, &["mode binary"]).await;

        let out = output(&writer);
        assert!(out.starts_with("(connected - example.com:80/chat - writemode: TextMessage) :"));
        assert!(out.ends_with("(connected - example.com:80/chat - writemode: BinaryMessage) :"));
    }
}
