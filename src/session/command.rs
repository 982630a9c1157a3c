//! Interactive command parsing
//!
//! Commands are matched exactly and case-sensitively against the whole input;
//! anything that is not a command is sent as a message.

use std::path::PathBuf;

use crate::common::{Error, Result};
use crate::transport::FrameKind;

/// Prefix that substitutes a file's contents for the input line
pub const FROM_FILE: &str = "from file";

/// Text printed by the `help` command
pub const HELP_TEXT: &str = "
\texit: closes the application
\thelp: prints information about different commands
\thost: prints information about the host the user is connected to
\tmode: prints the currently used message type
\tmode text: changes the message type to text message
\tmode binary: changes the message type to binary message
\tfrom file \"filepath\": reads the content of a file and sends it";

/// One interpreted line of input
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Help,
    Host,
    SetMode(FrameKind),
    ShowMode,
    /// Not a command: send the bytes as a message
    Send(&'a [u8]),
}

impl<'a> Command<'a> {
    /// Interpret the effective input for one iteration
    ///
    /// Takes bytes because file substitution may produce non-UTF-8 content.
    pub fn parse(input: &'a [u8]) -> Self {
        match input {
            b"exit" => Self::Exit,
            b"help" => Self::Help,
            b"host" => Self::Host,
            b"mode text" => Self::SetMode(FrameKind::Text),
            b"mode binary" => Self::SetMode(FrameKind::Binary),
            b"mode" => Self::ShowMode,
            other => Self::Send(other),
        }
    }
}

/// Recognise a `from file <path>` line
///
/// Returns `None` when the line is not a file directive: the prefix must be at
/// the very start of the line and be followed by whitespace or end of line.
/// The path may be wrapped in double quotes.
pub fn file_directive(line: &[u8]) -> Option<Result<PathBuf>> {
    let rest = line.strip_prefix(FROM_FILE.as_bytes())?;
    if rest.first().is_some_and(|b| !b.is_ascii_whitespace()) {
        return None;
    }

    let rest = String::from_utf8_lossy(rest);
    let path = rest.trim();
    let path = path
        .strip_prefix('"')
        .and_then(|p| p.strip_suffix('"'))
        .unwrap_or(path);

    if path.is_empty() {
        return Some(Err(Error::MissingFilePath));
    }
    Some(Ok(PathBuf::from(path)))
}
