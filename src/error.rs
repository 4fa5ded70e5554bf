use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufrError {
    /// One message in the stream could not be decoded. Recovered by
    /// skipping the message; the stream continues.
    MessageDecode(String),
    /// The whole input yielded no decodable messages.
    NoMessagesDecoded(String),
    /// The output stream could not be written.
    WriteError(String),
    OperationError(String),
}

impl Error for BufrError {}

impl Display for BufrError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::MessageDecode(s) => write!(f, "{s}"),
            Self::NoMessagesDecoded(path) => write!(f, "Failed to read bufr from: {path}"),
            Self::WriteError(s) => write!(f, "Write error: {s}"),
            Self::OperationError(s) => write!(f, "{s}"),
        }
    }
}

impl From<io::Error> for BufrError {
    fn from(e: io::Error) -> Self {
        Self::WriteError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_messages_report_names_the_input_path() {
        let err = BufrError::NoMessagesDecoded("obs/synop.bufr".to_owned());
        assert_eq!(format!("{err}"), "Failed to read bufr from: obs/synop.bufr");
    }
}
