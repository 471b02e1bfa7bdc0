//! Errors raised by match finders, the record replayer and codecs.
//!
//! Scanning itself cannot fail once a finder is built: configuration is
//! checked up front and the only runtime guard is [`Error::InputTooLarge`].
//! The remaining variants describe bad input handed to the decoding side.

use thiserror::Error;

/// Result alias used throughout the match finder crates.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors from match finding, record replay and codecs.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is outside `[min, max]`.
    #[error("{parameter} = {value} is out of range, expected {min}..={max}")]
    InvalidConfig {
        parameter: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// Accepting the submission would make the history larger than a table
    /// slot can address. Nothing was changed.
    #[error("history of {len} bytes exceeds the {max} byte limit")]
    InputTooLarge { len: usize, max: usize },

    /// Records or a compressed stream that cannot describe valid output.
    #[error("corrupted data: {message}")]
    CorruptedData {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Records asked for more literal bytes than were supplied.
    #[error("input ended after {bytes_read} bytes")]
    UnexpectedEof { bytes_read: usize },

    /// I/O failure from a reader or writer, shown as-is.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Failure reported by an underlying codec library.
    #[error("{algorithm}: {message}")]
    Algorithm {
        algorithm: &'static str,
        message: String,
    },
}

impl Error {
    /// Create an [`Error::InvalidConfig`] for `parameter` outside `[min, max]`.
    pub fn invalid_config(parameter: &'static str, value: usize, min: usize, max: usize) -> Self {
        Self::InvalidConfig {
            parameter,
            value,
            min,
            max,
        }
    }

    /// Corruption detected while producing output byte `offset`.
    pub fn corrupted_at(message: &str, offset: usize) -> Self {
        Self::CorruptedData {
            message: format!("{message} (output offset {offset})"),
            source: None,
        }
    }

    /// Create an [`Error::UnexpectedEof`] after `bytes_read` input bytes.
    pub fn unexpected_eof(bytes_read: usize) -> Self {
        Self::UnexpectedEof { bytes_read }
    }

    /// Create an [`Error::Algorithm`] carrying a codec library's message.
    pub fn algorithm(algorithm: &'static str, message: impl Into<String>) -> Self {
        Self::Algorithm {
            algorithm,
            message: message.into(),
        }
    }

    /// True when the same data may succeed with a different call pattern,
    /// e.g. smaller submissions or more input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InputTooLarge { .. } | Self::UnexpectedEof { .. })
    }

    /// Stable short name, suitable for log fields.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "invalid_config",
            Self::InputTooLarge { .. } => "input_too_large",
            Self::CorruptedData { .. } => "corrupted_data",
            Self::UnexpectedEof { .. } => "unexpected_eof",
            Self::Io(_) => "io",
            Self::Algorithm { .. } => "algorithm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = Error::invalid_config("hash_len", 9, 1, 8);
        assert_eq!(err.to_string(), "hash_len = 9 is out of range, expected 1..=8");
        assert_eq!(err.category(), "invalid_config");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_corrupted_at_names_offset() {
        let err = Error::corrupted_at("distance beyond output", 42);
        assert_eq!(
            err.to_string(),
            "corrupted data: distance beyond output (output offset 42)"
        );
    }

    #[test]
    fn test_recoverable_categories() {
        assert!(Error::unexpected_eof(10).is_recoverable());
        assert!(Error::InputTooLarge { len: 10, max: 5 }.is_recoverable());
        assert!(!Error::algorithm("brotli", "bad stream").is_recoverable());
    }

    #[test]
    fn test_io_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::WriteZero, "sink full");
        let err = Error::from(io);
        assert_eq!(err.to_string(), "sink full");
        assert_eq!(err.category(), "io");
    }
}
