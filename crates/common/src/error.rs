//! Error types for todo

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The storage file exists but could not be read or written
    #[error("failed to access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage file does not hold a valid task list
    #[error("invalid task file {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid task number {number} (there are {len} tasks)")]
    InvalidIndex { number: usize, len: usize },

    /// A required command option was absent or unusable
    #[error("{message}")]
    MissingOption {
        command: &'static str,
        message: String,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn format(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }

    pub fn missing_option(command: &'static str, message: impl Into<String>) -> Self {
        Self::MissingOption {
            command,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_message() {
        let err = Error::InvalidIndex { number: 3, len: 2 };
        assert_eq!(err.to_string(), "invalid task number 3 (there are 2 tasks)");
    }

    #[test]
    fn test_io_error_names_path_and_keeps_source() {
        let err = Error::io(
            "/tmp/tasks.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "failed to access /tmp/tasks.json");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_missing_option_displays_message_only() {
        let err = Error::missing_option("add", "Task text is required.");
        assert_eq!(err.to_string(), "Task text is required.");
    }
}
