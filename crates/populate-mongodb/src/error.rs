//! Error types for the MongoDB loader.

use mongodb::error::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Server error codes reported for bad credentials or missing privileges
/// (`Unauthorized`, `AuthenticationFailed`).
const AUTH_ERROR_CODES: [i32; 2] = [13, 18];

/// Errors that can occur while loading the dataset.
///
/// Each variant maps to one operator-facing category and one exit code.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Bad credentials or missing permissions.
    #[error("Authentication error: check user, password or permissions ({0})")]
    Authentication(String),

    /// Missing, malformed or incomplete connection string.
    #[error("Connection string is missing, malformed or incomplete: {0}")]
    Configuration(String),

    /// The server could not be reached.
    #[error("Could not connect to the server: check the network connection or the URI ({0})")]
    Connectivity(String),

    /// A source file could not be read or decoded.
    #[error("Failed to read {path:?}: {message}")]
    File { path: PathBuf, message: String },

    /// Anything else reported by the store.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Operator-facing error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    Configuration,
    Connectivity,
    File,
    Unexpected,
}

impl ErrorCategory {
    /// Process exit code for this category.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Unexpected => 1,
            Self::Authentication => 2,
            Self::Configuration => 3,
            Self::Connectivity => 4,
            Self::File => 5,
        }
    }
}

impl LoadError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Authentication(_) => ErrorCategory::Authentication,
            Self::Configuration(_) => ErrorCategory::Configuration,
            Self::Connectivity(_) => ErrorCategory::Connectivity,
            Self::File { .. } => ErrorCategory::File,
            Self::Unexpected(_) => ErrorCategory::Unexpected,
        }
    }

    pub fn exit_code(&self) -> i32 {
        self.category().exit_code()
    }

    pub(crate) fn file(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::File {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

impl From<mongodb::error::Error> for LoadError {
    fn from(err: mongodb::error::Error) -> Self {
        let message = err.to_string();
        match err.kind.as_ref() {
            ErrorKind::Authentication { .. } => Self::Authentication(message),
            ErrorKind::Command(command) if AUTH_ERROR_CODES.contains(&command.code) => {
                Self::Authentication(message)
            }
            ErrorKind::InvalidArgument { .. } => Self::Configuration(message),
            ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => Self::Connectivity(message),
            _ => Self::Unexpected(message),
        }
    }
}

impl From<bson::ser::Error> for LoadError {
    fn from(err: bson::ser::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            LoadError::Authentication("denied".into()),
            LoadError::Configuration("bad uri".into()),
            LoadError::Connectivity("timeout".into()),
            LoadError::file("files/ordenes.json", "truncated"),
            LoadError::Unexpected("boom".into()),
        ];
        let mut codes: Vec<i32> = errors.iter().map(LoadError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();

        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&0));
    }

    #[tokio::test]
    async fn test_malformed_uri_is_configuration_error() {
        let err = mongodb::options::ClientOptions::parse("not-a-mongodb-uri")
            .await
            .unwrap_err();
        let err = LoadError::from(err);

        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_category_messages() {
        let err = LoadError::Authentication("bad auth".into());
        assert!(err.to_string().contains("check user, password or permissions"));

        let err = LoadError::file("files/usuarios.json", "expected value at line 1");
        assert!(err.to_string().contains("usuarios.json"));
    }
}
