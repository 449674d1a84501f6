use thiserror::Error;

/// Error returned by every resolver. `Display` yields only the message so the
/// GraphQL error carries the literal text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    CredentialMismatch(String),
    #[error("{0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Validation,
    CredentialMismatch,
    Unexpected,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::NotFound(_) => ErrorKind::NotFound,
            AppError::Conflict(_) => ErrorKind::Conflict,
            AppError::Validation(_) => ErrorKind::Validation,
            AppError::CredentialMismatch(_) => ErrorKind::CredentialMismatch,
            AppError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Validation(msg)
            | AppError::CredentialMismatch(msg)
            | AppError::Unexpected(msg) => msg,
        }
    }
}

/// Failures reported by the document store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// A unique index rejected the write.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),
    #[error("{0}")]
    Backend(String),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey(msg) => AppError::Conflict(msg),
            StoreError::Backend(msg) => AppError::Unexpected(msg),
        }
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind as MongoKind, WriteFailure};

        match *err.kind {
            MongoKind::Write(WriteFailure::WriteError(ref write_err)) if write_err.code == 11000 => {
                StoreError::DuplicateKey(write_err.message.clone())
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

/// Startup configuration problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} is invalid: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::NotFound("Employee not found".to_string());
        assert_eq!(err.to_string(), "Employee not found");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Employee not found");
    }

    #[test]
    fn duplicate_key_becomes_conflict() {
        let err: AppError = StoreError::DuplicateKey("email".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err: AppError = StoreError::Backend("connection reset".to_string()).into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn config_error_names_the_variable() {
        assert_eq!(ConfigError::Missing("JWT_SECRET").to_string(), "JWT_SECRET must be set");
    }
}
