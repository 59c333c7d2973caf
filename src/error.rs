//! Error types for the Contact Directory service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Errors raised by directory mutations.
///
/// Lookups that find nothing are not errors; they return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A contact with this name already exists
    #[error("Name must be unique")]
    DuplicateName { name: String },
}

impl DirectoryError {
    /// Machine-readable code reported to GraphQL clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName { .. } => "BAD_USER_INPUT",
        }
    }
}

impl ErrorExtensions for DirectoryError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.code());
            match self {
                Self::DuplicateName { name } => e.set("invalidArgs", name.as_str()),
            }
        })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
