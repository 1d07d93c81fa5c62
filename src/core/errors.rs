//! Error types for matrix generation.

use thiserror::Error;

/// Failure while gathering version data or building the matrix.
#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("{what} not found for `{package}`")]
    NotFound { package: String, what: String },

    #[error("unsupported version specifier `{specifier}` for `{package}`: {reason}")]
    NotSupported {
        package: String,
        specifier: String,
        reason: String,
    },

    #[error("failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("invalid version `{input}`: {message}")]
    InvalidVersion { input: String, message: String },

    #[error("invalid version specifier `{input}`: {message}")]
    InvalidSpecifier { input: String, message: String },

    #[error("invalid requirement `{input}`: {message}")]
    InvalidRequirement { input: String, message: String },
}

impl MatrixError {
    /// Shorthand for a missing piece of package metadata.
    pub fn not_found(package: impl Into<String>, what: impl Into<String>) -> Self {
        MatrixError::NotFound {
            package: package.into(),
            what: what.into(),
        }
    }

    /// Whether the error came from the network boundary.
    pub fn is_fetch(&self) -> bool {
        matches!(self, MatrixError::Fetch { .. })
    }
}
