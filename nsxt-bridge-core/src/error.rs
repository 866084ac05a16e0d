//! Errors raised while building mapping tables and provider descriptors
//!
//! Every variant here points at a defect in static configuration (a typo in a
//! table literal, a bad version string). Callers building the descriptor at
//! startup are expected to abort on them.

use thiserror::Error;

/// Errors that can occur while constructing tokens and mapping tables
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// Identifier has no `_`, or the first `_` leaves an empty prefix or suffix
    #[error("Invalid snake case name {identifier}")]
    MalformedIdentifier { identifier: String },

    /// The same identifier was registered twice in one table
    #[error("Duplicate identifier {identifier} in mapping table")]
    DuplicateIdentifier { identifier: String },

    /// Version string is not a semantic version
    #[error("Invalid provider version '{version}'")]
    InvalidVersion { version: String },
}

impl MappingError {
    /// Create a malformed identifier error
    pub fn malformed(identifier: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create a duplicate identifier error
    pub fn duplicate(identifier: impl Into<String>) -> Self {
        Self::DuplicateIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create an invalid version error
    pub fn invalid_version(version: impl Into<String>) -> Self {
        Self::InvalidVersion {
            version: version.into(),
        }
    }
}

pub type MappingResult<T> = Result<T, MappingError>;
