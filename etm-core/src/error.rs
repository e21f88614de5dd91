//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Failure while reconstructing a value from its parcel form
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "details")]
pub enum DecodeError {
    /// The parcel names an identity kind this build does not know
    #[error("Unknown identity kind: {0}")]
    UnknownKind(String),

    /// The parcel was written by an unsupported format version
    #[error("Unsupported parcel version: {0}")]
    UnsupportedVersion(u32),

    /// The envelope or its fields could not be parsed
    #[error("Malformed parcel: {0}")]
    Malformed(String),
}

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Parcel decode error
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Storage layer error (preference store, account manager)
    #[error("Storage error: {0}")]
    Storage(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Whether it is expected behavior (bad input from the host), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Decode(_) | Self::Validation(_) => true,
            Self::Storage(_) | Self::Serialization(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
