//! Identity parcel codec
//!
//! A parcel is a small JSON envelope carrying the format version, the identity
//! kind tag and the variant's fields:
//!
//! ```json
//! {"version":1,"kind":"anonymous","fields":{"accountName":"guest"}}
//! ```
//!
//! Version history:
//! - Version 1: `anonymous` kind with a single `accountName` field

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult, DecodeError};
use crate::types::{AnonymousUser, User, UserKind};

/// Current parcel format version
pub const CURRENT_PARCEL_VERSION: u32 = 1;

/// Whether parcels written with `version` can be decoded by this build
pub const fn is_supported_version(version: u32) -> bool {
    matches!(version, 1)
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    kind: String,
    fields: serde_json::Value,
}

/// Encode a user into its parcel form.
pub fn encode(user: &User) -> CoreResult<String> {
    let fields = match user {
        User::Anonymous(anonymous) => serde_json::to_value(anonymous),
    }
    .map_err(|e| CoreError::Serialization(e.to_string()))?;

    let envelope = Envelope {
        version: CURRENT_PARCEL_VERSION,
        kind: user.kind().tag().to_string(),
        fields,
    };
    serde_json::to_string(&envelope).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Decode a parcel back into a fresh `User`.
///
/// # Errors
/// - `DecodeError::Malformed` if the envelope or its fields cannot be parsed
/// - `DecodeError::UnsupportedVersion` for parcels from an unknown format version
/// - `DecodeError::UnknownKind` if the kind tag matches no variant
pub fn decode(parcel: &str) -> CoreResult<User> {
    let envelope: Envelope =
        serde_json::from_str(parcel).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    if !is_supported_version(envelope.version) {
        return Err(DecodeError::UnsupportedVersion(envelope.version).into());
    }

    let kind = UserKind::from_tag(&envelope.kind).ok_or_else(|| {
        log::warn!("Refusing to decode parcel of unknown kind '{}'", envelope.kind);
        DecodeError::UnknownKind(envelope.kind.clone())
    })?;

    let user = match kind {
        UserKind::Anonymous => {
            let anonymous: AnonymousUser = serde_json::from_value(envelope.fields)
                .map_err(|e| DecodeError::Malformed(e.to_string()))?;
            User::Anonymous(anonymous)
        }
    };
    Ok(user)
}
