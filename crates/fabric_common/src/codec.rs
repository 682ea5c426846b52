//! Generic wire-enum codec.
//!
//! Every enumerated field in the fabric REST schema is a closed set of
//! case-sensitive string tokens. Each enum supplies one token table; the
//! lookup logic lives here once. Serialization is strict (a member outside
//! the table is an error), deserialization is lenient (an unknown token
//! degrades to the enum's default member). The asymmetry is part of the wire
//! contract and must not be changed on one side only.

use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::Debug;
use thiserror::Error;
use tracing::debug;

/// Error raised when a value cannot be put on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The member has no entry in its token table. The default sentinel that
    /// lenient deserialization produces always lands here.
    #[error("invalid value {value} for enum type {enum_name}")]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },
}

/// A closed enumeration mapped 1:1 onto fixed wire tokens.
///
/// `TOKENS` lists every wire-visible member with its canonical token, in
/// declared order. The `Default` member must not appear in the table: it is
/// what [`member_from_token`] falls back to and is not serializable.
pub trait WireEnum: Copy + PartialEq + Debug + Default + 'static {
    /// Enum name used in error messages.
    const NAME: &'static str;
    /// Bidirectional member/token table.
    const TOKENS: &'static [(Self, &'static str)];
}

/// Strict direction: member to canonical token.
///
/// Fails for any member outside the table. Nothing is written on failure;
/// callers emit the token only on `Ok`.
pub fn wire_token<E: WireEnum>(member: E) -> Result<&'static str, CodecError> {
    E::TOKENS
        .iter()
        .find(|(m, _)| *m == member)
        .map(|(_, token)| *token)
        .ok_or_else(|| CodecError::InvalidEnumValue {
            enum_name: E::NAME,
            value: format!("{member:?}"),
        })
}

/// Lenient direction: raw token to member.
///
/// Tokens are compared byte-for-byte in table order. An unknown token is not
/// an error: it degrades to the default member, leaving only a debug event
/// behind. Upstream schema drift shows up here first, so keep the event.
pub fn member_from_token<E: WireEnum>(raw: &str) -> E {
    for (member, token) in E::TOKENS {
        if *token == raw {
            return *member;
        }
    }
    debug!(
        enum_name = E::NAME,
        token = raw,
        "unknown wire token, falling back to default member"
    );
    E::default()
}

/// Serde glue for the strict direction. Wire enums delegate their
/// `Serialize` impl here so every enumerated field shares one code path.
pub fn serialize_wire_enum<E, S>(member: &E, serializer: S) -> Result<S::Ok, S::Error>
where
    E: WireEnum,
    S: Serializer,
{
    let token = wire_token(*member).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(token)
}

/// Serde glue for the lenient direction.
pub fn deserialize_wire_enum<'de, E, D>(deserializer: D) -> Result<E, D::Error>
where
    E: WireEnum,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(member_from_token(&raw))
}
