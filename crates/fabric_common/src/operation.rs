//! Lifecycle operation names reported for service replicas.

use crate::codec::{self, WireEnum};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Name of the lifecycle operation a replica is currently executing.
///
/// `Invalid` is the in-memory default with no wire token; `Unknown` and
/// `None` are real members of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceOperationName {
    #[default]
    Invalid,
    /// The operation is not known to the cluster.
    Unknown,
    /// No operation is running.
    None,
    /// The replica is opening.
    Open,
    /// The replica is changing role.
    ChangeRole,
    /// The replica is closing.
    Close,
    /// The replica is being aborted.
    Abort,
}

impl WireEnum for ServiceOperationName {
    const NAME: &'static str = "ServiceOperationName";
    const TOKENS: &'static [(Self, &'static str)] = &[
        (Self::Unknown, "Unknown"),
        (Self::None, "None"),
        (Self::Open, "Open"),
        (Self::ChangeRole, "ChangeRole"),
        (Self::Close, "Close"),
        (Self::Abort, "Abort"),
    ];
}

impl Serialize for ServiceOperationName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::serialize_wire_enum(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ServiceOperationName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize_wire_enum(deserializer)
    }
}
