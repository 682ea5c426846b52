//! Health state values and the flag bitmask used to filter on them.

use crate::codec::{self, WireEnum};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{BitOr, BitOrAssign};

/// Aggregated severity of a fabric entity.
///
/// `Invalid` is an in-memory sentinel only: it has no wire token, cannot be
/// serialized, and is what unknown tokens read from the wire degrade to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthState {
    #[default]
    Invalid,
    /// The entity is healthy.
    Ok,
    /// The entity is degraded but functional.
    Warning,
    /// The entity is unhealthy.
    Error,
    /// The cluster could not determine the entity's health.
    Unknown,
}

impl WireEnum for HealthState {
    const NAME: &'static str = "HealthState";
    const TOKENS: &'static [(Self, &'static str)] = &[
        (Self::Ok, "Ok"),
        (Self::Warning, "Warning"),
        (Self::Error, "Error"),
        (Self::Unknown, "Unknown"),
    ];
}

impl Serialize for HealthState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        codec::serialize_wire_enum(self, serializer)
    }
}

impl<'de> Deserialize<'de> for HealthState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        codec::deserialize_wire_enum(deserializer)
    }
}

impl HealthState {
    /// Bit this state occupies in a [`HealthStateFilter`] mask.
    ///
    /// `Invalid` and `Unknown` have no dedicated bit; only the `ALL`
    /// sentinel selects them.
    fn filter_bit(self) -> u32 {
        match self {
            HealthState::Ok => HealthStateFilter::OK.0,
            HealthState::Warning => HealthStateFilter::WARNING.0,
            HealthState::Error => HealthStateFilter::ERROR.0,
            HealthState::Invalid | HealthState::Unknown => 0,
        }
    }
}

/// Flag bitmask selecting health states in a filter.
///
/// The wire value is a plain integer: any bitwise OR of `NONE`, `OK`,
/// `WARNING` and `ERROR`, or one of the two sentinels. `ALL` (65535) is its
/// own member of the wire contract, not the union of the named bits, and
/// `DEFAULT` (0) means "unset" with semantics decided by the surrounding
/// filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HealthStateFilter(u32);

impl HealthStateFilter {
    /// Unset. Whether this matches anything depends on the other fields of
    /// the filter carrying it.
    pub const DEFAULT: Self = Self(0);
    /// Matches no health state.
    pub const NONE: Self = Self(1);
    /// Matches entities whose health state is `Ok`.
    pub const OK: Self = Self(2);
    /// Matches entities whose health state is `Warning`.
    pub const WARNING: Self = Self(4);
    /// Matches entities whose health state is `Error`.
    pub const ERROR: Self = Self(8);
    /// Matches every health state. Sentinel value, kept distinct from
    /// `NONE | OK | WARNING | ERROR`.
    pub const ALL: Self = Self(65535);

    /// Raw wire integer.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Mask built from a raw wire integer.
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// True when the mask is the unset default.
    pub fn is_default(&self) -> bool {
        self.0 == 0
    }

    /// Membership test for a single state.
    ///
    /// `ALL` matches every state; otherwise the state's bit must intersect
    /// the mask.
    pub fn matches(self, state: HealthState) -> bool {
        if self == Self::ALL {
            return true;
        }
        self.0 & state.filter_bit() != 0
    }
}

impl BitOr for HealthStateFilter {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for HealthStateFilter {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}
