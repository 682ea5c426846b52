//! Fabric Common - shared wire types for the fabric cluster health API.
//!
//! Pure data layer: the wire-enum codec, the health-state flag mask, the
//! hierarchical filter model callers build queries from, and the typed chunk
//! the cluster answers with. No I/O and no shared mutable state; everything
//! here is a value type that is safe to read from any thread.

pub mod chunk;
pub mod codec;
pub mod filters;
pub mod health;
pub mod operation;

pub use chunk::*;
pub use codec::*;
pub use filters::*;
pub use health::*;
pub use operation::*;
