//! Fabric Client - query client for the fabric cluster health API.
//!
//! Assembles health chunk queries from the `fabric_common` filter model and
//! runs them over a caller-supplied transport. This crate owns the request
//! shape, the body codec and the error taxonomy; connections, retries and
//! authentication live in the transport implementation.

pub mod client;
pub mod config;
pub mod error;

pub use client::*;
pub use config::*;
pub use error::*;
