//! Storage Module
//!
//! Defines the persistence contract for identifier-keyed card records and
//! provides the in-memory implementation.
//!
//! ## Core Concepts
//! - **Contract**: `CardStore` specifies put/get/scan/delete/exists/count
//!   semantics. Reads and writes are strongly consistent per key; no
//!   cross-key transaction is provided or required.
//! - **Implementation**: `MemoryStore` keeps records in a concurrent map,
//!   namespaced by an environment-derived table name.

pub mod client;
pub mod memory;

pub use client::CardStore;
pub use memory::MemoryStore;

#[cfg(test)]
mod tests;
