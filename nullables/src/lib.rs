//! Nullable infrastructure for deterministic testing.
//!
//! The ledger core consumes storage, identity, and event delivery as
//! abstract capabilities. This crate provides an in-memory implementation
//! of every storage trait plus a recording event sink, so tests run with no
//! host environment and fully deterministic behavior.

pub mod store;

pub use store::MemoryStore;
