//! Shared identifier types.

pub mod identifiers;

pub use identifiers::GraphId;
