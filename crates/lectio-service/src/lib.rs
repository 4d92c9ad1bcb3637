//! Async layer of the engine.
//!
//! - [`bounded`] - Ordered parallel map with a bounded number of in-flight calls
//! - [`source`] - Liturgy and scripture-text collaborators and their HTTP clients
//! - [`day`] - Assembly and enrichment of a [`day::LiturgicalDay`]

pub mod bounded;
pub mod day;
pub mod error;
pub mod source;
