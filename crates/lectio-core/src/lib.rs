//! Shared configuration, error and vocabulary types for the lectio workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
