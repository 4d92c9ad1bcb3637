//! Command-line front end of the lectio engine.

pub mod cli;
pub mod error;
pub mod request;
pub mod telemetry;
