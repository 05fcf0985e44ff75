//! Builder API for ergonomic configuration and machine construction.
//!
//! This module provides fluent builders and macros for declaring
//! configurations in code, as an alternative to filling in
//! [`Configuration`](crate::config::Configuration) by hand or loading it
//! with serde.

pub mod configuration;
pub mod error;
pub mod machine;
pub mod macros;

pub use configuration::ConfigurationBuilder;
pub use error::BuildError;
pub use machine::FsmBuilder;
