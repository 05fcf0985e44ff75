//! Build errors for configuration builders.

use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,
}
