//! Errors raised by machine operations.

use thiserror::Error;

/// Errors that can occur when constructing or driving a machine.
///
/// Every error leaves the machine exactly as it was before the call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FsmError {
    #[error("No configuration supplied. Pass a configuration to construct the machine")]
    ConfigurationMissing,

    #[error("No such state '{state}'")]
    UnknownState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    UnknownEvent { event: String, state: String },
}
