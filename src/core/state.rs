//! Identifier traits for states and events.
//!
//! A configuration is keyed by opaque identifiers. Any type implementing
//! [`State`] or [`Event`] can serve as a key; `String` works out of the box,
//! and the [`state_enum!`](crate::state_enum) and
//! [`event_enum!`](crate::event_enum) macros derive typed identifiers.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Identifier of a state the machine can occupy.
///
/// # Required Traits
///
/// - `Clone`: states are copied onto the history stacks
/// - `PartialEq`: states are looked up in the configuration by equality
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: configurations can be loaded with serde
///
/// # Example
///
/// ```rust
/// use rewind::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(Door::Locked.name(), "Locked");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// Identifier of an event that may trigger a transition.
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the event's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self
    }
}

impl Event for String {
    fn name(&self) -> &str {
        self
    }
}
