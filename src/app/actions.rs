//! Actions representing side effects to be executed by the embedding runtime.
//!
//! This module defines the [`Action`] type, imperative commands produced by the
//! event handler after processing user input. Actions bridge pure state
//! transformations and effectful operations against the external storage
//! client: the engine never performs these calls itself, it only describes
//! them. Failures come back as [`Event::OperationFailed`](crate::app::Event).
//!
//! The event handler returns a `Vec<Action>` after processing each event, so
//! several side effects can be queued atomically and executed in sequence.

/// Commands representing side effects to be executed by the embedding runtime.
///
/// Actions are produced by the event handler and executed by the runtime
/// against its storage client. They are the only boundary through which the
/// picker causes anything to happen outside its own state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Creates a new space with the given display name.
    ///
    /// Emitted by a create submission that passed name validation. The runtime
    /// calls the client's create operation and reports the outcome back via
    /// `SpacesLoaded` or `OperationFailed`.
    CreateSpace {
        /// Validated display name for the new space.
        name: String,
    },

    /// Makes the given space the current one.
    ///
    /// Emitted when the user activates the space under the cursor. The runtime
    /// calls the client's set-current operation.
    SetCurrentSpace {
        /// Identifier of the space to activate.
        id: String,
    },

    /// Requests fresh usage figures for a space.
    ///
    /// Emitted on scroll-driven refreshes; the runtime is expected to throttle
    /// these with [`Throttle`](crate::timing::Throttle) before calling the
    /// client.
    RefreshUsage {
        /// Identifier of the space whose usage should be refreshed.
        id: String,
    },
}
