//! Application layer coordinating state, events, and actions.
//!
//! This module defines the picker's application logic layer, sitting between
//! the embedding presentation layer and the engine/validation modules. It
//! implements the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Client Calls
//!                           ↑                                  ↓
//!                           └──── Runtime Notifications ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Per-session state container and view model computation
//!
//! # Example
//!
//! ```
//! use spacepicker::app::{handle_event, Event, PickerState};
//! use spacepicker::engine::SelectionMode;
//!
//! let mut state = PickerState::new(SelectionMode::Multi);
//! let (render, actions) = handle_event(&mut state, &Event::CursorDown)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), spacepicker::domain::PickerError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::PickerState;
