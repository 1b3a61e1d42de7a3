//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! runtime notifications, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for a picker session.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the presentation layer or the embedding runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`PickerState`] methods
//! 4. Actions are collected and returned for execution against the client
//!
//! # Event Types
//!
//! Events fall into several categories:
//! - **Navigation**: `CursorDown`, `CursorUp`
//! - **Filtering**: `QueryChanged`, `AccessFilterChanged`, `SortKeyChanged`,
//!   `SortOrderToggled`
//! - **Selection**: `ToggleSelect`, `ToggleCursor`, `SelectAllVisible`,
//!   `ClearSelection`
//! - **Operations**: `Activate`, `CreateRequested`, `UsageRefreshRequested`
//! - **Runtime**: `SpacesLoaded`, `CurrentSpaceChanged`, `OperationFailed`,
//!   `ErrorDismissed`
//!
//! Rapid input streams (keystrokes, scroll events) are expected to be
//! debounced or throttled by the caller with the [`timing`](crate::timing)
//! primitives before they become events.

use crate::app::{Action, PickerState};
use crate::domain::error::Result;
use crate::domain::Space;
use crate::engine::{AccessFilter, SortKey, SortOrder};
use crate::validation::validate_name;

/// Events triggered by user input or runtime notifications.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one position (wraps to top).
    CursorDown,
    /// Moves the cursor up one position (wraps to bottom).
    CursorUp,

    /// Replaces the search query.
    ///
    /// The presentation layer debounces raw keystrokes; by the time this
    /// event arrives the query is settled.
    QueryChanged(String),
    /// Switches the access-type filter.
    AccessFilterChanged(AccessFilter),
    /// Switches the sort key.
    SortKeyChanged(SortKey),
    /// Flips the sort direction.
    SortOrderToggled,

    /// Toggles selection of the given space id.
    ToggleSelect(String),
    /// Toggles selection of the space under the cursor.
    ToggleCursor,
    /// Selects every visible space (multi-select only).
    SelectAllVisible,
    /// Clears the selection.
    ClearSelection,

    /// Activates the space under the cursor.
    Activate,
    /// Submits the create-space form with the given name.
    CreateRequested {
        /// Proposed display name, validated before any action is emitted.
        name: String,
    },
    /// Requests a usage refresh for a space (throttled by the caller).
    UsageRefreshRequested {
        /// Identifier of the space to refresh.
        id: String,
    },

    /// Replaces the master space list with a fresh snapshot from the client.
    SpacesLoaded {
        /// Current spaces, externally owned.
        spaces: Vec<Space>,
    },
    /// Reports that the active space changed.
    CurrentSpaceChanged {
        /// Identifier of the new active space, `None` when cleared.
        id: Option<String>,
    },
    /// Reports a failed client operation.
    ///
    /// Recorded in [`PickerState::last_error`] for display; the engine keeps
    /// working.
    OperationFailed {
        /// Error message describing the failure.
        message: String,
    },
    /// Dismisses the recorded operational error.
    ErrorDismissed,
}

/// Processes an event, mutates picker state, and returns actions to execute.
///
/// Pattern-matches on the event type, calls state mutation methods, and
/// collects actions for the embedding runtime to execute in sequence.
///
/// # Returns
///
/// A `(render, actions)` pair: `render` is true when the change is visible
/// and the UI should recompute its view model; `actions` may be empty when
/// the event has no side effects.
///
/// # Errors
///
/// Returns errors from state mutation methods; the current event set never
/// fails, but the signature leaves room for fallible transitions.
///
/// # Examples
///
/// ```
/// use spacepicker::app::{handle_event, Event, PickerState};
/// use spacepicker::domain::Space;
/// use spacepicker::engine::SelectionMode;
///
/// let mut state = PickerState::new(SelectionMode::Multi);
/// let spaces = vec![Space::new("1").with_name("Apple")];
/// let (render, actions) = handle_event(&mut state, &Event::SpacesLoaded { spaces })?;
/// assert!(render);
/// assert!(actions.is_empty());
/// # Ok::<(), spacepicker::domain::PickerError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut PickerState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::QueryChanged(query) => {
            if &state.options.query == query {
                return Ok((false, vec![]));
            }
            tracing::trace!(query = %query, "search query updated");
            state.options.query.clone_from(query);
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::AccessFilterChanged(access) => {
            if state.options.access == *access {
                return Ok((false, vec![]));
            }
            state.options.access = *access;
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::SortKeyChanged(sort_by) => {
            if state.options.sort_by == *sort_by {
                return Ok((false, vec![]));
            }
            state.options.sort_by = *sort_by;
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::SortOrderToggled => {
            state.options.order = match state.options.order {
                SortOrder::Asc => SortOrder::Desc,
                SortOrder::Desc => SortOrder::Asc,
            };
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::ToggleSelect(id) => {
            state.selection.toggle(id);
            Ok((true, vec![]))
        }
        Event::ToggleCursor => {
            let Some(id) = state.cursor_space().map(|space| space.id.clone()) else {
                tracing::debug!("no space under cursor to toggle");
                return Ok((false, vec![]));
            };
            state.selection.toggle(&id);
            Ok((true, vec![]))
        }
        Event::SelectAllVisible => {
            state.select_all_visible();
            Ok((true, vec![]))
        }
        Event::ClearSelection => {
            if state.selection.count() == 0 {
                return Ok((false, vec![]));
            }
            state.selection.clear();
            Ok((true, vec![]))
        }
        Event::Activate => {
            let Some(space) = state.cursor_space() else {
                tracing::debug!("no space under cursor to activate");
                return Ok((false, vec![]));
            };

            if state.current_space.as_deref() == Some(space.id.as_str()) {
                tracing::debug!(space_id = %space.id, "space already current");
                return Ok((false, vec![]));
            }

            tracing::debug!(space_id = %space.id, "activating space");
            Ok((
                false,
                vec![Action::SetCurrentSpace {
                    id: space.id.clone(),
                }],
            ))
        }
        Event::CreateRequested { name } => {
            let errors = validate_name(name);
            if !errors.is_empty() {
                tracing::debug!(name = %name, failures = errors.len(), "create rejected by validation");
                state.validation_errors = errors;
                return Ok((true, vec![]));
            }

            state.validation_errors = errors;
            tracing::debug!(name = %name, "create submitted");
            Ok((
                true,
                vec![Action::CreateSpace {
                    name: name.trim().to_string(),
                }],
            ))
        }
        Event::UsageRefreshRequested { id } => {
            Ok((false, vec![Action::RefreshUsage { id: id.clone() }]))
        }
        Event::SpacesLoaded { spaces } => {
            if &state.spaces == spaces {
                tracing::debug!("spaces unchanged, skipping render");
                return Ok((false, vec![]));
            }

            let old_filtered = state.filtered.clone();
            state.spaces.clone_from(spaces);
            state.apply_filter();

            if state.filtered == old_filtered {
                tracing::debug!("filtered spaces unchanged after reload, skipping render");
                Ok((false, vec![]))
            } else {
                Ok((true, vec![]))
            }
        }
        Event::CurrentSpaceChanged { id } => {
            if &state.current_space == id {
                return Ok((false, vec![]));
            }
            state.current_space.clone_from(id);
            Ok((true, vec![]))
        }
        Event::OperationFailed { message } => {
            tracing::error!(error = %message, "client operation failed");
            state.last_error = Some(message.clone());
            Ok((true, vec![]))
        }
        Event::ErrorDismissed => {
            if state.last_error.is_none() {
                return Ok((false, vec![]));
            }
            state.last_error = None;
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccessType;
    use crate::engine::SelectionMode;

    fn loaded_state() -> PickerState {
        let mut state = PickerState::new(SelectionMode::Multi);
        let spaces = vec![
            Space::new("1").with_name("Zebra").with_access(AccessType::Public),
            Space::new("2").with_name("Apple").with_access(AccessType::Private),
        ];
        let _ = handle_event(&mut state, &Event::SpacesLoaded { spaces }).unwrap();
        state
    }

    #[test]
    fn spaces_loaded_filters_and_renders() {
        let state = loaded_state();
        assert_eq!(state.filtered.len(), 2);
        assert_eq!(state.filtered[0].id, "2"); // Apple sorts first
    }

    #[test]
    fn reloading_identical_spaces_skips_render() {
        let mut state = loaded_state();
        let spaces = state.spaces.clone();
        let (render, actions) =
            handle_event(&mut state, &Event::SpacesLoaded { spaces }).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn query_change_refilters() {
        let mut state = loaded_state();
        let (render, _) =
            handle_event(&mut state, &Event::QueryChanged("zeb".to_string())).unwrap();
        assert!(render);
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].id, "1");

        // Same query again: nothing to do.
        let (render, _) =
            handle_event(&mut state, &Event::QueryChanged("zeb".to_string())).unwrap();
        assert!(!render);
    }

    #[test]
    fn access_filter_change_refilters() {
        let mut state = loaded_state();
        let (render, _) = handle_event(
            &mut state,
            &Event::AccessFilterChanged(AccessFilter::Private),
        )
        .unwrap();
        assert!(render);
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(state.filtered[0].id, "2");
    }

    #[test]
    fn sort_order_toggle_reverses_the_list() {
        let mut state = loaded_state();
        let (render, _) = handle_event(&mut state, &Event::SortOrderToggled).unwrap();
        assert!(render);
        assert_eq!(state.options.order, SortOrder::Desc);
        assert_eq!(state.filtered[0].id, "1"); // Zebra first
    }

    #[test]
    fn toggle_cursor_selects_the_space_under_the_cursor() {
        let mut state = loaded_state();
        let (render, _) = handle_event(&mut state, &Event::ToggleCursor).unwrap();
        assert!(render);
        assert!(state.selection.is_selected("2"));

        let mut empty = PickerState::new(SelectionMode::Multi);
        let (render, _) = handle_event(&mut empty, &Event::ToggleCursor).unwrap();
        assert!(!render);
    }

    #[test]
    fn activate_emits_set_current_space() {
        let mut state = loaded_state();
        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert_eq!(
            actions,
            vec![Action::SetCurrentSpace {
                id: "2".to_string()
            }]
        );
    }

    #[test]
    fn activate_skips_the_already_current_space() {
        let mut state = loaded_state();
        state.current_space = Some("2".to_string());
        let (render, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn create_with_invalid_name_records_errors_and_stops() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(
            &mut state,
            &Event::CreateRequested {
                name: "admin".to_string(),
            },
        )
        .unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.validation_errors.get("name").is_some());
    }

    #[test]
    fn create_with_valid_name_emits_action_and_clears_errors() {
        let mut state = loaded_state();
        let _ = handle_event(
            &mut state,
            &Event::CreateRequested {
                name: String::new(),
            },
        )
        .unwrap();
        assert!(!state.validation_errors.is_empty());

        let (render, actions) = handle_event(
            &mut state,
            &Event::CreateRequested {
                name: "My Space".to_string(),
            },
        )
        .unwrap();
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::CreateSpace {
                name: "My Space".to_string()
            }]
        );
        assert!(state.validation_errors.is_empty());
    }

    #[test]
    fn operation_failure_is_recorded_and_dismissed() {
        let mut state = loaded_state();
        let (render, _) = handle_event(
            &mut state,
            &Event::OperationFailed {
                message: "space/create failed: quota exceeded".to_string(),
            },
        )
        .unwrap();
        assert!(render);
        assert_eq!(
            state.last_error.as_deref(),
            Some("space/create failed: quota exceeded")
        );

        let (render, _) = handle_event(&mut state, &Event::ErrorDismissed).unwrap();
        assert!(render);
        assert!(state.last_error.is_none());

        let (render, _) = handle_event(&mut state, &Event::ErrorDismissed).unwrap();
        assert!(!render);
    }

    #[test]
    fn usage_refresh_passes_through_as_an_action() {
        let mut state = loaded_state();
        let (render, actions) = handle_event(
            &mut state,
            &Event::UsageRefreshRequested {
                id: "2".to_string(),
            },
        )
        .unwrap();
        assert!(!render);
        assert_eq!(
            actions,
            vec![Action::RefreshUsage {
                id: "2".to_string()
            }]
        );
    }
}
