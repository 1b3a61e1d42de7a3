//! Picker session state and view model computation.
//!
//! This module defines [`PickerState`], the state holder for one picker
//! session, along with methods for filtering, cursor movement, and UI view
//! model generation. It is the single source of truth for all transient
//! picker state.
//!
//! # Architecture
//!
//! `PickerState` separates core data (the master space list supplied by the
//! embedding runtime) from derived state (the filtered list, cursor position)
//! to keep state transitions simple. Each UI session owns its own instance;
//! there are no ambient singletons, so two pickers on one screen never share
//! filters or selections. View models are computed on demand from state
//! snapshots.
//!
//! # State Components
//!
//! - **Spaces**: master list from the storage client, externally owned
//! - **Filtered**: subset after applying [`FilterOptions`], kept sorted
//! - **Selection**: chosen space ids, single- or multi-select
//! - **Cursor**: keyboard position within the filtered list
//! - **Error slots**: last operational error and current validation errors

use crate::domain::Space;
use crate::engine::{filter_spaces, match_ranges, FilterOptions, SelectionMode, SelectionState};
use crate::ui::viewmodel::{EmptyState, PickerViewModel, SelectAllState, SpaceItemView};
use crate::validation::ValidationErrors;

/// State holder for one picker session.
///
/// Created with empty defaults at session start, mutated only through the
/// event handler, and discarded when the owning UI session ends. Nothing here
/// persists.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Master list of spaces supplied by the storage client.
    ///
    /// Replaced wholesale by `SpacesLoaded` events; never mutated in place.
    pub spaces: Vec<Space>,

    /// Spaces matching the current filter options, in sorted order.
    ///
    /// Recomputed by [`apply_filter`](Self::apply_filter) after state changes.
    pub filtered: Vec<Space>,

    /// Current filter, sort, and query options.
    pub options: FilterOptions,

    /// Selected space ids.
    pub selection: SelectionState,

    /// Zero-based cursor index within `filtered`.
    ///
    /// Clamped by [`apply_filter`](Self::apply_filter); wraps during
    /// navigation.
    pub cursor: usize,

    /// Identifier of the currently active space, if any.
    pub current_space: Option<String>,

    /// Last operational error reported by the runtime, for display.
    pub last_error: Option<String>,

    /// Validation errors from the most recent form submission.
    pub validation_errors: ValidationErrors,
}

impl PickerState {
    /// Creates an empty picker session in the given selection mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::app::PickerState;
    /// use spacepicker::engine::SelectionMode;
    ///
    /// let state = PickerState::new(SelectionMode::Multi);
    /// assert!(state.filtered.is_empty());
    /// assert_eq!(state.cursor, 0);
    /// ```
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            spaces: vec![],
            filtered: vec![],
            options: FilterOptions::default(),
            selection: SelectionState::new(mode),
            cursor: 0,
            current_space: None,
            last_error: None,
            validation_errors: ValidationErrors::new(),
        }
    }

    /// Recomputes the filtered list from the master list and current options.
    ///
    /// Runs the engine's pure filter/sort pass, then clamps the cursor to the
    /// new bounds. Call after any change to `spaces` or `options`.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total = self.spaces.len(),
            query_len = self.options.query.len(),
            access = ?self.options.access,
            sort_by = ?self.options.sort_by,
        )
        .entered();

        self.filtered = filter_spaces(&self.spaces, &self.options);

        if self.filtered.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.filtered.len() - 1);
        }

        tracing::debug!(filtered = self.filtered.len(), "filter applied");
    }

    /// Moves the cursor down one position, wrapping to the top at the end.
    ///
    /// No-op when the filtered list is empty.
    pub fn move_cursor_down(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.filtered.len();
    }

    /// Moves the cursor up one position, wrapping to the bottom at the start.
    ///
    /// No-op when the filtered list is empty.
    pub fn move_cursor_up(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.filtered.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Returns the space under the cursor, if any.
    #[must_use]
    pub fn cursor_space(&self) -> Option<&Space> {
        self.filtered.get(self.cursor)
    }

    /// Replaces the selection with every visible space id.
    ///
    /// Only meaningful in multi-select mode, like
    /// [`SelectionState::select_all`].
    pub fn select_all_visible(&mut self) {
        let ids: Vec<String> = self.filtered.iter().map(|space| space.id.clone()).collect();
        self.selection.select_all(ids);
    }

    /// Computes a renderable view model from the current state.
    ///
    /// The view model carries display-ready rows (label, access mode,
    /// selected/current flags, query highlight ranges), the cursor position,
    /// the tri-state select-all checkbox state, and an empty-state message
    /// when there is nothing to show. No rendering happens here.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PickerViewModel {
        let items: Vec<SpaceItemView> = self
            .filtered
            .iter()
            .map(|space| self.compute_item(space))
            .collect();

        let total = items.len();
        let select_all = if self.selection.all_selected(total) {
            SelectAllState::Checked
        } else if self.selection.some_selected(total) {
            SelectAllState::Indeterminate
        } else {
            SelectAllState::Unchecked
        };

        let empty_state = if self.spaces.is_empty() {
            Some(EmptyState {
                message: "No spaces yet".to_string(),
                subtitle: "Create a space to get started".to_string(),
            })
        } else if self.filtered.is_empty() {
            Some(EmptyState {
                message: "No spaces match".to_string(),
                subtitle: "Adjust the search or access filter".to_string(),
            })
        } else {
            None
        };

        PickerViewModel {
            items,
            cursor: self.cursor,
            select_all,
            selected_count: self.selection.count(),
            total,
            empty_state,
            error: self.last_error.clone(),
        }
    }

    /// Computes the display row for a single space.
    fn compute_item(&self, space: &Space) -> SpaceItemView {
        let label = space.display_name();
        let highlight_ranges = if self.options.query.is_empty() {
            vec![]
        } else {
            match_ranges(&label, &self.options.query)
        };

        SpaceItemView {
            id: space.id.clone(),
            label,
            access: space.access,
            is_selected: self.selection.is_selected(&space.id),
            is_current: self.current_space.as_deref() == Some(space.id.as_str()),
            highlight_ranges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccessType;

    fn loaded_state() -> PickerState {
        let mut state = PickerState::new(SelectionMode::Multi);
        state.spaces = vec![
            Space::new("1").with_name("Zebra").with_access(AccessType::Public),
            Space::new("2").with_name("Apple").with_access(AccessType::Private),
            Space::new("3").with_name("Mango"),
        ];
        state.apply_filter();
        state
    }

    #[test]
    fn apply_filter_sorts_by_name() {
        let state = loaded_state();
        let labels: Vec<String> = state.filtered.iter().map(Space::display_name).collect();
        assert_eq!(labels, ["Apple", "Mango", "Zebra"]);
    }

    #[test]
    fn apply_filter_clamps_cursor() {
        let mut state = loaded_state();
        state.cursor = 2;
        state.options.query = "apple".to_string();
        state.apply_filter();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_wraps_in_both_directions() {
        let mut state = loaded_state();
        assert_eq!(state.cursor, 0);

        state.move_cursor_up();
        assert_eq!(state.cursor, 2);

        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn cursor_movement_is_a_noop_when_empty() {
        let mut state = PickerState::new(SelectionMode::Multi);
        state.move_cursor_down();
        state.move_cursor_up();
        assert_eq!(state.cursor, 0);
        assert!(state.cursor_space().is_none());
    }

    #[test]
    fn select_all_visible_selects_the_filtered_ids() {
        let mut state = loaded_state();
        state.options.query = "a".to_string(); // Zebra, Apple, Mango all contain "a"
        state.apply_filter();
        state.select_all_visible();
        assert_eq!(state.selection.count(), 3);

        state.options.query = "apple".to_string();
        state.apply_filter();
        state.select_all_visible();
        assert_eq!(state.selection.count(), 1);
        assert!(state.selection.is_selected("2"));
    }

    #[test]
    fn viewmodel_reflects_selection_and_current_space() {
        let mut state = loaded_state();
        state.current_space = Some("2".to_string());
        state.selection.toggle("1");

        let vm = state.compute_viewmodel();
        assert_eq!(vm.total, 3);
        assert_eq!(vm.selected_count, 1);
        assert_eq!(vm.select_all, SelectAllState::Indeterminate);

        let apple = vm.items.iter().find(|i| i.id == "2").unwrap();
        assert!(apple.is_current);
        assert!(!apple.is_selected);

        let zebra = vm.items.iter().find(|i| i.id == "1").unwrap();
        assert!(zebra.is_selected);
    }

    #[test]
    fn viewmodel_select_all_is_checked_when_everything_is_selected() {
        let mut state = loaded_state();
        state.select_all_visible();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.select_all, SelectAllState::Checked);
    }

    #[test]
    fn viewmodel_select_all_is_unchecked_when_nothing_is_visible() {
        let state = PickerState::new(SelectionMode::Multi);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.select_all, SelectAllState::Unchecked);
        assert_eq!(vm.empty_state.unwrap().message, "No spaces yet");
    }

    #[test]
    fn viewmodel_distinguishes_no_match_from_no_spaces() {
        let mut state = loaded_state();
        state.options.query = "quux".to_string();
        state.apply_filter();
        let vm = state.compute_viewmodel();
        assert_eq!(vm.empty_state.unwrap().message, "No spaces match");
    }

    #[test]
    fn viewmodel_highlights_query_matches() {
        let mut state = loaded_state();
        state.options.query = "ang".to_string();
        state.apply_filter();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.items.len(), 1);
        assert_eq!(vm.items[0].label, "Mango");
        assert_eq!(vm.items[0].highlight_ranges, vec![(1, 4)]);
    }
}
