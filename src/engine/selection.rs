//! Selection state tracking for the picker.
//!
//! This module defines [`SelectionState`], which tracks the set of currently
//! selected spaces by identifier. Identity is always the id string: the same
//! logical space may appear as different object instances across refreshes, so
//! the selection never compares by reference or deep equality.
//!
//! Single-select mode acts as a toggle, not a radio-lock: selecting the
//! already-selected id clears the selection, while selecting a different id
//! replaces it.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Whether one or many spaces may be selected at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one space selected; selecting replaces, re-selecting clears.
    Single,
    /// Any number of spaces selected; toggling adds or removes.
    #[default]
    Multi,
}

/// Set of selected space identifiers for one picker session.
///
/// Invariant: in [`SelectionMode::Single`] the set never holds more than one
/// id. The initial state is an empty selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    selected: HashSet<String>,
    mode: SelectionMode,
}

impl SelectionState {
    /// Creates an empty selection in the given mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::engine::{SelectionMode, SelectionState};
    ///
    /// let selection = SelectionState::new(SelectionMode::Single);
    /// assert_eq!(selection.count(), 0);
    /// ```
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            selected: HashSet::new(),
            mode,
        }
    }

    /// Returns the selection mode.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Toggles the selection state of an id.
    ///
    /// In multi-select mode the id is added if absent and removed if present.
    /// In single-select mode, toggling the currently-selected id clears the
    /// selection; toggling a different id replaces any existing selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::engine::{SelectionMode, SelectionState};
    ///
    /// let mut selection = SelectionState::new(SelectionMode::Single);
    /// selection.toggle("a");
    /// selection.toggle("b");
    /// assert!(selection.is_selected("b"));
    /// assert_eq!(selection.count(), 1);
    ///
    /// selection.toggle("b");
    /// assert_eq!(selection.count(), 0);
    /// ```
    pub fn toggle(&mut self, id: &str) {
        match self.mode {
            SelectionMode::Multi => {
                if !self.selected.remove(id) {
                    self.selected.insert(id.to_string());
                }
            }
            SelectionMode::Single => {
                let was_selected = self.selected.contains(id);
                self.selected.clear();
                if !was_selected {
                    self.selected.insert(id.to_string());
                }
            }
        }
    }

    /// Replaces the selection with all given ids.
    ///
    /// Only meaningful in multi-select mode; in single-select mode this is a
    /// documented no-op, since honoring it would break the at-most-one
    /// invariant.
    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.mode == SelectionMode::Single {
            tracing::debug!("select_all ignored in single-select mode");
            return;
        }

        self.selected = ids.into_iter().map(Into::into).collect();
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether the given id is currently selected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of selected ids.
    #[must_use]
    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Whether every one of `total` visible items is selected.
    ///
    /// False when nothing is visible, so an empty list never reads as
    /// "all selected".
    #[must_use]
    pub fn all_selected(&self, total: usize) -> bool {
        total > 0 && self.count() == total
    }

    /// Whether some but not all of `total` visible items are selected.
    ///
    /// Drives the indeterminate state of a tri-state "select all" checkbox.
    #[must_use]
    pub fn some_selected(&self, total: usize) -> bool {
        self.count() > 0 && self.count() < total
    }

    /// Iterates over the selected ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }
}
