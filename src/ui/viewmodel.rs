//! View model types representing renderable picker state.
//!
//! This module defines immutable view models computed from
//! [`PickerState`](crate::app::PickerState), following the MVVM pattern. View
//! models are optimized for rendering and contain pre-computed display
//! information like highlight ranges and selection flags. They contain no
//! business logic, and nothing here renders: how rows, badges, and checkboxes
//! become markup is the embedding presentation layer's concern.

use crate::domain::AccessType;
use serde::Serialize;

/// State of the tri-state "select all" checkbox.
///
/// Derived from the selection counts: checked when every visible item is
/// selected (and there is at least one), indeterminate when some but not all
/// are, unchecked otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectAllState {
    /// Nothing (or nothing visible) is selected.
    Unchecked,
    /// Some, but not all, visible items are selected.
    Indeterminate,
    /// Every visible item is selected.
    Checked,
}

/// Complete view model for one picker render.
///
/// Computed from `PickerState` on demand; consumed by the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct PickerViewModel {
    /// Display rows in filtered, sorted order.
    pub items: Vec<SpaceItemView>,

    /// Cursor index within `items`.
    pub cursor: usize,

    /// Tri-state select-all checkbox state.
    pub select_all: SelectAllState,

    /// Number of selected spaces.
    pub selected_count: usize,

    /// Number of visible spaces.
    pub total: usize,

    /// Empty-state message when there is nothing to show.
    pub empty_state: Option<EmptyState>,

    /// Last operational error, for an error banner.
    pub error: Option<String>,
}

/// Display information for a single space row.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceItemView {
    /// Space identifier (row key and selection handle).
    pub id: String,

    /// Display label: the space name, or the shortened identifier.
    pub label: String,

    /// Access mode badge, when the space has one.
    pub access: Option<AccessType>,

    /// Whether this space is selected.
    pub is_selected: bool,

    /// Whether this is the currently active space.
    pub is_current: bool,

    /// Byte ranges of `label` matching the current query.
    ///
    /// Each tuple is `(start, end)` with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty-state message display information.
///
/// Shown when no spaces are available or nothing matches the filter.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyState {
    /// Primary message (e.g., "No spaces yet").
    pub message: String,

    /// Secondary explanatory text (e.g., "Create a space to get started").
    pub subtitle: String,
}
