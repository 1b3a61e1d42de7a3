//! Filter/sort and selection engine.
//!
//! This module is the core of the crate: the pure filter/sort pass over space
//! lists and the selection state manager that tracks chosen ids. Both are
//! synchronous, single-threaded, and free of I/O; the surrounding application
//! layer owns when they run.
//!
//! # Modules
//!
//! - [`filter`]: [`FilterOptions`] and the pure [`filter_spaces`] pass
//! - [`selection`]: [`SelectionState`] with single/multi-select semantics

pub mod filter;
pub mod selection;

pub use filter::{filter_spaces, match_ranges, AccessFilter, FilterOptions, SortKey, SortOrder};
pub use selection::{SelectionMode, SelectionState};
