//! Presentation-facing view models.
//!
//! The picker emits immutable view models rather than markup: the embedding
//! presentation layer owns components, styling, and accessibility wiring.
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready snapshots computed from picker state

pub mod viewmodel;

pub use viewmodel::{EmptyState, PickerViewModel, SelectAllState, SpaceItemView};
