//! Spacepicker: the state engine behind a space picker UI.
//!
//! Spacepicker implements the non-presentational half of a widget for
//! selecting, filtering, and acting on "space" resources exposed by an
//! external storage client:
//! - Pure filter/sort passes over space lists (substring search, access-type
//!   filters, stable name ordering)
//! - Single/multi selection state with tri-state select-all derivations
//! - Debounce/throttle primitives for rate-limiting input streams
//! - Pure validation rule sets for names, identities, grants, uploads, paths
//! - A per-session state machine with an event/action model
//!
//! Rendering, styling, accessibility wiring, and the storage client SDK
//! itself stay outside: the crate consumes space lists and emits view models
//! and side-effect descriptions, nothing else.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding runtime (components, client SDK calls)   │  ← External
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Engine        │   │ Validation    │   │ Timing        │
//! │ (engine/)     │   │ (validation/) │   │ (timing/)     │
//! │ - Filter/sort │   │ - Name rules  │   │ - Debounce    │
//! │ - Selection   │   │ - Grants      │   │ - Throttle    │
//! │               │   │ - Uploads     │   │ - Retry       │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Observability Layers                      │
//! │  - Space and file models (domain/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Tracing setup (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Per-session state machine with event/action model
//! - [`domain`]: Core domain types (Space, FileItem, errors)
//! - [`engine`]: Pure filter/sort pass and selection state
//! - [`timing`]: Debounce, throttle, and backoff-retry primitives
//! - [`ui`]: Immutable view models consumed by the presentation layer
//! - [`validation`]: Pure form and input rule sets
//! - [`observability`]: Tracing subscriber setup
//!
//! # Examples
//!
//! ```
//! use spacepicker::{handle_event, initialize, Event, PickerConfig};
//! use spacepicker::domain::Space;
//!
//! let config = PickerConfig::default();
//! let mut state = initialize(&config);
//!
//! let spaces = vec![
//!     Space::new("did:key:z1").with_name("Zebra"),
//!     Space::new("did:key:z2").with_name("Apple"),
//! ];
//! let (render, _actions) = handle_event(&mut state, &Event::SpacesLoaded { spaces })?;
//! assert!(render);
//!
//! let labels: Vec<String> = state.filtered.iter().map(|s| s.display_name()).collect();
//! assert_eq!(labels, ["Apple", "Zebra"]);
//! # Ok::<(), spacepicker::PickerError>(())
//! ```
//!
//! Rate-limited input wiring is left to the host:
//!
//! ```
//! use std::time::Instant;
//! use spacepicker::timing::Debouncer;
//! use spacepicker::PickerConfig;
//!
//! let config = PickerConfig::default();
//! let mut debouncer: Debouncer<String> = Debouncer::new(config.debounce_wait());
//! debouncer.call(Instant::now(), "que".to_string());
//! // ... later, on the host's timer tick:
//! // if let Some(query) = debouncer.poll(Instant::now()) { send QueryChanged }
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod observability;
pub mod timing;
pub mod ui;
pub mod validation;

pub use app::{handle_event, Action, Event, PickerState};
pub use domain::{PickerError, Result, Space};
pub use engine::{FilterOptions, SelectionMode};

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Picker configuration supplied by the embedding host.
///
/// Controls rate-limiting windows, the selection mode, and tracing verbosity.
/// Hosts can construct it directly, rely on [`Default`], or load a TOML file:
///
/// ```toml
/// # picker.toml
/// debounce_ms = 250
/// throttle_ms = 1000
/// multi_select = false
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Quiet period for search-input debouncing, in milliseconds.
    ///
    /// Default: 300.
    pub debounce_ms: u64,

    /// Cooldown window for usage-refresh throttling, in milliseconds.
    ///
    /// Default: 500.
    pub throttle_ms: u64,

    /// Whether more than one space may be selected at a time.
    ///
    /// Default: true.
    pub multi_select: bool,

    /// Tracing level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            throttle_ms: 500,
            multi_select: true,
            trace_level: None,
        }
    }
}

impl PickerConfig {
    /// Parses configuration from a TOML string.
    ///
    /// Missing keys fall back to their defaults; unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Config`] when the input is not valid TOML or a
    /// value has the wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use spacepicker::PickerConfig;
    ///
    /// let config = PickerConfig::from_toml_str("debounce_ms = 100")?;
    /// assert_eq!(config.debounce_ms, 100);
    /// assert!(config.multi_select);
    /// # Ok::<(), spacepicker::PickerError>(())
    /// ```
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| PickerError::Config(e.to_string()))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Io`] when the file cannot be read and
    /// [`PickerError::Config`] when its contents do not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Debounce quiet period as a [`Duration`].
    #[must_use]
    pub const fn debounce_wait(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Throttle cooldown window as a [`Duration`].
    #[must_use]
    pub const fn throttle_limit(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Selection mode implied by `multi_select`.
    #[must_use]
    pub const fn selection_mode(&self) -> SelectionMode {
        if self.multi_select {
            SelectionMode::Multi
        } else {
            SelectionMode::Single
        }
    }
}

/// Initializes a picker session from configuration.
///
/// Creates an empty [`PickerState`] in the configured selection mode. The
/// master space list arrives later via
/// [`Event::SpacesLoaded`](app::Event::SpacesLoaded). Call
/// [`observability::init_tracing`] separately if the host does not install
/// its own subscriber.
///
/// # Examples
///
/// ```
/// use spacepicker::{initialize, PickerConfig, SelectionMode};
///
/// let config = PickerConfig {
///     multi_select: false,
///     ..PickerConfig::default()
/// };
/// let state = initialize(&config);
/// assert_eq!(state.selection.mode(), SelectionMode::Single);
/// ```
#[must_use]
pub fn initialize(config: &PickerConfig) -> PickerState {
    tracing::debug!(
        debounce_ms = config.debounce_ms,
        throttle_ms = config.throttle_ms,
        multi_select = config.multi_select,
        "initializing picker session"
    );
    PickerState::new(config.selection_mode())
}
