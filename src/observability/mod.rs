//! Tracing-based observability.
//!
//! The engine instruments its filter passes and event handling with `tracing`
//! spans and structured events. This module wires up a default subscriber for
//! hosts that do not bring their own.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` option in [`PickerConfig`](crate::PickerConfig)
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
