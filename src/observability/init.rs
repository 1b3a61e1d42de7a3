//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber used by the picker engine's
//! spans and events. Output goes to the standard fmt layer; filtering follows
//! the configured level with an `RUST_LOG` override.

use crate::PickerConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber for the picker.
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// Embedding hosts that install their own subscriber can skip this entirely;
/// the engine only emits through the `tracing` facade.
///
/// # Example
///
/// ```
/// use spacepicker::observability::init_tracing;
/// use spacepicker::PickerConfig;
///
/// let config = PickerConfig {
///     trace_level: Some("debug".to_string()),
///     ..PickerConfig::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &PickerConfig) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
