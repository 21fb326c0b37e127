// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracing-backed diagnostic sink adapter.
//!
//! This module provides the default [`DiagnosticSink`] implementation, which
//! emits construction diagnostics through the `tracing` crate.

use crate::domain::ExampleConfig;
use crate::ports::DiagnosticSink;

/// A diagnostic sink that emits through `tracing`.
///
/// This is the sink a [`TokenConfigService`](crate::service::TokenConfigService)
/// uses unless the builder supplies another one. The construction diagnostic
/// is emitted at `DEBUG` level; with no subscriber installed it is dropped,
/// which is the "suppressed" behavior callers get for free.
///
/// # Examples
///
/// ```rust
/// use tokencfg::adapters::TracingSink;
/// use tokencfg::domain::ExampleConfig;
/// use tokencfg::ports::DiagnosticSink;
///
/// let sink = TracingSink::new();
/// let config = ExampleConfig::with_example_option("custom-value");
/// sink.constructed("EXAMPLE_CONFIG", Some(&config));
/// ```
#[derive(Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn constructed(&self, token: &str, config: Option<&ExampleConfig>) {
        match config {
            Some(config) => tracing::debug!(token, ?config, "service constructed"),
            None => tracing::debug!(token, "service constructed without configuration"),
        }
    }
}
