// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory diagnostic sink adapter.
//!
//! This module provides a [`DiagnosticSink`] that records construction
//! diagnostics in memory, so tests can assert on what a service reported (or
//! suppress console output entirely).

use crate::domain::ExampleConfig;
use crate::ports::DiagnosticSink;
use std::sync::{Arc, Mutex};

/// A recorded construction diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConstructionEvent {
    /// The name of the token the service was wired under.
    pub token: String,
    /// The configuration snapshot the service received, if any.
    pub config: Option<ExampleConfig>,
}

/// A diagnostic sink that records events in memory.
///
/// The sink is cheaply cloneable; clones share the same event list, so a test
/// can keep one handle and hand another to the service builder.
///
/// # Examples
///
/// ```rust
/// use tokencfg::adapters::CaptureSink;
/// use tokencfg::ports::DiagnosticSink;
///
/// let sink = CaptureSink::new();
/// sink.constructed("EXAMPLE_CONFIG", None);
///
/// let events = sink.events();
/// assert_eq!(events.len(), 1);
/// assert_eq!(events[0].token, "EXAMPLE_CONFIG");
/// assert!(events[0].config.is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CaptureSink {
    events: Arc<Mutex<Vec<ConstructionEvent>>>,
}

impl CaptureSink {
    /// Creates a new capture sink with no recorded events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded events, in arrival order.
    pub fn events(&self) -> Vec<ConstructionEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl DiagnosticSink for CaptureSink {
    fn constructed(&self, token: &str, config: Option<&ExampleConfig>) {
        let event = ConstructionEvent {
            token: token.to_string(),
            config: config.cloned(),
        };
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
