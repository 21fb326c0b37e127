// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic sink trait definition.
//!
//! This module defines the `DiagnosticSink` trait, the port through which the
//! configuration-access service reports the value it received at
//! construction. Exposing the diagnostic as a collaborator interface lets
//! callers suppress it, capture it in tests, or route it to their own
//! observability stack; it is instrumentation, not a functional requirement.

use crate::domain::ExampleConfig;

/// A sink for construction diagnostics.
///
/// The service invokes [`constructed`](DiagnosticSink::constructed) exactly
/// once, when it is built, with the token name it was wired under and a
/// snapshot of the configuration it received (or `None` when it was
/// constructed unconfigured). Nothing else is ever reported through the sink;
/// in particular, the accessor failure path does no logging.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so services can be shared across
/// threads.
///
/// # Examples
///
/// ```rust
/// use tokencfg::domain::ExampleConfig;
/// use tokencfg::ports::DiagnosticSink;
///
/// /// A sink that drops every diagnostic.
/// struct NullSink;
///
/// impl DiagnosticSink for NullSink {
///     fn constructed(&self, _token: &str, _config: Option<&ExampleConfig>) {}
/// }
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Reports that a service was constructed.
    ///
    /// # Arguments
    ///
    /// * `token` - The name of the token the service was wired under
    /// * `config` - A snapshot of the received configuration, or `None` when
    ///   the service was constructed without one
    fn constructed(&self, token: &str, config: Option<&ExampleConfig>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSink {
        calls: AtomicUsize,
    }

    impl DiagnosticSink for CountingSink {
        fn constructed(&self, _token: &str, _config: Option<&ExampleConfig>) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_sink_receives_call() {
        let sink = CountingSink {
            calls: AtomicUsize::new(0),
        };
        sink.constructed("EXAMPLE_CONFIG", None);
        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sink_object_safety() {
        let sink: Box<dyn DiagnosticSink> = Box::new(CountingSink {
            calls: AtomicUsize::new(0),
        });
        let config = ExampleConfig::new();
        sink.constructed("EXAMPLE_CONFIG", Some(&config));
    }
}
