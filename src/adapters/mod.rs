// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter implementations for the diagnostic sink port.
//!
//! This module contains the built-in [`DiagnosticSink`] implementations:
//!
//! - [`TracingSink`]: routes construction diagnostics through `tracing`
//! - [`CaptureSink`]: records construction diagnostics in memory
//!
//! [`DiagnosticSink`]: crate::ports::DiagnosticSink

pub mod capture;
pub mod tracing_sink;

pub use capture::CaptureSink;
pub use tracing_sink::TracingSink;
