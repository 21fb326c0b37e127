// SPDX-License-Identifier: MIT OR Apache-2.0

//! Port definitions (trait interfaces).
//!
//! This module contains the trait definitions that serve as ports in the
//! hexagonal architecture. The single port is [`DiagnosticSink`], the
//! collaborator that receives construction diagnostics.

pub mod sink;

pub use sink::DiagnosticSink;
