// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token-based optional configuration injection.
//!
//! This crate provides a small, explicit take on token-identified dependency
//! injection of a configuration object: a typed [`Token`](token::Token) names
//! the configuration, a caller optionally supplies a shared configuration
//! value under that token, and a service exposes read and write accessors for
//! the configuration's documented field.
//!
//! There is no runtime injection container. The token is a compile-time
//! marker; wiring happens through ordinary constructor and builder calls, and
//! absence of a provider is explicitly permitted.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ExampleConfig`, `ConfigValue`, errors) and
//!   the [`ConfigAccess`](domain::ConfigAccess) trait
//! - **Ports**: The [`DiagnosticSink`](ports::DiagnosticSink) collaborator
//!   interface for construction diagnostics
//! - **Adapters**: Sink implementations (`tracing`-backed and in-memory capture)
//! - **Service**: [`TokenConfigService`](service::TokenConfigService), the
//!   configuration-access service
//!
//! # Quick Start
//!
//! ```rust
//! use tokencfg::prelude::*;
//!
//! # fn main() -> tokencfg::domain::Result<()> {
//! // The caller owns the configuration and supplies it at construction.
//! let config = ExampleConfig::with_example_option("custom-value").shared();
//! let service = TokenConfigService::new(Some(config));
//!
//! assert_eq!(service.example_option()?.unwrap().as_str(), "custom-value");
//!
//! service.set_example_option(ConfigValue::from("new-value"))?;
//! assert_eq!(service.get_example_option()?.unwrap().as_str(), "new-value");
//! # Ok(())
//! # }
//! ```
//!
//! Constructing without a configuration is allowed; the accessors then fail
//! with [`ConfigError::NotConfigured`](domain::ConfigError::NotConfigured):
//!
//! ```rust
//! use tokencfg::prelude::*;
//!
//! let service = TokenConfigService::new(None);
//! assert!(service.example_option().is_err());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod token;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigAccess, ConfigError, ConfigValue, ExampleConfig, Result, SharedConfig,
    };
    pub use crate::ports::DiagnosticSink;
    pub use crate::service::{TokenConfigService, TokenConfigServiceBuilder};
    pub use crate::token::{Token, EXAMPLE_CONFIG};
}
