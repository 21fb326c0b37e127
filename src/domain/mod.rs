// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the service trait.
//!
//! This module contains the core domain types of the crate:
//!
//! - [`ConfigValue`]: A newtype wrapper for configuration values
//! - [`ExampleConfig`]: The structural configuration record
//! - [`SharedConfig`]: Shared ownership alias for a configuration record
//! - [`ConfigError`]: Error types for configuration operations
//! - [`ConfigAccess`]: The configuration-access service trait

pub mod config;
pub mod config_value;
pub mod errors;
pub mod service;

pub use config::{ExampleConfig, SharedConfig};
pub use config_value::ConfigValue;
pub use errors::{ConfigError, Result};
pub use service::ConfigAccess;
