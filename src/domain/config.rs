// SPDX-License-Identifier: MIT OR Apache-2.0

//! The structural configuration record and its shared-ownership alias.
//!
//! This module replaces the loosely-typed configuration object of the original
//! injection pattern with an explicit contract: a record with one documented
//! optional field, `exampleOption`. Any other fields present in an input
//! document are ignored on deserialization.

use crate::domain::ConfigValue;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// The configuration record supplied under [`EXAMPLE_CONFIG`].
///
/// The record is created and owned by the caller before any service exists;
/// services hold a non-owning shared reference for their own lifetime. The
/// single documented field is `exampleOption`, an unconstrained text value
/// that may be unset.
///
/// # Examples
///
/// ```
/// use tokencfg::domain::ExampleConfig;
///
/// let config = ExampleConfig::with_example_option("custom-value");
/// assert_eq!(config.example_option.unwrap().as_str(), "custom-value");
///
/// let empty = ExampleConfig::new();
/// assert!(empty.example_option.is_none());
/// ```
///
/// [`EXAMPLE_CONFIG`]: crate::token::EXAMPLE_CONFIG
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleConfig {
    /// The example option, stored under the key `exampleOption`.
    #[serde(rename = "exampleOption", default, skip_serializing_if = "Option::is_none")]
    pub example_option: Option<ConfigValue>,
}

impl ExampleConfig {
    /// Creates an empty configuration with no `exampleOption` set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokencfg::domain::ExampleConfig;
    ///
    /// let config = ExampleConfig::new();
    /// assert!(config.example_option.is_none());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration with `exampleOption` set to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokencfg::domain::ExampleConfig;
    ///
    /// let config = ExampleConfig::with_example_option("custom-value");
    /// assert_eq!(config.example_option.unwrap().as_str(), "custom-value");
    /// ```
    pub fn with_example_option(value: impl Into<ConfigValue>) -> Self {
        Self {
            example_option: Some(value.into()),
        }
    }

    /// Wraps this configuration for shared ownership.
    ///
    /// Every service constructed over the same [`SharedConfig`] observes
    /// writes made through any of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokencfg::domain::ExampleConfig;
    ///
    /// let shared = ExampleConfig::new().shared();
    /// assert!(shared.read().unwrap().example_option.is_none());
    /// ```
    pub fn shared(self) -> SharedConfig {
        Arc::new(RwLock::new(self))
    }
}

/// Shared-ownership handle for a configuration record.
///
/// The record is externally owned; services hold clones of this handle and
/// mutate the record in place through it. Mutations are last-write-wins with
/// no ordering imposed by this crate.
pub type SharedConfig = Arc<RwLock<ExampleConfig>>;
