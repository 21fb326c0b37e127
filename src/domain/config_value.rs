// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type.
//!
//! This module provides the `ConfigValue` type, a newtype wrapper around the
//! text value stored under the `exampleOption` field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe wrapper for configuration values.
///
/// `ConfigValue` wraps the text stored in a configuration field. The value is
/// unconstrained: no validation or normalization is applied, and whatever was
/// stored is returned verbatim.
///
/// # Examples
///
/// ```
/// use tokencfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::new("custom-value".to_string());
/// assert_eq!(value.as_str(), "custom-value");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigValue(String);

impl ConfigValue {
    /// Creates a new `ConfigValue` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokencfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::new("hello".to_string());
    /// assert_eq!(value.as_str(), "hello");
    /// ```
    pub fn new(value: String) -> Self {
        ConfigValue(value)
    }

    /// Returns the value as a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokencfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("world");
    /// assert_eq!(value.as_str(), "world");
    /// ```
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the value into a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tokencfg::domain::config_value::ConfigValue;
    ///
    /// let value = ConfigValue::from("test");
    /// assert_eq!(value.as_string(), "test");
    /// ```
    pub fn as_string(&self) -> String {
        self.0.clone()
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue(s.to_string())
    }
}

impl From<ConfigValue> for String {
    fn from(value: ConfigValue) -> Self {
        value.0
    }
}

impl AsRef<str> for ConfigValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
