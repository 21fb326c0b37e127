// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration-access service trait definition.
//!
//! This module defines the `ConfigAccess` trait, the main interface for
//! reading and writing the injected configuration's `exampleOption` field.

use crate::domain::{ConfigValue, Result};

/// The configuration-access service trait.
///
/// Implementations hold at most one reference to a configuration object,
/// fixed at construction, and pass reads and writes through to it directly
/// with no transformation, validation, or caching.
///
/// The service has exactly two states, decided at construction and never
/// changing afterward: *configured* (a configuration object was supplied) and
/// *unconfigured* (none was). Every accessor behaves identically in the
/// configured state and fails identically with
/// [`ConfigError::NotConfigured`](crate::domain::ConfigError::NotConfigured)
/// in the unconfigured state.
///
/// # Examples
///
/// ```rust
/// use tokencfg::domain::{ConfigAccess, ConfigValue, Result};
///
/// struct FixedService;
///
/// impl ConfigAccess for FixedService {
///     fn example_option(&self) -> Result<Option<ConfigValue>> {
///         Ok(Some(ConfigValue::from("value")))
///     }
///
///     fn set_example_option(&self, _value: ConfigValue) -> Result<()> {
///         Ok(())
///     }
///
///     fn is_configured(&self) -> bool {
///         true
///     }
/// }
///
/// let service = FixedService;
/// assert_eq!(
///     service.get_example_option().unwrap(),
///     service.example_option().unwrap()
/// );
/// ```
pub trait ConfigAccess {
    /// Reads the `exampleOption` field of the held configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` - The field is set
    /// * `Ok(None)` - A configuration is held but the field is unset
    /// * `Err(ConfigError::NotConfigured)` - No configuration was supplied at
    ///   construction
    fn example_option(&self) -> Result<Option<ConfigValue>>;

    /// Writes the `exampleOption` field of the held configuration in place.
    ///
    /// The configuration object is shared, so the new value is visible to
    /// every other holder of the same object, including other service
    /// instances constructed over it. There is no internal caching;
    /// immediately subsequent reads observe the new value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The field was overwritten
    /// * `Err(ConfigError::NotConfigured)` - No configuration was supplied at
    ///   construction
    fn set_example_option(&self, value: ConfigValue) -> Result<()>;

    /// Reads the `exampleOption` field.
    ///
    /// Defined purely as a delegate to [`example_option`], so the two read
    /// surfaces return identical results for identical held state.
    ///
    /// [`example_option`]: ConfigAccess::example_option
    fn get_example_option(&self) -> Result<Option<ConfigValue>> {
        self.example_option()
    }

    /// Returns `true` if a configuration object was supplied at construction.
    ///
    /// The accessors perform no presence check of their own; callers that
    /// cannot guarantee a provider was wired can guard with this method.
    fn is_configured(&self) -> bool;
}
