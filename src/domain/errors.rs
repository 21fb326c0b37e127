// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the error types that can occur when accessing an
//! injected configuration. All errors use `thiserror` for proper error
//! handling and conversion.

use thiserror::Error;

/// The main error type for configuration-access operations.
///
/// This enum represents the ways an accessor on the configuration-access
/// service can fail. It is marked as `#[non_exhaustive]` to allow for future
/// additions without breaking backwards compatibility.
///
/// The only functional failure is [`ConfigError::NotConfigured`]: a service
/// constructed without a configuration object fails every accessor with it,
/// deterministically. Errors are propagated to the caller untranslated; the
/// service performs no recovery, retry, or fallback of its own.
///
/// # Examples
///
/// ```
/// use tokencfg::domain::errors::ConfigError;
///
/// fn read_option() -> Result<String, ConfigError> {
///     Err(ConfigError::NotConfigured {
///         token: "EXAMPLE_CONFIG".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An accessor was invoked on a service that was constructed without a
    /// configuration object.
    #[error("no configuration was provided for token '{token}'")]
    NotConfigured {
        /// The name of the token the service was wired under
        token: String,
    },

    /// The shared configuration lock was poisoned by a panicking writer.
    #[error("configuration lock for token '{token}' is poisoned")]
    LockPoisoned {
        /// The name of the token the service was wired under
        token: String,
    },
}

/// A specialized Result type for configuration-access operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
