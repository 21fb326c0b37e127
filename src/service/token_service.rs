// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default configuration-access service implementation.
//!
//! This module provides `TokenConfigService`, which holds an optionally
//! supplied shared configuration and implements the
//! [`ConfigAccess`](crate::domain::ConfigAccess) accessors over it.

use crate::adapters::TracingSink;
use crate::domain::{ConfigAccess, ConfigError, ConfigValue, Result, SharedConfig};
use crate::ports::DiagnosticSink;
use crate::token::{Token, EXAMPLE_CONFIG};

/// The default configuration-access service.
///
/// The service holds at most one shared configuration reference, fixed at
/// construction and never reassigned afterward; only the referenced record's
/// field values change. Reads and writes pass through directly, with no
/// transformation, validation, or caching, so a write made through one
/// service is immediately visible to every other holder of the same
/// [`SharedConfig`].
///
/// Constructing without a configuration is permitted. Such a service reports
/// `false` from [`is_configured`](ConfigAccess::is_configured) and fails
/// every accessor with [`ConfigError::NotConfigured`].
///
/// # Examples
///
/// ```rust
/// use tokencfg::prelude::*;
///
/// # fn main() -> tokencfg::domain::Result<()> {
/// let config = ExampleConfig::with_example_option("custom-value").shared();
/// let service = TokenConfigService::new(Some(config));
///
/// assert_eq!(service.example_option()?.unwrap().as_str(), "custom-value");
/// # Ok(())
/// # }
/// ```
pub struct TokenConfigService {
    /// The held configuration reference. Fixed at construction.
    config: Option<SharedConfig>,
    /// Name of the token this service was wired under, for diagnostics.
    token: &'static str,
}

impl TokenConfigService {
    /// Creates a service over an optionally supplied configuration.
    ///
    /// No validation is performed on the configuration's contents. The
    /// received value is reported once through the default
    /// [`TracingSink`](crate::adapters::TracingSink); use the
    /// [builder](Self::builder) to substitute or capture that diagnostic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tokencfg::prelude::*;
    ///
    /// let configured = TokenConfigService::new(Some(ExampleConfig::new().shared()));
    /// assert!(configured.is_configured());
    ///
    /// let unconfigured = TokenConfigService::new(None);
    /// assert!(!unconfigured.is_configured());
    /// ```
    pub fn new(config: Option<SharedConfig>) -> Self {
        Self::builder().with_config_option(config).build()
    }

    /// Creates a new service builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tokencfg::prelude::*;
    ///
    /// let service = TokenConfigService::builder()
    ///     .with_config(ExampleConfig::new().shared())
    ///     .build();
    /// assert!(service.is_configured());
    /// ```
    pub fn builder() -> TokenConfigServiceBuilder {
        TokenConfigServiceBuilder::new()
    }

    /// Returns the name of the token this service was wired under.
    pub fn token(&self) -> &'static str {
        self.token
    }

    fn not_configured(&self) -> ConfigError {
        ConfigError::NotConfigured {
            token: self.token.to_string(),
        }
    }

    fn config(&self) -> Result<&SharedConfig> {
        self.config.as_ref().ok_or_else(|| self.not_configured())
    }
}

impl ConfigAccess for TokenConfigService {
    fn example_option(&self) -> Result<Option<ConfigValue>> {
        let config = self.config()?;
        let guard = config.read().map_err(|_| ConfigError::LockPoisoned {
            token: self.token.to_string(),
        })?;
        Ok(guard.example_option.clone())
    }

    fn set_example_option(&self, value: ConfigValue) -> Result<()> {
        let config = self.config()?;
        let mut guard = config.write().map_err(|_| ConfigError::LockPoisoned {
            token: self.token.to_string(),
        })?;
        guard.example_option = Some(value);
        Ok(())
    }

    fn is_configured(&self) -> bool {
        self.config.is_some()
    }
}

/// Builder for constructing a [`TokenConfigService`].
///
/// The builder is where the explicit wiring happens that a runtime injection
/// container would otherwise do: the caller decides which token names the
/// service, whether a configuration is provided, and where the construction
/// diagnostic goes.
///
/// # Examples
///
/// ```rust
/// use tokencfg::adapters::CaptureSink;
/// use tokencfg::prelude::*;
///
/// let sink = CaptureSink::new();
/// let service = TokenConfigService::builder()
///     .with_config(ExampleConfig::with_example_option("custom-value").shared())
///     .with_sink(Box::new(sink.clone()))
///     .build();
///
/// assert!(service.is_configured());
/// assert_eq!(sink.events().len(), 1);
/// ```
pub struct TokenConfigServiceBuilder {
    config: Option<SharedConfig>,
    token: &'static str,
    sink: Option<Box<dyn DiagnosticSink>>,
}

impl TokenConfigServiceBuilder {
    /// Creates a new builder with no configuration, the
    /// [`EXAMPLE_CONFIG`](crate::token::EXAMPLE_CONFIG) token, and the
    /// default tracing sink.
    pub fn new() -> Self {
        Self {
            config: None,
            token: EXAMPLE_CONFIG.name(),
            sink: None,
        }
    }

    /// Supplies the configuration the service will hold.
    pub fn with_config(mut self, config: SharedConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Supplies or omits the configuration from an `Option`.
    ///
    /// This mirrors what an optional injection site receives: either a
    /// provider's value or an explicit absence.
    pub fn with_config_option(mut self, config: Option<SharedConfig>) -> Self {
        self.config = config;
        self
    }

    /// Names the token the service is wired under.
    ///
    /// The token only labels diagnostics and error messages; it does not
    /// resolve anything at runtime.
    pub fn with_token(mut self, token: Token<SharedConfig>) -> Self {
        self.token = token.name();
        self
    }

    /// Replaces the diagnostic sink the construction event is reported to.
    pub fn with_sink(mut self, sink: Box<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds the service, reporting the received configuration to the sink.
    ///
    /// The diagnostic always carries a snapshot when a configuration was
    /// supplied, even if its lock is poisoned; the record data is still
    /// readable and a configured service must not report as unconfigured.
    pub fn build(self) -> TokenConfigService {
        let sink = self.sink.unwrap_or_else(|| Box::new(TracingSink::new()));
        // Snapshot the record rather than hold the lock across the sink call.
        let snapshot = self.config.as_ref().map(|config| {
            let guard = config.read().unwrap_or_else(|poisoned| poisoned.into_inner());
            (*guard).clone()
        });
        sink.constructed(self.token, snapshot.as_ref());

        TokenConfigService {
            config: self.config,
            token: self.token,
        }
    }
}

impl Default for TokenConfigServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
