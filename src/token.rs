// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injection token markers.
//!
//! A [`Token`] is a named, typed, compile-time marker identifying a value that
//! a caller may supply to a service. Tokens carry no default value and no
//! runtime registry backs them: wiring is explicit constructor and builder
//! calls, and absence of a provider is permitted. The name is used only for
//! diagnostics and error messages.

use crate::domain::SharedConfig;
use std::fmt;
use std::marker::PhantomData;

/// A named, typed injection token.
///
/// `Token<T>` is a zero-sized marker tying a process-wide name to the type a
/// provider for it must supply. Declaring tokens as `const` items makes them
/// usable anywhere without any registration step.
///
/// # Examples
///
/// ```
/// use tokencfg::token::Token;
/// use tokencfg::domain::SharedConfig;
///
/// const MY_CONFIG: Token<SharedConfig> = Token::new("MY_CONFIG");
/// assert_eq!(MY_CONFIG.name(), "MY_CONFIG");
/// ```
pub struct Token<T: ?Sized> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: ?Sized> Token<T> {
    /// Creates a new token with the given process-wide name.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    /// Returns the token's name.
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: ?Sized> Clone for Token<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Token<T> {}

impl<T: ?Sized> fmt::Debug for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token").field("name", &self.name).finish()
    }
}

// Display is just the name, so log output stays readable when tokens appear
// in messages.
impl<T: ?Sized> fmt::Display for Token<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The token under which the example configuration is supplied.
///
/// No provider is required to exist for this token; a
/// [`TokenConfigService`](crate::service::TokenConfigService) constructed
/// without one simply starts unconfigured.
pub const EXAMPLE_CONFIG: Token<SharedConfig> = Token::new("EXAMPLE_CONFIG");
