// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration-access service implementation.
//!
//! This module contains [`TokenConfigService`], the default implementation of
//! the [`ConfigAccess`](crate::domain::ConfigAccess) trait, along with its
//! builder.

pub mod token_service;

pub use token_service::{TokenConfigService, TokenConfigServiceBuilder};
