//! Authentication module for the provider's OAuth2 client-credentials flow
//!
//! This module provides:
//! - [`AccessToken`]: a bearer token with its expiry
//! - [`TokenCache`]: check-and-refresh of the single token a client holds

mod cache;
mod token;

pub use cache::TokenCache;
pub use token::{AccessToken, DEFAULT_EXPIRES_IN_SECS, EXPIRY_MARGIN_SECS};
