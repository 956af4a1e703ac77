//! Wayfarer - travel search backend over the Amadeus API
//!
//! This library provides an authenticated Amadeus client, city lookup
//! tables, text formatting of results, LLM tools and an agent loop for
//! natural-language queries, and an HTTP API exposing all of it.

pub mod agent;
pub mod amadeus;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod format;
pub mod lookup;
pub mod tools;
pub mod ui;

pub use error::{Error, Result};
