//! TokenCache - client-credentials token holder
//!
//! Holds at most one bearer token per provider client. The check-and-refresh
//! sequence runs under a single async mutex, so callers arriving during an
//! expired window wait for the one in-flight exchange instead of each
//! starting their own.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::Result;
use crate::error::Error;
use super::token::{AccessToken, TokenResponse, DEFAULT_EXPIRES_IN_SECS};

/// Client-credentials exchange request
#[derive(Debug, Serialize)]
struct ClientCredentialsRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
}

/// Caches the provider access token and refreshes it on demand
pub struct TokenCache {
    http_client: Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    slot: Mutex<Option<AccessToken>>,
    refreshes: AtomicUsize,
}

impl TokenCache {
    pub fn new(
        http_client: Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            slot: Mutex::new(None),
            refreshes: AtomicUsize::new(0),
        }
    }

    /// Return a usable access token, exchanging credentials when none is
    /// held or the held one has expired.
    pub async fn ensure_token(&self) -> Result<String> {
        let mut slot = self.slot.lock().await;

        if let Some(token) = slot.as_ref() {
            if token.is_usable() {
                tracing::debug!("Using cached access token");
                return Ok(token.value().to_string());
            }
        }

        info!("Getting new Amadeus API access token");
        let token = self.exchange().await?;
        let value = token.value().to_string();
        *slot = Some(token);
        Ok(value)
    }

    /// Number of exchange attempts made so far
    pub fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }

    async fn exchange(&self) -> Result<AccessToken> {
        self.refreshes.fetch_add(1, Ordering::SeqCst);

        let request = ClientCredentialsRequest {
            grant_type: "client_credentials",
            client_id: &self.client_id,
            client_secret: &self.client_secret,
        };

        let issued_at = Utc::now();
        let response = self.http_client
            .post(&self.token_url)
            .form(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Error getting access token: {}", e);
                Error::Auth(e.to_string())
            })?;

        let status = response.status();
        if status.as_u16() != 200 {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Failed to get access token, status code: {}, error: {}",
                status.as_u16(),
                error_text
            );
            return Err(Error::Auth(error_text));
        }

        let token_response: TokenResponse = response.json().await.map_err(|e| {
            error!("Error parsing access token response: {}", e);
            Error::Auth(e.to_string())
        })?;

        let expires_in = token_response.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        info!("Access token obtained successfully, valid for: {} seconds", expires_in);

        AccessToken::from_grant(token_response.access_token, expires_in, issued_at).ok_or_else(|| {
            error!("Access token lifetime out of range: {}", expires_in);
            Error::Auth(format!("invalid expires_in: {}", expires_in))
        })
    }
}
