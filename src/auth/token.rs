//! Bearer token with expiry

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Seconds shaved off the advertised lifetime so a token is never presented
/// right at its expiry.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// Lifetime assumed when the provider omits `expires_in`.
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 1800;

/// An access token obtained through the client-credentials exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Build from a grant issued at `issued_at`, applying the early-refresh
    /// margin. `None` when the resulting expiry is not representable.
    pub fn from_grant(
        value: impl Into<String>,
        expires_in_secs: i64,
        issued_at: DateTime<Utc>,
    ) -> Option<Self> {
        let lifetime = Duration::try_seconds(expires_in_secs.checked_sub(EXPIRY_MARGIN_SECS)?)?;
        let expires_at = issued_at.checked_add_signed(lifetime)?;
        Some(Self::new(value, expires_at))
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A token is usable iff `now < expires_at`
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    pub fn is_usable(&self) -> bool {
        self.is_usable_at(Utc::now())
    }
}

/// OAuth2 token endpoint response
#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_applies_margin() {
        let now = Utc::now();
        let token = AccessToken::from_grant("abc", 1799, now).unwrap();
        assert_eq!(token.expires_at(), now + Duration::seconds(1739));
        assert!(token.is_usable_at(now));
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let token = AccessToken::new("abc", now);
        assert!(!token.is_usable_at(now));
        assert!(token.is_usable_at(now - Duration::seconds(1)));
    }

    #[test]
    fn test_short_grant_is_immediately_stale() {
        let now = Utc::now();
        let token = AccessToken::from_grant("abc", 30, now).unwrap();
        assert!(!token.is_usable_at(now));
    }

    #[test]
    fn test_out_of_range_grant_is_rejected() {
        let now = Utc::now();
        assert!(AccessToken::from_grant("abc", i64::MAX, now).is_none());
        assert!(AccessToken::from_grant("abc", i64::MIN, now).is_none());
    }

    #[test]
    fn test_token_response_without_expiry() {
        let resp: TokenResponse =
            serde_json::from_str(r#"{"access_token": "xyz", "token_type": "Bearer"}"#).unwrap();
        assert_eq!(resp.access_token, "xyz");
        assert!(resp.expires_in.is_none());
    }
}
