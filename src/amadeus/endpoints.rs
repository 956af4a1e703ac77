//! Provider hosts and endpoint paths

use serde::{Deserialize, Serialize};
use url::Url;
use crate::Result;
use crate::error::Error;

const TEST_HOST: &str = "https://test.api.amadeus.com";
const PRODUCTION_HOST: &str = "https://api.amadeus.com";

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const LOCATIONS_PATH: &str = "/v1/reference-data/locations";
const FLIGHT_OFFERS_PATH: &str = "/v2/shopping/flight-offers";
const CHECKIN_LINKS_PATH: &str = "/v2/reference-data/urls/checkin-links";
const HOTELS_BY_CITY_PATH: &str = "/v1/reference-data/locations/hotels/by-city";
const HOTEL_OFFERS_PATH: &str = "/v3/shopping/hotel-offers";

/// Provider environment, selected by the `AMADEUS_HOST` flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Test,
    Production,
}

impl Environment {
    /// "production" selects the live host; anything else is the test host.
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Test
        }
    }

    pub fn host(&self) -> &'static str {
        match self {
            Environment::Test => TEST_HOST,
            Environment::Production => PRODUCTION_HOST,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

/// Absolute URLs for every provider endpoint the client calls
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(base: &str) -> Result<Self> {
        let parsed = Url::parse(base)
            .map_err(|e| Error::Config(format!("Invalid provider base URL {:?}: {}", base, e)))?;
        Ok(Self {
            base: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    pub fn for_environment(env: Environment) -> Self {
        Self {
            base: env.host().to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn join(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn token(&self) -> String {
        self.join(TOKEN_PATH)
    }

    pub fn locations(&self) -> String {
        self.join(LOCATIONS_PATH)
    }

    pub fn flight_offers(&self) -> String {
        self.join(FLIGHT_OFFERS_PATH)
    }

    pub fn checkin_links(&self) -> String {
        self.join(CHECKIN_LINKS_PATH)
    }

    pub fn hotels_by_city(&self) -> String {
        self.join(HOTELS_BY_CITY_PATH)
    }

    pub fn hotel_offers(&self) -> String {
        self.join(HOTEL_OFFERS_PATH)
    }
}
