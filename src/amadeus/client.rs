//! Amadeus provider client
//!
//! Every operation follows the same template: obtain a token, render the
//! request's query, issue one GET, and normalize the outcome into a
//! [`SearchResult`]. Nothing is retried.

use reqwest::Client;
use serde_json::Value;
use tracing::{error, info};

use crate::Result;
use crate::auth::TokenCache;
use crate::config::AmadeusConfig;
use crate::error::Error;
use super::endpoints::Endpoints;
use super::params::{
    AirportSearch, CheckinLinksRequest, FlightSearch, HotelListSearch, HotelOfferSearch, QueryPairs,
};
use super::result::SearchResult;

/// HTTP client that does not keep idle connections for reuse, so each
/// provider call opens its own connection.
pub fn http_client() -> Result<Client> {
    let client = Client::builder()
        .pool_max_idle_per_host(0)
        .user_agent(concat!("wayfarer/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Authenticated client for the provider's search endpoints
pub struct AmadeusClient {
    http: Client,
    endpoints: Endpoints,
    tokens: TokenCache,
}

impl AmadeusClient {
    /// Create a client from configuration. Missing credentials are allowed;
    /// calls then fail at the token step.
    pub fn new(config: &AmadeusConfig) -> Result<Self> {
        let endpoints = match config.base_url.as_deref() {
            Some(base) => Endpoints::new(base)?,
            None => Endpoints::for_environment(config.environment),
        };

        info!(
            "Initializing Amadeus API client, environment: {}, host: {}",
            config.environment.as_str(),
            endpoints.base()
        );

        let http = http_client()?;
        let tokens = TokenCache::new(
            http.clone(),
            endpoints.token(),
            config.client_id.clone(),
            config.client_secret.clone(),
        );

        Ok(Self {
            http,
            endpoints,
            tokens,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn tokens(&self) -> &TokenCache {
        &self.tokens
    }

    /// Search locations by keyword
    pub async fn search_airports(&self, request: &AirportSearch) -> SearchResult {
        SearchResult::from_outcome(self.try_search_airports(request).await)
    }

    pub async fn try_search_airports(&self, request: &AirportSearch) -> Result<SearchResult> {
        info!(
            "Searching airports, keyword: {}, type: {}",
            request.keyword, request.subtype
        );
        self.get("airport search", &self.endpoints.locations(), || Ok(request.query()))
            .await
    }

    /// Search flight offers
    pub async fn search_flights(&self, request: &FlightSearch) -> SearchResult {
        SearchResult::from_outcome(self.try_search_flights(request).await)
    }

    pub async fn try_search_flights(&self, request: &FlightSearch) -> Result<SearchResult> {
        info!(
            "Searching flights from {} to {}, date: {}, adults: {}, max results: {}",
            request.origin, request.destination, request.departure_date, request.adults,
            request.max_results
        );
        self.get("flight search", &self.endpoints.flight_offers(), || Ok(request.query()))
            .await
    }

    /// Get airline check-in links
    pub async fn get_checkin_links(&self, request: &CheckinLinksRequest) -> SearchResult {
        SearchResult::from_outcome(self.try_get_checkin_links(request).await)
    }

    pub async fn try_get_checkin_links(&self, request: &CheckinLinksRequest) -> Result<SearchResult> {
        info!("Getting airline check-in links, airline code: {}", request.airline_code);
        self.get("check-in link retrieval", &self.endpoints.checkin_links(), || Ok(request.query()))
            .await
    }

    /// List hotels around a city code
    pub async fn search_hotels_by_city(&self, request: &HotelListSearch) -> SearchResult {
        SearchResult::from_outcome(self.try_search_hotels_by_city(request).await)
    }

    pub async fn try_search_hotels_by_city(&self, request: &HotelListSearch) -> Result<SearchResult> {
        info!(
            "Searching hotels by city, city code: {}, radius: {}{}",
            request.city_code, request.radius, request.radius_unit
        );
        self.get("hotel search", &self.endpoints.hotels_by_city(), || Ok(request.query()))
            .await
    }

    /// Search dated offers for specific hotels
    pub async fn search_hotel_offers(&self, request: &HotelOfferSearch) -> SearchResult {
        SearchResult::from_outcome(self.try_search_hotel_offers(request).await)
    }

    pub async fn try_search_hotel_offers(&self, request: &HotelOfferSearch) -> Result<SearchResult> {
        info!(
            "Searching hotel offers, hotel IDs: {:?}, check-in date: {}, check-out date: {:?}",
            request.hotel_ids, request.check_in_date, request.check_out_date
        );
        self.get("hotel offer search", &self.endpoints.hotel_offers(), || request.query())
            .await
    }

    async fn get<F>(&self, label: &str, url: &str, build_query: F) -> Result<SearchResult>
    where
        F: FnOnce() -> Result<QueryPairs>,
    {
        let access_token = self.tokens.ensure_token().await.map_err(|e| {
            error!("Unable to get access token, {} failed", label);
            e
        })?;

        let query = build_query().map_err(|e| {
            error!("Invalid {} request: {}", label, e);
            e
        })?;

        let response = self.http
            .get(url)
            .bearer_auth(&access_token)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("Error during {}: {}", label, e);
                Error::Http(e)
            })?;

        let status = response.status();
        if status.as_u16() != 200 {
            let error_text = response.text().await?;
            error!(
                "{} failed, status code: {}, error: {}",
                label,
                status.as_u16(),
                error_text
            );
            return Err(Error::Provider(error_text));
        }

        let body: Value = response.json().await.map_err(|e| {
            error!("Error during {}: {}", label, e);
            Error::Http(e)
        })?;

        let result = SearchResult::from_body(body);
        info!("{}: found {} records", label, result.len());
        Ok(result)
    }
}
