//! Flight routes

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::amadeus::{AirportSearch, CheckinLinksRequest, FlightSearch, SearchResult};
use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights/airports", get(search_airports))
        .route("/api/flights/search", get(search_flights))
        .route("/api/flights/checkin-links", get(checkin_links))
}

fn default_subtype() -> String {
    "AIRPORT".to_string()
}

fn default_adults() -> u32 {
    1
}

fn default_max() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
pub struct AirportsQuery {
    pub keyword: String,
    #[serde(default = "default_subtype")]
    pub subtype: String,
}

#[derive(Debug, Deserialize)]
pub struct FlightSearchQuery {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default = "default_max")]
    pub max: u32,
}

#[derive(Debug, Deserialize)]
pub struct CheckinLinksQuery {
    pub airline_code: String,
}

async fn search_airports(
    State(state): State<AppState>,
    Query(q): Query<AirportsQuery>,
) -> Json<SearchResult> {
    let mut request = AirportSearch::new(q.keyword);
    request.subtype = q.subtype;
    Json(state.amadeus.search_airports(&request).await)
}

async fn search_flights(
    State(state): State<AppState>,
    Query(q): Query<FlightSearchQuery>,
) -> Json<SearchResult> {
    let mut request = FlightSearch::new(q.origin, q.destination, q.departure_date);
    request.return_date = q.return_date.filter(|d| !d.is_empty());
    request.adults = q.adults;
    request.max_results = q.max;
    Json(state.amadeus.search_flights(&request).await)
}

async fn checkin_links(
    State(state): State<AppState>,
    Query(q): Query<CheckinLinksQuery>,
) -> Json<SearchResult> {
    Json(state.amadeus.get_checkin_links(&CheckinLinksRequest::new(q.airline_code)).await)
}
