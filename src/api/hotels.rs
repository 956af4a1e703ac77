//! Hotel routes

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::amadeus::{HotelListSearch, HotelOfferSearch, SearchResult};
use crate::lookup;
use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/hotels/by-city", get(hotels_by_city))
        .route("/api/hotels/offers", get(hotel_offers))
        .route("/api/hotels/cities", get(supported_cities))
}

fn default_radius() -> u32 {
    5
}

fn default_radius_unit() -> String {
    "KM".to_string()
}

fn default_hotel_source() -> String {
    "ALL".to_string()
}

fn default_one() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

/// Split a comma-separated query value
fn split_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub struct HotelsByCityQuery {
    pub city_code: String,
    #[serde(default = "default_radius")]
    pub radius: u32,
    #[serde(default = "default_radius_unit")]
    pub radius_unit: String,
    pub chain_codes: Option<String>,
    pub amenities: Option<String>,
    pub ratings: Option<String>,
    #[serde(default = "default_hotel_source")]
    pub hotel_source: String,
}

#[derive(Debug, Deserialize)]
pub struct HotelOffersQuery {
    /// Comma-separated hotel IDs
    pub hotel_ids: String,
    pub check_in_date: String,
    pub check_out_date: Option<String>,
    #[serde(default = "default_one")]
    pub adults: u32,
    #[serde(default = "default_one")]
    pub room_quantity: u32,
    pub price_range: Option<String>,
    pub currency: Option<String>,
    pub board_type: Option<String>,
    #[serde(default)]
    pub include_closed: bool,
    #[serde(default = "default_true")]
    pub best_rate_only: bool,
}

#[derive(Debug, Serialize)]
pub struct CityInfo {
    pub name: &'static str,
    pub code: String,
    pub has_hotels: bool,
}

#[derive(Debug, Serialize)]
pub struct SupportedCities {
    pub cities: Vec<CityInfo>,
    pub board_types: Vec<&'static str>,
}

async fn hotels_by_city(
    State(state): State<AppState>,
    Query(q): Query<HotelsByCityQuery>,
) -> Json<SearchResult> {
    let mut request = HotelListSearch::new(q.city_code);
    request.radius = q.radius;
    request.radius_unit = q.radius_unit;
    request.chain_codes = split_list(q.chain_codes);
    request.amenities = split_list(q.amenities);
    request.ratings = split_list(q.ratings);
    request.hotel_source = q.hotel_source;
    Json(state.amadeus.search_hotels_by_city(&request).await)
}

async fn hotel_offers(
    State(state): State<AppState>,
    Query(q): Query<HotelOffersQuery>,
) -> Json<SearchResult> {
    let mut request = HotelOfferSearch::new(split_list(Some(q.hotel_ids)), q.check_in_date);
    request.check_out_date = q.check_out_date;
    request.adults = q.adults;
    request.room_quantity = q.room_quantity;
    request.price_range = q.price_range;
    request.currency = q.currency;
    request.board_type = q.board_type.map(|b| lookup::board_type(&b));
    request.include_closed = q.include_closed;
    request.best_rate_only = q.best_rate_only;
    Json(state.amadeus.search_hotel_offers(&request).await)
}

async fn supported_cities() -> Json<SupportedCities> {
    let with_hotels = lookup::cities_with_hotels();
    let cities = lookup::supported_cities()
        .into_iter()
        .map(|name| CityInfo {
            name,
            code: lookup::resolve(name).city_code(),
            has_hotels: with_hotels.contains(&name),
        })
        .collect();

    Json(SupportedCities {
        cities,
        board_types: lookup::supported_board_types(),
    })
}
