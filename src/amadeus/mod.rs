//! Amadeus travel API integration
//!
//! - [`AmadeusClient`]: authenticated calls to the search endpoints
//! - request types that render provider query parameters
//! - [`SearchResult`]: the uniform success/error shape

mod client;
mod endpoints;
mod params;
mod result;

pub use client::{http_client, AmadeusClient};
pub use endpoints::{Endpoints, Environment};
pub use params::{
    next_day, AirportSearch, CheckinLinksRequest, FlightSearch, HotelListSearch, HotelOfferSearch,
    QueryPairs,
};
pub use result::{SearchResult, AUTH_FAILURE_MESSAGE};
