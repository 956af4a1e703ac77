//! Hotel search tools

use std::sync::Arc;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::info;
use crate::Result;
use crate::amadeus::{AmadeusClient, HotelListSearch, HotelOfferSearch};
use crate::{format, lookup};
use super::{optional_list, optional_str, optional_u32, required_str, Tool};

/// List hotels around a city, without prices
pub struct SearchHotelsByCityTool {
    client: Arc<AmadeusClient>,
}

impl SearchHotelsByCityTool {
    pub fn new(client: Arc<AmadeusClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchHotelsByCityTool {
    fn name(&self) -> &str { "search_hotels_by_city" }
    fn description(&self) -> &str {
        "Search for hotels by city, returning basic hotel information rather than offers"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name or city code, e.g. 'london' or 'LON'"
                },
                "radius": {
                    "type": "integer",
                    "description": "Search radius (default 5)"
                },
                "radius_unit": {
                    "type": "string",
                    "enum": ["KM", "MILE"],
                    "description": "Radius unit (default KM)"
                },
                "amenities": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Amenities, e.g. ['SWIMMING_POOL', 'WIFI']"
                },
                "ratings": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Star ratings, e.g. ['4', '5']"
                }
            },
            "required": ["city"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let city = required_str(&params, "city")?;
        let city_code = lookup::resolve(city).city_code();

        let mut request = HotelListSearch::new(city_code.clone());
        if let Some(radius) = optional_u32(&params, "radius") {
            request.radius = radius;
        }
        if let Some(unit) = optional_str(&params, "radius_unit") {
            request.radius_unit = unit.to_uppercase();
        }
        request.amenities = optional_list(&params, "amenities");
        request.ratings = optional_list(&params, "ratings");

        info!(
            "Search hotels by city: city={}, radius={}{}",
            city, request.radius, request.radius_unit
        );
        let result = self.client.search_hotels_by_city(&request).await;

        Ok(format::hotel_list(
            city,
            &city_code,
            request.radius,
            &request.radius_unit,
            &result,
        ))
    }
}

/// Dated offers for the known hotels of a city
pub struct SearchHotelsTool {
    client: Arc<AmadeusClient>,
}

impl SearchHotelsTool {
    pub fn new(client: Arc<AmadeusClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchHotelsTool {
    fn name(&self) -> &str { "search_hotels" }
    fn description(&self) -> &str {
        "Search hotel offers in a city for specific check-in and check-out dates"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {
                    "type": "string",
                    "description": "City name or city code, e.g. 'london' or 'LON'"
                },
                "check_in_date": {
                    "type": "string",
                    "description": "Check-in date in YYYY-MM-DD format"
                },
                "check_out_date": {
                    "type": "string",
                    "description": "Check-out date in YYYY-MM-DD format, defaults to the day after check-in"
                },
                "adults": {
                    "type": "integer",
                    "description": "Adults per room (default 1)"
                },
                "room_quantity": {
                    "type": "integer",
                    "description": "Number of rooms (default 1)"
                },
                "price_range": {
                    "type": "string",
                    "description": "Price range, e.g. '100-200'; requires currency"
                },
                "currency": {
                    "type": "string",
                    "description": "Currency code, e.g. 'USD' or 'EUR'"
                },
                "board_type": {
                    "type": "string",
                    "description": "ROOM_ONLY, BREAKFAST, HALF_BOARD, FULL_BOARD or ALL_INCLUSIVE"
                }
            },
            "required": ["city", "check_in_date"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let city = required_str(&params, "city")?;
        let check_in = required_str(&params, "check_in_date")?;

        info!(
            "Search hotels: city={}, check_in_date={}, check_out_date={:?}",
            city,
            check_in,
            optional_str(&params, "check_out_date")
        );

        let hotel_ids = lookup::resolve(city).hotel_ids();
        if hotel_ids.is_empty() {
            return Ok(format!(
                "No hotel information found for city '{}'. Please use major cities like London, Paris, New York, etc.",
                city
            ));
        }

        let mut request = HotelOfferSearch::new(hotel_ids, check_in);
        request.check_out_date = optional_str(&params, "check_out_date");
        if let Some(adults) = optional_u32(&params, "adults") {
            request.adults = adults;
        }
        if let Some(rooms) = optional_u32(&params, "room_quantity") {
            request.room_quantity = rooms;
        }
        request.price_range = optional_str(&params, "price_range");
        request.currency = optional_str(&params, "currency");
        request.board_type = optional_str(&params, "board_type").map(|b| lookup::board_type(&b));

        let check_out = match request.effective_check_out() {
            Ok(date) => date,
            Err(e) => return Ok(format!("An error occurred while searching for hotels: {}", e)),
        };
        request.check_out_date = Some(check_out.clone());

        let result = self.client.search_hotel_offers(&request).await;
        Ok(format::hotel_offers(city, check_in, &check_out, &result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmadeusConfig;
    use crate::error::Error;
    use httpmock::Method::{GET, POST};
    use httpmock::MockServer;

    async fn client_for(server: &MockServer) -> Arc<AmadeusClient> {
        server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/security/oauth2/token");
                then.status(200).body(r#"{"access_token": "tok", "expires_in": 1799}"#);
            })
            .await;
        let config = AmadeusConfig {
            client_id: "id".to_string(),
            client_secret: "secret".to_string(),
            base_url: Some(server.base_url()),
            ..AmadeusConfig::default()
        };
        Arc::new(AmadeusClient::new(&config).unwrap())
    }

    #[tokio::test]
    async fn test_city_without_hotel_ids_skips_provider() {
        let server = MockServer::start_async().await;
        let offers = server
            .mock_async(|when, then| {
                when.method(GET).path("/v3/shopping/hotel-offers");
                then.status(200).body(r#"{"data": []}"#);
            })
            .await;
        let tool = SearchHotelsTool::new(client_for(&server).await);

        for city in ["Berlin", "Atlantis"] {
            let text = tool
                .execute(json!({"city": city, "check_in_date": "2025-07-01"}))
                .await
                .unwrap();
            assert_eq!(
                text,
                format!("No hotel information found for city '{}'. Please use major cities like London, Paris, New York, etc.", city)
            );
        }
        assert_eq!(offers.hits_async().await, 0);
    }

    #[tokio::test]
    async fn test_search_hotels_maps_arguments() {
        let server = MockServer::start_async().await;
        let client = client_for(&server).await;
        let offers = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v3/shopping/hotel-offers")
                    .query_param("hotelIds", "PARPARHT,HSPARPDG")
                    .query_param("checkOutDate", "2025-07-02")
                    .query_param("boardType", "BREAKFAST")
                    .query_param("adults", "2");
                then.status(200).body(
                    r#"{"data": [{"hotel": {"name": "Le Grand", "hotelId": "PARPARHT"}, "available": true,
                        "offers": [{"price": {"total": "300", "currency": "EUR"}}]}]}"#,
                );
            })
            .await;

        let tool = SearchHotelsTool::new(client);
        let text = tool
            .execute(json!({
                "city": "Paris",
                "check_in_date": "2025-07-01",
                "adults": 2,
                "board_type": "breakfast"
            }))
            .await
            .unwrap();

        offers.assert_async().await;
        assert!(text.starts_with("Found 1 hotels in Paris from 2025-07-01 to 2025-07-02"));
        assert!(text.contains("  - Price: 300 EUR"));
    }

    #[tokio::test]
    async fn test_search_hotels_invalid_date() {
        let server = MockServer::start_async().await;
        let tool = SearchHotelsTool::new(client_for(&server).await);
        let text = tool
            .execute(json!({"city": "London", "check_in_date": "next friday"}))
            .await
            .unwrap();
        assert!(text.starts_with("An error occurred while searching for hotels:"));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let server = MockServer::start_async().await;
        let tool = SearchHotelsTool::new(client_for(&server).await);
        let err = tool.execute(json!({"city": "London"})).await.unwrap_err();
        assert!(matches!(err, Error::Tool(ref msg) if msg.contains("check_in_date")));
    }

    #[tokio::test]
    async fn test_search_by_city_unknown_code_passthrough() {
        let server = MockServer::start_async().await;
        let client = client_for(&server).await;
        let hotels = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/reference-data/locations/hotels/by-city")
                    .query_param("cityCode", "ROM")
                    .query_param("radius", "10")
                    .query_param("radiusUnit", "MILE")
                    .query_param("ratings", "4,5");
                then.status(200).body(r#"{"data": []}"#);
            })
            .await;

        let tool = SearchHotelsByCityTool::new(client);
        let text = tool
            .execute(json!({"city": "rom", "radius": 10, "radius_unit": "mile", "ratings": ["4", "5"]}))
            .await
            .unwrap();

        hotels.assert_async().await;
        assert_eq!(
            text,
            "No hotels found in city 'rom' (ROM). Please try other cities or increase search radius."
        );
    }

    #[tokio::test]
    async fn test_search_by_city_provider_error() {
        let server = MockServer::start_async().await;
        let client = client_for(&server).await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/reference-data/locations/hotels/by-city");
                then.status(500).body("upstream down");
            })
            .await;

        let tool = SearchHotelsByCityTool::new(client);
        let text = tool.execute(json!({"city": "London"})).await.unwrap();
        assert_eq!(text, "Hotel search failed: upstream down");
    }
}
