//! Flight search tool

use std::sync::Arc;
use async_trait::async_trait;
use serde_json::{json, Value};
use crate::Result;
use crate::amadeus::{AmadeusClient, FlightSearch};
use crate::format;
use super::{optional_str, optional_u32, required_str, Tool};

pub struct SearchFlightsTool {
    client: Arc<AmadeusClient>,
}

impl SearchFlightsTool {
    pub fn new(client: Arc<AmadeusClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SearchFlightsTool {
    fn name(&self) -> &str { "search_flights" }
    fn description(&self) -> &str {
        "Search flight offers between two airports or cities (IATA codes) on a date"
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "origin": {
                    "type": "string",
                    "description": "Origin IATA code, e.g. 'MAD'"
                },
                "destination": {
                    "type": "string",
                    "description": "Destination IATA code, e.g. 'BCN'"
                },
                "departure_date": {
                    "type": "string",
                    "description": "Departure date in YYYY-MM-DD format"
                },
                "return_date": {
                    "type": "string",
                    "description": "Return date in YYYY-MM-DD format for round trips"
                },
                "adults": {
                    "type": "integer",
                    "description": "Number of adults (default 1)"
                },
                "max": {
                    "type": "integer",
                    "description": "Maximum number of offers (default 3)"
                }
            },
            "required": ["origin", "destination", "departure_date"]
        })
    }

    async fn execute(&self, params: Value) -> Result<String> {
        let origin = required_str(&params, "origin")?.to_uppercase();
        let destination = required_str(&params, "destination")?.to_uppercase();
        let date = required_str(&params, "departure_date")?;

        let mut request = FlightSearch::new(origin.clone(), destination.clone(), date);
        request.return_date = optional_str(&params, "return_date");
        if let Some(adults) = optional_u32(&params, "adults") {
            request.adults = adults;
        }
        if let Some(max) = optional_u32(&params, "max") {
            request.max_results = max;
        }

        let result = self.client.search_flights(&request).await;
        Ok(format::flight_offers(&origin, &destination, &result))
    }
}
