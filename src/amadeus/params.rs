//! Search requests and their rendering to provider query parameters

use chrono::NaiveDate;
use crate::Result;
use crate::error::Error;

/// Query pairs in the order they are sent
pub type QueryPairs = Vec<(&'static str, String)>;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The day after `date` (`YYYY-MM-DD`)
pub fn next_day(date: &str) -> Result<String> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|e| Error::Provider(format!("Invalid date {:?}: {}", date, e)))?;
    let next = parsed
        .succ_opt()
        .ok_or_else(|| Error::Provider(format!("No day after {}", date)))?;
    Ok(next.format(DATE_FORMAT).to_string())
}

/// Lowercase literal form the provider expects for booleans
fn bool_flag(value: bool) -> String {
    value.to_string()
}

fn push_list(query: &mut QueryPairs, key: &'static str, values: &[String]) {
    if !values.is_empty() {
        query.push((key, values.join(",")));
    }
}

/// Location search (airports by default)
#[derive(Debug, Clone)]
pub struct AirportSearch {
    pub keyword: String,
    pub subtype: String,
}

impl AirportSearch {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            subtype: "AIRPORT".to_string(),
        }
    }

    pub fn query(&self) -> QueryPairs {
        vec![
            ("keyword", self.keyword.clone()),
            ("subType", self.subtype.clone()),
        ]
    }
}

/// One-way (optionally return) flight offer search
#[derive(Debug, Clone)]
pub struct FlightSearch {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    pub adults: u32,
    pub max_results: u32,
    pub non_stop: Option<bool>,
    pub currency: Option<String>,
    pub travel_class: Option<String>,
}

impl FlightSearch {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date: departure_date.into(),
            return_date: None,
            adults: 1,
            max_results: 3,
            non_stop: None,
            currency: None,
            travel_class: None,
        }
    }

    pub fn query(&self) -> QueryPairs {
        let mut query = vec![
            ("originLocationCode", self.origin.clone()),
            ("destinationLocationCode", self.destination.clone()),
            ("departureDate", self.departure_date.clone()),
            ("adults", self.adults.to_string()),
            ("max", self.max_results.to_string()),
        ];
        if let Some(ref date) = self.return_date {
            query.push(("returnDate", date.clone()));
        }
        if let Some(non_stop) = self.non_stop {
            query.push(("nonStop", bool_flag(non_stop)));
        }
        if let Some(ref currency) = self.currency {
            query.push(("currencyCode", currency.clone()));
        }
        if let Some(ref class) = self.travel_class {
            query.push(("travelClass", class.clone()));
        }
        query
    }
}

/// Airline check-in links lookup
#[derive(Debug, Clone)]
pub struct CheckinLinksRequest {
    pub airline_code: String,
}

impl CheckinLinksRequest {
    pub fn new(airline_code: impl Into<String>) -> Self {
        Self {
            airline_code: airline_code.into(),
        }
    }

    pub fn query(&self) -> QueryPairs {
        vec![("airlineCode", self.airline_code.clone())]
    }
}

/// Hotel list around a city code
#[derive(Debug, Clone)]
pub struct HotelListSearch {
    pub city_code: String,
    pub radius: u32,
    pub radius_unit: String,
    pub chain_codes: Vec<String>,
    pub amenities: Vec<String>,
    pub ratings: Vec<String>,
    pub hotel_source: String,
}

impl HotelListSearch {
    pub fn new(city_code: impl Into<String>) -> Self {
        Self {
            city_code: city_code.into(),
            radius: 5,
            radius_unit: "KM".to_string(),
            chain_codes: Vec::new(),
            amenities: Vec::new(),
            ratings: Vec::new(),
            hotel_source: "ALL".to_string(),
        }
    }

    pub fn query(&self) -> QueryPairs {
        let mut query = vec![
            ("cityCode", self.city_code.clone()),
            ("radius", self.radius.to_string()),
            ("radiusUnit", self.radius_unit.clone()),
            ("hotelSource", self.hotel_source.clone()),
        ];
        push_list(&mut query, "chainCodes", &self.chain_codes);
        push_list(&mut query, "amenities", &self.amenities);
        push_list(&mut query, "ratings", &self.ratings);
        query
    }
}

/// Dated offer search for specific hotel IDs
#[derive(Debug, Clone)]
pub struct HotelOfferSearch {
    pub hotel_ids: Vec<String>,
    pub check_in_date: String,
    pub check_out_date: Option<String>,
    pub adults: u32,
    pub room_quantity: u32,
    pub price_range: Option<String>,
    pub currency: Option<String>,
    pub board_type: Option<String>,
    pub include_closed: bool,
    pub best_rate_only: bool,
}

impl HotelOfferSearch {
    pub fn new(hotel_ids: Vec<String>, check_in_date: impl Into<String>) -> Self {
        Self {
            hotel_ids,
            check_in_date: check_in_date.into(),
            check_out_date: None,
            adults: 1,
            room_quantity: 1,
            price_range: None,
            currency: None,
            board_type: None,
            include_closed: false,
            best_rate_only: true,
        }
    }

    /// Check-out date, defaulting to the day after check-in
    pub fn effective_check_out(&self) -> Result<String> {
        match self.check_out_date.as_deref().filter(|d| !d.is_empty()) {
            Some(date) => Ok(date.to_string()),
            None => next_day(&self.check_in_date),
        }
    }

    pub fn query(&self) -> Result<QueryPairs> {
        let mut query = vec![
            ("hotelIds", self.hotel_ids.join(",")),
            ("checkInDate", self.check_in_date.clone()),
            ("checkOutDate", self.effective_check_out()?),
            ("adults", self.adults.to_string()),
            ("roomQuantity", self.room_quantity.to_string()),
            ("bestRateOnly", bool_flag(self.best_rate_only)),
        ];

        // A price range is meaningless without its currency; send both or neither.
        if let (Some(range), Some(currency)) = (&self.price_range, &self.currency) {
            query.push(("priceRange", range.clone()));
            query.push(("currency", currency.clone()));
        }
        if let Some(ref board) = self.board_type {
            query.push(("boardType", board.clone()));
        }
        if self.include_closed {
            query.push(("includeClosed", bool_flag(true)));
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(query: &'a QueryPairs, key: &str) -> Option<&'a str> {
        query.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_next_day() {
        assert_eq!(next_day("2025-07-01").unwrap(), "2025-07-02");
        assert_eq!(next_day("2025-12-31").unwrap(), "2026-01-01");
        assert_eq!(next_day("2024-02-28").unwrap(), "2024-02-29");
        assert!(next_day("07/01/2025").is_err());
    }

    #[test]
    fn test_check_out_defaults_to_next_day() {
        let search = HotelOfferSearch::new(vec!["MCLONGHM".to_string()], "2025-07-01");
        let query = search.query().unwrap();
        assert_eq!(value(&query, "checkOutDate"), Some("2025-07-02"));
    }

    #[test]
    fn test_explicit_check_out_is_kept() {
        let mut search = HotelOfferSearch::new(vec!["MCLONGHM".to_string()], "2025-07-01");
        search.check_out_date = Some("2025-07-05".to_string());
        let query = search.query().unwrap();
        assert_eq!(value(&query, "checkOutDate"), Some("2025-07-05"));
    }

    #[test]
    fn test_invalid_check_in_is_provider_error() {
        let search = HotelOfferSearch::new(vec!["X".to_string()], "tomorrow");
        let err = search.query().unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
    }

    #[test]
    fn test_price_range_requires_currency() {
        let mut search = HotelOfferSearch::new(vec!["X".to_string()], "2025-07-01");
        search.price_range = Some("100-200".to_string());
        let query = search.query().unwrap();
        assert_eq!(value(&query, "priceRange"), None);
        assert_eq!(value(&query, "currency"), None);

        search.currency = Some("USD".to_string());
        let query = search.query().unwrap();
        assert_eq!(value(&query, "priceRange"), Some("100-200"));
        assert_eq!(value(&query, "currency"), Some("USD"));
    }

    #[test]
    fn test_currency_alone_is_dropped() {
        let mut search = HotelOfferSearch::new(vec!["X".to_string()], "2025-07-01");
        search.currency = Some("EUR".to_string());
        let query = search.query().unwrap();
        assert_eq!(value(&query, "currency"), None);
    }

    #[test]
    fn test_offer_lists_and_flags() {
        let mut search = HotelOfferSearch::new(
            vec!["MCLONGHM".to_string(), "HSLONROT".to_string()],
            "2025-07-01",
        );
        let query = search.query().unwrap();
        assert_eq!(value(&query, "hotelIds"), Some("MCLONGHM,HSLONROT"));
        assert_eq!(value(&query, "bestRateOnly"), Some("true"));
        assert_eq!(value(&query, "includeClosed"), None);

        search.best_rate_only = false;
        search.include_closed = true;
        let query = search.query().unwrap();
        assert_eq!(value(&query, "bestRateOnly"), Some("false"));
        assert_eq!(value(&query, "includeClosed"), Some("true"));
    }

    #[test]
    fn test_hotel_list_query() {
        let mut search = HotelListSearch::new("PAR");
        let query = search.query();
        assert_eq!(value(&query, "radius"), Some("5"));
        assert_eq!(value(&query, "radiusUnit"), Some("KM"));
        assert_eq!(value(&query, "hotelSource"), Some("ALL"));
        assert_eq!(value(&query, "amenities"), None);

        search.chain_codes = vec!["HL".to_string(), "MC".to_string()];
        search.ratings = vec!["4".to_string(), "5".to_string()];
        let query = search.query();
        assert_eq!(value(&query, "chainCodes"), Some("HL,MC"));
        assert_eq!(value(&query, "ratings"), Some("4,5"));
    }

    #[test]
    fn test_flight_query_defaults() {
        let search = FlightSearch::new("MAD", "BCN", "2025-07-01");
        let query = search.query();
        assert_eq!(value(&query, "originLocationCode"), Some("MAD"));
        assert_eq!(value(&query, "adults"), Some("1"));
        assert_eq!(value(&query, "max"), Some("3"));
        assert_eq!(value(&query, "nonStop"), None);
    }

    #[test]
    fn test_airport_query() {
        let query = AirportSearch::new("LON").query();
        assert_eq!(value(&query, "keyword"), Some("LON"));
        assert_eq!(value(&query, "subType"), Some("AIRPORT"));
    }
}
