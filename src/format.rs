//! Plain-text rendering of provider results
//!
//! Output is meant for direct display (terminal, LLM tool results). Records
//! get 1-based labels and are separated by `---` lines.

use serde_json::Value;
use crate::amadeus::SearchResult;

const DESCRIPTION_LIMIT: usize = 100;
const SEPARATOR: &str = "---\n\n";

static NULL: Value = Value::Null;

/// Render a JSON leaf without quotes, or `default` when absent or null
fn text(value: Option<&Value>, default: &str) -> String {
    match value {
        None | Some(Value::Null) => default.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn field(value: &Value, path: &[&str], default: &str) -> String {
    let mut current = value;
    for key in path {
        match current.get(*key) {
            Some(next) => current = next,
            None => return default.to_string(),
        }
    }
    text(Some(current), default)
}

/// Cut to `limit` characters, appending "..." only when something was cut
pub fn truncate(s: &str, limit: usize) -> String {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Hotels around a city
pub fn hotel_list(city: &str, city_code: &str, radius: u32, unit: &str, result: &SearchResult) -> String {
    if let Some(ref err) = result.error {
        return format!("Hotel search failed: {}", err);
    }
    if result.is_empty() {
        return format!(
            "No hotels found in city '{}' ({}). Please try other cities or increase search radius.",
            city, city_code
        );
    }

    let mut out = format!(
        "Found {} hotels near {} ({}) within {}{} radius:\n\n",
        result.len(),
        city,
        city_code,
        radius,
        unit
    );

    for (i, hotel) in result.data.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(&format!("Hotel {}: {}\n", i + 1, field(hotel, &["name"], "Unknown Hotel")));
        out.push_str(&format!("ID: {}\n", field(hotel, &["hotelId"], "Unknown ID")));
        out.push_str(&format!("Chain Code: {}\n", field(hotel, &["chainCode"], "")));
        out.push_str(&format!("IATA Code: {}\n", field(hotel, &["iataCode"], "")));
        out.push_str(&format!(
            "Location: Latitude {}, Longitude {}\n",
            field(hotel, &["geoCode", "latitude"], "Unknown"),
            field(hotel, &["geoCode", "longitude"], "Unknown")
        ));
        out.push_str(&format!("Country: {}\n", field(hotel, &["address", "countryCode"], "")));
        out.push_str(&format!(
            "Distance: {} {}\n\n",
            field(hotel, &["distance", "value"], "Unknown"),
            field(hotel, &["distance", "unit"], "KM")
        ));
    }

    out
}

/// Dated hotel offers
pub fn hotel_offers(city: &str, check_in: &str, check_out: &str, result: &SearchResult) -> String {
    if let Some(ref err) = result.error {
        return format!("Hotel search failed: {}", err);
    }
    if result.is_empty() {
        return "No hotel offers found matching your criteria. Please try different dates or cities."
            .to_string();
    }

    let mut out = format!(
        "Found {} hotels in {} from {} to {}:\n\n",
        result.len(),
        city,
        check_in,
        check_out
    );

    let last = result.len() - 1;
    for (i, entry) in result.data.iter().enumerate() {
        let hotel = entry.get("hotel").unwrap_or(&NULL);
        out.push_str(&format!(
            "Hotel {}: {} ({})\n",
            i + 1,
            field(hotel, &["name"], "Unknown Hotel"),
            field(hotel, &["hotelId"], "Unknown ID")
        ));
        out.push_str(&format!("City Code: {}\n", field(hotel, &["cityCode"], "")));

        let available = entry.get("available").and_then(Value::as_bool).unwrap_or(false);
        if !available {
            out.push_str("Status: Sold out\n\n");
            continue;
        }

        let offers = entry
            .get("offers")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        out.push_str(&format!("Found {} offers:\n", offers.len()));

        for (j, offer) in offers.iter().enumerate() {
            let description = field(offer, &["room", "description", "text"], "No description");
            out.push_str(&format!("  Offer {}:\n", j + 1));
            out.push_str(&format!("  - Room Type: {}\n", field(offer, &["room", "type"], "Unknown")));
            out.push_str(&format!(
                "  - Description: {}\n",
                truncate(&description, DESCRIPTION_LIMIT)
            ));
            out.push_str(&format!(
                "  - Price: {} {}\n",
                field(offer, &["price", "total"], "Unknown"),
                field(offer, &["price", "currency"], "EUR")
            ));
            out.push_str(&format!(
                "  - Payment Type: {}\n",
                field(offer, &["policies", "paymentType"], "Unknown")
            ));
            out.push_str(&format!(
                "  - Cancellation Policy: {}\n\n",
                field(
                    offer,
                    &["policies", "cancellation", "description", "text"],
                    "No cancellation policy information"
                )
            ));
        }

        // Sold-out entries skip this via `continue` above
        if i < last {
            out.push_str(SEPARATOR);
        }
    }

    out
}

/// Flight offers with their itineraries; carrier names come from the
/// result's `dictionaries.carriers` when present.
pub fn flight_offers(origin: &str, destination: &str, result: &SearchResult) -> String {
    if let Some(ref err) = result.error {
        return format!("Flight search failed: {}", err);
    }
    if result.is_empty() {
        return format!(
            "No flights found from {} to {}. Please try different dates or airports.",
            origin, destination
        );
    }

    let carriers = result
        .dictionaries
        .as_ref()
        .and_then(|d| d.get("carriers"));
    let carrier_name = |code: &str| {
        carriers
            .and_then(|c| c.get(code))
            .and_then(Value::as_str)
            .map(|name| format!("{} ({})", name, code))
            .unwrap_or_else(|| code.to_string())
    };

    let mut out = format!(
        "Found {} flight offers from {} to {}:\n\n",
        result.len(),
        origin,
        destination
    );

    for (i, offer) in result.data.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(&format!(
            "Offer {}: {} {}\n",
            i + 1,
            field(offer, &["price", "total"], "Unknown"),
            field(offer, &["price", "currency"], "EUR")
        ));

        let itineraries = offer
            .get("itineraries")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for (j, itinerary) in itineraries.iter().enumerate() {
            out.push_str(&format!(
                "  Itinerary {} (duration {}):\n",
                j + 1,
                field(itinerary, &["duration"], "Unknown")
            ));
            let segments = itinerary
                .get("segments")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or_default();
            for segment in segments {
                let carrier = field(segment, &["carrierCode"], "");
                out.push_str(&format!(
                    "  - {}{} {}: {} {} -> {} {}\n",
                    carrier,
                    field(segment, &["number"], ""),
                    carrier_name(&carrier),
                    field(segment, &["departure", "iataCode"], "?"),
                    field(segment, &["departure", "at"], ""),
                    field(segment, &["arrival", "iataCode"], "?"),
                    field(segment, &["arrival", "at"], "")
                ));
            }
        }
        out.push('\n');
    }

    out
}

/// Airline check-in links
pub fn checkin_links(airline_code: &str, result: &SearchResult) -> String {
    if let Some(ref err) = result.error {
        return format!("Check-in link lookup failed: {}", err);
    }
    if result.is_empty() {
        return format!("No check-in links found for airline {}.", airline_code);
    }

    let mut out = format!("Check-in links for {}:\n", airline_code);
    for link in &result.data {
        out.push_str(&format!(
            "- {}: {}\n",
            field(link, &["channel"], "All"),
            field(link, &["href"], "")
        ));
    }
    out
}

/// Airport and city locations
pub fn locations(keyword: &str, result: &SearchResult) -> String {
    if let Some(ref err) = result.error {
        return format!("Location search failed: {}", err);
    }
    if result.is_empty() {
        return format!("No locations found for '{}'.", keyword);
    }

    let mut out = format!("Found {} locations for '{}':\n", result.len(), keyword);
    for location in &result.data {
        out.push_str(&format!(
            "- {} {} ({}, {})\n",
            field(location, &["iataCode"], "???"),
            field(location, &["name"], "Unknown"),
            field(location, &["address", "cityName"], ""),
            field(location, &["address", "countryCode"], "")
        ));
    }
    out
}
