//! Static city and board-type tables
//!
//! Cities are keyed by their normalized names and aliases (lowercase, no
//! spaces). A city always has a 3-letter provider code; only some cities
//! carry known hotel IDs.

/// One row of the city table
#[derive(Debug)]
pub struct CityEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub code: &'static str,
    pub hotel_ids: &'static [&'static str],
}

const CITIES: &[CityEntry] = &[
    CityEntry { name: "london", aliases: &["lon"], code: "LON", hotel_ids: &["MCLONGHM", "HSLONROT"] },
    CityEntry { name: "newyork", aliases: &["nyc"], code: "NYC", hotel_ids: &["NYNYCTSC", "NYCNYCHM"] },
    CityEntry { name: "paris", aliases: &["par"], code: "PAR", hotel_ids: &["PARPARHT", "HSPARPDG"] },
    CityEntry { name: "tokyo", aliases: &["tyo"], code: "TYO", hotel_ids: &["TYOPACTH", "TYOTYOKH"] },
    CityEntry { name: "beijing", aliases: &["pek"], code: "PEK", hotel_ids: &["PEKPEKFS", "PEKBEKRG"] },
    CityEntry { name: "shanghai", aliases: &["sha"], code: "SHA", hotel_ids: &["SHAPUDHD", "SHAPEKRG"] },
    CityEntry { name: "hongkong", aliases: &["hkg"], code: "HKG", hotel_ids: &["HKGHKGSH", "HKGHKGHR"] },
    CityEntry { name: "singapore", aliases: &["sin"], code: "SIN", hotel_ids: &["SINSINRH", "SINSINFS"] },
    CityEntry { name: "bangkok", aliases: &["bkk"], code: "BKK", hotel_ids: &["BKKBKKHB", "BKKBKKSH"] },
    CityEntry { name: "sydney", aliases: &["syd"], code: "SYD", hotel_ids: &["SYDSYDHP", "SYDSYDFS"] },
    CityEntry { name: "dubai", aliases: &["dxb"], code: "DXB", hotel_ids: &["DXBDUBCC", "DXBDUBIC"] },
    CityEntry { name: "losangeles", aliases: &["lax"], code: "LAX", hotel_ids: &["LAXLAXTL", "LAXBVRMC"] },
    CityEntry { name: "sanfrancisco", aliases: &["sfo"], code: "SFO", hotel_ids: &["SFOSFOLW", "SFOSFOSC"] },
    CityEntry { name: "berlin", aliases: &[], code: "BER", hotel_ids: &[] },
    CityEntry { name: "frankfurt", aliases: &[], code: "FRA", hotel_ids: &[] },
    CityEntry { name: "amsterdam", aliases: &[], code: "AMS", hotel_ids: &[] },
    CityEntry { name: "rome", aliases: &[], code: "ROM", hotel_ids: &[] },
    CityEntry { name: "madrid", aliases: &[], code: "MAD", hotel_ids: &[] },
    CityEntry { name: "barcelona", aliases: &[], code: "BCN", hotel_ids: &[] },
    CityEntry { name: "moscow", aliases: &[], code: "MOW", hotel_ids: &[] },
    CityEntry { name: "chicago", aliases: &[], code: "CHI", hotel_ids: &[] },
    CityEntry { name: "washington", aliases: &[], code: "WAS", hotel_ids: &[] },
    CityEntry { name: "boston", aliases: &[], code: "BOS", hotel_ids: &[] },
    CityEntry { name: "toronto", aliases: &[], code: "YTO", hotel_ids: &[] },
    CityEntry { name: "vancouver", aliases: &[], code: "YVR", hotel_ids: &[] },
    CityEntry { name: "montreal", aliases: &[], code: "YMQ", hotel_ids: &[] },
    CityEntry { name: "milan", aliases: &[], code: "MIL", hotel_ids: &[] },
    CityEntry { name: "vienna", aliases: &[], code: "VIE", hotel_ids: &[] },
];

const BOARD_TYPES: &[(&str, &str)] = &[
    ("room only", "ROOM_ONLY"),
    ("breakfast", "BREAKFAST"),
    ("half board", "HALF_BOARD"),
    ("full board", "FULL_BOARD"),
    ("all inclusive", "ALL_INCLUSIVE"),
];

/// Outcome of resolving a free-text city name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityResolution {
    Known {
        code: &'static str,
        hotel_ids: &'static [&'static str],
    },
    /// Not in the table; the raw input is kept so callers decide what to do
    Unknown { raw: String },
}

impl CityResolution {
    pub fn is_known(&self) -> bool {
        matches!(self, CityResolution::Known { .. })
    }

    /// Provider city code. Unknown cities pass through uppercased, which
    /// may not be a valid code.
    pub fn city_code(&self) -> String {
        match self {
            CityResolution::Known { code, .. } => code.to_string(),
            CityResolution::Unknown { raw } => raw.to_uppercase(),
        }
    }

    /// Known hotel IDs, empty for unknown cities and code-only cities
    pub fn hotel_ids(&self) -> Vec<String> {
        match self {
            CityResolution::Known { hotel_ids, .. } => {
                hotel_ids.iter().map(|id| id.to_string()).collect()
            }
            CityResolution::Unknown { .. } => Vec::new(),
        }
    }
}

fn normalize(city: &str) -> String {
    city.to_lowercase().replace(' ', "")
}

/// Resolve a city name or alias. Exact match only after normalization.
pub fn resolve(city: &str) -> CityResolution {
    let key = normalize(city);
    CITIES
        .iter()
        .find(|entry| entry.name == key || entry.aliases.contains(&key.as_str()))
        .map(|entry| CityResolution::Known {
            code: entry.code,
            hotel_ids: entry.hotel_ids,
        })
        .unwrap_or_else(|| CityResolution::Unknown {
            raw: city.trim().to_string(),
        })
}

/// Map a board-type phrase to its provider code; unrecognized values pass
/// through unchanged.
pub fn board_type(phrase: &str) -> String {
    let key = phrase.trim().to_lowercase();
    BOARD_TYPES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, code)| code.to_string())
        .unwrap_or_else(|| phrase.to_string())
}

/// Normalized names of every city in the table
pub fn supported_cities() -> Vec<&'static str> {
    CITIES.iter().map(|entry| entry.name).collect()
}

/// Cities with known hotel IDs
pub fn cities_with_hotels() -> Vec<&'static str> {
    CITIES
        .iter()
        .filter(|entry| !entry.hotel_ids.is_empty())
        .map(|entry| entry.name)
        .collect()
}

pub fn supported_board_types() -> Vec<&'static str> {
    BOARD_TYPES.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_city() {
        let resolved = resolve("London");
        assert_eq!(resolved.city_code(), "LON");
        assert_eq!(resolved.hotel_ids(), vec!["MCLONGHM", "HSLONROT"]);
    }

    #[test]
    fn test_resolve_normalizes_spaces_and_case() {
        assert_eq!(resolve("New York").city_code(), "NYC");
        assert_eq!(resolve("  SAN FRANCISCO").city_code(), "SFO");
        assert_eq!(resolve("Hong Kong").hotel_ids(), vec!["HKGHKGSH", "HKGHKGHR"]);
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(resolve("nyc"), resolve("newyork"));
        assert_eq!(resolve("LAX").city_code(), "LAX");
    }

    #[test]
    fn test_every_alias_of_hotel_cities_resolves() {
        for entry in CITIES.iter().filter(|e| !e.hotel_ids.is_empty()) {
            for key in std::iter::once(&entry.name).chain(entry.aliases.iter()) {
                let resolved = resolve(key);
                assert_eq!(resolved.city_code(), entry.code, "alias {}", key);
                assert_eq!(resolved.city_code().len(), 3);
                assert!(!resolved.hotel_ids().is_empty(), "alias {}", key);
            }
        }
    }

    #[test]
    fn test_code_only_city() {
        let resolved = resolve("Berlin");
        assert!(resolved.is_known());
        assert_eq!(resolved.city_code(), "BER");
        assert!(resolved.hotel_ids().is_empty());
    }

    #[test]
    fn test_unknown_city_passes_through() {
        let resolved = resolve("Atlantis");
        assert_eq!(resolved, CityResolution::Unknown { raw: "Atlantis".to_string() });
        assert_eq!(resolved.city_code(), "ATLANTIS");
        assert!(resolved.hotel_ids().is_empty());
    }

    #[test]
    fn test_no_partial_matches() {
        assert!(!resolve("lond").is_known());
        assert!(!resolve("parisfrance").is_known());
    }

    #[test]
    fn test_board_type() {
        assert_eq!(board_type("Breakfast"), "BREAKFAST");
        assert_eq!(board_type("all inclusive"), "ALL_INCLUSIVE");
        assert_eq!(board_type("ROOM_ONLY"), "ROOM_ONLY");
        assert_eq!(board_type("brunch"), "brunch");
    }

    #[test]
    fn test_listings() {
        let cities = supported_cities();
        assert!(cities.contains(&"vienna"));
        assert_eq!(cities.len(), 28);
        assert_eq!(cities_with_hotels().len(), 13);
        assert_eq!(supported_board_types().len(), 5);
    }
}
