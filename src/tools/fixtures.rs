//! Mock travel data
//!
//! Fixed, read-only tables backing the travel tools. City, cuisine and
//! budget keys are stored lowercase.

/// A scheduled flight offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flight {
    pub airline: &'static str,
    pub flight_no: &'static str,
    pub departure_time: &'static str,
    pub arrival_time: &'static str,
    pub price: &'static str,
}

/// A hotel offer within a budget tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotel {
    pub name: &'static str,
    pub price: &'static str,
    pub rating: &'static str,
}

pub const FLIGHTS: &[Flight] = &[
    Flight {
        airline: "AirLine X",
        flight_no: "AX101",
        departure_time: "08:00 AM",
        arrival_time: "12:00 PM",
        price: "$350",
    },
    Flight {
        airline: "FlyWell",
        flight_no: "FW205",
        departure_time: "09:30 AM",
        arrival_time: "01:30 PM",
        price: "$400",
    },
    Flight {
        airline: "SkyPath Airways",
        flight_no: "SP310",
        departure_time: "02:00 PM",
        arrival_time: "06:00 PM",
        price: "$320",
    },
];

pub const ATTRACTIONS: &[(&str, &[&str])] = &[
    ("paris", &["Eiffel Tower", "Louvre Museum", "Notre-Dame Cathedral"]),
    ("tokyo", &["Shibuya Crossing", "Senso-ji Temple", "Tokyo Skytree"]),
    ("london", &["Buckingham Palace", "Tower of London", "London Eye"]),
];

/// Cuisine used when the requested one has no entries for a city
pub const ANY_CUISINE: &str = "any";

pub const RESTAURANTS: &[(&str, &[(&str, &[&str])])] = &[
    (
        "paris",
        &[
            (
                ANY_CUISINE,
                &["Le Relais de l'Entrecôte", "Septime", "L'As du Fallafel"],
            ),
            ("french", &["Le Comptoir du Relais", "Frenchie"]),
        ],
    ),
    (
        "tokyo",
        &[
            (ANY_CUISINE, &["Tsukiji Outer Market", "Ichiran Ramen"]),
            ("japanese", &["Sushi Saito", "Tempura Kondo"]),
        ],
    ),
];

/// Budget tier used when the requested one is unknown
pub const DEFAULT_BUDGET: &str = "mid-range";

pub const HOTELS: &[(&str, &[Hotel])] = &[
    (
        "economy",
        &[
            Hotel {
                name: "Budget Stay Inn",
                price: "$80",
                rating: "3/5",
            },
            Hotel {
                name: "Traveler's Nook",
                price: "$95",
                rating: "3.5/5",
            },
        ],
    ),
    (
        DEFAULT_BUDGET,
        &[
            Hotel {
                name: "City View Hotel",
                price: "$150",
                rating: "4/5",
            },
            Hotel {
                name: "Comfort Suites",
                price: "$170",
                rating: "4/5",
            },
        ],
    ),
    (
        "luxury",
        &[
            Hotel {
                name: "Grand Palace Hotel",
                price: "$350",
                rating: "5/5",
            },
            Hotel {
                name: "Elite Residency",
                price: "$400",
                rating: "4.8/5",
            },
        ],
    ),
];

fn lookup<T: ?Sized>(table: &'static [(&'static str, &'static T)], key: &str) -> Option<&'static T> {
    let key = key.to_lowercase();
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Attractions for a city, matched case-insensitively
pub fn attractions_for(city: &str) -> Option<&'static [&'static str]> {
    lookup(ATTRACTIONS, city)
}

/// Restaurants for a city and cuisine, falling back to the city's "any" list
pub fn restaurants_for(city: &str, cuisine: &str) -> Option<&'static [&'static str]> {
    let by_cuisine = lookup(RESTAURANTS, city)?;
    lookup(by_cuisine, cuisine).or_else(|| lookup(by_cuisine, ANY_CUISINE))
}

/// Hotels for a budget tier, falling back to mid-range
pub fn hotels_for(budget: &str) -> &'static [Hotel] {
    lookup(HOTELS, budget)
        .or_else(|| lookup(HOTELS, DEFAULT_BUDGET))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_well_formed() {
        for (city, entries) in ATTRACTIONS {
            assert_eq!(*city, city.to_lowercase());
            assert!(!entries.is_empty());
        }
        for (city, cuisines) in RESTAURANTS {
            assert_eq!(*city, city.to_lowercase());
            assert!(
                cuisines.iter().any(|(c, _)| *c == ANY_CUISINE),
                "{} has no fallback cuisine",
                city
            );
        }
        assert!(HOTELS.iter().any(|(tier, _)| *tier == DEFAULT_BUDGET));
    }

    #[test]
    fn test_lookups_ignore_case() {
        assert_eq!(attractions_for("LoNdOn").map(|a| a.len()), Some(3));
        assert_eq!(
            restaurants_for("TOKYO", "Japanese"),
            Some(&["Sushi Saito", "Tempura Kondo"][..])
        );
        assert_eq!(hotels_for("LUXURY")[0].name, "Grand Palace Hotel");
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(
            restaurants_for("paris", "thai"),
            restaurants_for("paris", "any")
        );
        assert!(restaurants_for("london", "any").is_none());
        assert_eq!(hotels_for("backpacker"), hotels_for("mid-range"));
    }
}
