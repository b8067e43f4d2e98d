use crate::utils::is_number;
use serde::Serialize;
use std::fmt;

/// A place forecasts can be requested for.
///
/// Locations are never built at runtime; they all live in [`LOCATIONS`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    /// Uppercase place name.
    pub name: &'static str,
    /// Two-letter province code.
    pub province: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    /// Identifier of the place on the Tiempo API.
    pub code: &'static str,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.province)
    }
}

pub static LOCATIONS: [Location; 5] = [
    Location {
        name: "ACQUASPARTA",
        province: "TR",
        latitude: 42.6911449,
        longitude: 12.5464788,
        code: "28756",
    },
    Location {
        name: "MONTECASTRILLI",
        province: "TR",
        latitude: 42.652434,
        longitude: 12.488567,
        code: "30429",
    },
    Location {
        name: "ORVIETO",
        province: "TR",
        latitude: 42.7186152,
        longitude: 12.1087907,
        code: "30625",
    },
    Location {
        name: "TERNI",
        province: "TR",
        latitude: 42.5641417,
        longitude: 12.6405466,
        code: "31553",
    },
    Location {
        name: "PERUGIA",
        province: "PG",
        latitude: 43.1119613,
        longitude: 12.3890104,
        code: "30721",
    },
];

/// How [`search_locations`] matches a query against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSearch {
    /// Name contains the query, ignoring case.
    PartialName,
    /// Name equals the query, ignoring case.
    ExactName,
    /// Code equals the query.
    ExactCode,
}

/// Returns every registry entry matching `query`, in registry order.
///
/// ```rust
/// use libweather::{search_locations, LocationSearch};
///
/// let found = search_locations("ter", LocationSearch::PartialName);
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "TERNI");
/// ```
pub fn search_locations(query: &str, kind: LocationSearch) -> Vec<&'static Location> {
    let query = query.to_uppercase();
    LOCATIONS
        .iter()
        .filter(|location| match kind {
            LocationSearch::PartialName => location.name.contains(query.as_str()),
            LocationSearch::ExactName => location.name == query,
            LocationSearch::ExactCode => location.code == query,
        })
        .collect()
}

/// Looks `query` up as a code when it is all digits, by exact name otherwise.
pub fn find_location(query: &str) -> Option<&'static Location> {
    let kind = if is_number(query) {
        LocationSearch::ExactCode
    } else {
        LocationSearch::ExactName
    };
    search_locations(query, kind).into_iter().next()
}
