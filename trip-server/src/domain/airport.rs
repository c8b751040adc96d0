//! Airport type.

use super::Coordinate;

/// Name used when an aerodrome carries no `name` tag.
pub const DEFAULT_AIRPORT_NAME: &str = "Airport";

/// A commercial airport found near a query point.
#[derive(Debug, Clone, PartialEq)]
pub struct Airport {
    /// Name as tagged in the map data.
    pub name: String,
    /// IATA-style carrier code.
    pub carrier_code: String,
    pub coordinate: Coordinate,
    /// Great-circle distance from the query point.
    pub distance_km: f64,
}

impl Airport {
    /// Name shown to users, e.g. `"Aeropuerto Internacional de Guadalajara (GDL)"`.
    ///
    /// Two airports are treated as the same airport when their display
    /// names are equal.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.carrier_code)
    }

    pub fn is_same_as(&self, other: &Airport) -> bool {
        self.display_name() == other.display_name()
    }
}
