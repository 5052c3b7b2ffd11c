use crate::types::LocationFacet;

/// Split a free-text `"Area, City"` string into its facet pair.
///
/// First comma-separated segment is the area, second the city; anything
/// beyond the second segment is ignored. A string with no comma is all
/// area; such listings still match area-only facet filters.
pub fn parse_location(raw: &str) -> LocationFacet {
    let mut segments = raw.split(',').map(str::trim);
    LocationFacet {
        area: segments.next().unwrap_or("").to_string(),
        city: segments.next().unwrap_or("").to_string(),
    }
}
