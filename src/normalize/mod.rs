//! Conversion of free-text listing fields into canonical values.
//!
//! Everything here is a pure function and total: a malformed field degrades
//! to a defined default instead of failing the record, so one bad listing
//! can never poison a snapshot.

mod area;
mod location;
mod price;

pub use area::parse_area;
pub use location::parse_location;
pub use price::parse_price;

use crate::types::{Listing, NormalizedListing};

/// Derive canonical numeric/structured values for one listing.
///
/// Idempotent with respect to the derived values: re-normalizing the
/// wrapped listing yields the same `price_value`, `area_value`, and
/// `location_facet` (source strings are never rewritten).
pub fn normalize(listing: Listing) -> NormalizedListing {
    let price_value = parse_price(&listing.price);
    if price_value == 0.0 && !listing.price.trim().is_empty() {
        tracing::debug!(listing = %listing.id, raw = %listing.price, "unparsable price, defaulting to 0");
    }

    let (area_value, area_unit) = parse_area(&listing.area);
    if area_value == 0.0 && !listing.area.trim().is_empty() {
        tracing::debug!(listing = %listing.id, raw = %listing.area, "unparsable area, defaulting to 0");
    }

    let location_facet = parse_location(&listing.location);

    NormalizedListing {
        listing,
        price_value,
        area_value,
        area_unit,
        location_facet,
    }
}

/// Normalize a whole snapshot, preserving input order.
pub fn normalize_all(listings: Vec<Listing>) -> Vec<NormalizedListing> {
    listings.into_iter().map(normalize).collect()
}
