use crate::types::{NormalizedListing, SortKey};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Order a passing subset by the given key, returning a new ordering.
///
/// Sorts are stable: ties keep the original collection order. Listings
/// without a timestamp sort as the epoch (last under `Newest`, first under
/// `Oldest`) so they never drop out of the result.
pub fn sort_listings(listings: &[NormalizedListing], key: SortKey) -> Vec<NormalizedListing> {
    let mut ordered = listings.to_vec();
    match key {
        SortKey::Newest => ordered.sort_by_key(|l| std::cmp::Reverse(created_or_epoch(l))),
        SortKey::Oldest => ordered.sort_by_key(created_or_epoch),
        SortKey::PriceAsc => ordered.sort_by(|a, b| cmp_f64(a.price_value, b.price_value)),
        SortKey::PriceDesc => ordered.sort_by(|a, b| cmp_f64(b.price_value, a.price_value)),
        SortKey::AreaAsc => ordered.sort_by(|a, b| cmp_f64(a.area_value, b.area_value)),
        SortKey::AreaDesc => ordered.sort_by(|a, b| cmp_f64(b.area_value, a.area_value)),
    }
    ordered
}

fn created_or_epoch(listing: &NormalizedListing) -> DateTime<Utc> {
    listing.listing.created_at.unwrap_or(DateTime::UNIX_EPOCH)
}

// Total order over listing magnitudes; NaN compares equal rather than
// panicking.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
