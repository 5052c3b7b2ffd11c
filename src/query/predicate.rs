//! Per-dimension pass/fail tests, AND-combined.
//!
//! Every predicate treats its own unconstrained sentinel as an
//! unconditional pass, so the all-default spec admits every listing (the
//! clear-all-filters invariant). None of these can panic on listing data.

use crate::query::spec::{FilterSpec, ALL};
use crate::types::NormalizedListing;

/// Does this listing satisfy every active constraint?
pub fn matches(listing: &NormalizedListing, spec: &FilterSpec) -> bool {
    matches_keyword(listing, &spec.search)
        && matches_scalar(&listing.listing.property_type, &spec.property_type)
        && matches_location(listing, &spec.location)
        && matches_price_bracket(listing, spec)
        && matches_price_range(listing, spec)
        && matches_area_range(listing, spec)
        && matches_counts(listing.listing.bedrooms, &spec.bedrooms)
        && matches_counts(listing.listing.bathrooms, &spec.bathrooms)
        && matches_furnishing(listing, &spec.furnishing)
        && matches_amenities(listing, &spec.amenities)
        // Heuristic dimensions: best-effort substring probes over free text.
        // Kept separate from the structured predicates above so they can be
        // swapped for structured fields without touching the AND chain.
        && matches_free_text(listing, &spec.age)
        && matches_free_text(listing, &spec.facing)
        && matches_free_text(listing, &spec.availability)
}

/// Case-insensitive substring over title, location, description, and type;
/// a hit in any one field passes.
fn matches_keyword(listing: &NormalizedListing, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    let l = &listing.listing;
    [&l.title, &l.location, &l.description, &l.property_type]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

fn matches_scalar(actual: &str, selected: &str) -> bool {
    selected == ALL || actual.eq_ignore_ascii_case(selected)
}

/// The selected value may name either a city or an area; a listing without
/// a city (no comma in its location string) still matches on area alone.
fn matches_location(listing: &NormalizedListing, selected: &str) -> bool {
    if selected == ALL {
        return true;
    }
    let facet = &listing.location_facet;
    facet.city.eq_ignore_ascii_case(selected) || facet.area.eq_ignore_ascii_case(selected)
}

fn matches_price_bracket(listing: &NormalizedListing, spec: &FilterSpec) -> bool {
    match spec.price_bracket.bounds() {
        None => true,
        Some((min, max)) => listing.price_value >= min && listing.price_value <= max,
    }
}

/// Inclusive bounds on the normalized value. A degraded (zero) value passes
/// the full default range and fails any range narrowed above zero.
fn matches_price_range(listing: &NormalizedListing, spec: &FilterSpec) -> bool {
    if spec.price_range_is_default() {
        return true;
    }
    listing.price_value >= spec.price_min && listing.price_value <= spec.price_max
}

fn matches_area_range(listing: &NormalizedListing, spec: &FilterSpec) -> bool {
    if spec.area_range_is_default() {
        return true;
    }
    listing.area_value >= spec.area_min && listing.area_value <= spec.area_max
}

/// Set membership over count tokens. A trailing-`+` token (`"4+"`) matches
/// any count at or above its threshold. A listing without the field fails
/// every non-empty selection.
fn matches_counts(actual: Option<u32>, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let count = match actual {
        Some(c) => c,
        None => return false,
    };
    selected.iter().any(|token| match token.strip_suffix('+') {
        Some(base) => base.trim().parse::<u32>().map(|t| count >= t).unwrap_or(false),
        None => token.trim().parse::<u32>().map(|t| count == t).unwrap_or(false),
    })
}

fn matches_furnishing(listing: &NormalizedListing, selected: &str) -> bool {
    if selected == ALL {
        return true;
    }
    listing
        .listing
        .furnished
        .as_deref()
        .map(|f| f.eq_ignore_ascii_case(selected))
        .unwrap_or(false)
}

/// Every selected amenity must be present (AND within the dimension),
/// either in the structured list or as a substring of the description.
fn matches_amenities(listing: &NormalizedListing, selected: &[String]) -> bool {
    if selected.is_empty() {
        return true;
    }
    let description = listing.listing.description.to_lowercase();
    selected.iter().all(|wanted| {
        let needle = wanted.to_lowercase();
        listing
            .listing
            .amenities
            .iter()
            .any(|a| a.to_lowercase() == needle)
            || description.contains(&needle)
    })
}

/// Best-effort probe for the age/facing/availability dimensions: the
/// selected token as a case-insensitive substring of the title or
/// description. False negatives are expected with unstructured source data.
fn matches_free_text(listing: &NormalizedListing, selected: &str) -> bool {
    if selected == ALL {
        return true;
    }
    let needle = selected.to_lowercase();
    listing.listing.title.to_lowercase().contains(&needle)
        || listing.listing.description.to_lowercase().contains(&needle)
}
