use crate::config::EngineConfig;
use crate::types::NormalizedListing;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Bucket for listings whose location string carries no city segment; they
/// must stay selectable in the location facet.
pub const OTHER_CITY: &str = "Other";

/// The distinct values available per filter dimension, derived from one
/// scan of a listing snapshot. Drives the selectable options in the
/// browsing surface, so set/map iteration order is first-seen order.
///
/// Never mutated in place; a snapshot change means a full rebuild.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetCatalog {
    pub property_types: IndexSet<String>,
    /// City → distinct areas within it.
    pub cities: IndexMap<String, IndexSet<String>>,
    pub amenities: IndexSet<String>,
    pub min_area: f64,
    pub max_area: f64,
}

impl FacetCatalog {
    /// Scan a normalized snapshot once and collect the facet vocabulary.
    ///
    /// `max_area` is floored at `config.area_ceiling_floor` so a snapshot
    /// of zero or unparsable areas still yields a usable slider range.
    pub fn build(listings: &[NormalizedListing], config: &EngineConfig) -> Self {
        let mut catalog = FacetCatalog {
            max_area: config.area_ceiling_floor,
            ..Default::default()
        };
        let mut min_seen: Option<f64> = None;

        for listing in listings {
            if !listing.listing.property_type.is_empty() {
                catalog
                    .property_types
                    .insert(listing.listing.property_type.clone());
            }

            let facet = &listing.location_facet;
            if !facet.area.is_empty() || !facet.city.is_empty() {
                let city = if facet.city.is_empty() {
                    OTHER_CITY.to_string()
                } else {
                    facet.city.clone()
                };
                let areas = catalog.cities.entry(city).or_default();
                if !facet.area.is_empty() {
                    areas.insert(facet.area.clone());
                }
            }

            for amenity in &listing.listing.amenities {
                if !amenity.is_empty() {
                    catalog.amenities.insert(amenity.clone());
                }
            }

            if listing.area_value > catalog.max_area {
                catalog.max_area = listing.area_value;
            }
            min_seen = Some(min_seen.map_or(listing.area_value, |m: f64| m.min(listing.area_value)));
        }

        catalog.min_area = min_seen.unwrap_or(0.0);
        catalog
    }

    pub fn is_empty(&self) -> bool {
        self.property_types.is_empty() && self.cities.is_empty() && self.amenities.is_empty()
    }
}
