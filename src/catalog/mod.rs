//! The in-memory catalog: a normalized listing snapshot plus its derived
//! facet vocabulary, with the evaluate-then-sort search path on top.

mod facets;

pub use facets::{FacetCatalog, OTHER_CITY};

use crate::config::EngineConfig;
use crate::normalize::normalize_all;
use crate::query::spec::FilterSpec;
use crate::query::{matches, sort_listings};
use crate::types::{Listing, NormalizedListing, SortKey};

/// Owns one snapshot of the catalog and everything derived from it.
///
/// Normalization and facet derivation happen once per snapshot; every
/// search is a fresh synchronous pass over the normalized listings, cheap
/// enough to re-run on each filter change. A snapshot change goes through
/// [`CatalogIndex::refresh`], which recomputes everything. There is no
/// incremental update path, so catalog and snapshot can never drift apart.
pub struct CatalogIndex {
    listings: Vec<NormalizedListing>,
    catalog: FacetCatalog,
    config: EngineConfig,
}

impl CatalogIndex {
    /// Normalize a raw snapshot and derive its facet catalog.
    pub fn build(raw: Vec<Listing>, config: EngineConfig) -> Self {
        let listings = normalize_all(raw);
        let catalog = FacetCatalog::build(&listings, &config);
        tracing::debug!(
            listings = listings.len(),
            types = catalog.property_types.len(),
            cities = catalog.cities.len(),
            "catalog built"
        );
        CatalogIndex {
            listings,
            catalog,
            config,
        }
    }

    /// Replace the snapshot wholesale and rebuild the derived state.
    pub fn refresh(&mut self, raw: Vec<Listing>) {
        self.listings = normalize_all(raw);
        self.catalog = FacetCatalog::build(&self.listings, &self.config);
    }

    /// The normalized snapshot in original fetch order.
    pub fn listings(&self) -> &[NormalizedListing] {
        &self.listings
    }

    pub fn catalog(&self) -> &FacetCatalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Evaluate the spec against every listing, then order the passing
    /// subset. `sort: None` keeps the original fetch order, which is what
    /// the all-default spec relies on to return the collection unchanged.
    pub fn search(&self, spec: &FilterSpec, sort: Option<SortKey>) -> Vec<NormalizedListing> {
        let t0 = std::time::Instant::now();
        let passing: Vec<NormalizedListing> = self
            .listings
            .iter()
            .filter(|listing| matches(listing, spec))
            .cloned()
            .collect();
        let evaluated = t0.elapsed();

        let result = match sort {
            Some(key) => sort_listings(&passing, key),
            None => passing,
        };

        tracing::debug!(
            "[SEARCH] eval={:?} total={:?} matched={}/{}",
            evaluated,
            t0.elapsed(),
            result.len(),
            self.listings.len()
        );
        result
    }
}
