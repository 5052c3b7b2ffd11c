//! In-memory property-listing search with facet filtering and shareable
//! URL search state.
//!
//! The pipeline: a raw snapshot is fetched once (see [`source`]), each
//! record's free-text fields are normalized into canonical values
//! ([`normalize`]), a facet vocabulary is derived in one pass
//! ([`FacetCatalog`]), and every filter change re-runs a synchronous
//! evaluate-then-sort pass over the snapshot ([`CatalogIndex::search`]).
//! The active [`FilterSpec`] round-trips through a stable URL query-string
//! schema ([`query::codec`]) so searches can be bookmarked and shared.
//!
//! ```
//! use homescout::{CatalogIndex, EngineConfig, FilterSpec, Listing, SortKey};
//!
//! let snapshot = vec![Listing {
//!     id: "1".into(),
//!     title: "2BHK near Kolar Road".into(),
//!     location: "Kolar Road, Bhopal".into(),
//!     price: "₹45 Lakh".into(),
//!     ..Default::default()
//! }];
//!
//! let index = CatalogIndex::build(snapshot, EngineConfig::default());
//! let spec = FilterSpec {
//!     location: "Bhopal".into(),
//!     ..Default::default()
//! };
//! let hits = index.search(&spec, Some(SortKey::PriceAsc));
//! assert_eq!(hits.len(), 1);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod normalize;
pub mod query;
pub mod source;
pub mod types;

#[cfg(test)]
mod integ_tests;

pub use catalog::{CatalogIndex, FacetCatalog};
pub use config::EngineConfig;
pub use error::{HomescoutError, Result};
pub use query::{FilterSpec, PriceBracket, SearchState};
pub use source::{HttpListingSource, ListingSource, StaticListingSource};
pub use types::{Listing, LocationFacet, NormalizedListing, SortKey};
