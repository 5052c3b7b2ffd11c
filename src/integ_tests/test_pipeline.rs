//! End-to-end: raw snapshot in, filtered/sorted results out.

use crate::config::EngineConfig;
use crate::query::spec::{FilterSpec, PriceBracket};
use crate::types::{Listing, SortKey};
use crate::CatalogIndex;
use chrono::{TimeZone, Utc};

// ============================================================
// Shared helpers
// ============================================================

struct ListingBuilder {
    listing: Listing,
}

fn listing(id: &str) -> ListingBuilder {
    ListingBuilder {
        listing: Listing {
            id: id.to_string(),
            ..Default::default()
        },
    }
}

impl ListingBuilder {
    fn title(mut self, v: &str) -> Self {
        self.listing.title = v.to_string();
        self
    }
    fn description(mut self, v: &str) -> Self {
        self.listing.description = v.to_string();
        self
    }
    fn property_type(mut self, v: &str) -> Self {
        self.listing.property_type = v.to_string();
        self
    }
    fn location(mut self, v: &str) -> Self {
        self.listing.location = v.to_string();
        self
    }
    fn price(mut self, v: &str) -> Self {
        self.listing.price = v.to_string();
        self
    }
    fn area(mut self, v: &str) -> Self {
        self.listing.area = v.to_string();
        self
    }
    fn bedrooms(mut self, v: u32) -> Self {
        self.listing.bedrooms = Some(v);
        self
    }
    fn amenities(mut self, v: &[&str]) -> Self {
        self.listing.amenities = v.iter().map(|s| s.to_string()).collect();
        self
    }
    fn created(mut self, year: i32, month: u32) -> Self {
        self.listing.created_at = Some(Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap());
        self
    }
    fn build(self) -> Listing {
        self.listing
    }
}

fn fixture_snapshot() -> Vec<Listing> {
    vec![
        listing("flat-kolar")
            .title("2BHK Apartment near school")
            .description("East facing, lift, power backup, ready to move")
            .property_type("Apartment")
            .location("Kolar Road, Bhopal")
            .price("₹45 Lakh")
            .area("1050 sq ft")
            .bedrooms(2)
            .amenities(&["Lift", "Power Backup"])
            .created(2024, 3)
            .build(),
        listing("villa-arera")
            .title("Luxury 4BHK Villa")
            .description("West facing corner plot with garden and swimming pool")
            .property_type("Villa")
            .location("Arera Colony, Bhopal")
            .price("₹2.1 Cr")
            .area("3600 sq ft")
            .bedrooms(4)
            .amenities(&["Garden", "Swimming Pool", "Parking"])
            .created(2024, 6)
            .build(),
        listing("shop-mpnagar")
            .title("Commercial shop on main road")
            .description("High footfall zone")
            .property_type("Shop")
            .location("MP Nagar, Bhopal")
            .price("₹80 Lakh")
            .area("400 sq ft")
            .created(2023, 11)
            .build(),
        listing("farm-sehore")
            .title("Farm land")
            .description("Fertile plot near highway")
            .property_type("Plot")
            .location("Sehore")
            .price("₹32 Lakh")
            .area("2 acres")
            .created(2024, 1)
            .build(),
        listing("flat-indore")
            .title("5BHK duplex")
            .description("North facing, newly built, semi furnished")
            .property_type("Apartment")
            .location("Vijay Nagar, Indore")
            .price("₹95 Lakh")
            .area("2200 sq ft")
            .bedrooms(5)
            .amenities(&["Lift", "Parking"])
            .build(),
        listing("mystery")
            .title("Property with missing details")
            .build(),
    ]
}

fn ids(result: &[crate::NormalizedListing]) -> Vec<&str> {
    result.iter().map(|l| l.listing.id.as_str()).collect()
}

// ============================================================
// Clear-all-filters invariant
// ============================================================

#[test]
fn default_spec_returns_everything_in_fetch_order() {
    super::init_tracing();
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let result = index.search(&FilterSpec::default(), None);
    assert_eq!(
        ids(&result),
        vec![
            "flat-kolar",
            "villa-arera",
            "shop-mpnagar",
            "farm-sehore",
            "flat-indore",
            "mystery"
        ]
    );
}

#[test]
fn cleared_spec_behaves_like_fresh_spec() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let mut spec = FilterSpec {
        search: "villa".to_string(),
        price_bracket: PriceBracket::Above1Cr,
        bedrooms: vec!["4+".to_string()],
        ..Default::default()
    };
    assert_eq!(index.search(&spec, None).len(), 1);

    spec.clear();
    assert_eq!(
        index.search(&spec, None).len(),
        index.search(&FilterSpec::default(), None).len()
    );
}

// ============================================================
// Combined dimensions
// ============================================================

#[test]
fn type_and_location_combine_with_and() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let spec = FilterSpec {
        property_type: "Apartment".to_string(),
        location: "Bhopal".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&index.search(&spec, None)), vec!["flat-kolar"]);
}

#[test]
fn keyword_with_price_bracket() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let spec = FilterSpec {
        search: "facing".to_string(),
        price_bracket: PriceBracket::Above1Cr,
        ..Default::default()
    };
    assert_eq!(ids(&index.search(&spec, None)), vec!["villa-arera"]);
}

#[test]
fn bedroom_threshold_across_snapshot() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let spec = FilterSpec {
        bedrooms: vec!["4+".to_string()],
        ..Default::default()
    };
    // 4 and 5 bedrooms match; listings without the field drop out.
    assert_eq!(
        ids(&index.search(&spec, None)),
        vec!["villa-arera", "flat-indore"]
    );
}

#[test]
fn amenity_conjunction_narrows() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let lift_only = FilterSpec {
        amenities: vec!["Lift".to_string()],
        ..Default::default()
    };
    let lift_and_parking = FilterSpec {
        amenities: vec!["Lift".to_string(), "Parking".to_string()],
        ..Default::default()
    };
    assert_eq!(
        ids(&index.search(&lift_only, None)),
        vec!["flat-kolar", "flat-indore"]
    );
    assert_eq!(ids(&index.search(&lift_and_parking, None)), vec!["flat-indore"]);
}

#[test]
fn area_range_over_mixed_units_uses_magnitude_only() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let spec = FilterSpec {
        area_min: 1.0,
        area_max: 500.0,
        ..Default::default()
    };
    // "2 acres" (magnitude 2) and "400 sq ft" both land in [1, 500].
    assert_eq!(
        ids(&index.search(&spec, None)),
        vec!["shop-mpnagar", "farm-sehore"]
    );
}

#[test]
fn degraded_listing_survives_default_spec_only() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let all = index.search(&FilterSpec::default(), None);
    assert!(ids(&all).contains(&"mystery"));

    let narrowed = FilterSpec {
        price_min: 100_000.0,
        price_max: 50_000_000.0,
        ..Default::default()
    };
    assert!(!ids(&index.search(&narrowed, None)).contains(&"mystery"));
}

// ============================================================
// Sorting through the pipeline
// ============================================================

#[test]
fn price_ascending_end_to_end() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let result = index.search(&FilterSpec::default(), Some(SortKey::PriceAsc));
    let prices: Vec<f64> = result.iter().map(|l| l.price_value).collect();
    let mut expected = prices.clone();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(prices, expected);
    assert_eq!(result.first().map(|l| l.listing.id.as_str()), Some("mystery"));
}

#[test]
fn newest_puts_undated_listings_last() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let result = index.search(&FilterSpec::default(), Some(SortKey::Newest));
    assert_eq!(result.first().map(|l| l.listing.id.as_str()), Some("villa-arera"));
    // Both undated listings sink to the end, keeping their relative order.
    let ordered = ids(&result);
    assert_eq!(ordered[4..], ["flat-indore", "mystery"]);
}

// ============================================================
// Facet catalog over the snapshot
// ============================================================

#[test]
fn catalog_reflects_snapshot_vocabulary() {
    let index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    let catalog = index.catalog();

    let types: Vec<&String> = catalog.property_types.iter().collect();
    assert_eq!(types, vec!["Apartment", "Villa", "Shop", "Plot"]);

    assert!(catalog.cities["Bhopal"].contains("Arera Colony"));
    // "Sehore" has no comma, so it is an area under the Other bucket.
    assert!(catalog.cities[crate::catalog::OTHER_CITY].contains("Sehore"));

    assert_eq!(catalog.max_area, 3600.0);
}

#[test]
fn refresh_rebuilds_results_and_catalog() {
    let mut index = CatalogIndex::build(fixture_snapshot(), EngineConfig::default());
    index.refresh(vec![listing("only")
        .property_type("Warehouse")
        .price("₹5 Cr")
        .build()]);

    assert_eq!(index.len(), 1);
    let types: Vec<&String> = index.catalog().property_types.iter().collect();
    assert_eq!(types, vec!["Warehouse"]);
    assert_eq!(
        ids(&index.search(&FilterSpec::default(), None)),
        vec!["only"]
    );
}
