use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Listing identifier — a plain string as stored upstream.
pub type ListingId = String;

/// A raw property listing as fetched from the catalog store.
///
/// Everything except `id` is optional in practice: the upstream store is
/// schemaless and records arrive with fields missing, misspelled, or typed
/// as strings. Use [`Listing::from_json`] to ingest such records; it only
/// rejects a record that has no usable identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Open vocabulary ("Apartment", "Villa", "Shop", ...). Unknown values
    /// pass through untouched and surface via the facet catalog.
    #[serde(default, rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub status: String,
    /// Free-text "Area, City" string.
    #[serde(default)]
    pub location: String,
    /// Free-text price ("₹1.5 Cr", "₹45,00,000", "85 Lakh", ...).
    #[serde(default)]
    pub price: String,
    /// Free-text area with unit suffix ("1200 sq ft", "2 acres", ...).
    #[serde(default)]
    pub area: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floors: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parking: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnished: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "plotType")]
    pub plot_type: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Parse a [`Listing`] from a JSON object.
    ///
    /// Accepts either `"id"` or `"_id"` as the identifier. Every other field
    /// degrades to its default when absent or wrongly typed; numeric fields
    /// additionally accept numeric strings (`"bedrooms": "3"`).
    ///
    /// # Errors
    ///
    /// Returns [`crate::HomescoutError::MissingField`] if neither `id` nor
    /// `_id` is present, or [`crate::HomescoutError::InvalidListing`] if the
    /// value is not a JSON object.
    pub fn from_json(json: &serde_json::Value) -> crate::error::Result<Self> {
        use crate::error::HomescoutError;

        let obj = json
            .as_object()
            .ok_or_else(|| HomescoutError::InvalidListing("Expected JSON object".to_string()))?;

        let id = obj
            .get("_id")
            .or_else(|| obj.get("id"))
            .and_then(|v| v.as_str())
            .ok_or_else(|| HomescoutError::MissingField("id".to_string()))?
            .to_string();

        Ok(Listing {
            id,
            title: string_field(obj, "title"),
            description: string_field(obj, "description"),
            property_type: string_field(obj, "type"),
            status: string_field(obj, "status"),
            location: string_field(obj, "location"),
            price: string_field(obj, "price"),
            area: string_field(obj, "area"),
            bedrooms: count_field(obj, "bedrooms"),
            bathrooms: count_field(obj, "bathrooms"),
            floors: count_field(obj, "floors"),
            parking: count_field(obj, "parking"),
            furnished: opt_string_field(obj, "furnished"),
            plot_type: opt_string_field(obj, "plotType"),
            amenities: string_list_field(obj, "amenities"),
            created_at: timestamp_field(obj, "createdAt"),
        })
    }
}

fn string_field(obj: &serde_json::Map<String, serde_json::Value>, key: &str) -> String {
    match obj.get(key) {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

fn opt_string_field(obj: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(|v| v.as_str()).map(|s| s.to_string())
}

fn count_field(obj: &serde_json::Map<String, serde_json::Value>, key: &str) -> Option<u32> {
    match obj.get(key) {
        Some(serde_json::Value::Number(n)) => n.as_u64().map(|v| v as u32),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_list_field(obj: &serde_json::Map<String, serde_json::Value>, key: &str) -> Vec<String> {
    match obj.get(key) {
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.to_string())
            .collect(),
        // Some records store amenities as one comma-joined string.
        Some(serde_json::Value::String(s)) => s
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

fn timestamp_field(
    obj: &serde_json::Map<String, serde_json::Value>,
    key: &str,
) -> Option<DateTime<Utc>> {
    match obj.get(key) {
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Some(serde_json::Value::Number(n)) => {
            n.as_i64().and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        }
        _ => None,
    }
}

/// The `{area, city}` pair derived from a listing's free-text location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationFacet {
    pub area: String,
    pub city: String,
}

/// A listing with canonical numeric values derived from its free-text
/// fields. Produced by [`crate::normalize::normalize`]; re-deriving from the
/// same listing always yields the same values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedListing {
    #[serde(flatten)]
    pub listing: Listing,
    /// Canonical rupee magnitude (0.0 when the price string is unparsable).
    #[serde(rename = "priceValue")]
    pub price_value: f64,
    /// Numeric area magnitude (0.0 when unparsable).
    #[serde(rename = "areaValue")]
    pub area_value: f64,
    /// Display unit carried verbatim; never converted between unit systems.
    #[serde(rename = "areaUnit")]
    pub area_unit: String,
    #[serde(rename = "locationFacet")]
    pub location_facet: LocationFacet,
}

/// Result-ordering key. A closed set: the browsing surface offers exactly
/// these and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    AreaAsc,
    AreaDesc,
}

impl SortKey {
    /// Stable URL token for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::AreaAsc => "area-asc",
            SortKey::AreaDesc => "area-desc",
        }
    }

    /// Parse a URL token; unknown tokens yield `None` so callers fall back
    /// to their own default ordering.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "area-asc" => Some(SortKey::AreaAsc),
            "area-desc" => Some(SortKey::AreaDesc),
            _ => None,
        }
    }
}
