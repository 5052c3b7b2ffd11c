use serde::{Deserialize, Serialize};

/// Sentinel for an unconstrained scalar dimension.
pub const ALL: &str = "all";

/// Full-range defaults for the numeric dimensions. A range sitting at its
/// defaults is unconstrained: listings with degraded (zero) values still
/// pass it.
pub const PRICE_MIN_DEFAULT: f64 = 0.0;
pub const PRICE_MAX_DEFAULT: f64 = 200_000_000.0;
pub const AREA_MIN_DEFAULT: f64 = 0.0;
pub const AREA_MAX_DEFAULT: f64 = 100_000.0;

/// Preset price bracket offered by the browsing surface, independent of the
/// explicit min/max bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBracket {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "under-25l")]
    Under25L,
    #[serde(rename = "25l-50l")]
    L25To50,
    #[serde(rename = "50l-1cr")]
    L50To1Cr,
    #[serde(rename = "above-1cr")]
    Above1Cr,
}

impl PriceBracket {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBracket::All => "all",
            PriceBracket::Under25L => "under-25l",
            PriceBracket::L25To50 => "25l-50l",
            PriceBracket::L50To1Cr => "50l-1cr",
            PriceBracket::Above1Cr => "above-1cr",
        }
    }

    /// Parse a URL token; unknown tokens fall back to [`PriceBracket::All`].
    pub fn parse(s: &str) -> Self {
        match s {
            "under-25l" => PriceBracket::Under25L,
            "25l-50l" => PriceBracket::L25To50,
            "50l-1cr" => PriceBracket::L50To1Cr,
            "above-1cr" => PriceBracket::Above1Cr,
            _ => PriceBracket::All,
        }
    }

    /// Inclusive rupee bounds, or `None` when unconstrained.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            PriceBracket::All => None,
            PriceBracket::Under25L => Some((0.0, 2_500_000.0)),
            PriceBracket::L25To50 => Some((2_500_000.0, 5_000_000.0)),
            PriceBracket::L50To1Cr => Some((5_000_000.0, 10_000_000.0)),
            PriceBracket::Above1Cr => Some((10_000_000.0, f64::INFINITY)),
        }
    }
}

/// The complete set of active constraints across all facets.
///
/// The single source of truth for both predicate evaluation and URL-state
/// serialization. Scalar dimensions use the `"all"` sentinel, set
/// dimensions an empty list, ranges their full-range defaults; a freshly
/// cleared spec is indistinguishable from a freshly constructed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Free-text keyword, matched across title/location/description/type.
    pub search: String,
    /// Property type selection, or `"all"`.
    pub property_type: String,
    /// Location selection (area or city name), or `"all"`.
    pub location: String,
    /// Preset price bracket.
    pub price_bracket: PriceBracket,
    pub price_min: f64,
    pub price_max: f64,
    pub area_min: f64,
    pub area_max: f64,
    /// Selected bedroom counts; a trailing `+` token is open-ended.
    pub bedrooms: Vec<String>,
    /// Selected bathroom counts; same token convention as bedrooms.
    pub bathrooms: Vec<String>,
    /// Furnished-status selection, or `"all"`.
    pub furnishing: String,
    /// Every selected amenity must match.
    pub amenities: Vec<String>,
    /// Property-age selection, or `"all"` (heuristic dimension).
    pub age: String,
    /// Facing-direction selection, or `"all"` (heuristic dimension).
    pub facing: String,
    /// Availability selection, or `"all"` (heuristic dimension).
    pub availability: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec {
            search: String::new(),
            property_type: ALL.to_string(),
            location: ALL.to_string(),
            price_bracket: PriceBracket::All,
            price_min: PRICE_MIN_DEFAULT,
            price_max: PRICE_MAX_DEFAULT,
            area_min: AREA_MIN_DEFAULT,
            area_max: AREA_MAX_DEFAULT,
            bedrooms: Vec::new(),
            bathrooms: Vec::new(),
            furnishing: ALL.to_string(),
            amenities: Vec::new(),
            age: ALL.to_string(),
            facing: ALL.to_string(),
            availability: ALL.to_string(),
        }
    }
}

impl FilterSpec {
    /// True when no dimension constrains anything.
    pub fn is_default(&self) -> bool {
        *self == FilterSpec::default()
    }

    /// Reset every dimension. Observationally equivalent to constructing a
    /// fresh spec.
    pub fn clear(&mut self) {
        *self = FilterSpec::default();
    }

    pub fn price_range_is_default(&self) -> bool {
        self.price_min <= PRICE_MIN_DEFAULT && self.price_max >= PRICE_MAX_DEFAULT
    }

    pub fn area_range_is_default(&self) -> bool {
        self.area_min <= AREA_MIN_DEFAULT && self.area_max >= AREA_MAX_DEFAULT
    }
}
