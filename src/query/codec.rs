//! Bidirectional mapping between a [`FilterSpec`] and a URL query string.
//!
//! The parameter schema is stable: bookmarked search URLs must keep
//! working. Decoding tolerates everything; unknown parameters are ignored
//! and malformed values fall back to the dimension default, so a mangled
//! URL degrades to a broader search instead of an error.

use crate::query::spec::{FilterSpec, PriceBracket, ALL};
use crate::types::SortKey;
use url::form_urlencoded;

/// Serialize the spec; unconstrained dimensions contribute no parameters.
/// The all-default spec encodes to the empty string.
pub fn encode(spec: &FilterSpec) -> String {
    let mut qs = form_urlencoded::Serializer::new(String::new());

    if !spec.search.is_empty() {
        qs.append_pair("search", &spec.search);
    }
    if spec.property_type != ALL {
        qs.append_pair("type", &spec.property_type);
    }
    if spec.location != ALL {
        qs.append_pair("location", &spec.location);
    }
    if spec.price_bracket != PriceBracket::All {
        qs.append_pair("price", spec.price_bracket.as_str());
    }
    if !spec.bedrooms.is_empty() {
        qs.append_pair("bedrooms", &spec.bedrooms.join(","));
    }
    if !spec.bathrooms.is_empty() {
        qs.append_pair("bathrooms", &spec.bathrooms.join(","));
    }
    if !spec.area_range_is_default() {
        qs.append_pair("areaMin", &format_number(spec.area_min));
        qs.append_pair("areaMax", &format_number(spec.area_max));
    }
    if !spec.price_range_is_default() {
        qs.append_pair("priceMin", &format_number(spec.price_min));
        qs.append_pair("priceMax", &format_number(spec.price_max));
    }
    if spec.furnishing != ALL {
        qs.append_pair("furnishing", &spec.furnishing);
    }
    if !spec.amenities.is_empty() {
        qs.append_pair("amenities", &spec.amenities.join(","));
    }
    if spec.age != ALL {
        qs.append_pair("age", &spec.age);
    }
    if spec.facing != ALL {
        qs.append_pair("facing", &spec.facing);
    }
    if spec.availability != ALL {
        qs.append_pair("availability", &spec.availability);
    }

    qs.finish()
}

/// Rebuild a spec from a query string. Exact inverse of [`encode`] for
/// every parameter the encoder can produce.
pub fn decode(query_string: &str) -> FilterSpec {
    let mut spec = FilterSpec::default();
    let raw = query_string.trim_start_matches('?');

    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "search" => spec.search = value.into_owned(),
            "type" => {
                if !value.is_empty() {
                    spec.property_type = value.into_owned();
                }
            }
            "location" => {
                if !value.is_empty() {
                    spec.location = value.into_owned();
                }
            }
            "price" => spec.price_bracket = PriceBracket::parse(&value),
            "bedrooms" => spec.bedrooms = split_values(&value),
            "bathrooms" => spec.bathrooms = split_values(&value),
            "areaMin" => {
                spec.area_min = value.parse().unwrap_or(crate::query::spec::AREA_MIN_DEFAULT)
            }
            "areaMax" => {
                spec.area_max = value.parse().unwrap_or(crate::query::spec::AREA_MAX_DEFAULT)
            }
            "priceMin" => {
                spec.price_min = value.parse().unwrap_or(crate::query::spec::PRICE_MIN_DEFAULT)
            }
            "priceMax" => {
                spec.price_max = value.parse().unwrap_or(crate::query::spec::PRICE_MAX_DEFAULT)
            }
            "furnishing" => {
                if !value.is_empty() {
                    spec.furnishing = value.into_owned();
                }
            }
            "amenities" => spec.amenities = split_values(&value),
            "age" => {
                if !value.is_empty() {
                    spec.age = value.into_owned();
                }
            }
            "facing" => {
                if !value.is_empty() {
                    spec.facing = value.into_owned();
                }
            }
            "availability" => {
                if !value.is_empty() {
                    spec.availability = value.into_owned();
                }
            }
            _ => {}
        }
    }

    spec
}

/// A filter spec plus the active sort key: everything a shareable URL
/// carries. `sort` rides in the same query string; absence means the
/// default ordering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchState {
    pub filters: FilterSpec,
    pub sort: Option<SortKey>,
}

impl SearchState {
    pub fn encode(&self) -> String {
        let mut qs = encode(&self.filters);
        if let Some(key) = self.sort {
            let pair = form_urlencoded::Serializer::new(String::new())
                .append_pair("sort", key.as_str())
                .finish();
            if qs.is_empty() {
                qs = pair;
            } else {
                qs.push('&');
                qs.push_str(&pair);
            }
        }
        qs
    }

    pub fn decode(query_string: &str) -> Self {
        let raw = query_string.trim_start_matches('?');
        let sort = form_urlencoded::parse(raw.as_bytes())
            .find(|(key, _)| key == "sort")
            .and_then(|(_, value)| SortKey::parse(&value));
        SearchState {
            filters: decode(query_string),
            sort,
        }
    }
}

fn split_values(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Plain decimal without a trailing `.0` for whole values.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
