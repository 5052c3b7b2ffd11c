use std::env;
use std::time::Duration;

/// Engine tunables, resolved once at startup.
///
/// Every knob has a compiled-in default and an environment override so
/// deployments can adjust behavior without a rebuild.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Lower bound for the catalog's `max_area`. Keeps the area slider
    /// usable when a snapshot has no parseable area values.
    pub area_ceiling_floor: f64,
    /// Endpoint the HTTP listing source fetches from.
    pub listings_endpoint: String,
    /// Timeout applied to a single snapshot fetch.
    pub fetch_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            area_ceiling_floor: 1000.0,
            listings_endpoint: "http://localhost:8080/api/listings".to_string(),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        let defaults = EngineConfig::default();
        EngineConfig {
            area_ceiling_floor: env::var("HOMESCOUT_AREA_CEILING_FLOOR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.area_ceiling_floor),
            listings_endpoint: env::var("HOMESCOUT_LISTINGS_ENDPOINT")
                .ok()
                .unwrap_or(defaults.listings_endpoint),
            fetch_timeout: env::var("HOMESCOUT_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
        }
    }
}
