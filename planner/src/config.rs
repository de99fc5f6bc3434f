//! Client configuration.
//!
//! Every field has a default so an empty object (or no configuration at all)
//! gives a client that talks to the origin it was served from.

use log::LevelFilter;
use serde::Deserialize;

use crate::api::{ApiClient, HttpTransport};
use crate::domain::day_ids::DayIdStore;
use crate::error::ClientError;
use crate::storage::SessionStorage;

/// Storage key under which the day identifier list is cached
pub const DEFAULT_DAY_IDS_KEY: &str = "dayIds";

/// Day identifiers are drawn from `0..DEFAULT_DAY_ID_UPPER_BOUND`
pub const DEFAULT_DAY_ID_UPPER_BOUND: u32 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Prefix for every API path; empty means same origin
    pub base_url: String,
    pub day_ids_key: String,
    pub day_id_upper_bound: u32,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            day_ids_key: DEFAULT_DAY_IDS_KEY.to_string(),
            day_id_upper_bound: DEFAULT_DAY_ID_UPPER_BOUND,
            log_level: "info".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        let mut config: PlannerConfig = serde_json::from_str(json)?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        if config.day_id_upper_bound == 0 {
            config.day_id_upper_bound = DEFAULT_DAY_ID_UPPER_BOUND;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_client<T: HttpTransport>(&self, transport: T) -> ApiClient<T> {
        ApiClient::with_base_url(transport, self.base_url.clone())
    }

    pub fn day_id_store<S: SessionStorage>(&self, storage: S) -> DayIdStore<S> {
        DayIdStore::new(storage, self.day_ids_key.clone()).with_upper_bound(self.day_id_upper_bound)
    }

    /// Unknown level names fall back to `info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.base_url, "");
        assert_eq!(config.day_ids_key, "dayIds");
        assert_eq!(config.day_id_upper_bound, 1_000_000);
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = PlannerConfig::from_json(r#"{"base_url": "http://localhost:5000/", "log_level": "debug"}"#).unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.day_ids_key, "dayIds");
        assert_eq!(config.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_zero_upper_bound_is_replaced() {
        let config = PlannerConfig::from_json(r#"{"day_id_upper_bound": 0}"#).unwrap();
        assert_eq!(config.day_id_upper_bound, DEFAULT_DAY_ID_UPPER_BOUND);
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        assert!(matches!(PlannerConfig::from_json("{"), Err(ClientError::Parse(_))));
    }

    #[test]
    fn test_day_id_store_uses_configured_key() {
        let config = PlannerConfig::from_json(r#"{"day_ids_key": "plannerDays"}"#).unwrap();
        let storage = crate::storage::MemoryStorage::new();

        config.day_id_store(&storage).load_or_generate(2026, 10);

        assert!(storage.get_item("plannerDays").unwrap().is_some());
        assert!(storage.get_item("dayIds").unwrap().is_none());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = PlannerConfig {
            log_level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
