//! Per-source incremental load configuration for data-cook ETL jobs.
//!
//! Producers emit source keys in mixed casing (`MySource`, `mySource`,
//! `my_source`). Keys are normalized to snake_case when the object is read,
//! so every spelling of a source lands on one entry.

use indexmap::IndexMap;
use inflector::Inflector;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ModelResult;
use crate::model::object;

const FAMILY: &str = "etl config";

/// Load rows whose `column_name` is past the last seen `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementalConfig {
    pub column_name: String,
    #[serde(default)]
    pub value: String,
}

/// Reload the whole source on every run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FullRefreshConfig {}

/// Load strategy for one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "className")]
pub enum Config {
    #[serde(rename = "incremental_config")]
    Incremental(IncrementalConfig),
    #[serde(rename = "full_refresh_config")]
    FullRefresh(FullRefreshConfig),
}

impl Config {
    pub fn incremental(column_name: impl Into<String>, value: impl Into<String>) -> Self {
        Config::Incremental(IncrementalConfig {
            column_name: column_name.into(),
            value: value.into(),
        })
    }

    pub fn from_object(obj: Value) -> ModelResult<Config> {
        let class_name = object::class_name(FAMILY, &obj)?;
        match class_name.as_str() {
            "incremental_config" => Ok(Config::Incremental(object::decode(FAMILY, obj)?)),
            "full_refresh_config" => Ok(Config::FullRefresh(object::decode(FAMILY, obj)?)),
            _ => object::not_found(FAMILY, class_name),
        }
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Config::from_object(value).map_err(serde::de::Error::custom)
    }
}

/// Source entries as read, before key normalization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEtlConfig {
    map_incremental_config: IndexMap<String, Value>,
}

/// Incremental configs keyed by snake_case source name.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtlConfig {
    pub map_incremental_config: IndexMap<String, Config>,
}

impl EtlConfig {
    /// Rebuild from a plain object, snake-casing every source key.
    ///
    /// Keys that normalize to the same name collapse into one entry; the value
    /// enumerated last wins. A missing `mapIncrementalConfig`, or a value that
    /// is not an object, is `InvalidObject`.
    pub fn from_object(obj: Value) -> ModelResult<EtlConfig> {
        let raw: RawEtlConfig = object::decode(FAMILY, obj)?;
        let raw = raw.map_incremental_config;
        tracing::debug!(entries = raw.len(), "EtlConfig::from_object");

        let mut map_incremental_config = IndexMap::with_capacity(raw.len());
        for (key, value) in raw {
            let normalized = key.to_snake_case();
            let config = Config::from_object(value)?;
            if map_incremental_config.insert(normalized.clone(), config).is_some() {
                tracing::debug!(
                    key = %key,
                    normalized = %normalized,
                    "source key collapsed onto existing entry"
                );
            }
        }
        Ok(EtlConfig {
            map_incremental_config,
        })
    }

    /// Look up a source by any spelling of its key.
    pub fn get(&self, source: &str) -> Option<&Config> {
        self.map_incremental_config.get(&source.to_snake_case())
    }

    pub fn len(&self) -> usize {
        self.map_incremental_config.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map_incremental_config.is_empty()
    }
}

impl<'de> Deserialize<'de> for EtlConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        EtlConfig::from_object(value).map_err(serde::de::Error::custom)
    }
}
