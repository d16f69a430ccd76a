// src/model/sql_view.rs
use serde::{Deserialize, Serialize};

/// Raw SQL text backing an inline view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuery {
    #[serde(default = "default_query_class")]
    pub class_name: String,
    pub query: String,
}

fn default_query_class() -> String {
    "raw_query".to_string()
}

/// A named SQL view the chart query can select from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineSqlView {
    pub alias_name: String,
    pub query: RawQuery,
}

impl InlineSqlView {
    pub fn new(alias_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            alias_name: alias_name.into(),
            query: RawQuery {
                class_name: default_query_class(),
                query: query.into(),
            },
        }
    }
}
