// src/model/query_setting/base.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::condition::Condition;
use crate::model::order_by::OrderBy;
use crate::model::sql_view::InlineSqlView;

/// Parts shared by every chart query: filters, sorts, options and SQL views.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuerySettingBase {
    #[serde(default)]
    pub filters: Vec<Condition>,
    /// Primary sort first.
    #[serde(default)]
    pub sorts: Vec<OrderBy>,
    /// Open chart option bag, passed through untouched.
    #[serde(default)]
    pub options: Map<String, Value>,
    #[serde(default)]
    pub sql_views: Vec<InlineSqlView>,
}

impl QuerySettingBase {
    pub fn with_filters(mut self, filters: Vec<Condition>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sorts(mut self, sorts: Vec<OrderBy>) -> Self {
        self.sorts = sorts;
        self
    }

    pub fn with_sql_views(mut self, sql_views: Vec<InlineSqlView>) -> Self {
        self.sql_views = sql_views;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Copy with `filters` in place of the current ones.
    pub(crate) fn replace_filters(&self, filters: Vec<Condition>) -> Self {
        Self {
            filters,
            sorts: self.sorts.clone(),
            options: self.options.clone(),
            sql_views: self.sql_views.clone(),
        }
    }
}
