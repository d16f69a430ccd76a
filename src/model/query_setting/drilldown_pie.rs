// src/model/query_setting/drilldown_pie.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::QuerySettingBase;
use super::capability::{
    replace_dynamic_function, replace_dynamic_functions, DynamicFunctionMap, QuerySettingOps,
};
use super::FAMILY;
use crate::error::ModelResult;
use crate::model::column::TableColumn;
use crate::model::object;

/// Pie chart with a fixed legend hierarchy. Legacy: no zoom, drilldown or
/// cross-filter support.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrilldownPieQuerySetting {
    #[serde(default)]
    pub legends: Vec<TableColumn>,
    pub value: TableColumn,
    #[serde(flatten)]
    pub base: QuerySettingBase,
}

impl DrilldownPieQuerySetting {
    pub fn new(legends: Vec<TableColumn>, value: TableColumn) -> Self {
        Self {
            legends,
            value,
            base: QuerySettingBase::default(),
        }
    }

    pub fn from_object(obj: Value) -> ModelResult<Self> {
        object::decode(FAMILY, obj)
    }
}

impl QuerySettingOps for DrilldownPieQuerySetting {
    fn base(&self) -> &QuerySettingBase {
        &self.base
    }

    fn all_table_columns(&self) -> Vec<&TableColumn> {
        self.legends.iter().chain(std::iter::once(&self.value)).collect()
    }

    fn set_dynamic_functions(&mut self, functions: &DynamicFunctionMap) {
        self.legends = replace_dynamic_functions(&self.legends, functions);
        self.value = replace_dynamic_function(&self.value, functions);
    }
}
