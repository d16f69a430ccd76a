// src/model/query_setting/number.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::QuerySettingBase;
use super::capability::{replace_dynamic_function, DynamicFunctionMap, QuerySettingOps};
use super::FAMILY;
use crate::error::ModelResult;
use crate::model::column::TableColumn;
use crate::model::object;

/// Single KPI value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberQuerySetting {
    pub value: TableColumn,
    #[serde(flatten)]
    pub base: QuerySettingBase,
}

impl NumberQuerySetting {
    pub fn new(value: TableColumn) -> Self {
        Self {
            value,
            base: QuerySettingBase::default(),
        }
    }

    pub fn from_object(obj: Value) -> ModelResult<Self> {
        object::decode(FAMILY, obj)
    }
}

impl QuerySettingOps for NumberQuerySetting {
    fn base(&self) -> &QuerySettingBase {
        &self.base
    }

    fn all_table_columns(&self) -> Vec<&TableColumn> {
        vec![&self.value]
    }

    fn set_dynamic_functions(&mut self, functions: &DynamicFunctionMap) {
        self.value = replace_dynamic_function(&self.value, functions);
    }
}
