// src/model/query_setting/scatter.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::QuerySettingBase;
use super::capability::{
    apply_zoom_level, replace_dynamic_function, DynamicFunctionMap, Filterable, QuerySettingOps,
    Zoomable,
};
use super::FAMILY;
use crate::error::ModelResult;
use crate::model::column::TableColumn;
use crate::model::object;
use crate::model::zoom::ZoomData;

/// Scatter plot, optionally split into series by `legend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterQuerySetting {
    pub x_axis: TableColumn,
    pub y_axis: TableColumn,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<TableColumn>,
    #[serde(flatten)]
    pub base: QuerySettingBase,
}

impl ScatterQuerySetting {
    pub fn new(x_axis: TableColumn, y_axis: TableColumn, legend: Option<TableColumn>) -> Self {
        Self {
            x_axis,
            y_axis,
            legend,
            base: QuerySettingBase::default(),
        }
    }

    pub fn from_object(obj: Value) -> ModelResult<Self> {
        object::decode(FAMILY, obj)
    }
}

impl QuerySettingOps for ScatterQuerySetting {
    fn base(&self) -> &QuerySettingBase {
        &self.base
    }

    fn all_table_columns(&self) -> Vec<&TableColumn> {
        let mut columns = vec![&self.x_axis, &self.y_axis];
        columns.extend(self.legend.as_ref());
        columns
    }

    fn set_dynamic_functions(&mut self, functions: &DynamicFunctionMap) {
        self.x_axis = replace_dynamic_function(&self.x_axis, functions);
        self.y_axis = replace_dynamic_function(&self.y_axis, functions);
        if let Some(legend) = self.legend.as_mut() {
            *legend = replace_dynamic_function(legend, functions);
        }
    }
}

impl Zoomable for ScatterQuerySetting {
    fn zoom_data(&self) -> ZoomData {
        ZoomData::new(&self.x_axis.function)
    }

    fn set_zoom_data(&mut self, data: &ZoomData) {
        apply_zoom_level(
            &mut self.x_axis,
            &mut self.base.sorts,
            data.horizontal_level.as_ref(),
        );
    }
}

impl Filterable for ScatterQuerySetting {
    fn filter_column(&self) -> &TableColumn {
        self.legend.as_ref().unwrap_or(&self.x_axis)
    }
}
