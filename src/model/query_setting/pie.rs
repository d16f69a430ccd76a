// src/model/query_setting/pie.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::QuerySettingBase;
use super::capability::{
    apply_zoom_level, drilldown_parts, replace_dynamic_function, DynamicFunctionMap, Drilldownable,
    Filterable, QuerySettingOps, Zoomable,
};
use super::{QuerySetting, FAMILY};
use crate::error::ModelResult;
use crate::model::column::TableColumn;
use crate::model::drilldown::DrilldownData;
use crate::model::object;
use crate::model::zoom::ZoomData;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieQuerySetting {
    pub legend: TableColumn,
    pub value: TableColumn,
    #[serde(flatten)]
    pub base: QuerySettingBase,
}

impl PieQuerySetting {
    pub fn new(legend: TableColumn, value: TableColumn) -> Self {
        Self {
            legend,
            value,
            base: QuerySettingBase::default(),
        }
    }

    pub fn with_base(mut self, base: QuerySettingBase) -> Self {
        self.base = base;
        self
    }

    pub fn from_object(obj: Value) -> ModelResult<Self> {
        object::decode(FAMILY, obj)
    }
}

impl QuerySettingOps for PieQuerySetting {
    fn base(&self) -> &QuerySettingBase {
        &self.base
    }

    fn all_table_columns(&self) -> Vec<&TableColumn> {
        vec![&self.legend, &self.value]
    }

    fn set_dynamic_functions(&mut self, functions: &DynamicFunctionMap) {
        self.legend = replace_dynamic_function(&self.legend, functions);
        self.value = replace_dynamic_function(&self.value, functions);
    }
}

impl Zoomable for PieQuerySetting {
    fn zoom_data(&self) -> ZoomData {
        ZoomData::new(&self.legend.function)
    }

    fn set_zoom_data(&mut self, data: &ZoomData) {
        apply_zoom_level(
            &mut self.legend,
            &mut self.base.sorts,
            data.horizontal_level.as_ref(),
        );
    }
}

impl Drilldownable for PieQuerySetting {
    fn column_will_drilldown(&self) -> &TableColumn {
        &self.legend
    }

    fn build_query_drilldown(&self, data: &DrilldownData) -> QuerySetting {
        let (legend, base) = drilldown_parts(&self.base, &self.legend, data);
        QuerySetting::Pie(PieQuerySetting {
            legend,
            value: self.value.clone(),
            base,
        })
    }
}

impl Filterable for PieQuerySetting {
    fn filter_column(&self) -> &TableColumn {
        &self.legend
    }
}
