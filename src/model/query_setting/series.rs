// src/model/query_setting/series.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::base::QuerySettingBase;
use super::capability::{
    apply_zoom_level, drilldown_parts, replace_dynamic_function, replace_dynamic_functions,
    DynamicFunctionMap, Drilldownable, Filterable, QuerySettingOps, Zoomable,
};
use super::{QuerySetting, FAMILY};
use crate::error::ModelResult;
use crate::model::column::TableColumn;
use crate::model::drilldown::DrilldownData;
use crate::model::object;
use crate::model::zoom::ZoomData;

/// Line/column/area series: one x axis, one or more measures, optional legend split.
///
/// The x axis zooms horizontally; the legend, when present, zooms vertically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesQuerySetting {
    pub x_axis: TableColumn,
    pub y_axis: Vec<TableColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<TableColumn>,
    #[serde(flatten)]
    pub base: QuerySettingBase,
}

impl SeriesQuerySetting {
    pub fn new(x_axis: TableColumn, y_axis: Vec<TableColumn>, legend: Option<TableColumn>) -> Self {
        Self {
            x_axis,
            y_axis,
            legend,
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

impl QuerySettingOps for SeriesQuerySetting {
    fn base(&self) -> &QuerySettingBase {
        &self.base
    }

    fn all_table_columns(&self) -> Vec<&TableColumn> {
        let mut columns = vec![&self.x_axis];
        columns.extend(self.y_axis.iter());
        columns.extend(self.legend.as_ref());
        columns
    }

    fn set_dynamic_functions(&mut self, functions: &DynamicFunctionMap) {
        self.x_axis = replace_dynamic_function(&self.x_axis, functions);
        self.y_axis = replace_dynamic_functions(&self.y_axis, functions);
        if let Some(legend) = self.legend.as_mut() {
            *legend = replace_dynamic_function(legend, functions);
        }
    }
}

impl Zoomable for SeriesQuerySetting {
    fn zoom_data(&self) -> ZoomData {
        let zoom = ZoomData::new(&self.x_axis.function);
        match &self.legend {
            Some(legend) => zoom.with_vertical(&legend.function),
            None => zoom,
        }
    }

    fn set_zoom_data(&mut self, data: &ZoomData) {
        apply_zoom_level(
            &mut self.x_axis,
            &mut self.base.sorts,
            data.horizontal_level.as_ref(),
        );
        if let Some(legend) = self.legend.as_mut() {
            apply_zoom_level(legend, &mut self.base.sorts, data.vertical_level.as_ref());
        }
    }
}

impl Drilldownable for SeriesQuerySetting {
    fn column_will_drilldown(&self) -> &TableColumn {
        &self.x_axis
    }

    fn build_query_drilldown(&self, data: &DrilldownData) -> QuerySetting {
        let (x_axis, base) = drilldown_parts(&self.base, &self.x_axis, data);
        QuerySetting::Series(SeriesQuerySetting {
            x_axis,
            y_axis: self.y_axis.clone(),
            legend: self.legend.clone(),
            base,
        })
    }
}

impl Filterable for SeriesQuerySetting {
    fn filter_column(&self) -> &TableColumn {
        &self.x_axis
    }
}
