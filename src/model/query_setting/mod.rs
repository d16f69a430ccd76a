//! Chart query settings.
//!
//! A query setting is the typed description of the data a chart requests:
//! its column slots plus the shared filters, sorts, options and inline SQL
//! views. Each chart type is one variant of [`QuerySetting`], selected by the
//! `className` tag of its plain-object form.
//!
//! Optional capabilities ([`Zoomable`], [`Drilldownable`], [`Filterable`]) are
//! traits; use [`QuerySetting::as_zoomable`] and friends to check for them.

mod base;
mod capability;
mod drilldown_pie;
mod funnel;
mod number;
mod pie;
mod scatter;
mod series;

pub use base::QuerySettingBase;
pub use capability::{DynamicFunctionMap, Drilldownable, Filterable, QuerySettingOps, Zoomable};
pub use drilldown_pie::DrilldownPieQuerySetting;
pub use funnel::FunnelQuerySetting;
pub use number::NumberQuerySetting;
pub use pie::PieQuerySetting;
pub use scatter::ScatterQuerySetting;
pub use series::SeriesQuerySetting;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::column::TableColumn;
use super::condition::Condition;
use super::function::Function;
use super::object;
use super::order_by::OrderBy;
use crate::error::ModelResult;

pub(crate) const FAMILY: &str = "query setting";

/// `className` tags of the query-setting variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuerySettingType {
    Pie,
    Funnel,
    DrilldownPie,
    Scatter,
    Series,
    Number,
}

impl QuerySettingType {
    pub const ALL: [QuerySettingType; 6] = [
        QuerySettingType::Pie,
        QuerySettingType::Funnel,
        QuerySettingType::DrilldownPie,
        QuerySettingType::Scatter,
        QuerySettingType::Series,
        QuerySettingType::Number,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            QuerySettingType::Pie => "pie_chart_setting",
            QuerySettingType::Funnel => "funnel_chart_setting",
            QuerySettingType::DrilldownPie => "drilldown_chart_setting",
            QuerySettingType::Scatter => "scatter_chart_setting",
            QuerySettingType::Series => "series_chart_setting",
            QuerySettingType::Number => "number_chart_setting",
        }
    }

    pub fn from_class_name(class_name: &str) -> Option<Self> {
        QuerySettingType::ALL
            .into_iter()
            .find(|kind| kind.class_name() == class_name)
    }
}

/// A chart query, one variant per chart type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "className")]
pub enum QuerySetting {
    #[serde(rename = "pie_chart_setting")]
    Pie(PieQuerySetting),
    #[serde(rename = "funnel_chart_setting")]
    Funnel(FunnelQuerySetting),
    #[serde(rename = "drilldown_chart_setting")]
    DrilldownPie(DrilldownPieQuerySetting),
    #[serde(rename = "scatter_chart_setting")]
    Scatter(ScatterQuerySetting),
    #[serde(rename = "series_chart_setting")]
    Series(SeriesQuerySetting),
    #[serde(rename = "number_chart_setting")]
    Number(NumberQuerySetting),
}

impl QuerySetting {
    /// Rebuild a query setting from its plain-object form.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ClassNotFound` when `className` names no variant.
    pub fn from_object(obj: Value) -> ModelResult<QuerySetting> {
        let class_name = object::class_name(FAMILY, &obj)?;
        let Some(kind) = QuerySettingType::from_class_name(&class_name) else {
            return object::not_found(FAMILY, class_name);
        };
        let setting = match kind {
            QuerySettingType::Pie => QuerySetting::Pie(PieQuerySetting::from_object(obj)?),
            QuerySettingType::Funnel => QuerySetting::Funnel(FunnelQuerySetting::from_object(obj)?),
            QuerySettingType::DrilldownPie => {
                QuerySetting::DrilldownPie(DrilldownPieQuerySetting::from_object(obj)?)
            }
            QuerySettingType::Scatter => {
                QuerySetting::Scatter(ScatterQuerySetting::from_object(obj)?)
            }
            QuerySettingType::Series => QuerySetting::Series(SeriesQuerySetting::from_object(obj)?),
            QuerySettingType::Number => QuerySetting::Number(NumberQuerySetting::from_object(obj)?),
        };
        tracing::debug!(class_name = kind.class_name(), "rebuilt query setting");
        Ok(setting)
    }

    pub fn kind(&self) -> QuerySettingType {
        match self {
            QuerySetting::Pie(_) => QuerySettingType::Pie,
            QuerySetting::Funnel(_) => QuerySettingType::Funnel,
            QuerySetting::DrilldownPie(_) => QuerySettingType::DrilldownPie,
            QuerySetting::Scatter(_) => QuerySettingType::Scatter,
            QuerySetting::Series(_) => QuerySettingType::Series,
            QuerySetting::Number(_) => QuerySettingType::Number,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.kind().class_name()
    }

    pub fn ops(&self) -> &dyn QuerySettingOps {
        match self {
            QuerySetting::Pie(s) => s,
            QuerySetting::Funnel(s) => s,
            QuerySetting::DrilldownPie(s) => s,
            QuerySetting::Scatter(s) => s,
            QuerySetting::Series(s) => s,
            QuerySetting::Number(s) => s,
        }
    }

    pub fn ops_mut(&mut self) -> &mut dyn QuerySettingOps {
        match self {
            QuerySetting::Pie(s) => s,
            QuerySetting::Funnel(s) => s,
            QuerySetting::DrilldownPie(s) => s,
            QuerySetting::Scatter(s) => s,
            QuerySetting::Series(s) => s,
            QuerySetting::Number(s) => s,
        }
    }

    pub fn base(&self) -> &QuerySettingBase {
        self.ops().base()
    }

    pub fn filters(&self) -> &[Condition] {
        &self.base().filters
    }

    pub fn sorts(&self) -> &[OrderBy] {
        &self.base().sorts
    }

    pub fn all_table_columns(&self) -> Vec<&TableColumn> {
        self.ops().all_table_columns()
    }

    pub fn all_functions(&self) -> Vec<&Function> {
        self.ops().all_functions()
    }

    /// In place; see [`QuerySettingOps::set_dynamic_functions`].
    pub fn set_dynamic_functions(&mut self, functions: &DynamicFunctionMap) {
        self.ops_mut().set_dynamic_functions(functions);
    }

    pub fn as_zoomable(&self) -> Option<&dyn Zoomable> {
        match self {
            QuerySetting::Pie(s) => Some(s),
            QuerySetting::Funnel(s) => Some(s),
            QuerySetting::Scatter(s) => Some(s),
            QuerySetting::Series(s) => Some(s),
            QuerySetting::DrilldownPie(_) | QuerySetting::Number(_) => None,
        }
    }

    pub fn as_zoomable_mut(&mut self) -> Option<&mut dyn Zoomable> {
        match self {
            QuerySetting::Pie(s) => Some(s),
            QuerySetting::Funnel(s) => Some(s),
            QuerySetting::Scatter(s) => Some(s),
            QuerySetting::Series(s) => Some(s),
            QuerySetting::DrilldownPie(_) | QuerySetting::Number(_) => None,
        }
    }

    pub fn as_drilldownable(&self) -> Option<&dyn Drilldownable> {
        match self {
            QuerySetting::Pie(s) => Some(s),
            QuerySetting::Funnel(s) => Some(s),
            QuerySetting::Series(s) => Some(s),
            QuerySetting::DrilldownPie(_) | QuerySetting::Scatter(_) | QuerySetting::Number(_) => {
                None
            }
        }
    }

    pub fn as_filterable(&self) -> Option<&dyn Filterable> {
        match self {
            QuerySetting::Pie(s) => Some(s),
            QuerySetting::Funnel(s) => Some(s),
            QuerySetting::Scatter(s) => Some(s),
            QuerySetting::Series(s) => Some(s),
            QuerySetting::DrilldownPie(_) | QuerySetting::Number(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for QuerySetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        QuerySetting::from_object(value).map_err(serde::de::Error::custom)
    }
}

impl From<FunnelQuerySetting> for QuerySetting {
    fn from(setting: FunnelQuerySetting) -> Self {
        QuerySetting::Funnel(setting)
    }
}

impl From<PieQuerySetting> for QuerySetting {
    fn from(setting: PieQuerySetting) -> Self {
        QuerySetting::Pie(setting)
    }
}

impl From<SeriesQuerySetting> for QuerySetting {
    fn from(setting: SeriesQuerySetting) -> Self {
        QuerySetting::Series(setting)
    }
}
