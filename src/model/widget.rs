//! Dashboard widgets.
//!
//! Widgets share an envelope (id, name, description, colors) and are selected
//! by `className` like query settings. Chart widgets embed a [`QuerySetting`];
//! dynamic-function widgets supply the replacement columns consumed by
//! [`QuerySetting::set_dynamic_functions`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::column::{TableColumn, WidgetId};
use super::condition::Condition;
use super::object;
use super::query_setting::{DynamicFunctionMap, QuerySetting};
use crate::error::ModelResult;

const FAMILY: &str = "widget";

/// Fields shared by every widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetCommonData {
    pub id: WidgetId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Host-specific layout and display settings, kept as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Value>,
}

impl WidgetCommonData {
    pub fn new(id: WidgetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            background_color: None,
            text_color: None,
            extra_data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInfo {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    pub setting: QuerySetting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextWidget {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_html_render: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkWidget {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageWidget {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    pub url: String,
}

/// Date-range picker bound to one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFilterWidget {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<TableColumn>,
    /// Preset mode (`this_month`, `last_7_days`, `custom`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Bounds for a custom range.
    #[serde(default)]
    pub dates: Vec<String>,
}

/// A value picker whose condition applies to other charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFilterWidget {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<TableColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default = "enabled")]
    pub is_enable: bool,
}

fn enabled() -> bool {
    true
}

/// One page of a tab widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    pub name: String,
    #[serde(default)]
    pub widget_ids: Vec<WidgetId>,
}

/// Container grouping other widgets into tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabWidget {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    #[serde(default)]
    pub tab_items: Vec<TabItem>,
}

/// A selector whose chosen columns parameterize other charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicFunctionWidget {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    #[serde(default)]
    pub values: Vec<TableColumn>,
    /// Indexes into `values`; empty selects every value.
    #[serde(default)]
    pub selected_indexes: Vec<usize>,
}

impl DynamicFunctionWidget {
    /// Selected columns in selection order. Out-of-range indexes are ignored.
    pub fn selected_columns(&self) -> Vec<TableColumn> {
        if self.selected_indexes.is_empty() {
            return self.values.clone();
        }
        self.selected_indexes
            .iter()
            .filter_map(|&index| self.values.get(index).cloned())
            .collect()
    }
}

/// A widget holding user-picked conditions that filter other charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicConditionWidget {
    #[serde(flatten)]
    pub common: WidgetCommonData,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "className", rename_all = "snake_case")]
pub enum Widget {
    Chart(ChartInfo),
    Text(TextWidget),
    Link(LinkWidget),
    Image(ImageWidget),
    #[serde(rename = "dynamic_function_widget")]
    DynamicFunction(DynamicFunctionWidget),
    #[serde(rename = "dynamic_condition_widget")]
    DynamicCondition(DynamicConditionWidget),
    DateFilter(DateFilterWidget),
    DynamicFilter(DynamicFilterWidget),
    #[serde(rename = "tab_widget")]
    Tab(TabWidget),
}

impl Widget {
    /// Rebuild a widget from its plain-object form.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ClassNotFound` when `className` names no widget.
    pub fn from_object(obj: Value) -> ModelResult<Widget> {
        let class_name = object::class_name(FAMILY, &obj)?;
        let widget = match class_name.as_str() {
            "chart" => Widget::Chart(object::decode(FAMILY, obj)?),
            "text" => Widget::Text(object::decode(FAMILY, obj)?),
            "link" => Widget::Link(object::decode(FAMILY, obj)?),
            "image" => Widget::Image(object::decode(FAMILY, obj)?),
            "dynamic_function_widget" => Widget::DynamicFunction(object::decode(FAMILY, obj)?),
            "dynamic_condition_widget" => Widget::DynamicCondition(object::decode(FAMILY, obj)?),
            "date_filter" => Widget::DateFilter(object::decode(FAMILY, obj)?),
            "dynamic_filter" => Widget::DynamicFilter(object::decode(FAMILY, obj)?),
            "tab_widget" => Widget::Tab(object::decode(FAMILY, obj)?),
            _ => return object::not_found(FAMILY, class_name),
        };
        Ok(widget)
    }

    pub fn common(&self) -> &WidgetCommonData {
        match self {
            Widget::Chart(w) => &w.common,
            Widget::Text(w) => &w.common,
            Widget::Link(w) => &w.common,
            Widget::Image(w) => &w.common,
            Widget::DynamicFunction(w) => &w.common,
            Widget::DynamicCondition(w) => &w.common,
            Widget::DateFilter(w) => &w.common,
            Widget::DynamicFilter(w) => &w.common,
            Widget::Tab(w) => &w.common,
        }
    }

    fn common_mut(&mut self) -> &mut WidgetCommonData {
        match self {
            Widget::Chart(w) => &mut w.common,
            Widget::Text(w) => &mut w.common,
            Widget::Link(w) => &mut w.common,
            Widget::Image(w) => &mut w.common,
            Widget::DynamicFunction(w) => &mut w.common,
            Widget::DynamicCondition(w) => &mut w.common,
            Widget::DateFilter(w) => &mut w.common,
            Widget::DynamicFilter(w) => &mut w.common,
            Widget::Tab(w) => &mut w.common,
        }
    }

    pub fn id(&self) -> WidgetId {
        self.common().id
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.common_mut().name = title.into();
    }

    pub fn query_setting(&self) -> Option<&QuerySetting> {
        match self {
            Widget::Chart(chart) => Some(&chart.setting),
            _ => None,
        }
    }

    pub fn query_setting_mut(&mut self) -> Option<&mut QuerySetting> {
        match self {
            Widget::Chart(chart) => Some(&mut chart.setting),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Widget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Widget::from_object(value).map_err(serde::de::Error::custom)
    }
}

/// Selected columns of every dynamic-function widget, keyed by widget id.
pub fn dynamic_function_map<'a>(
    widgets: impl IntoIterator<Item = &'a Widget>,
) -> DynamicFunctionMap {
    widgets
        .into_iter()
        .filter_map(|widget| match widget {
            Widget::DynamicFunction(selector) => {
                Some((selector.common.id, selector.selected_columns()))
            }
            _ => None,
        })
        .collect()
}

/// Apply every dynamic-function selection on the dashboard to its charts, in place.
pub fn apply_dynamic_functions(widgets: &mut [Widget]) {
    let functions = dynamic_function_map(widgets.iter());
    if functions.is_empty() {
        return;
    }
    for setting in widgets.iter_mut().filter_map(Widget::query_setting_mut) {
        setting.set_dynamic_functions(&functions);
    }
}
