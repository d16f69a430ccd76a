//! Capabilities shared by query settings.
//!
//! Operations split into two groups:
//! - in place: [`QuerySettingOps::set_dynamic_functions`] and
//!   [`Zoomable::set_zoom_data`] rewrite the live setting;
//! - copy-on-write: [`Drilldownable::build_query_drilldown`] leaves the
//!   receiver untouched and returns a new setting, so a navigation stack can
//!   keep every step as its own snapshot.

use indexmap::IndexMap;

use super::base::QuerySettingBase;
use super::QuerySetting;
use crate::model::column::{ColumnPatch, TableColumn, WidgetId};
use crate::model::condition::Condition;
use crate::model::drilldown::{build_drilldown_conditions, build_equal_condition, DrilldownData};
use crate::model::function::Function;
use crate::model::order_by::OrderBy;
use crate::model::scalar::ScalarFunctionType;
use crate::model::zoom::{ZoomData, ZoomLevel};

/// Replacement columns per dynamic-function widget.
pub type DynamicFunctionMap = IndexMap<WidgetId, Vec<TableColumn>>;

/// Operations every chart query supports.
pub trait QuerySettingOps {
    fn base(&self) -> &QuerySettingBase;

    /// Every column slot, each exactly once.
    fn all_table_columns(&self) -> Vec<&TableColumn>;

    fn all_functions(&self) -> Vec<&Function> {
        self.all_table_columns()
            .into_iter()
            .map(|column| &column.function)
            .collect()
    }

    /// Substitute dynamic columns in place. Columns without a replacement stay as they are.
    fn set_dynamic_functions(&mut self, functions: &DynamicFunctionMap);
}

/// Charts whose axis can be zoomed through a date hierarchy.
pub trait Zoomable {
    fn zoom_data(&self) -> ZoomData;

    /// Extend the drill path one level deeper.
    fn build_new_zoom_data(&self, data: &ZoomData, next_level: ScalarFunctionType) -> ZoomData {
        data.create_new_horizontal_field(next_level)
    }

    /// Apply the zoom level's scalar function to the zoomed column and to
    /// every sort on the same field. In place.
    fn set_zoom_data(&mut self, data: &ZoomData);
}

/// Charts that can drill into a clicked value.
pub trait Drilldownable {
    fn column_will_drilldown(&self) -> &TableColumn;

    /// New setting filtered on the clicked value and grouped by the next field.
    fn build_query_drilldown(&self, data: &DrilldownData) -> QuerySetting;
}

/// Charts that can act as a cross-filter source.
pub trait Filterable {
    fn filter_column(&self) -> &TableColumn;
}

/// Set the level's scalar function on `column` and on matching sorts.
pub(crate) fn apply_zoom_level(
    column: &mut TableColumn,
    sorts: &mut [OrderBy],
    level: Option<&ZoomLevel>,
) {
    let Some(level) = level else {
        return;
    };
    let Some(scalar) = level.scalar_function.as_ref() else {
        return;
    };

    for sort in sorts.iter_mut().filter(|sort| sort.is_on_field(&level.field)) {
        sort.function.set_scalar_function(scalar.clone());
    }
    column.function.set_scalar_function(scalar.clone());
    tracing::debug!(
        column = %column.name,
        scalar = %scalar.class_name,
        "applied zoom level"
    );
}

/// Drilled column plus merged filters for a drill step on `column`.
pub(crate) fn drilldown_parts(
    base: &QuerySettingBase,
    column: &TableColumn,
    data: &DrilldownData,
) -> (TableColumn, QuerySettingBase) {
    let drilled = column.copy_with(ColumnPatch {
        name: Some(data.name.clone()),
        function: Some(data.to_field.clone()),
        ..Default::default()
    });
    let equal: Condition = build_equal_condition(column, data.value.as_str());
    let filters = build_drilldown_conditions(&base.filters, equal);
    tracing::debug!(
        from = %column.name,
        to = %drilled.name,
        value = %data.value,
        filters = filters.len(),
        "built drilldown query"
    );
    (drilled, base.replace_filters(filters))
}

/// Replacement for a single column slot: the first column of its widget.
pub(crate) fn replace_dynamic_function(
    column: &TableColumn,
    functions: &DynamicFunctionMap,
) -> TableColumn {
    let Some(widget_id) = column.dynamic_function_id else {
        return column.clone();
    };
    match functions.get(&widget_id).and_then(|columns| columns.first()) {
        Some(replacement) => replacement.clone().with_dynamic_function(widget_id),
        None => column.clone(),
    }
}

/// Replacement for a list slot.
///
/// A run of adjacent columns tagged with the same widget is one dynamic slot:
/// it is replaced as a whole by every column of that widget, so applying the
/// same selection again leaves the list unchanged.
pub(crate) fn replace_dynamic_functions(
    columns: &[TableColumn],
    functions: &DynamicFunctionMap,
) -> Vec<TableColumn> {
    let same_slot = |a: &TableColumn, b: &TableColumn| {
        a.dynamic_function_id.is_some() && a.dynamic_function_id == b.dynamic_function_id
    };

    let mut replaced = Vec::with_capacity(columns.len());
    for slot in columns.chunk_by(same_slot) {
        let found = slot
            .first()
            .and_then(|column| column.dynamic_function_id)
            .and_then(|widget_id| functions.get(&widget_id).map(|found| (widget_id, found)))
            .filter(|(_, found)| !found.is_empty());
        match found {
            Some((widget_id, found)) => replaced.extend(
                found
                    .iter()
                    .map(|replacement| replacement.clone().with_dynamic_function(widget_id)),
            ),
            None => replaced.extend_from_slice(slot),
        }
    }
    replaced
}
