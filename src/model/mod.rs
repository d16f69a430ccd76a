//! Query-setting domain model.
//!
//! Leaf values ([`Field`], [`ScalarFunction`], [`Function`], [`TableColumn`],
//! [`OrderBy`]) compose into [`Condition`] trees and per-chart
//! [`QuerySetting`]s. Polymorphic families are rebuilt from plain JSON with
//! `from_object`, which dispatches on the `className` tag.

pub mod column;
pub mod condition;
pub mod drilldown;
pub mod field;
pub mod function;
pub(crate) mod object;
pub mod order_by;
pub mod query_setting;
pub mod scalar;
pub mod sql_view;
pub mod widget;
pub mod zoom;

pub use column::{ColumnPatch, TableColumn, WidgetId};
pub use condition::{
    Condition, DynamicValueCondition, FieldRelatedCondition, LogicalCondition, RangeCondition,
    UnaryCondition, ValueCondition, ValuesCondition,
};
pub use drilldown::{build_drilldown_conditions, build_equal_condition, DrilldownData};
pub use field::Field;
pub use function::{Function, FunctionType};
pub use object::CLASS_NAME;
pub use order_by::{OrderBy, SortDirection};
pub use query_setting::{
    DrilldownPieQuerySetting, Drilldownable, DynamicFunctionMap, Filterable, FunnelQuerySetting,
    NumberQuerySetting, PieQuerySetting, QuerySetting, QuerySettingBase, QuerySettingOps,
    QuerySettingType, ScatterQuerySetting, SeriesQuerySetting, Zoomable,
};
pub use scalar::{ScalarFunction, ScalarFunctionType};
pub use sql_view::{InlineSqlView, RawQuery};
pub use widget::{
    apply_dynamic_functions, dynamic_function_map, ChartInfo, DateFilterWidget,
    DynamicConditionWidget, DynamicFilterWidget, DynamicFunctionWidget, ImageWidget, LinkWidget,
    TabItem, TabWidget, TextWidget, Widget, WidgetCommonData,
};
pub use zoom::{ZoomData, ZoomLevel};
