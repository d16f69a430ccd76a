//! # chart-query
//!
//! Typed query settings for dashboard charts.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │        Plain JSON (chart config, filter rows, ETL)       │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [from_object, className dispatch]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Model: QuerySetting / Condition / Widget / EtlConfig   │
//! └─────────────────────────────────────────────────────────┘
//!            │                    │                  │
//!            ▼ [drilldown]        ▼ [zoom]           ▼ [dynamic functions]
//!      new QuerySetting      in place            in place
//! ```
//!
//! Filter rows entered in the UI go through [`resolver`] to become
//! [`model::Condition`] trees.
//!
//! Drilldown is copy-on-write: the receiver is never modified, so a
//! navigation stack can hold every step. Zoom and dynamic-function
//! substitution rewrite the live setting.

pub mod config;
pub mod error;
pub mod etl;
pub mod model;
pub mod resolver;

pub use error::{ModelError, ModelResult};
pub use etl::{Config, EtlConfig};
pub use model::{Condition, DrilldownData, QuerySetting, TableColumn, Widget, ZoomData};
pub use resolver::{ConditionData, ConditionResolver, NestedConditionResolver};

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::config::{ResolverSettings, Settings};
    pub use crate::error::{ModelError, ModelResult};
    pub use crate::etl::{Config, EtlConfig, IncrementalConfig};
    pub use crate::model::{
        Condition, DrilldownData, Drilldownable, DynamicFunctionMap, Field, FieldRelatedCondition,
        Filterable, Function, FunctionType, OrderBy, QuerySetting, QuerySettingBase,
        QuerySettingOps, ScalarFunction, ScalarFunctionType, SortDirection, TableColumn, Widget,
        ZoomData, Zoomable,
    };
    pub use crate::resolver::{
        ConditionBuilder, ConditionData, ConditionGroups, ConditionResolver, FilterOperator,
        NestedConditionResolver,
    };
}
