//! Condition resolution: raw UI filter rows to typed condition trees.
//!
//! - [`ConditionBuilder`] maps one row to a condition, or to nothing when the
//!   row is incomplete.
//! - [`ConditionResolver`] applies nested-field unwrapping and groups rows
//!   into `And` conditions.

mod builder;
mod condition_data;
mod resolve;

pub use builder::{ConditionBuilder, OperatorConditionBuilder};
pub use condition_data::{ConditionData, FilterOperator};
pub use resolve::{ConditionGroups, ConditionResolver, NestedConditionResolver};
