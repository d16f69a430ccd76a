//! Drilldown requests and the filter rewriting they imply.

use serde::{Deserialize, Serialize};

use super::column::TableColumn;
use super::condition::{Condition, ValueCondition};
use super::function::Function;

/// One drill step: fix the current column to `value` and continue on `to_field`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrilldownData {
    /// Display name of the column drilled into.
    pub name: String,
    pub to_field: Function,
    pub value: String,
}

impl DrilldownData {
    pub fn new(name: impl Into<String>, to_field: Function, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            to_field,
            value: value.into(),
        }
    }
}

/// `column = value`, keeping the column's scalar function.
pub fn build_equal_condition(column: &TableColumn, value: impl Into<String>) -> Condition {
    Condition::Equal(ValueCondition {
        field: column.function.field.clone(),
        value: value.into(),
        scalar_function: column.function.scalar_function.clone(),
    })
}

/// Merge a drilldown equality into the current top-level filters.
///
/// An existing top-level `Equal` on the same field is replaced in place; any
/// further equalities on that field are dropped. Otherwise `equal` is appended.
pub fn build_drilldown_conditions(current: &[Condition], equal: Condition) -> Vec<Condition> {
    let Some(target) = equal.as_field_related().map(|c| c.field().clone()) else {
        let mut conditions = current.to_vec();
        conditions.push(equal);
        return conditions;
    };

    let mut pending = Some(equal);
    let mut conditions = Vec::with_capacity(current.len() + 1);
    for condition in current {
        if condition.is_equal_on(&target) {
            if let Some(equal) = pending.take() {
                conditions.push(equal);
            }
            continue;
        }
        conditions.push(condition.clone());
    }
    conditions.extend(pending);
    conditions
}
