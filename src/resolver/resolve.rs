//! Descriptor groups to condition trees.

use indexmap::IndexMap;

use super::builder::{ConditionBuilder, OperatorConditionBuilder};
use super::condition_data::ConditionData;
use crate::config::ResolverSettings;
use crate::model::{Condition, ScalarFunction};

/// Filter rows grouped by group index. Iteration order is output order.
pub type ConditionGroups = IndexMap<i64, Vec<ConditionData>>;

/// Resolves UI filter descriptors into conditions.
pub trait ConditionResolver {
    /// Build the condition for the `index`-th row of a group.
    fn build_condition(&self, index: usize, data: &ConditionData) -> Option<Condition>;

    /// One `And` per group that yields at least one condition, in group order.
    ///
    /// Rows that yield nothing are skipped; groups left empty are dropped.
    fn build_conditions(&self, groups: &ConditionGroups) -> Vec<Condition> {
        groups
            .iter()
            .filter_map(|(group, rows)| {
                let conditions: Vec<Condition> = rows
                    .iter()
                    .enumerate()
                    .filter_map(|(index, row)| self.build_condition(index, row))
                    .collect();
                if conditions.is_empty() {
                    tracing::debug!(group, rows = rows.len(), "dropping group without conditions");
                    None
                } else {
                    Some(Condition::and(conditions))
                }
            })
            .collect()
    }
}

/// Resolver that unwraps nested (array) fields.
///
/// When a row is marked nested and its condition is field-related, a
/// `GetArrayElement` scalar function is composed onto the condition's scalar
/// chain, or set as the chain when there is none.
#[derive(Debug, Clone, Default)]
pub struct NestedConditionResolver<B = OperatorConditionBuilder> {
    builder: B,
    nested_array_index: Option<i32>,
}

impl NestedConditionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &ResolverSettings) -> Self {
        Self::new().with_nested_array_index(settings.nested_array_index)
    }
}

impl<B: ConditionBuilder> NestedConditionResolver<B> {
    pub fn with_builder(builder: B) -> Self {
        Self {
            builder,
            nested_array_index: None,
        }
    }

    /// Element index used for nested fields; `None` expands the whole array.
    pub fn with_nested_array_index(mut self, index: Option<i32>) -> Self {
        self.nested_array_index = index;
        self
    }
}

impl<B: ConditionBuilder> ConditionResolver for NestedConditionResolver<B> {
    fn build_condition(&self, index: usize, data: &ConditionData) -> Option<Condition> {
        let Some(mut condition) = self.builder.build_condition(data) else {
            tracing::debug!(index, id = data.id, "descriptor yields no condition");
            return None;
        };

        if data.is_nested {
            if let Some(related) = condition.as_field_related_mut() {
                let element = ScalarFunction::get_array_element(self.nested_array_index);
                match related.scalar_function_mut() {
                    Some(existing) => {
                        existing.with_scalar_function(element);
                    }
                    None => related.set_scalar_function(element),
                }
            }
        }

        tracing::debug!(index, class_name = condition.class_name(), "built condition");
        Some(condition)
    }
}
