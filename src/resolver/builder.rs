//! Descriptor to condition mapping.

use super::condition_data::{ConditionData, FilterOperator};
use crate::model::{
    Condition, DynamicValueCondition, RangeCondition, UnaryCondition, ValueCondition,
    ValuesCondition,
};

/// Turns one UI descriptor into a typed condition.
pub trait ConditionBuilder {
    /// `None` when the descriptor is incomplete; callers skip it.
    fn build_condition(&self, data: &ConditionData) -> Option<Condition>;
}

/// Builds conditions from the descriptor's operator and operands.
///
/// Yields nothing for a missing field or operator, a blank required value,
/// a `between` without both bounds, or an `in`/`not_in` without values.
#[derive(Debug, Clone, Copy, Default)]
pub struct OperatorConditionBuilder;

impl ConditionBuilder for OperatorConditionBuilder {
    fn build_condition(&self, data: &ConditionData) -> Option<Condition> {
        let field = data.field.clone()?;
        let operator = data.operator()?;

        let value = |data: &ConditionData| -> Option<ValueCondition> {
            Some(ValueCondition::new(field.clone(), data.first_value()?))
        };
        let unary = || UnaryCondition {
            field: field.clone(),
            scalar_function: None,
        };

        let mut condition = match operator {
            FilterOperator::Equal => Condition::Equal(value(data)?),
            FilterOperator::NotEqual => Condition::NotEqual(value(data)?),
            FilterOperator::GreaterThan => Condition::GreaterThan(value(data)?),
            FilterOperator::GreaterThanOrEqual => Condition::GreaterThanOrEqual(value(data)?),
            FilterOperator::LessThan => Condition::LessThan(value(data)?),
            FilterOperator::LessThanOrEqual => Condition::LessThanOrEqual(value(data)?),
            FilterOperator::Like => Condition::Like(value(data)?),
            FilterOperator::NotLike => Condition::NotLike(value(data)?),
            FilterOperator::Between => Condition::Between(RangeCondition {
                field: field.clone(),
                min: data.first_value()?,
                max: data.second_value()?,
                scalar_function: None,
            }),
            FilterOperator::In => Condition::In(ValuesCondition {
                field: field.clone(),
                values: data.list_values()?,
                scalar_function: None,
            }),
            FilterOperator::NotIn => Condition::NotIn(ValuesCondition {
                field: field.clone(),
                values: data.list_values()?,
                scalar_function: None,
            }),
            FilterOperator::IsNull => Condition::IsNull(unary()),
            FilterOperator::NotNull => Condition::NotNull(unary()),
            FilterOperator::Empty => Condition::Empty(unary()),
            FilterOperator::NotEmpty => Condition::NotEmpty(unary()),
        };

        if let Some(scalar) = data.scalar_function.clone() {
            if let Some(related) = condition.as_field_related_mut() {
                related.set_scalar_function(scalar);
            }
        }

        if let Some(dynamic_widget_id) = data.dynamic_widget_id {
            condition = Condition::DynamicValue(DynamicValueCondition {
                base_condition: Box::new(condition),
                dynamic_widget_id,
            });
        }

        Some(condition)
    }
}
