//! Filter predicates.
//!
//! Every variant other than `And`/`Or` is field-related: it carries the field
//! it tests and an optional scalar function applied to that field first.
//! `DynamicValueCondition` wraps a field-related condition whose value is
//! supplied by another widget at render time.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::column::WidgetId;
use super::field::Field;
use super::object;
use super::scalar::ScalarFunction;
use crate::error::ModelResult;

const FAMILY: &str = "condition";

/// Field + single comparison value (`=`, `<>`, `>`, `LIKE`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueCondition {
    pub field: Field,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar_function: Option<ScalarFunction>,
}

/// Field + value list (`IN`, `NOT IN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuesCondition {
    pub field: Field,
    pub values: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar_function: Option<ScalarFunction>,
}

/// Field + inclusive bounds (`BETWEEN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeCondition {
    pub field: Field,
    pub min: String,
    pub max: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar_function: Option<ScalarFunction>,
}

/// Field only (`IS NULL`, `IS NOT NULL`, empty checks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnaryCondition {
    pub field: Field,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar_function: Option<ScalarFunction>,
}

/// Children of an `And`/`Or` node, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicalCondition {
    pub conditions: Vec<Condition>,
}

/// A field-related condition whose value comes from a dynamic-value widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicValueCondition {
    pub base_condition: Box<Condition>,
    pub dynamic_widget_id: WidgetId,
}

/// Read/write access to the field side of a condition.
pub trait FieldRelatedCondition {
    fn field(&self) -> &Field;
    fn scalar_function(&self) -> Option<&ScalarFunction>;
    fn scalar_function_mut(&mut self) -> Option<&mut ScalarFunction>;
    fn set_scalar_function(&mut self, function: ScalarFunction);
}

macro_rules! impl_field_related {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FieldRelatedCondition for $ty {
                fn field(&self) -> &Field {
                    &self.field
                }

                fn scalar_function(&self) -> Option<&ScalarFunction> {
                    self.scalar_function.as_ref()
                }

                fn scalar_function_mut(&mut self) -> Option<&mut ScalarFunction> {
                    self.scalar_function.as_mut()
                }

                fn set_scalar_function(&mut self, function: ScalarFunction) {
                    self.scalar_function = Some(function);
                }
            }
        )+
    };
}

impl_field_related!(ValueCondition, ValuesCondition, RangeCondition, UnaryCondition);

/// A filter predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "className", rename_all = "snake_case")]
pub enum Condition {
    And(LogicalCondition),
    Or(LogicalCondition),
    Equal(ValueCondition),
    NotEqual(ValueCondition),
    GreaterThan(ValueCondition),
    GreaterThanOrEqual(ValueCondition),
    LessThan(ValueCondition),
    LessThanOrEqual(ValueCondition),
    Like(ValueCondition),
    NotLike(ValueCondition),
    Between(RangeCondition),
    In(ValuesCondition),
    NotIn(ValuesCondition),
    IsNull(UnaryCondition),
    NotNull(UnaryCondition),
    Empty(UnaryCondition),
    NotEmpty(UnaryCondition),
    #[serde(rename = "dynamic_value_condition")]
    DynamicValue(DynamicValueCondition),
}

impl Condition {
    /// Rebuild a condition tree from a plain object, dispatching on `className`.
    pub fn from_object(obj: Value) -> ModelResult<Condition> {
        let class_name = object::class_name(FAMILY, &obj)?;
        let condition = match class_name.as_str() {
            "and" => Condition::And(object::decode(FAMILY, obj)?),
            "or" => Condition::Or(object::decode(FAMILY, obj)?),
            "equal" => Condition::Equal(object::decode(FAMILY, obj)?),
            "not_equal" => Condition::NotEqual(object::decode(FAMILY, obj)?),
            "greater_than" => Condition::GreaterThan(object::decode(FAMILY, obj)?),
            "greater_than_or_equal" => Condition::GreaterThanOrEqual(object::decode(FAMILY, obj)?),
            "less_than" => Condition::LessThan(object::decode(FAMILY, obj)?),
            "less_than_or_equal" => Condition::LessThanOrEqual(object::decode(FAMILY, obj)?),
            "like" => Condition::Like(object::decode(FAMILY, obj)?),
            "not_like" => Condition::NotLike(object::decode(FAMILY, obj)?),
            "between" => Condition::Between(object::decode(FAMILY, obj)?),
            "in" => Condition::In(object::decode(FAMILY, obj)?),
            "not_in" => Condition::NotIn(object::decode(FAMILY, obj)?),
            "is_null" => Condition::IsNull(object::decode(FAMILY, obj)?),
            "not_null" => Condition::NotNull(object::decode(FAMILY, obj)?),
            "empty" => Condition::Empty(object::decode(FAMILY, obj)?),
            "not_empty" => Condition::NotEmpty(object::decode(FAMILY, obj)?),
            "dynamic_value_condition" => Condition::DynamicValue(object::decode(FAMILY, obj)?),
            _ => return object::not_found(FAMILY, class_name),
        };
        Ok(condition)
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            Condition::And(_) => "and",
            Condition::Or(_) => "or",
            Condition::Equal(_) => "equal",
            Condition::NotEqual(_) => "not_equal",
            Condition::GreaterThan(_) => "greater_than",
            Condition::GreaterThanOrEqual(_) => "greater_than_or_equal",
            Condition::LessThan(_) => "less_than",
            Condition::LessThanOrEqual(_) => "less_than_or_equal",
            Condition::Like(_) => "like",
            Condition::NotLike(_) => "not_like",
            Condition::Between(_) => "between",
            Condition::In(_) => "in",
            Condition::NotIn(_) => "not_in",
            Condition::IsNull(_) => "is_null",
            Condition::NotNull(_) => "not_null",
            Condition::Empty(_) => "empty",
            Condition::NotEmpty(_) => "not_empty",
            Condition::DynamicValue(_) => "dynamic_value_condition",
        }
    }

    pub fn and(conditions: Vec<Condition>) -> Self {
        Condition::And(LogicalCondition { conditions })
    }

    pub fn or(conditions: Vec<Condition>) -> Self {
        Condition::Or(LogicalCondition { conditions })
    }

    pub fn equal(field: Field, value: impl Into<String>) -> Self {
        Condition::Equal(ValueCondition::new(field, value))
    }

    pub fn not_equal(field: Field, value: impl Into<String>) -> Self {
        Condition::NotEqual(ValueCondition::new(field, value))
    }

    pub fn between(field: Field, min: impl Into<String>, max: impl Into<String>) -> Self {
        Condition::Between(RangeCondition {
            field,
            min: min.into(),
            max: max.into(),
            scalar_function: None,
        })
    }

    pub fn is_in(field: Field, values: Vec<String>) -> Self {
        Condition::In(ValuesCondition {
            field,
            values,
            scalar_function: None,
        })
    }

    pub fn is_null(field: Field) -> Self {
        Condition::IsNull(UnaryCondition {
            field,
            scalar_function: None,
        })
    }

    /// Field-related view of this condition, if it has one.
    ///
    /// `DynamicValueCondition` answers with its base condition.
    pub fn as_field_related(&self) -> Option<&dyn FieldRelatedCondition> {
        match self {
            Condition::And(_) | Condition::Or(_) => None,
            Condition::Equal(c)
            | Condition::NotEqual(c)
            | Condition::GreaterThan(c)
            | Condition::GreaterThanOrEqual(c)
            | Condition::LessThan(c)
            | Condition::LessThanOrEqual(c)
            | Condition::Like(c)
            | Condition::NotLike(c) => Some(c),
            Condition::Between(c) => Some(c),
            Condition::In(c) | Condition::NotIn(c) => Some(c),
            Condition::IsNull(c)
            | Condition::NotNull(c)
            | Condition::Empty(c)
            | Condition::NotEmpty(c) => Some(c),
            Condition::DynamicValue(c) => c.base_condition.as_field_related(),
        }
    }

    pub fn as_field_related_mut(&mut self) -> Option<&mut dyn FieldRelatedCondition> {
        match self {
            Condition::And(_) | Condition::Or(_) => None,
            Condition::Equal(c)
            | Condition::NotEqual(c)
            | Condition::GreaterThan(c)
            | Condition::GreaterThanOrEqual(c)
            | Condition::LessThan(c)
            | Condition::LessThanOrEqual(c)
            | Condition::Like(c)
            | Condition::NotLike(c) => Some(c),
            Condition::Between(c) => Some(c),
            Condition::In(c) | Condition::NotIn(c) => Some(c),
            Condition::IsNull(c)
            | Condition::NotNull(c)
            | Condition::Empty(c)
            | Condition::NotEmpty(c) => Some(c),
            Condition::DynamicValue(c) => c.base_condition.as_field_related_mut(),
        }
    }

    pub fn is_field_related(&self) -> bool {
        self.as_field_related().is_some()
    }

    /// Check if this is an `Equal` on exactly `field`.
    pub fn is_equal_on(&self, field: &Field) -> bool {
        matches!(self, Condition::Equal(c) if &c.field == field)
    }

    /// Children of a logical node; empty for leaves.
    pub fn children(&self) -> &[Condition] {
        match self {
            Condition::And(group) | Condition::Or(group) => &group.conditions,
            _ => &[],
        }
    }
}

impl ValueCondition {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            scalar_function: None,
        }
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Condition::from_object(value).map_err(serde::de::Error::custom)
    }
}
