// src/resolver/condition_data.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::{Field, ScalarFunction, WidgetId};

/// Comparison selected in the filter UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Between,
    In,
    NotIn,
    Like,
    NotLike,
    IsNull,
    NotNull,
    Empty,
    NotEmpty,
}

impl FilterOperator {
    pub const ALL: [FilterOperator; 15] = [
        FilterOperator::Equal,
        FilterOperator::NotEqual,
        FilterOperator::GreaterThan,
        FilterOperator::GreaterThanOrEqual,
        FilterOperator::LessThan,
        FilterOperator::LessThanOrEqual,
        FilterOperator::Between,
        FilterOperator::In,
        FilterOperator::NotIn,
        FilterOperator::Like,
        FilterOperator::NotLike,
        FilterOperator::IsNull,
        FilterOperator::NotNull,
        FilterOperator::Empty,
        FilterOperator::NotEmpty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterOperator::Equal => "equal",
            FilterOperator::NotEqual => "not_equal",
            FilterOperator::GreaterThan => "greater_than",
            FilterOperator::GreaterThanOrEqual => "greater_than_or_equal",
            FilterOperator::LessThan => "less_than",
            FilterOperator::LessThanOrEqual => "less_than_or_equal",
            FilterOperator::Between => "between",
            FilterOperator::In => "in",
            FilterOperator::NotIn => "not_in",
            FilterOperator::Like => "like",
            FilterOperator::NotLike => "not_like",
            FilterOperator::IsNull => "is_null",
            FilterOperator::NotNull => "not_null",
            FilterOperator::Empty => "empty",
            FilterOperator::NotEmpty => "not_empty",
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOperator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterOperator::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("unknown filter operator: {}", s))
    }
}

/// A filter row as entered in the UI, not yet validated.
///
/// Any part may be missing; the builder decides whether the row yields a
/// condition.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionData {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub group_id: i64,
    #[serde(default)]
    pub field: Option<Field>,
    /// Operator name, e.g. `equal`, `between`, `in`.
    #[serde(default)]
    pub sub_type: Option<String>,
    #[serde(default)]
    pub first_value: Option<String>,
    #[serde(default)]
    pub second_value: Option<String>,
    #[serde(default)]
    pub all_values: Vec<String>,
    /// The field holds an array; filter on its elements.
    #[serde(default)]
    pub is_nested: bool,
    /// Transform applied to the field before comparing (date parts, ...).
    #[serde(default)]
    pub scalar_function: Option<ScalarFunction>,
    /// Take the value from this dynamic-value widget at render time.
    #[serde(default)]
    pub dynamic_widget_id: Option<WidgetId>,
}

impl ConditionData {
    pub fn new(field: Field, operator: FilterOperator) -> Self {
        Self {
            field: Some(field),
            sub_type: Some(operator.as_str().to_string()),
            ..Default::default()
        }
    }

    pub fn first(mut self, value: impl Into<String>) -> Self {
        self.first_value = Some(value.into());
        self
    }

    pub fn second(mut self, value: impl Into<String>) -> Self {
        self.second_value = Some(value.into());
        self
    }

    pub fn values(mut self, values: Vec<String>) -> Self {
        self.all_values = values;
        self
    }

    pub fn nested(mut self) -> Self {
        self.is_nested = true;
        self
    }

    pub fn scalar(mut self, function: impl Into<ScalarFunction>) -> Self {
        self.scalar_function = Some(function.into());
        self
    }

    /// Parsed operator; `None` if missing or unknown.
    pub fn operator(&self) -> Option<FilterOperator> {
        self.sub_type.as_deref()?.parse().ok()
    }

    pub(crate) fn first_value(&self) -> Option<String> {
        non_blank(self.first_value.as_deref())
    }

    pub(crate) fn second_value(&self) -> Option<String> {
        non_blank(self.second_value.as_deref())
    }

    /// Non-blank list values, falling back to `first_value`.
    pub(crate) fn list_values(&self) -> Option<Vec<String>> {
        let values: Vec<String> = self
            .all_values
            .iter()
            .filter(|value| !value.trim().is_empty())
            .cloned()
            .collect();
        if !values.is_empty() {
            return Some(values);
        }
        self.first_value().map(|value| vec![value])
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(str::to_owned)
}
