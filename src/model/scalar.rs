//! Scalar functions: value transforms applied to a field before aggregation.
//!
//! A scalar function may wrap another one through `inner_fn`, forming a chain
//! evaluated from the outermost function inward.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of scalar transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarFunctionType {
    ToYear,
    ToQuarter,
    ToMonth,
    ToWeek,
    ToDate,
    ToDayOfWeek,
    ToDayOfMonth,
    ToHour,
    ToMinute,
    ToSecond,
    /// Extracts elements of an array-typed column.
    GetArrayElement,
}

impl ScalarFunctionType {
    pub const ALL: [ScalarFunctionType; 11] = [
        ScalarFunctionType::ToYear,
        ScalarFunctionType::ToQuarter,
        ScalarFunctionType::ToMonth,
        ScalarFunctionType::ToWeek,
        ScalarFunctionType::ToDate,
        ScalarFunctionType::ToDayOfWeek,
        ScalarFunctionType::ToDayOfMonth,
        ScalarFunctionType::ToHour,
        ScalarFunctionType::ToMinute,
        ScalarFunctionType::ToSecond,
        ScalarFunctionType::GetArrayElement,
    ];

    /// Serialized `className`.
    pub fn as_str(self) -> &'static str {
        match self {
            ScalarFunctionType::ToYear => "to_year",
            ScalarFunctionType::ToQuarter => "to_quarter",
            ScalarFunctionType::ToMonth => "to_month",
            ScalarFunctionType::ToWeek => "to_week",
            ScalarFunctionType::ToDate => "to_date",
            ScalarFunctionType::ToDayOfWeek => "to_day_of_week",
            ScalarFunctionType::ToDayOfMonth => "to_day_of_month",
            ScalarFunctionType::ToHour => "to_hour",
            ScalarFunctionType::ToMinute => "to_minute",
            ScalarFunctionType::ToSecond => "to_second",
            ScalarFunctionType::GetArrayElement => "get_array_element",
        }
    }

    /// Check if this truncates a date/time value.
    pub fn is_date_level(self) -> bool {
        !matches!(self, ScalarFunctionType::GetArrayElement)
    }

    /// The next finer level of the date drill hierarchy
    /// (year, quarter, month, date, hour, minute, second).
    pub fn next_date_level(self) -> Option<ScalarFunctionType> {
        match self {
            ScalarFunctionType::ToYear => Some(ScalarFunctionType::ToQuarter),
            ScalarFunctionType::ToQuarter => Some(ScalarFunctionType::ToMonth),
            ScalarFunctionType::ToMonth | ScalarFunctionType::ToWeek => {
                Some(ScalarFunctionType::ToDate)
            }
            ScalarFunctionType::ToDate
            | ScalarFunctionType::ToDayOfWeek
            | ScalarFunctionType::ToDayOfMonth => Some(ScalarFunctionType::ToHour),
            ScalarFunctionType::ToHour => Some(ScalarFunctionType::ToMinute),
            ScalarFunctionType::ToMinute => Some(ScalarFunctionType::ToSecond),
            ScalarFunctionType::ToSecond | ScalarFunctionType::GetArrayElement => None,
        }
    }
}

impl fmt::Display for ScalarFunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScalarFunctionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarFunctionType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown scalar function: {}", s))
    }
}

/// A scalar function with its optional inner chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalarFunction {
    pub class_name: ScalarFunctionType,

    /// 1-based element index for `GetArrayElement`; `None` expands the array.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inner_fn: Option<Box<ScalarFunction>>,
}

impl ScalarFunction {
    pub fn new(class_name: ScalarFunctionType) -> Self {
        Self {
            class_name,
            index: None,
            inner_fn: None,
        }
    }

    pub fn get_array_element(index: Option<i32>) -> Self {
        Self {
            class_name: ScalarFunctionType::GetArrayElement,
            index,
            inner_fn: None,
        }
    }

    /// Append `function` at the innermost end of the chain.
    pub fn with_scalar_function(&mut self, function: ScalarFunction) -> &mut Self {
        if let Some(inner) = self.inner_fn.as_mut() {
            inner.with_scalar_function(function);
        } else {
            self.inner_fn = Some(Box::new(function));
        }
        self
    }

    /// Iterate the chain from the outermost function inward.
    pub fn chain(&self) -> impl Iterator<Item = &ScalarFunction> {
        std::iter::successors(Some(self), |function| function.inner_fn.as_deref())
    }

    pub fn contains(&self, kind: ScalarFunctionType) -> bool {
        self.chain().any(|function| function.class_name == kind)
    }

    pub fn depth(&self) -> usize {
        self.chain().count()
    }
}

impl From<ScalarFunctionType> for ScalarFunction {
    fn from(kind: ScalarFunctionType) -> Self {
        ScalarFunction::new(kind)
    }
}
