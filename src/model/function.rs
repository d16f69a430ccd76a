// src/model/function.rs
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::scalar::ScalarFunction;

/// How a column's field is selected or aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionType {
    Select,
    SelectDistinct,
    GroupBy,
    Count,
    CountDistinct,
    Sum,
    Avg,
    Min,
    Max,
    First,
    Last,
}

impl FunctionType {
    pub fn is_aggregation(self) -> bool {
        !matches!(
            self,
            FunctionType::Select | FunctionType::SelectDistinct | FunctionType::GroupBy
        )
    }
}

/// A field reference plus an optional scalar transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub class_name: FunctionType,
    pub field: Field,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar_function: Option<ScalarFunction>,
}

impl Function {
    pub fn new(class_name: FunctionType, field: Field) -> Self {
        Self {
            class_name,
            field,
            scalar_function: None,
        }
    }

    pub fn group_by(field: Field) -> Self {
        Self::new(FunctionType::GroupBy, field)
    }

    pub fn sum(field: Field) -> Self {
        Self::new(FunctionType::Sum, field)
    }

    pub fn count(field: Field) -> Self {
        Self::new(FunctionType::Count, field)
    }

    /// Builder form of [`Function::set_scalar_function`].
    pub fn scalar(mut self, function: impl Into<ScalarFunction>) -> Self {
        self.scalar_function = Some(function.into());
        self
    }

    /// Replace the scalar chain.
    pub fn set_scalar_function(&mut self, function: ScalarFunction) -> &mut Self {
        self.scalar_function = Some(function);
        self
    }

    /// Compose `function` onto the existing chain, or start one.
    pub fn with_scalar_function(&mut self, function: ScalarFunction) -> &mut Self {
        match self.scalar_function.as_mut() {
            Some(existing) => {
                existing.with_scalar_function(function);
            }
            None => self.scalar_function = Some(function),
        }
        self
    }

    pub fn is_aggregation(&self) -> bool {
        self.class_name.is_aggregation()
    }
}
