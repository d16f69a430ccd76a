// src/model/order_by.rs
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::function::Function;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One sort entry. Position in the sort list decides tie-break priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    pub function: Function,
    #[serde(default)]
    pub order: SortDirection,
    /// Limit on the number of groups shown, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_elems_shown: Option<u32>,
}

impl OrderBy {
    pub fn new(function: Function, order: SortDirection) -> Self {
        Self {
            function,
            order,
            num_elems_shown: None,
        }
    }

    pub fn asc(function: Function) -> Self {
        Self::new(function, SortDirection::Asc)
    }

    pub fn desc(function: Function) -> Self {
        Self::new(function, SortDirection::Desc)
    }

    pub fn limit(mut self, num_elems_shown: u32) -> Self {
        self.num_elems_shown = Some(num_elems_shown);
        self
    }

    /// Check if this entry sorts on `field`.
    pub fn is_on_field(&self, field: &Field) -> bool {
        &self.function.field == field
    }
}
