// src/model/column.rs
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::function::Function;

/// Widget identifier on a dashboard.
pub type WidgetId = i64;

/// A single chart column: display name plus the function producing its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub name: String,
    pub function: Function,
    #[serde(default)]
    pub is_horizontal_view: bool,
    #[serde(default)]
    pub is_flatten: bool,
    /// Dynamic-function widget this column is parameterized by.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_function_id: Option<WidgetId>,
}

/// Overrides applied by [`TableColumn::copy_with`]; `None` keeps the original.
#[derive(Debug, Clone, Default)]
pub struct ColumnPatch {
    pub name: Option<String>,
    pub function: Option<Function>,
    pub is_horizontal_view: Option<bool>,
    pub is_flatten: Option<bool>,
}

impl TableColumn {
    pub fn new(name: impl Into<String>, function: Function) -> Self {
        Self {
            name: name.into(),
            function,
            is_horizontal_view: false,
            is_flatten: false,
            dynamic_function_id: None,
        }
    }

    pub fn with_dynamic_function(mut self, widget_id: WidgetId) -> Self {
        self.dynamic_function_id = Some(widget_id);
        self
    }

    /// Derive an independent column with the given overrides.
    pub fn copy_with(&self, patch: ColumnPatch) -> TableColumn {
        TableColumn {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
            function: patch.function.unwrap_or_else(|| self.function.clone()),
            is_horizontal_view: patch.is_horizontal_view.unwrap_or(self.is_horizontal_view),
            is_flatten: patch.is_flatten.unwrap_or(self.is_flatten),
            dynamic_function_id: self.dynamic_function_id,
        }
    }

    pub fn field(&self) -> &Field {
        &self.function.field
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic_function_id.is_some()
    }
}
