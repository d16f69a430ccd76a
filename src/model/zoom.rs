// src/model/zoom.rs
use serde::{Deserialize, Serialize};

use super::field::Field;
use super::function::Function;
use super::scalar::{ScalarFunction, ScalarFunctionType};

/// One axis of the drill hierarchy: the field and its current transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomLevel {
    pub field: Field,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar_function: Option<ScalarFunction>,
}

impl ZoomLevel {
    pub fn from_function(function: &Function) -> Self {
        Self {
            field: function.field.clone(),
            scalar_function: function.scalar_function.clone(),
        }
    }

    /// Kind of the outermost scalar function, if any.
    pub fn level(&self) -> Option<ScalarFunctionType> {
        self.scalar_function.as_ref().map(|f| f.class_name)
    }

    fn at(&self, next_level: ScalarFunctionType) -> ZoomLevel {
        ZoomLevel {
            field: self.field.clone(),
            scalar_function: Some(ScalarFunction::new(next_level)),
        }
    }
}

/// Current zoom state of a chart. Built fresh per interaction, never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_level: Option<ZoomLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_level: Option<ZoomLevel>,
}

impl ZoomData {
    pub fn new(horizontal: &Function) -> Self {
        Self {
            horizontal_level: Some(ZoomLevel::from_function(horizontal)),
            vertical_level: None,
        }
    }

    pub fn with_vertical(mut self, vertical: &Function) -> Self {
        self.vertical_level = Some(ZoomLevel::from_function(vertical));
        self
    }

    /// Copy with the horizontal level moved to `next_level`.
    pub fn create_new_horizontal_field(&self, next_level: ScalarFunctionType) -> ZoomData {
        ZoomData {
            horizontal_level: self.horizontal_level.as_ref().map(|lvl| lvl.at(next_level)),
            vertical_level: self.vertical_level.clone(),
        }
    }

    /// Copy with the vertical level moved to `next_level`.
    pub fn create_new_vertical_field(&self, next_level: ScalarFunctionType) -> ZoomData {
        ZoomData {
            horizontal_level: self.horizontal_level.clone(),
            vertical_level: self.vertical_level.as_ref().map(|lvl| lvl.at(next_level)),
        }
    }

    /// Next finer date level for the horizontal axis, if the axis is a date level.
    pub fn next_horizontal_level(&self) -> Option<ScalarFunctionType> {
        self.horizontal_level
            .as_ref()
            .and_then(ZoomLevel::level)
            .and_then(ScalarFunctionType::next_date_level)
    }

    pub fn is_zoomable(&self) -> bool {
        self.next_horizontal_level().is_some()
    }
}
