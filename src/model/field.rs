// src/model/field.rs
use serde::{Deserialize, Serialize};

/// A physical column: database, table and column name plus its storage type.
///
/// Two fields are the same field when every part is equal; zoom and drilldown
/// rely on this structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    #[serde(default = "default_field_class")]
    pub class_name: String,
    pub db_name: String,
    pub tbl_name: String,
    pub field_name: String,
    #[serde(default)]
    pub field_type: String,
}

fn default_field_class() -> String {
    "table_field".to_string()
}

impl Field {
    pub fn new(
        db_name: impl Into<String>,
        tbl_name: impl Into<String>,
        field_name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            class_name: default_field_class(),
            db_name: db_name.into(),
            tbl_name: tbl_name.into(),
            field_name: field_name.into(),
            field_type: field_type.into(),
        }
    }

    /// `db.table.column`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}.{}", self.db_name, self.tbl_name, self.field_name)
    }

    /// Whether the storage type is an array (`Array(String)`, `Array(Int32)`, ...).
    pub fn is_array(&self) -> bool {
        self.field_type.starts_with("Array")
    }
}
