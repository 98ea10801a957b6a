//! Storage schema and typed property descriptions
//!
//! Describes the field's columns and properties for the host's storage
//! layer; creating and migrating them is the host's job.

use crate::field::DateGranularity;
use serde::Serialize;

/// Column type in the host's storage layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Varchar,
    Float,
}

/// One storage column of the field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub column_type: ColumnType,
    pub length: Option<u32>,
    pub unsigned: bool,
}

/// Typed property exposed on each field item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertySpec {
    pub name: &'static str,
    pub data_type: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Derived from the stored value rather than stored itself
    pub computed: bool,
}

/// Storage columns: the formatted date text plus the unsigned rate
pub fn storage_columns(granularity: DateGranularity) -> Vec<ColumnSpec> {
    let length = if granularity.includes_time() { 20 } else { 10 };
    vec![
        ColumnSpec {
            name: "value",
            column_type: ColumnType::Varchar,
            length: Some(length),
            unsigned: false,
        },
        ColumnSpec {
            name: "rate",
            column_type: ColumnType::Float,
            length: None,
            unsigned: true,
        },
    ]
}

/// Property descriptions: stored date text, computed date, and the rate
pub fn property_definitions() -> Vec<PropertySpec> {
    vec![
        PropertySpec {
            name: "value",
            data_type: "datetime_iso8601",
            label: "Date value",
            description: "The stored date text.",
            computed: false,
        },
        PropertySpec {
            name: "date",
            data_type: "datetime",
            label: "Computed date",
            description: "The date object derived from the stored text.",
            computed: true,
        },
        PropertySpec {
            name: "rate",
            data_type: "float",
            label: "Rate",
            description: "The Rate",
            computed: false,
        },
    ]
}
