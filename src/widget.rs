//! Edit-form widget description for the date + rate field
//!
//! Declarative only: the host's form builder consumes these structures and
//! owns the actual input rendering.

use crate::field::{DateGranularity, FieldItem};
use crate::types::Rate;
use serde::Serialize;

/// Wrapper class present on every widget
pub const WRAPPER_CLASS: &str = "daterate-wrapper";

/// Date input portion of the widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateElement {
    pub title: String,
    pub description: String,
    pub required: bool,
    pub weight: i32,
    /// Whether the input collects a time of day
    pub include_time: bool,
}

/// Rate number-input portion of the widget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberElement {
    pub title: String,
    pub step: f64,
    pub default_value: Rate,
    pub required: bool,
    pub weight: i32,
}

/// Declarative description of the combined edit form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRateWidget {
    /// CSS classes on the wrapper element
    pub classes: Vec<String>,
    pub date: DateElement,
    pub rate: NumberElement,
}

impl DateRateWidget {
    /// Describe the edit form for one item, or an empty form when adding
    pub fn for_item(item: Option<&FieldItem>, granularity: DateGranularity) -> Self {
        let variant = if granularity.includes_time() {
            "daterate-wrapper--date-time-rate"
        } else {
            "daterate-wrapper--date-rate"
        };
        Self {
            classes: vec![WRAPPER_CLASS.to_string(), variant.to_string()],
            date: DateElement {
                title: "Date".to_string(),
                description: String::new(),
                required: false,
                weight: 0,
                include_time: granularity.includes_time(),
            },
            rate: NumberElement {
                title: "Rate".to_string(),
                step: 0.01,
                default_value: item.map_or(0.0, |item| item.rate),
                required: false,
                weight: 1,
            },
        }
    }
}
