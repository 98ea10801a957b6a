//! The composite date + rate field value

use crate::error::{DateRateError, Result};
use crate::types::{Attributes, Rate};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Field type plugin id
pub const FIELD_TYPE_ID: &str = "daterate";

/// Human-facing field type label
pub const FIELD_TYPE_LABEL: &str = "Date rate";

/// Field type description
pub const FIELD_TYPE_DESCRIPTION: &str = "Stores a date and rate.";

/// Widget plugin the field edits with by default
pub const DEFAULT_WIDGET_ID: &str = "daterate_default";

/// Formatter plugin the field displays with by default
pub const DEFAULT_FORMATTER_ID: &str = "daterate";

/// Whether stored dates carry a time-of-day component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DateGranularity {
    /// Date-only storage, no time component
    Date,
    /// Full date and time storage
    #[default]
    DateTime,
}

impl DateGranularity {
    /// Storage setting value
    pub fn as_str(&self) -> &'static str {
        match self {
            DateGranularity::Date => "date",
            DateGranularity::DateTime => "datetime",
        }
    }

    /// chrono format of the stored text value
    pub fn storage_format(&self) -> &'static str {
        match self {
            DateGranularity::Date => "%Y-%m-%d",
            DateGranularity::DateTime => "%Y-%m-%dT%H:%M:%S",
        }
    }

    /// Whether values of this granularity include a time of day
    pub fn includes_time(&self) -> bool {
        matches!(self, DateGranularity::DateTime)
    }

    /// Parse the stored field setting
    pub fn from_setting(s: &str) -> Result<Self> {
        match s {
            "date" => Ok(DateGranularity::Date),
            "datetime" => Ok(DateGranularity::DateTime),
            other => Err(DateRateError::InvalidSetting {
                key: "datetime_type".to_string(),
                message: format!("unknown granularity '{}'", other),
            }),
        }
    }
}

/// One stored value of the date + rate field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldItem {
    /// Stored date-time, timezone-naive, interpreted as UTC
    pub date: Option<NaiveDateTime>,
    /// Rate attached to the date, non-negative
    pub rate: Rate,
    /// Presentational attributes destined for the rendered date segment
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl FieldItem {
    /// Create an item from a date and rate
    pub fn new(date: Option<NaiveDateTime>, rate: Rate) -> Self {
        Self {
            date,
            rate,
            attributes: Attributes::new(),
        }
    }

    /// Attach a presentational attribute for the date segment
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// An item is empty only when it has neither a date nor a rate
    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.rate == 0.0
    }

    /// Parse an item from its stored column values
    pub fn from_storage(
        value: Option<&str>,
        rate: Rate,
        granularity: DateGranularity,
    ) -> Result<Self> {
        let date = match value {
            Some(text) if !text.is_empty() => Some(parse_storage_date(text, granularity)?),
            _ => None,
        };
        Ok(Self::new(date, rate))
    }

    /// Serialize the date back to its stored column form
    pub fn storage_value(&self, granularity: DateGranularity) -> Option<String> {
        self.date
            .map(|date| date.format(granularity.storage_format()).to_string())
    }
}

fn parse_storage_date(text: &str, granularity: DateGranularity) -> Result<NaiveDateTime> {
    let parsed = match granularity {
        DateGranularity::Date => NaiveDate::parse_from_str(text, granularity.storage_format())
            .map(|date| date.and_time(NaiveTime::MIN)),
        DateGranularity::DateTime => {
            NaiveDateTime::parse_from_str(text, granularity.storage_format())
        }
    };
    parsed.map_err(|err| DateRateError::InvalidDate(format!("'{}': {}", text, err)))
}
