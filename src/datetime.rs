//! Date display collaborator: display timezone, format, default time of day

use crate::error::{DateRateError, Result};
use crate::format::string_setting;
use chrono::{DateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Format of the machine-readable timestamp, always UTC
const MACHINE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a UTC instant as the machine-readable `datetime` attribute value
///
/// The output is always UTC, regardless of any display timezone.
pub fn machine_timestamp(instant: &DateTime<Utc>) -> String {
    format!("{}Z", instant.format(MACHINE_FORMAT))
}

/// Display-side date formatting
///
/// Holds the timezone the human-readable text is shown in, the strftime
/// display format, and the time of day substituted into date-only values
/// before formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateDisplay {
    /// Timezone for the human-readable text
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    /// strftime display format
    #[serde(default = "default_format")]
    pub format: String,
    /// Time of day applied to date-only values before formatting
    #[serde(default = "default_time")]
    pub default_time: NaiveTime,
}

fn default_timezone() -> Tz {
    chrono_tz::UTC
}

fn default_format() -> String {
    "%a, %m/%d/%Y - %H:%M".to_string()
}

fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap()
}

impl Default for DateDisplay {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            format: default_format(),
            default_time: default_time(),
        }
    }
}

impl DateDisplay {
    /// Build from stored display settings, merging over the defaults
    pub fn from_settings(settings: &Value) -> Result<Self> {
        let map = settings
            .as_object()
            .ok_or_else(|| DateRateError::InvalidSetting {
                key: "date_display".to_string(),
                message: "settings must be an object".to_string(),
            })?;

        let mut display = DateDisplay::default();
        for (key, value) in map {
            match key.as_str() {
                "timezone" => {
                    let name = string_setting(key, value)?;
                    display.timezone = name
                        .parse::<Tz>()
                        .map_err(|_| DateRateError::UnknownTimezone(name))?;
                }
                "format" => display.format = string_setting(key, value)?,
                "default_time" => {
                    let text = string_setting(key, value)?;
                    display.default_time = NaiveTime::parse_from_str(&text, "%H:%M:%S")
                        .map_err(|err| DateRateError::InvalidSetting {
                            key: key.clone(),
                            message: err.to_string(),
                        })?;
                }
                _ => log::debug!("Ignoring unknown date display setting '{}'", key),
            }
        }
        Ok(display)
    }

    /// Export as the stored key/value settings form
    pub fn settings(&self) -> Value {
        json!({
            "timezone": self.timezone.name(),
            "format": self.format,
            "default_time": self.default_time.format("%H:%M:%S").to_string(),
        })
    }

    /// Human-readable text for a UTC instant, in the display timezone
    pub fn display_text(&self, instant: &DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone)
            .format(&self.format)
            .to_string()
    }
}
