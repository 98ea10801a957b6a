//! Display configuration and rate formatting

use crate::error::{DateRateError, Result};
use crate::types::Rate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Ordering of the date and rate segments in rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComponentOrder {
    /// Date, then separator, then rate
    #[default]
    DateFirst,
    /// Rate, then separator, then date
    RateFirst,
}

impl ComponentOrder {
    /// Stored setting value
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentOrder::DateFirst => "date_first",
            ComponentOrder::RateFirst => "rate_first",
        }
    }

    /// Parse a stored setting, falling back to rate-first for unrecognized values
    pub fn from_setting(s: &str) -> Self {
        match s {
            "date_first" => ComponentOrder::DateFirst,
            "rate_first" => ComponentOrder::RateFirst,
            other => {
                log::warn!("Unrecognized component order '{}', using rate_first", other);
                ComponentOrder::RateFirst
            }
        }
    }
}

impl fmt::Display for ComponentOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Placement of the currency/unit symbol relative to the rate digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// Symbol precedes the digits, e.g. `$12.34`
    #[default]
    Before,
    /// Symbol follows the digits, e.g. `12.34$`
    After,
}

impl SymbolPosition {
    /// Stored setting value
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolPosition::Before => "before",
            SymbolPosition::After => "after",
        }
    }

    /// Parse a stored setting
    pub fn from_setting(s: &str) -> Result<Self> {
        match s {
            "before" => Ok(SymbolPosition::Before),
            "after" => Ok(SymbolPosition::After),
            other => Err(DateRateError::InvalidSetting {
                key: "symbol_position".to_string(),
                message: format!("unknown position '{}'", other),
            }),
        }
    }
}

impl fmt::Display for SymbolPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display configuration for a date + rate field
///
/// Immutable during a render pass. Built either directly or from the host's
/// stored key/value display settings via [`FormatConfig::from_settings`],
/// which is where invalid settings are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Literal text between the date and rate segments
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Which of date and rate renders first
    #[serde(default)]
    pub component_order: ComponentOrder,
    /// Currency/unit symbol attached to the rate
    #[serde(default = "default_symbol")]
    pub symbol: String,
    /// Where the symbol sits relative to the digits
    #[serde(default)]
    pub symbol_position: SymbolPosition,
    /// Fractional digits in the formatted rate
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Fractional separator in the formatted rate
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
}

fn default_separator() -> String {
    ": ".to_string()
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimal_places() -> u32 {
    2
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            component_order: ComponentOrder::default(),
            symbol: default_symbol(),
            symbol_position: SymbolPosition::default(),
            decimal_places: default_decimal_places(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl FormatConfig {
    /// Build a config from stored display settings, merging over the defaults
    ///
    /// Unknown keys are ignored; invalid values are rejected here so that
    /// rendering never sees an unvalidated configuration.
    pub fn from_settings(settings: &Value) -> Result<Self> {
        let map = settings
            .as_object()
            .ok_or_else(|| DateRateError::InvalidSetting {
                key: "display".to_string(),
                message: "settings must be an object".to_string(),
            })?;

        let mut config = FormatConfig::default();
        for (key, value) in map {
            match key.as_str() {
                "separator" => config.separator = string_setting(key, value)?,
                "component_order" => {
                    config.component_order = ComponentOrder::from_setting(&string_setting(key, value)?);
                }
                "symbol" => config.symbol = string_setting(key, value)?,
                "symbol_position" => {
                    config.symbol_position = SymbolPosition::from_setting(&string_setting(key, value)?)?;
                }
                "decimal_places" => config.decimal_places = integer_setting(key, value)?,
                "decimal_separator" => config.decimal_separator = string_setting(key, value)?,
                _ => log::debug!("Ignoring unknown display setting '{}'", key),
            }
        }
        Ok(config)
    }

    /// Export as the stored key/value settings form
    pub fn settings(&self) -> Value {
        json!({
            "separator": self.separator,
            "component_order": self.component_order.as_str(),
            "symbol": self.symbol,
            "symbol_position": self.symbol_position.as_str(),
            "decimal_places": self.decimal_places,
            "decimal_separator": self.decimal_separator,
        })
    }
}

pub(crate) fn string_setting(key: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DateRateError::InvalidSetting {
            key: key.to_string(),
            message: "must be a string".to_string(),
        })
}

fn integer_setting(key: &str, value: &Value) -> Result<u32> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| DateRateError::InvalidSetting {
            key: key.to_string(),
            message: "must be a non-negative integer".to_string(),
        })
}

/// Format a rate to fixed decimal places with the configured separator and symbol
///
/// No grouping separator is emitted.
pub fn format_rate(rate: Rate, config: &FormatConfig) -> String {
    let mut fixed = format!("{:.*}", config.decimal_places as usize, rate);
    if config.decimal_separator != "." {
        fixed = fixed.replace('.', &config.decimal_separator);
    }
    match config.symbol_position {
        SymbolPosition::Before => format!("{}{}", config.symbol, fixed),
        SymbolPosition::After => format!("{}{}", fixed, config.symbol),
    }
}
