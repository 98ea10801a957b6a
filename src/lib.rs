//! # Daterate
//!
//! A composite "date + rate" content field: the stored value type, its
//! storage schema description, an edit-form widget description, and a
//! display renderer that turns stored values into ordered, attributed
//! output segments for a host content framework.
//!
//! The host owns plugin discovery, form rendering, final markup, and
//! persistence. This crate owns the field's data model and every decision
//! about how a value is displayed: date text in a configured timezone, a
//! UTC machine-readable timestamp, rate formatting with a configurable
//! symbol and decimal separator, and the ordering of the output segments.
//!
//! ## Example
//!
//! ```rust
//! use daterate::prelude::*;
//! use chrono::NaiveDate;
//!
//! let renderer = Renderer::new(
//!     FormatConfig::default(),
//!     DateDisplay::default(),
//!     DateGranularity::DateTime,
//! );
//!
//! let mut items = vec![FieldItem::new(
//!     NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(14, 30, 0),
//!     125.0,
//! )];
//!
//! let rendered = renderer.render(&mut items);
//! assert_eq!(rendered[0].segments[0].text, "Tue, 03/05/2024 - 14:30");
//! assert_eq!(rendered[0].segments[1].text, ": ");
//! assert_eq!(rendered[0].segments[2].text, "$125.00");
//! ```

pub mod datetime;
pub mod error;
pub mod field;
pub mod format;
pub mod render;
pub mod schema;
pub mod types;
pub mod widget;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::datetime::{machine_timestamp, DateDisplay};
    pub use crate::error::{DateRateError, Result};
    pub use crate::field::{DateGranularity, FieldItem};
    pub use crate::format::{format_rate, ComponentOrder, FormatConfig, SymbolPosition};
    pub use crate::render::{RenderedItem, Renderer, Segment, SegmentKind};
    pub use crate::types::{Attributes, Rate};
    pub use crate::widget::DateRateWidget;
}
