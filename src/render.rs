//! Field value rendering: ordered, attributed display segments
//!
//! The renderer is a pure, stateless transformation: each item produces a
//! date segment, a separator segment, and a rate segment, ordered by the
//! configured component order. The host turns segments into final markup.
//!
//! Segments are built freshly for every item; nothing is shared between
//! items, so items may also be rendered in parallel via
//! [`Renderer::render_par`].

use crate::datetime::{machine_timestamp, DateDisplay};
use crate::field::{DateGranularity, FieldItem};
use crate::format::{format_rate, ComponentOrder, FormatConfig};
use crate::types::Attributes;
use chrono::{TimeZone, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

/// Render-cache contexts the host should attach to rendered output
pub const CACHE_CONTEXTS: &[&str] = &["timezone"];

/// Role of one rendered segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Date,
    Separator,
    Rate,
}

impl SegmentKind {
    /// CSS class the host places on the segment's markup
    pub fn css_class(&self) -> &'static str {
        match self {
            SegmentKind::Date => "date",
            SegmentKind::Separator => "separator",
            SegmentKind::Rate => "rate",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_class())
    }
}

/// One labeled piece of rendered output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    /// Role of this segment
    pub kind: SegmentKind,
    /// Visible text content
    pub text: String,
    /// HTML attributes for the segment's element
    pub attributes: Attributes,
}

/// Rendered output for a single field item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedItem {
    /// Segments in display order
    pub segments: Vec<Segment>,
    /// Cache contexts the host should attach
    pub cache_contexts: Vec<&'static str>,
}

/// Renderer for date + rate field values
#[derive(Debug, Clone)]
pub struct Renderer {
    config: FormatConfig,
    dates: DateDisplay,
    granularity: DateGranularity,
}

impl Renderer {
    /// Create a renderer from a validated configuration
    pub fn new(config: FormatConfig, dates: DateDisplay, granularity: DateGranularity) -> Self {
        Self {
            config,
            dates,
            granularity,
        }
    }

    /// Render every item, in input order
    ///
    /// Each item's presentational attributes move onto its date segment and
    /// are cleared from the item, so the host template cannot emit them a
    /// second time.
    pub fn render(&self, items: &mut [FieldItem]) -> Vec<RenderedItem> {
        items.iter_mut().map(|item| self.render_item(item)).collect()
    }

    /// Render items in parallel; output order matches input order
    pub fn render_par(&self, items: &mut [FieldItem]) -> Vec<RenderedItem> {
        items
            .par_iter_mut()
            .map(|item| self.render_item(item))
            .collect()
    }

    fn render_item(&self, item: &mut FieldItem) -> RenderedItem {
        let (machine, human) = match item.date {
            Some(stored) => {
                let stored = if self.granularity.includes_time() {
                    stored
                } else {
                    // Date-only values carry no meaningful time; substitute
                    // the configured default before formatting.
                    stored.date().and_time(self.dates.default_time)
                };
                let instant = Utc.from_utc_datetime(&stored);
                (machine_timestamp(&instant), self.dates.display_text(&instant))
            }
            None => (String::new(), String::new()),
        };

        let mut date_attributes = Attributes::new();
        date_attributes.insert("datetime".to_string(), machine);
        date_attributes.insert(
            "class".to_string(),
            SegmentKind::Date.css_class().to_string(),
        );
        // Item attributes move onto the date segment; computed keys win.
        for (name, value) in std::mem::take(&mut item.attributes) {
            date_attributes.entry(name).or_insert(value);
        }

        let date = Segment {
            kind: SegmentKind::Date,
            text: human,
            attributes: date_attributes,
        };
        let separator = Segment {
            kind: SegmentKind::Separator,
            text: self.config.separator.clone(),
            attributes: class_attribute(SegmentKind::Separator),
        };
        let rate = Segment {
            kind: SegmentKind::Rate,
            text: format_rate(item.rate, &self.config),
            attributes: class_attribute(SegmentKind::Rate),
        };

        let segments = match self.config.component_order {
            ComponentOrder::DateFirst => vec![date, separator, rate],
            ComponentOrder::RateFirst => vec![rate, separator, date],
        };

        RenderedItem {
            segments,
            cache_contexts: CACHE_CONTEXTS.to_vec(),
        }
    }
}

fn class_attribute(kind: SegmentKind) -> Attributes {
    let mut attributes = Attributes::new();
    attributes.insert("class".to_string(), kind.css_class().to_string());
    attributes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn sample_date() -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
    }

    fn default_renderer() -> Renderer {
        Renderer::new(
            FormatConfig::default(),
            DateDisplay::default(),
            DateGranularity::DateTime,
        )
    }

    fn kinds(rendered: &RenderedItem) -> Vec<SegmentKind> {
        rendered.segments.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn test_date_first_segment_order() {
        let mut items = vec![FieldItem::new(sample_date(), 12.0)];
        let rendered = default_renderer().render(&mut items);
        assert_eq!(
            kinds(&rendered[0]),
            vec![SegmentKind::Date, SegmentKind::Separator, SegmentKind::Rate]
        );
    }

    #[test]
    fn test_rate_first_segment_order() {
        let config = FormatConfig {
            component_order: ComponentOrder::RateFirst,
            ..FormatConfig::default()
        };
        let renderer = Renderer::new(config, DateDisplay::default(), DateGranularity::DateTime);
        let mut items = vec![FieldItem::new(sample_date(), 12.0)];
        let rendered = renderer.render(&mut items);
        assert_eq!(
            kinds(&rendered[0]),
            vec![SegmentKind::Rate, SegmentKind::Separator, SegmentKind::Date]
        );
    }

    #[test]
    fn test_segment_contents() {
        let mut items = vec![FieldItem::new(sample_date(), 12.0)];
        let rendered = default_renderer().render(&mut items);
        let segments = &rendered[0].segments;
        assert_eq!(segments[0].text, "Tue, 03/05/2024 - 14:30");
        assert_eq!(segments[0].attributes["datetime"], "2024-03-05T14:30:00Z");
        assert_eq!(segments[0].attributes["class"], "date");
        assert_eq!(segments[1].text, ": ");
        assert_eq!(segments[1].attributes["class"], "separator");
        assert_eq!(segments[2].text, "$12.00");
        assert_eq!(segments[2].attributes["class"], "rate");
        assert_eq!(rendered[0].cache_contexts, vec!["timezone"]);
    }

    #[test]
    fn test_missing_date_renders_empty_segment() {
        for order in [ComponentOrder::DateFirst, ComponentOrder::RateFirst] {
            let config = FormatConfig {
                component_order: order,
                ..FormatConfig::default()
            };
            let renderer =
                Renderer::new(config, DateDisplay::default(), DateGranularity::DateTime);
            let mut items = vec![FieldItem::new(None, 7.5)];
            let rendered = renderer.render(&mut items);
            let date = rendered[0]
                .segments
                .iter()
                .find(|s| s.kind == SegmentKind::Date)
                .unwrap();
            assert_eq!(date.text, "");
            assert_eq!(date.attributes["datetime"], "");
        }
    }

    #[test]
    fn test_zero_rate_still_renders() {
        let mut items = vec![FieldItem::new(None, 0.0)];
        let rendered = default_renderer().render(&mut items);
        assert_eq!(rendered[0].segments[2].text, "$0.00");
    }

    #[test]
    fn test_date_only_granularity_uses_default_time() {
        let renderer = Renderer::new(
            FormatConfig::default(),
            DateDisplay::default(),
            DateGranularity::Date,
        );
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(0, 0, 0);
        let mut items = vec![FieldItem::new(date, 1.0)];
        let rendered = renderer.render(&mut items);
        assert_eq!(
            rendered[0].segments[0].attributes["datetime"],
            "2024-03-05T12:00:00Z"
        );
        assert_eq!(rendered[0].segments[0].text, "Tue, 03/05/2024 - 12:00");
    }

    #[test]
    fn test_item_attributes_merge_onto_date_segment() {
        let mut items = vec![FieldItem::new(sample_date(), 2.0)
            .with_attribute("data-entity-id", "7")
            .with_attribute("class", "highlight")];
        let rendered = default_renderer().render(&mut items);
        let date = &rendered[0].segments[0];
        assert_eq!(date.attributes["data-entity-id"], "7");
        // Computed keys win over item-supplied ones.
        assert_eq!(date.attributes["class"], "date");
        // The item's bag is cleared so the host cannot emit it twice.
        assert!(items[0].attributes.is_empty());
    }

    #[test]
    fn test_render_is_idempotent_over_identical_inputs() {
        let renderer = default_renderer();
        let items = vec![
            FieldItem::new(sample_date(), 3.0).with_attribute("data-entity-id", "7"),
            FieldItem::new(None, 0.0),
        ];
        let mut first = items.clone();
        let mut second = items.clone();
        assert_eq!(renderer.render(&mut first), renderer.render(&mut second));
    }

    #[test]
    fn test_parallel_render_matches_serial() {
        let renderer = default_renderer();
        let items: Vec<FieldItem> = (0..64)
            .map(|i| FieldItem::new(sample_date(), f64::from(i)))
            .collect();
        let mut serial = items.clone();
        let mut parallel = items;
        assert_eq!(
            renderer.render(&mut serial),
            renderer.render_par(&mut parallel)
        );
    }
}
