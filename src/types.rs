//! Core type aliases

use std::collections::BTreeMap;

/// Rate value type
pub type Rate = f64;

/// HTML attribute map, ordered for stable output
pub type Attributes = BTreeMap<String, String>;
