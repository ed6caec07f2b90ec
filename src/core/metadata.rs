use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::{Color, LineSpec};

/// Per-series styling consumed by drawing logic. Never mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub color: Color,
    #[serde(default)]
    pub opacity: Option<f64>,
    #[serde(default = "default_width")]
    pub width: f64,
}

impl SeriesMetadata {
    #[must_use]
    pub fn new(id: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            display_name: None,
            visible: default_visible(),
            color,
            opacity: None,
            width: default_width(),
        }
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn line_spec(&self) -> LineSpec {
        LineSpec {
            visible: self.visible,
            color: self.color,
            opacity: self.opacity,
            width: self.width,
        }
    }
}

/// Series id to styling, kept in insertion order.
pub type SeriesMetadataMap = IndexMap<String, SeriesMetadata>;

/// Builds a metadata map keyed by each entry's id.
#[must_use]
pub fn metadata_map(entries: impl IntoIterator<Item = SeriesMetadata>) -> SeriesMetadataMap {
    entries
        .into_iter()
        .map(|entry| (entry.id.clone(), entry))
        .collect()
}

fn default_visible() -> bool {
    true
}

fn default_width() -> f64 {
    1.0
}
