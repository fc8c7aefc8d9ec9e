//! Content selection. Picks the one piece of text worth surfacing from a
//! reconstructed object or a plain-text target line.

use crate::classifier::after_marker;
use crate::config::ExtractorConfig;
use crate::normalizer::normalize;
use serde_json::{Map, Value};

/// Field-priority selector.
///
/// `updated` (a revision of earlier content) always beats `base` (first-pass
/// content) when both are present, regardless of key order.
#[derive(Debug, Clone)]
pub struct ContentSelector {
    updated: String,
    base: String,
    marker: String,
}

impl ContentSelector {
    pub fn new(updated: impl Into<String>, base: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            updated: updated.into(),
            base: base.into(),
            marker: marker.into(),
        }
    }

    pub fn from_config(cfg: &ExtractorConfig) -> Self {
        Self::new(
            cfg.fields.updated.clone(),
            cfg.fields.base.clone(),
            cfg.block.marker.clone(),
        )
    }

    /// Select text from a parsed block.
    ///
    /// Falls back to `"{marker}: {object}"` so an unexpected shape is still
    /// visible to the caller. Object keys serialize in sorted order.
    pub fn format_json_content(&self, obj: &Map<String, Value>) -> String {
        if let Some(value) = obj.get(&self.updated) {
            return value_text(value);
        }
        if let Some(value) = obj.get(&self.base) {
            return value_text(value);
        }
        let serialized = serde_json::to_string(obj).unwrap_or_default();
        format!("{}: {}", self.marker, serialized)
    }

    /// Text after the block marker of a non-JSON target line, whichever
    /// prefix format the line used. `None` when the marker is missing or
    /// nothing follows it.
    pub fn extract_node_content(&self, line: &str) -> Option<String> {
        after_marker(normalize(line), &self.marker)
            .filter(|rest| !rest.is_empty())
            .map(str::to_string)
    }
}

impl Default for ContentSelector {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::defaults())
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
