//! Line classification predicates.
//!
//! Every predicate except [`LineClassifier::is_target_log_line`] expects a
//! *normalized* payload. A raw header that happens to end in `}` must never
//! reach [`is_json_end_line`].

use crate::config::ExtractorConfig;
use serde_json::{Map, Value};

/// Emitter names whose lines are of interest. Membership is substring
/// containment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRegistry {
    names: Vec<String>,
}

impl TargetRegistry {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(Into::into)
                .filter(|n: &String| !n.is_empty())
                .collect(),
        }
    }

    pub fn contains_any(&self, text: &str) -> bool {
        self.names.iter().any(|name| text.contains(name.as_str()))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// What kind of JSON block a start line opens.
#[derive(Debug)]
pub enum JsonStart {
    /// Marker followed by a lone `{`; the body follows on later lines.
    Open,
    /// Marker followed by a complete object on the same line.
    Complete(Map<String, Value>),
    /// Marker followed by `{...` that does not parse. Not a start line, but
    /// the line must not be surfaced as plain text either.
    Malformed(serde_json::Error),
}

/// Configured set of line predicates.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    targets: TargetRegistry,
    marker: String,
    min_chars: usize,
    deny: Vec<String>,
}

impl LineClassifier {
    pub fn new(targets: TargetRegistry, marker: impl Into<String>) -> Self {
        Self {
            targets,
            marker: marker.into(),
            min_chars: 0,
            deny: Vec::new(),
        }
    }

    pub fn from_config(cfg: &ExtractorConfig) -> Self {
        Self::new(TargetRegistry::new(cfg.targets.names.iter().cloned()), cfg.block.marker.clone())
            .with_noise_filter(cfg.noise.min_chars, cfg.noise.deny.iter().cloned())
    }

    /// Set the minimum payload length (in chars) and the deny-list used by
    /// [`is_valuable_content`](Self::is_valuable_content).
    pub fn with_noise_filter<I, S>(mut self, min_chars: usize, deny: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.min_chars = min_chars;
        self.deny = deny.into_iter().map(Into::into).collect();
        self
    }

    /// True iff `text` names any registered emitter.
    ///
    /// Unlike the other predicates this one may be given a raw line: emitter
    /// module paths such as `nodes.summary_node` only appear in the header.
    pub fn is_target_log_line(&self, text: &str) -> bool {
        self.targets.contains_any(text)
    }

    /// True iff `payload` opens a JSON block, either multi-line (`marker: {`)
    /// or single-line (`marker: {...}` that parses).
    pub fn is_json_start_line(&self, payload: &str) -> bool {
        matches!(
            self.classify_json_start(payload),
            Some(JsonStart::Open | JsonStart::Complete(_))
        )
    }

    /// Like [`is_json_start_line`](Self::is_json_start_line) but keeps the
    /// parsed object for the single-line case, and reports a marker followed
    /// by a broken object as [`JsonStart::Malformed`].
    pub fn classify_json_start(&self, payload: &str) -> Option<JsonStart> {
        let rest = after_marker(payload, &self.marker)?;
        if rest == "{" {
            return Some(JsonStart::Open);
        }
        if !rest.starts_with('{') {
            return None;
        }
        Some(match serde_json::from_str::<Map<String, Value>>(rest) {
            Ok(obj) => JsonStart::Complete(obj),
            Err(err) => JsonStart::Malformed(err),
        })
    }

    /// False for blank or low-information payloads.
    ///
    /// Anything carrying the block marker is kept; otherwise a payload must
    /// reach `min_chars` characters and contain no deny-list phrase.
    pub fn is_valuable_content(&self, payload: &str) -> bool {
        let trimmed = payload.trim();
        if trimmed.is_empty() {
            return false;
        }
        if trimmed.contains(self.marker.as_str()) {
            return true;
        }
        if trimmed.chars().count() < self.min_chars {
            return false;
        }
        !self
            .deny
            .iter()
            .any(|phrase| !phrase.is_empty() && trimmed.contains(phrase.as_str()))
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::defaults())
    }
}

/// True iff the trimmed `payload` is `}` preceded only by closing brackets
/// and whitespace (`}`, `] }`, `}}`).
pub fn is_json_end_line(payload: &str) -> bool {
    match payload.trim().strip_suffix('}') {
        Some(head) => head.chars().all(|c| c == ']' || c == '}' || c.is_whitespace()),
        None => false,
    }
}

/// Trimmed text after the first `marker`, with one `:`/`：` separator removed.
pub(crate) fn after_marker<'a>(payload: &'a str, marker: &str) -> Option<&'a str> {
    let idx = payload.find(marker)?;
    let rest = payload[idx + marker.len()..].trim_start();
    let rest = rest
        .strip_prefix(':')
        .or_else(|| rest.strip_prefix('：'))
        .unwrap_or(rest);
    Some(rest.trim())
}
