//! Block processor. Drives normalization, classification, reassembly and
//! selection over an ordered sequence of raw lines.
//!
//! [`LogBlockProcessor::process_lines_for_json`] is a stateless batch call.
//! [`ExtractionStream`] is the same pass as an object that keeps its
//! accumulator between pushes, for callers tailing a growing file. The batch
//! call is a fold over a fresh stream, so both paths behave identically.

use crate::accumulator::{Feed, JsonAccumulator};
use crate::classifier::LineClassifier;
use crate::config::ExtractorConfig;
use crate::normalizer::normalize;
use crate::selector::ContentSelector;
use crate::types::{ExtractedContent, ExtractionKind};

/// Immutable extraction pipeline built from an [`ExtractorConfig`].
#[derive(Debug, Clone)]
pub struct LogBlockProcessor {
    classifier: LineClassifier,
    selector: ContentSelector,
    max_fragments: usize,
}

impl LogBlockProcessor {
    pub fn new(classifier: LineClassifier, selector: ContentSelector, max_fragments: usize) -> Self {
        Self {
            classifier,
            selector,
            max_fragments,
        }
    }

    pub fn from_config(cfg: &ExtractorConfig) -> Self {
        Self::new(
            LineClassifier::from_config(cfg),
            ContentSelector::from_config(cfg),
            cfg.block.max_fragments,
        )
    }

    /// Extract content from `lines` in one forward pass. Every record is
    /// tagged with `source_tag`; output order follows input order.
    pub fn process_lines_for_json<I, S>(&self, lines: I, source_tag: &str) -> Vec<ExtractedContent>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stream = self.stream(source_tag);
        lines
            .into_iter()
            .filter_map(|line| stream.push(line.as_ref()))
            .collect()
    }

    /// Start an incremental extraction for one source.
    pub fn stream(&self, source_tag: impl Into<String>) -> ExtractionStream<'_> {
        ExtractionStream {
            processor: self,
            accumulator: JsonAccumulator::new(self.max_fragments),
            source_tag: source_tag.into(),
        }
    }
}

impl Default for LogBlockProcessor {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::defaults())
    }
}

/// Incremental extraction over one logical line source.
///
/// Owns the only accumulator for that source; push lines in the order they
/// were written.
#[derive(Debug)]
pub struct ExtractionStream<'p> {
    processor: &'p LogBlockProcessor,
    accumulator: JsonAccumulator,
    source_tag: String,
}

impl ExtractionStream<'_> {
    /// Consume one raw line, returning content if it completed something.
    pub fn push(&mut self, line: &str) -> Option<ExtractedContent> {
        let classifier = &self.processor.classifier;
        let payload = normalize(line);
        let is_target = classifier.is_target_log_line(line);

        if is_target {
            if let Some(start) = classifier.classify_json_start(payload) {
                let feed = self.accumulator.start(start);
                return self.emit(feed);
            }
        }

        if self.accumulator.is_collecting() {
            let feed = self.accumulator.feed(payload);
            return self.emit(feed);
        }

        if is_target && classifier.is_valuable_content(payload) {
            return self
                .processor
                .selector
                .extract_node_content(line)
                .map(|text| self.record(text, ExtractionKind::PlainText));
        }
        None
    }

    /// True while a multi-line block is open.
    pub fn is_collecting(&self) -> bool {
        self.accumulator.is_collecting()
    }

    /// Abandon any open block.
    pub fn reset(&mut self) {
        self.accumulator.reset();
    }

    fn emit(&self, feed: Feed) -> Option<ExtractedContent> {
        match feed {
            Feed::Complete(obj) => {
                let text = self.processor.selector.format_json_content(&obj);
                Some(self.record(text, ExtractionKind::JsonField))
            }
            Feed::Discarded(err) => {
                tracing::debug!(source = %self.source_tag, error = %err, "block discarded");
                None
            }
            Feed::Pending | Feed::Ignored => None,
        }
    }

    fn record(&self, text: String, kind: ExtractionKind) -> ExtractedContent {
        ExtractedContent::new(text, self.source_tag.clone(), kind)
    }
}
