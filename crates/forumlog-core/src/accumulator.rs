//! JSON block reassembly.

use crate::classifier::{is_json_end_line, JsonStart};
use crate::error::BlockError;
use serde_json::{Map, Value};

/// Accumulator state. The buffer is non-empty only while `Collecting`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulatorState {
    Idle,
    Collecting,
}

/// Result of handing one line to the accumulator.
#[derive(Debug)]
pub enum Feed {
    /// Nothing open; the line was not consumed.
    Ignored,
    /// Fragment buffered; block still open.
    Pending,
    /// Block closed and parsed.
    Complete(Map<String, Value>),
    /// Block abandoned. The accumulator is back to `Idle`.
    Discarded(BlockError),
}

/// Reassembles a JSON object whose text is spread over consecutive payloads.
///
/// Holds at most one open block. Fragments are stored verbatim and joined
/// with `\n` at parse time, so escape sequences inside string values reach
/// `serde_json` exactly as the emitter wrote them.
#[derive(Debug)]
pub struct JsonAccumulator {
    state: AccumulatorState,
    buffer: Vec<String>,
    max_fragments: usize,
}

impl JsonAccumulator {
    pub fn new(max_fragments: usize) -> Self {
        Self {
            state: AccumulatorState::Idle,
            buffer: Vec::new(),
            max_fragments,
        }
    }

    pub fn state(&self) -> AccumulatorState {
        self.state
    }

    pub fn is_collecting(&self) -> bool {
        self.state == AccumulatorState::Collecting
    }

    /// Fragments buffered after the opening `{`.
    pub fn fragment_count(&self) -> usize {
        self.buffer.len().saturating_sub(1)
    }

    /// Begin a block from a classified start line.
    ///
    /// A complete single-line object is returned straight away and a broken
    /// one is discarded with zero fragments. An open block starts buffering.
    /// Any block that was already open is dropped.
    pub fn start(&mut self, start: JsonStart) -> Feed {
        if self.is_collecting() {
            tracing::debug!(
                fragments = self.fragment_count(),
                "accumulator: new start line while collecting, dropping open block"
            );
        }
        self.reset();
        match start {
            JsonStart::Complete(obj) => Feed::Complete(obj),
            JsonStart::Malformed(source) => {
                Feed::Discarded(BlockError::MalformedJsonBlock { fragments: 0, source })
            }
            JsonStart::Open => {
                self.buffer.push("{".to_string());
                self.state = AccumulatorState::Collecting;
                tracing::trace!("accumulator: collecting");
                Feed::Pending
            }
        }
    }

    /// Append one normalized payload to the open block.
    pub fn feed(&mut self, payload: &str) -> Feed {
        if !self.is_collecting() {
            return Feed::Ignored;
        }
        self.buffer.push(payload.to_string());
        let fragments = self.fragment_count();

        if is_json_end_line(payload) {
            let text = self.buffer.join("\n");
            self.reset();
            return match serde_json::from_str::<Map<String, Value>>(&text) {
                Ok(obj) => Feed::Complete(obj),
                Err(source) => Feed::Discarded(BlockError::MalformedJsonBlock { fragments, source }),
            };
        }

        if fragments > self.max_fragments {
            self.reset();
            return Feed::Discarded(BlockError::UnterminatedBlock {
                fragments,
                max: self.max_fragments,
            });
        }
        Feed::Pending
    }

    /// Drop any open block and return to `Idle`.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.state = AccumulatorState::Idle;
    }
}

impl Default for JsonAccumulator {
    fn default() -> Self {
        Self::new(500)
    }
}
