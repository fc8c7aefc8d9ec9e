//! forumlog-core: content extraction from multi-node pipeline logs.
//!
//! This crate exposes each pipeline stage as a public module, plus the shared
//! types used across all stages.
//!
//! # Architecture
//!
//! ```text
//! raw line ──► normalizer ──► classifier ──┬──► accumulator ──┐
//!                                          │                  ├──► selector ──► ExtractedContent
//!                                          └──────────────────┘
//! ```
//!
//! [`processor::LogBlockProcessor`] wires the stages together. Everything is
//! synchronous and allocation-light; file discovery, tailing and output sinks
//! belong to the caller.

pub mod accumulator;
pub mod classifier;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod processor;
pub mod selector;
pub mod types;

pub use accumulator::{AccumulatorState, Feed, JsonAccumulator};
pub use classifier::{is_json_end_line, JsonStart, LineClassifier, TargetRegistry};
pub use config::ExtractorConfig;
pub use error::{BlockError, ConfigError};
pub use normalizer::{normalize, parse_prefix, NormalizedLine};
pub use processor::{ExtractionStream, LogBlockProcessor};
pub use selector::ContentSelector;
pub use types::{ExtractedContent, ExtractionKind, LogLevel, PrefixFormat};
