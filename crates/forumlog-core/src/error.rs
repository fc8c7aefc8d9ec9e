//! Error types for forumlog-core.
//!
//! None of these ever escape a processing call: block errors are logged and
//! swallowed by the processor. They exist so that the accumulator can say
//! *why* a block produced nothing, and so that config validation can fail
//! with a readable message.

use thiserror::Error;

/// Why an open JSON block was abandoned.
#[derive(Debug, Error)]
pub enum BlockError {
    /// The closed block, or a single-line object after the marker, did not
    /// parse as a JSON object.
    #[error("malformed JSON block after {fragments} fragments: {source}")]
    MalformedJsonBlock {
        fragments: usize,
        #[source]
        source: serde_json::Error,
    },

    /// No end line arrived before the fragment guard tripped.
    #[error("unterminated JSON block dropped after {fragments} fragments (max: {max})")]
    UnterminatedBlock { fragments: usize, max: usize },
}

/// Invalid extractor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("block marker must not be empty")]
    EmptyMarker,

    #[error("target registry must name at least one emitter")]
    EmptyTargets,

    #[error("block.max_fragments must be > 0")]
    ZeroMaxFragments,

    #[error("fields.updated and fields.base must differ (both are {0:?})")]
    DuplicateFieldKeys(String),

    #[error(transparent)]
    Load(#[from] config::ConfigError),
}
