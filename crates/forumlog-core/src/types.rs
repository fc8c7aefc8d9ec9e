//! Core types for forumlog-core.
//!
//! This module defines the data shared across all pipeline stages: the
//! [`PrefixFormat`] a raw line was written in, the loguru [`LogLevel`] carried
//! by the full header, and the [`ExtractedContent`] records handed back to
//! callers.

use serde::Serialize;

/// Which timestamp prefix a raw log line was written with.
///
/// Decided once per line by the normalizer and never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefixFormat {
    /// `[HH:MM:SS]` tag, optionally followed by a full loguru header.
    Legacy,
    /// Full loguru default header with no bracket tag.
    LoguruDefault,
    /// Neither pattern matched; the payload is the whole line.
    Unknown,
}

impl std::fmt::Display for PrefixFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrefixFormat::Legacy => write!(f, "legacy"),
            PrefixFormat::LoguruDefault => write!(f, "loguru-default"),
            PrefixFormat::Unknown => write!(f, "unknown"),
        }
    }
}

/// Log severity level as written by loguru.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Success,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Parse a level token from a header. Padding is expected to be trimmed
    /// already; unknown tokens yield `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "TRACE" => Some(LogLevel::Trace),
            "DEBUG" => Some(LogLevel::Debug),
            "INFO" => Some(LogLevel::Info),
            "SUCCESS" => Some(LogLevel::Success),
            "WARNING" | "WARN" => Some(LogLevel::Warning),
            "ERROR" => Some(LogLevel::Error),
            "CRITICAL" | "FATAL" => Some(LogLevel::Critical),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Success => write!(f, "SUCCESS"),
            LogLevel::Warning => write!(f, "WARNING"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// How an [`ExtractedContent`] was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionKind {
    /// Selected from a reconstructed JSON object.
    JsonField,
    /// Taken verbatim from the text after the block marker.
    PlainText,
}

impl std::fmt::Display for ExtractionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionKind::JsonField => write!(f, "json_field"),
            ExtractionKind::PlainText => write!(f, "plain_text"),
        }
    }
}

/// One unit of extracted content. Immutable once produced; owned by whoever
/// receives the output sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedContent {
    /// The selected text.
    pub text: String,
    /// Caller-supplied label for the stream the line came from
    /// (`"insight"`, `"forum"`, …).
    pub source: String,
    pub kind: ExtractionKind,
}

impl ExtractedContent {
    pub fn new(text: impl Into<String>, source: impl Into<String>, kind: ExtractionKind) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            kind,
        }
    }
}
