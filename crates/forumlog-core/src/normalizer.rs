//! Normalizer: strips the timestamp/level/source prefix from raw log lines.
//!
//! Two prefix shapes are recognised, tried in order by a single pass over
//! [`PREFIX_PATTERNS`]:
//!
//! ```text
//! legacy:   [17:42:31] 2025-11-05 17:42:31.287 | INFO | pkg.mod:func:131 - payload
//!           [17:42:31] payload
//! default:  2025-11-05 17:42:31.287 | INFO     | pkg.mod:func:131 - payload
//! ```
//!
//! The legacy pattern also swallows the optional loguru header that follows
//! the bracket tag, so the returned payload never carries header residue
//! whichever format produced the line. Lines matching neither shape come back
//! unchanged with [`PrefixFormat::Unknown`].

use crate::types::{LogLevel, PrefixFormat};
use chrono::{NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

const HEADER: &str = r"(?P<ts>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}(?:\.\d+)?)\s*\|\s*(?P<level>[A-Z]+)\s*\|\s*(?P<source>[^|\s:]+:[^|\s:]+:\d+) -(?: |$)";

/// Candidate prefix patterns, most specific first. Every pattern is anchored
/// at the start of the line and leaves the payload as the unmatched tail.
static PREFIX_PATTERNS: Lazy<Vec<(PrefixFormat, Regex)>> = Lazy::new(|| {
    vec![
        (
            PrefixFormat::Legacy,
            Regex::new(&format!(r"^\[(?P<clock>\d{{2}}:\d{{2}}:\d{{2}})\] ?(?:{HEADER})?"))
                .expect("legacy prefix pattern must compile"),
        ),
        (
            PrefixFormat::LoguruDefault,
            Regex::new(&format!("^{HEADER}")).expect("default prefix pattern must compile"),
        ),
    ]
});

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A raw line split into its prefix fields and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLine<'a> {
    pub format: PrefixFormat,
    /// The legacy `[HH:MM:SS]` tag.
    pub clock: Option<NaiveTime>,
    /// Timestamp from the full loguru header.
    pub timestamp: Option<NaiveDateTime>,
    pub level: Option<LogLevel>,
    /// `module:function:line` from the header.
    pub source: Option<&'a str>,
    /// Everything after the prefix, untouched.
    pub payload: &'a str,
}

/// Return the bare payload of `line`. See [`parse_prefix`].
pub fn normalize(line: &str) -> &str {
    parse_prefix(line).payload
}

/// Split `line` into prefix fields and payload, trying each known prefix
/// pattern in order. Never fails: unknown shapes yield the whole line.
pub fn parse_prefix(line: &str) -> NormalizedLine<'_> {
    for (format, pattern) in PREFIX_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(line) {
            return from_captures(*format, line, &caps);
        }
    }
    NormalizedLine {
        format: PrefixFormat::Unknown,
        clock: None,
        timestamp: None,
        level: None,
        source: None,
        payload: line,
    }
}

fn from_captures<'a>(format: PrefixFormat, line: &'a str, caps: &Captures<'a>) -> NormalizedLine<'a> {
    // Group 0 always exists on a successful match.
    let end = caps.get(0).map_or(0, |m| m.end());
    NormalizedLine {
        format,
        clock: caps
            .name("clock")
            .and_then(|m| NaiveTime::parse_from_str(m.as_str(), "%H:%M:%S").ok()),
        timestamp: caps
            .name("ts")
            .and_then(|m| NaiveDateTime::parse_from_str(m.as_str(), TIMESTAMP_FORMAT).ok()),
        level: caps.name("level").and_then(|m| LogLevel::from_token(m.as_str())),
        source: caps.name("source").map(|m| m.as_str()),
        payload: &line[end..],
    }
}
