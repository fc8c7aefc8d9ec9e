//! Configuration types for forumlog.
//!
//! [`ExtractorConfig::load`] layers the user's `config.toml` (if any) over the
//! built-in defaults. [`ExtractorConfig::defaults`] returns the same defaults
//! without touching the filesystem (useful in tests).

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[targets]
names = ["FirstSummaryNode", "ReflectionSummaryNode", "nodes.summary_node"]

[block]
marker        = "清理后的输出"
max_fragments = 500

[fields]
updated = "updated_paragraph_latest_state"
base    = "paragraph_latest_state"

[noise]
min_chars = 10
deny = ["JSON解析成功", "JSON修复成功", "直接解析成功", "成功生成", "处理完成"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level extractor configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractorConfig {
    #[serde(default)]
    pub targets: TargetsConfig,
    #[serde(default)]
    pub block: BlockConfig,
    #[serde(default)]
    pub fields: FieldsConfig,
    #[serde(default)]
    pub noise: NoiseConfig,
}

/// `[targets]` section: emitter names whose lines are of interest.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_target_names")]
    pub names: Vec<String>,
}

fn default_target_names() -> Vec<String> {
    vec![
        "FirstSummaryNode".to_string(),
        "ReflectionSummaryNode".to_string(),
        "nodes.summary_node".to_string(),
    ]
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self { names: default_target_names() }
    }
}

/// `[block]` section: JSON block marker and the unterminated-block guard.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockConfig {
    #[serde(default = "default_marker")]
    pub marker: String,
    #[serde(default = "default_max_fragments")]
    pub max_fragments: usize,
}

fn default_marker() -> String { "清理后的输出".to_string() }
fn default_max_fragments() -> usize { 500 }

impl Default for BlockConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            max_fragments: default_max_fragments(),
        }
    }
}

/// `[fields]` section: JSON keys consulted by the content selector, highest
/// priority first.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldsConfig {
    #[serde(default = "default_updated_field")]
    pub updated: String,
    #[serde(default = "default_base_field")]
    pub base: String,
}

fn default_updated_field() -> String { "updated_paragraph_latest_state".to_string() }
fn default_base_field() -> String { "paragraph_latest_state".to_string() }

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            updated: default_updated_field(),
            base: default_base_field(),
        }
    }
}

/// `[noise]` section: what counts as a low-information line.
#[derive(Debug, Clone, Deserialize)]
pub struct NoiseConfig {
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
    #[serde(default = "default_deny")]
    pub deny: Vec<String>,
}

fn default_min_chars() -> usize { 10 }
fn default_deny() -> Vec<String> {
    ["JSON解析成功", "JSON修复成功", "直接解析成功", "成功生成", "处理完成"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            deny: default_deny(),
        }
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ExtractorConfig {
    /// Load from the default location (`$XDG_CONFIG_HOME/forumlog/config.toml`),
    /// layered on top of the built-in defaults. A missing file is not an error.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load `path` layered on top of the built-in defaults, then validate.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()
            .map_err(ConfigError::from)?
            .try_deserialize()
            .map_err(ConfigError::from)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a TOML document layered on top of the built-in defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Check that values are usable before any line is processed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block.marker.trim().is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.targets.names.iter().all(|n| n.is_empty()) {
            return Err(ConfigError::EmptyTargets);
        }
        if self.block.max_fragments == 0 {
            return Err(ConfigError::ZeroMaxFragments);
        }
        if self.fields.updated == self.fields.base {
            return Err(ConfigError::DuplicateFieldKeys(self.fields.updated.clone()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("forumlog")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
