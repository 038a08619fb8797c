//! Runtime configuration.
//!
//! Defaults come from [`ScanConfig::default`]; environment variables
//! override individual limits:
//!
//! - `QUILL_MAX_FSTRING_DEPTH`: f-strings open at once (at least 1)
//! - `QUILL_MAX_FORMAT_SPEC_DEPTH`: fields nested inside format specs

use quill_lexer::ScanConfig;
use thiserror::Error;

pub const FSTRING_DEPTH_VAR: &str = "QUILL_MAX_FSTRING_DEPTH";
pub const FORMAT_SPEC_DEPTH_VAR: &str = "QUILL_MAX_FORMAT_SPEC_DEPTH";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Config {
    pub scan: ScanConfig,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} must be at least 1")]
    Zero { var: &'static str },
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut scan = ScanConfig::default();
        if let Some(depth) = read_limit(&lookup, FSTRING_DEPTH_VAR)? {
            if depth == 0 {
                return Err(ConfigError::Zero {
                    var: FSTRING_DEPTH_VAR,
                });
            }
            scan.max_fstring_depth = depth;
        }
        if let Some(depth) = read_limit(&lookup, FORMAT_SPEC_DEPTH_VAR)? {
            scan.max_format_spec_depth = depth;
        }
        Ok(Config { scan })
    }

    #[must_use]
    pub fn with_scan(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }
}

fn read_limit(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<usize>, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber { var, value })
}
