//! Configuration system: TOML file + env var overrides + defaults.

#![allow(missing_docs)]

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{MksError, Result};
use crate::synth::options::SynthOptions;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "mockseam.toml";

/// Full mockseam configuration model.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub synth: SynthConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
    /// File the configuration was read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// What to do with a method name provided at the same minimal depth by more
/// than one nested component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmbiguityPolicy {
    /// Leave the name out of the proxy and log a warning.
    #[default]
    Exclude,
    /// Fail generation.
    Reject,
}

impl fmt::Display for AmbiguityPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Exclude => "exclude",
            Self::Reject => "reject",
        })
    }
}

impl FromStr for AmbiguityPolicy {
    type Err = String;

    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "exclude" => Ok(Self::Exclude),
            "reject" => Ok(Self::Reject),
            other => Err(format!("expected exclude or reject, got {other:?}")),
        }
    }
}

/// Shape of the generated code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SynthConfig {
    /// Path generated code uses to reach the runtime module.
    pub runtime_path: String,
    /// Field on the proxied type holding its mocks struct.
    pub mock_field: String,
    /// cfg predicate that holds only in test builds.
    pub test_cfg: String,
    pub control_prefix: String,
    /// Derives added to call-record structs, e.g. `["Debug"]`. Every recorded
    /// parameter type must implement each one. Empty by default.
    pub call_derives: Vec<String>,
    pub ambiguity: AmbiguityPolicy,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            runtime_path: "::mockseam::runtime".to_string(),
            mock_field: "mocks".to_string(),
            test_cfg: "test".to_string(),
            control_prefix: "mock_".to_string(),
            call_derives: Vec::new(),
            ambiguity: AmbiguityPolicy::Exclude,
        }
    }
}

/// Where generated files go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: PathBuf,
    /// Appended to the snake_case root type name to form the file name.
    pub file_suffix: String,
    /// Run `rustfmt` over written files; failures are logged and ignored.
    pub rustfmt: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("src"),
            file_suffix: "_mock.rs".to_string(),
            rustfmt: false,
        }
    }
}

/// Generation event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// JSONL event file; events are discarded when unset.
    pub jsonl_path: Option<PathBuf>,
    pub max_size_bytes: u64,
    pub max_rotated_files: usize,
    /// Mirror events to stderr.
    pub echo_stderr: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            jsonl_path: None,
            max_size_bytes: 4 * 1024 * 1024,
            max_rotated_files: 3,
            echo_stderr: false,
        }
    }
}

impl Config {
    /// Default configuration path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Load config from default or explicit path, then apply env overrides.
    ///
    /// Missing config file is not an error when loading from default path; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, env_var)
    }

    fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let path_buf = path.map_or_else(Self::default_path, Path::to_path_buf);
        let is_explicit_path = path.is_some();

        let mut cfg = if path_buf.exists() {
            let raw = fs::read_to_string(&path_buf).map_err(|source| MksError::Io {
                path: path_buf.clone(),
                source,
            })?;
            let mut parsed: Self = toml::from_str(&raw)?;
            parsed.source = Some(path_buf);
            parsed
        } else if is_explicit_path {
            return Err(MksError::MissingConfig { path: path_buf });
        } else {
            Self::default()
        };

        cfg.apply_env_overrides_from(lookup)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Deterministic hash of the effective config, folded into generated-file
    /// digests so a config change marks outputs stale.
    ///
    /// FNV-1a over canonical JSON; stable across processes and toolchains.
    pub fn stable_hash(&self) -> Result<String> {
        let canonical = serde_json::to_string(self)?;
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in canonical.as_bytes() {
            hash ^= u64::from(*byte);
            hash = hash.wrapping_mul(0x0100_0000_01b3);
        }
        Ok(format!("{hash:016x}"))
    }

    fn apply_env_overrides_from<F>(&mut self, mut lookup: F) -> Result<()>
    where
        F: FnMut(&str) -> Option<String>,
    {
        // synth
        if let Some(raw) = lookup("MOCKSEAM_SYNTH_RUNTIME_PATH") {
            self.synth.runtime_path = raw;
        }
        if let Some(raw) = lookup("MOCKSEAM_SYNTH_MOCK_FIELD") {
            self.synth.mock_field = raw;
        }
        if let Some(raw) = lookup("MOCKSEAM_SYNTH_TEST_CFG") {
            self.synth.test_cfg = raw;
        }
        if let Some(raw) = lookup("MOCKSEAM_SYNTH_CONTROL_PREFIX") {
            self.synth.control_prefix = raw;
        }
        if let Some(raw) = lookup("MOCKSEAM_SYNTH_AMBIGUITY") {
            self.synth.ambiguity = raw.parse().map_err(|details: String| MksError::ConfigParse {
                context: "env",
                details: format!("MOCKSEAM_SYNTH_AMBIGUITY={raw:?}: {details}"),
            })?;
        }

        // output
        if let Some(raw) = lookup("MOCKSEAM_OUTPUT_DIR") {
            self.output.dir = PathBuf::from(raw);
        }
        if let Some(raw) = lookup("MOCKSEAM_OUTPUT_FILE_SUFFIX") {
            self.output.file_suffix = raw;
        }
        if let Some(raw) = lookup("MOCKSEAM_OUTPUT_RUSTFMT") {
            self.output.rustfmt = parse_env_bool("MOCKSEAM_OUTPUT_RUSTFMT", &raw)?;
        }

        // logging
        if let Some(raw) = lookup("MOCKSEAM_LOG_JSONL_PATH") {
            self.logging.jsonl_path = Some(PathBuf::from(raw));
        }
        if let Some(raw) = lookup("MOCKSEAM_LOG_MAX_SIZE_BYTES") {
            self.logging.max_size_bytes = parse_env_u64("MOCKSEAM_LOG_MAX_SIZE_BYTES", &raw)?;
        }
        if let Some(raw) = lookup("MOCKSEAM_LOG_MAX_ROTATED_FILES") {
            self.logging.max_rotated_files =
                parse_env_usize("MOCKSEAM_LOG_MAX_ROTATED_FILES", &raw)?;
        }
        if let Some(raw) = lookup("MOCKSEAM_LOG_ECHO_STDERR") {
            self.logging.echo_stderr = parse_env_bool("MOCKSEAM_LOG_ECHO_STDERR", &raw)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        SynthOptions::from_config(&self.synth)?;

        let suffix = &self.output.file_suffix;
        if !suffix.ends_with(".rs") || suffix.contains(['/', '\\']) {
            return Err(MksError::InvalidConfig {
                details: format!(
                    "output.file_suffix must end in .rs and contain no path separators, got {suffix:?}"
                ),
            });
        }

        if self.logging.max_size_bytes == 0 {
            return Err(MksError::InvalidConfig {
                details: "logging.max_size_bytes must be > 0".to_string(),
            });
        }
        if self.logging.max_rotated_files == 0 {
            return Err(MksError::InvalidConfig {
                details: "logging.max_rotated_files must be >= 1".to_string(),
            });
        }

        Ok(())
    }
}

fn env_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.trim().is_empty())
}

fn parse_env_u64(name: &str, raw: &str) -> Result<u64> {
    raw.parse::<u64>().map_err(|error| MksError::ConfigParse {
        context: "env",
        details: format!("{name}={raw:?}: {error}"),
    })
}

fn parse_env_usize(name: &str, raw: &str) -> Result<usize> {
    raw.parse::<usize>().map_err(|error| MksError::ConfigParse {
        context: "env",
        details: format!("{name}={raw:?}: {error}"),
    })
}

fn parse_env_bool(name: &str, raw: &str) -> Result<bool> {
    raw.parse::<bool>().map_err(|error| MksError::ConfigParse {
        context: "env",
        details: format!("{name}={raw:?}: {error}"),
    })
}
