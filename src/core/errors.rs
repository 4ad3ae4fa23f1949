//! MKS-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, MksError>;

/// Top-level error type for mockseam.
#[derive(Debug, Error)]
pub enum MksError {
    #[error("[MKS-1001] invalid configuration: {details}")]
    InvalidConfig { details: String },

    #[error("[MKS-1002] missing configuration file: {path}")]
    MissingConfig { path: PathBuf },

    #[error("[MKS-1003] configuration parse failure in {context}: {details}")]
    ConfigParse {
        context: &'static str,
        details: String,
    },

    #[error("[MKS-1101] invalid definition of component {component}: {details}")]
    InvalidDefinition { component: String, details: String },

    #[error("[MKS-1102] unknown component {name} (referenced by {referenced_by})")]
    UnknownComponent { name: String, referenced_by: String },

    #[error("[MKS-2001] cyclic composition: {cycle}")]
    CyclicComposition { cycle: String },

    #[error("[MKS-2002] ambiguous methods on {component}: {methods}")]
    AmbiguousComposition { component: String, methods: String },

    #[error("[MKS-2003] unsupported signature {component}::{method}: {details}")]
    UnsupportedSignature {
        component: String,
        method: String,
        details: String,
    },

    #[error("[MKS-2004] synthesized code for {component} failed to parse: {details}")]
    Emit { component: String, details: String },

    #[error("[MKS-2005] generated file is out of date: {path}")]
    StaleOutput { path: PathBuf },

    #[error("[MKS-2006] refusing to overwrite {path}: not a mockseam-generated file")]
    ForeignOutput { path: PathBuf },

    #[error("[MKS-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },

    #[error("[MKS-3002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MksError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidConfig { .. } => "MKS-1001",
            Self::MissingConfig { .. } => "MKS-1002",
            Self::ConfigParse { .. } => "MKS-1003",
            Self::InvalidDefinition { .. } => "MKS-1101",
            Self::UnknownComponent { .. } => "MKS-1102",
            Self::CyclicComposition { .. } => "MKS-2001",
            Self::AmbiguousComposition { .. } => "MKS-2002",
            Self::UnsupportedSignature { .. } => "MKS-2003",
            Self::Emit { .. } => "MKS-2004",
            Self::StaleOutput { .. } => "MKS-2005",
            Self::ForeignOutput { .. } => "MKS-2006",
            Self::Serialization { .. } => "MKS-2101",
            Self::Io { .. } => "MKS-3002",
        }
    }

    /// Whether the error is one of the generation-time failures that must
    /// abort before any source text is written.
    #[must_use]
    pub const fn aborts_generation(&self) -> bool {
        matches!(
            self,
            Self::CyclicComposition { .. }
                | Self::AmbiguousComposition { .. }
                | Self::UnsupportedSignature { .. }
                | Self::Emit { .. }
        )
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for signature lowering failures.
    #[must_use]
    pub fn unsupported(
        component: impl Into<String>,
        method: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self::UnsupportedSignature {
            component: component.into(),
            method: method.into(),
            details: details.into(),
        }
    }
}

impl From<serde_json::Error> for MksError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for MksError {
    fn from(value: toml::de::Error) -> Self {
        Self::ConfigParse {
            context: "toml",
            details: value.to_string(),
        }
    }
}
