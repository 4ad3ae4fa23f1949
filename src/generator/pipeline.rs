//! End-to-end generation: validate, resolve, apply the ambiguity policy,
//! synthesize, assemble, and only then touch the filesystem.
//!
//! Every root is resolved and synthesized before any text is assembled, so a
//! cyclic composition or unsupported signature in any root leaves existing
//! output untouched.

#![allow(missing_docs)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use heck::ToSnakeCase;

use crate::core::config::{AmbiguityPolicy, Config};
use crate::core::errors::{MksError, Result};
use crate::generator::digest;
use crate::generator::output::{self, Freshness};
use crate::logger::generation::GenerationLog;
use crate::model::catalog::TypeCatalog;
use crate::resolver::method_set::ResolvedMethodSet;
use crate::resolver::traversal::resolve;
use crate::synth::options::SynthOptions;
use crate::synth::proxy::{SynthesizedProxy, synthesize};

/// A fully assembled generated file, not yet written.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub roots: Vec<String>,
    pub digest: String,
    pub text: String,
    pub proxies: Vec<SynthesizedProxy>,
}

/// The generation pipeline for one effective configuration.
#[derive(Debug)]
pub struct Generator {
    config: Config,
    options: SynthOptions,
    log: GenerationLog,
}

impl Generator {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let options = SynthOptions::from_config(&config.synth)?;
        Ok(Self {
            config,
            options,
            log: GenerationLog::disabled(),
        })
    }

    #[must_use]
    pub fn with_log(mut self, log: GenerationLog) -> Self {
        self.log = log;
        self
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn log(&self) -> &GenerationLog {
        &self.log
    }

    /// Resolve one root and apply the configured ambiguity policy.
    pub fn resolve(&self, catalog: &TypeCatalog, root: &str) -> Result<ResolvedMethodSet> {
        let set = resolve(catalog, root)?;
        let ambiguous = set.ambiguous();
        if !ambiguous.is_empty() {
            match self.config.synth.ambiguity {
                AmbiguityPolicy::Exclude => {
                    for (name, ambiguity) in ambiguous {
                        let origins: Vec<String> =
                            ambiguity.origins.iter().map(ToString::to_string).collect();
                        self.log.ambiguous_excluded(root, name, &origins);
                    }
                }
                AmbiguityPolicy::Reject => {
                    let methods: Vec<&str> = ambiguous.keys().map(String::as_str).collect();
                    return Err(MksError::AmbiguousComposition {
                        component: root.to_string(),
                        methods: methods.join(", "),
                    });
                }
            }
        }
        self.log
            .type_resolved(root, &set.names(), set.ambiguous().len());
        Ok(set)
    }

    /// Build the generated file for `roots`. Nothing is written.
    pub fn generate(&self, catalog: &TypeCatalog, roots: &[String]) -> Result<GeneratedFile> {
        let result = self.assemble(catalog, roots);
        if let Err(error) = &result {
            self.log.generation_failed(None, error);
        }
        result
    }

    fn assemble(&self, catalog: &TypeCatalog, roots: &[String]) -> Result<GeneratedFile> {
        check_roots(roots)?;
        self.log.generation_start(roots);
        catalog.validate()?;

        let mut proxies = Vec::with_capacity(roots.len());
        for root in roots {
            catalog.require(root, "<roots>")?;
            let set = self.resolve(catalog, root)?;
            let proxy = synthesize(&set, &self.options)?;
            let names: Vec<String> = proxy.methods.iter().map(|m| m.name.clone()).collect();
            self.log.proxy_synthesized(root, &names);
            proxies.push(proxy);
        }

        let digest = digest::compute(catalog, roots, &self.config.stable_hash()?)?;
        let mut text = output::header(roots, &digest);
        for proxy in &proxies {
            text.push('\n');
            text.push_str(&proxy.render());
        }

        Ok(GeneratedFile {
            roots: roots.to_vec(),
            digest,
            text,
            proxies,
        })
    }

    /// `<output.dir>/<snake(root)><output.file_suffix>` for a single root.
    pub fn default_output_path(&self, roots: &[String]) -> Result<PathBuf> {
        match roots {
            [root] => Ok(self.config.output.dir.join(format!(
                "{}{}",
                root.to_snake_case(),
                self.config.output.file_suffix
            ))),
            _ => Err(MksError::InvalidConfig {
                details: "an explicit output path is required when generating several types"
                    .to_string(),
            }),
        }
    }

    /// Atomically write `file` to `path`.
    pub fn write(&self, file: &GeneratedFile, path: &Path) -> Result<()> {
        output::write_atomic(path, &file.text)?;
        self.log.file_written(path, &file.digest);
        if self.config.output.rustfmt
            && let Err(details) = output::run_rustfmt(path)
        {
            eprintln!("[MKS-GEN] rustfmt skipped for {}: {details}", path.display());
        }
        Ok(())
    }

    /// Compare the file at `path` with freshly generated inputs.
    pub fn check(&self, file: &GeneratedFile, path: &Path) -> Result<Freshness> {
        let state = output::freshness(path, &file.digest)?;
        match &state {
            Freshness::Current => self.log.file_current(path, &file.digest),
            Freshness::Stale { found } => {
                let details = found
                    .as_deref()
                    .map_or_else(|| "no digest header".to_string(), |d| format!("found {d}"));
                self.log.file_stale(path, &file.digest, &details);
            }
            Freshness::Missing => self.log.file_stale(path, &file.digest, "missing"),
        }
        Ok(state)
    }
}

fn check_roots(roots: &[String]) -> Result<()> {
    if roots.is_empty() {
        return Err(MksError::InvalidDefinition {
            component: "<roots>".to_string(),
            details: "no root types requested".to_string(),
        });
    }
    let mut seen = HashSet::new();
    for root in roots {
        if !seen.insert(root.as_str()) {
            return Err(MksError::InvalidDefinition {
                component: root.clone(),
                details: "requested more than once".to_string(),
            });
        }
    }
    Ok(())
}
