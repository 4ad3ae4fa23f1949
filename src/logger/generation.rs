//! Generation event log shared by the pipeline stages.

#![allow(missing_docs)]

use std::path::Path;

use parking_lot::Mutex;

use crate::core::config::LoggingConfig;
use crate::core::errors::MksError;
use crate::logger::jsonl::{EventType, JsonlConfig, JsonlWriter, LogEntry, Severity};

/// Thread-safe facade over the JSONL writer with optional stderr echo.
pub struct GenerationLog {
    writer: Mutex<Option<JsonlWriter>>,
    echo_stderr: bool,
}

impl GenerationLog {
    /// Build from `[logging]`; `verbose` forces the stderr echo on.
    pub fn from_config(config: &LoggingConfig, verbose: bool) -> Self {
        let writer = config.jsonl_path.as_ref().map(|path| {
            JsonlWriter::open(JsonlConfig {
                path: path.clone(),
                max_size_bytes: config.max_size_bytes,
                max_rotated_files: config.max_rotated_files,
            })
        });
        Self {
            writer: Mutex::new(writer),
            echo_stderr: verbose || config.echo_stderr,
        }
    }

    /// Log that records nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            writer: Mutex::new(None),
            echo_stderr: false,
        }
    }

    pub fn record(&self, entry: &LogEntry) {
        if self.echo_stderr {
            eprintln!("[MKS-GEN] {}", summarize(entry));
        }
        if let Some(writer) = self.writer.lock().as_mut() {
            writer.write_entry(entry);
        }
    }

    pub fn flush(&self) {
        if let Some(writer) = self.writer.lock().as_mut() {
            writer.flush();
        }
    }

    pub fn generation_start(&self, roots: &[String]) {
        self.record(
            &LogEntry::new(EventType::GenerationStart, Severity::Info)
                .methods(roots.iter().cloned())
                .details("roots"),
        );
    }

    pub fn type_resolved(&self, component: &str, proxied: &[&str], excluded: usize) {
        self.record(
            &LogEntry::new(EventType::TypeResolved, Severity::Info)
                .component(component)
                .methods(proxied.iter().copied())
                .details(format!("{excluded} ambiguous name(s) excluded")),
        );
    }

    pub fn ambiguous_excluded(&self, component: &str, method: &str, origins: &[String]) {
        self.record(
            &LogEntry::new(EventType::AmbiguousExcluded, Severity::Warning)
                .component(component)
                .methods([method])
                .details(format!("provided by {}", origins.join(", "))),
        );
    }

    pub fn proxy_synthesized(&self, component: &str, methods: &[String]) {
        self.record(
            &LogEntry::new(EventType::ProxySynthesized, Severity::Info)
                .component(component)
                .methods(methods.iter().cloned()),
        );
    }

    pub fn file_written(&self, path: &Path, digest: &str) {
        self.record(
            &LogEntry::new(EventType::FileWritten, Severity::Info)
                .path(path)
                .digest(digest),
        );
    }

    pub fn file_current(&self, path: &Path, digest: &str) {
        self.record(
            &LogEntry::new(EventType::FileCurrent, Severity::Info)
                .path(path)
                .digest(digest),
        );
    }

    pub fn file_stale(&self, path: &Path, expected: &str, details: &str) {
        self.record(
            &LogEntry::new(EventType::FileStale, Severity::Warning)
                .path(path)
                .digest(expected)
                .details(details),
        );
    }

    pub fn generation_failed(&self, component: Option<&str>, error: &MksError) {
        let mut entry = LogEntry::new(EventType::GenerationFailed, Severity::Error).error(error);
        if let Some(component) = component {
            entry = entry.component(component);
        }
        self.record(&entry);
    }
}

impl std::fmt::Debug for GenerationLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationLog")
            .field("file", &self.writer.lock().is_some())
            .field("echo_stderr", &self.echo_stderr)
            .finish()
    }
}

fn summarize(entry: &LogEntry) -> String {
    let mut line = entry.event.as_str().to_string();
    if let Some(component) = &entry.component {
        line.push_str(&format!(" component={component}"));
    }
    if let Some(methods) = &entry.methods {
        line.push_str(&format!(" methods=[{}]", methods.join(",")));
    }
    if let Some(path) = &entry.path {
        line.push_str(&format!(" path={path}"));
    }
    if let Some(code) = &entry.error_code {
        line.push_str(&format!(" error={code}"));
    }
    if let Some(details) = &entry.details {
        line.push_str(&format!(" ({details})"));
    }
    line
}
