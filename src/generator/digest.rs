//! Input digest stamped into generated files.
//!
//! The digest covers everything that shapes the output: the mockseam version,
//! the effective config hash, the requested roots and the canonical JSON of
//! every component reachable from them. It does not cover the output text, so
//! reformatting a generated file does not make it stale.

#![allow(missing_docs)]

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write as _;

use sha2::{Digest, Sha256};

use crate::core::errors::Result;
use crate::model::catalog::{ComponentType, TypeCatalog};

const DIGEST_FORMAT: &str = "mockseam-digest/1";

/// Components reachable from `roots`, sorted by name.
pub fn involved_components<'a>(
    catalog: &'a TypeCatalog,
    roots: &[String],
) -> Result<Vec<&'a ComponentType>> {
    let mut found: BTreeMap<&str, &ComponentType> = BTreeMap::new();
    let mut queue: VecDeque<(&str, &str)> = roots.iter().map(|r| (r.as_str(), "<roots>")).collect();
    while let Some((name, referenced_by)) = queue.pop_front() {
        if found.contains_key(name) {
            continue;
        }
        let component = catalog.require(name, referenced_by)?;
        found.insert(component.name.as_str(), component);
        for embed in &component.embeds {
            queue.push_back((embed.type_name.as_str(), component.name.as_str()));
        }
    }
    Ok(found.into_values().collect())
}

/// Hex SHA-256 over the generation inputs.
pub fn compute(catalog: &TypeCatalog, roots: &[String], config_hash: &str) -> Result<String> {
    let components = involved_components(catalog, roots)?;
    let canonical = serde_json::to_string(&components)?;

    let joined_roots = roots.join(",");

    let mut hasher = Sha256::new();
    for part in [
        DIGEST_FORMAT,
        env!("CARGO_PKG_VERSION"),
        config_hash,
        joined_roots.as_str(),
        canonical.as_str(),
    ] {
        hasher.update(part.as_bytes());
        hasher.update([0_u8]);
    }
    Ok(hex_encode(&hasher.finalize()))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
            let _ = write!(s, "{b:02x}");
            s
        })
}
