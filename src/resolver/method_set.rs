//! Resolved method set: the flat, explicit result of composition shadowing.

#![allow(missing_docs)]

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::model::signature::MethodSignature;

/// One hop through the composition: the field holding a nested component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PathStep {
    pub field: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Field chain from the root component to the component declaring a method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct OriginPath(Vec<PathStep>);

impl OriginPath {
    #[must_use]
    pub fn child(&self, field: impl Into<String>, type_name: impl Into<String>) -> Self {
        let mut steps = self.0.clone();
        steps.push(PathStep {
            field: field.into(),
            type_name: type_name.into(),
        });
        Self(steps)
    }

    #[must_use]
    pub fn steps(&self) -> &[PathStep] {
        &self.0
    }

    /// Composition distance of the component at the end of this path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|s| s.field.as_str()).collect()
    }

    /// Declaring component, if any.
    #[must_use]
    pub fn declaring_type(&self) -> Option<&str> {
        self.0.last().map(|s| s.type_name.as_str())
    }
}

impl fmt::Display for OriginPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("self")?;
        for step in &self.0 {
            write!(f, ".{}", step.field)?;
        }
        if let Some(ty) = self.declaring_type() {
            write!(f, " ({ty})")?;
        }
        Ok(())
    }
}

/// A method eligible for proxying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMethod {
    pub signature: MethodSignature,
    pub depth: usize,
    pub origin: OriginPath,
}

/// A name provided by two or more components at the same minimal depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ambiguity {
    pub depth: usize,
    pub origins: Vec<OriginPath>,
}

/// Canonical mapping from method name to its single proxy-eligible source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMethodSet {
    pub root: String,
    methods: BTreeMap<String, ResolvedMethod>,
    ambiguous: BTreeMap<String, Ambiguity>,
    own_methods: BTreeSet<String>,
}

impl ResolvedMethodSet {
    #[must_use]
    pub(crate) fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            methods: BTreeMap::new(),
            ambiguous: BTreeMap::new(),
            own_methods: BTreeSet::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: String, method: ResolvedMethod) {
        self.methods.insert(name, method);
    }

    pub(crate) fn mark_ambiguous(&mut self, name: String, ambiguity: Ambiguity) {
        self.ambiguous.insert(name, ambiguity);
    }

    pub(crate) fn mark_own(&mut self, name: String) {
        self.own_methods.insert(name);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResolvedMethod> {
        self.methods.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Proxy-eligible methods in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedMethod)> {
        self.methods.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    /// Names excluded because they were ambiguous at their minimal depth.
    #[must_use]
    pub fn ambiguous(&self) -> &BTreeMap<String, Ambiguity> {
        &self.ambiguous
    }

    /// Methods declared directly on the root; never proxied.
    #[must_use]
    pub fn own_methods(&self) -> &BTreeSet<String> {
        &self.own_methods
    }
}
