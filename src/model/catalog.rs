//! Component catalog: the set of component types a generation run can see.
//!
//! Components reference the types they embed by name, so one catalog can
//! describe arbitrary composition DAGs. Structural problems (unknown names,
//! duplicates, misplaced variadics) are rejected by [`TypeCatalog::validate`];
//! cycles are rejected by the resolver before traversal.

#![allow(missing_docs)]

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};

use crate::core::errors::{MksError, Result};
use crate::model::signature::MethodSignature;

/// A nested component held in a named field of the outer component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Embed {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Field holding the component; defaults to the snake_case type name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl Embed {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field: None,
        }
    }

    pub fn in_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            field: Some(field.into()),
        }
    }

    /// Effective field name.
    #[must_use]
    pub fn field_name(&self) -> String {
        self.field
            .clone()
            .unwrap_or_else(|| self.type_name.to_snake_case())
    }
}

/// A named type composed of nested components plus its own methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentType {
    pub name: String,
    #[serde(default, rename = "embed")]
    pub embeds: Vec<Embed>,
    #[serde(default, rename = "method")]
    pub methods: Vec<MethodSignature>,
}

impl ComponentType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            embeds: Vec::new(),
            methods: Vec::new(),
        }
    }

    #[must_use]
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    #[must_use]
    pub fn method(mut self, method: MethodSignature) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn declares(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m.name == method)
    }
}

/// All component definitions available to one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCatalog {
    #[serde(default, rename = "component")]
    pub components: Vec<ComponentType>,
}

impl TypeCatalog {
    #[must_use]
    pub fn new(components: Vec<ComponentType>) -> Self {
        Self { components }
    }

    /// Load a catalog from TOML, or JSON when the extension is `.json`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| MksError::io(path, source))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Ok(serde_json::from_str(&raw)?)
        } else {
            toml::from_str(&raw).map_err(|error| MksError::ConfigParse {
                context: "definitions",
                details: error.to_string(),
            })
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ComponentType> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Look up a component that must exist.
    pub fn require(&self, name: &str, referenced_by: &str) -> Result<&ComponentType> {
        self.get(name).ok_or_else(|| MksError::UnknownComponent {
            name: name.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    /// Structural validation: identifiers, uniqueness, references, variadics.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for component in &self.components {
            if !is_identifier(&component.name) {
                return Err(invalid(
                    &component.name,
                    format!("{:?} is not a valid type name", component.name),
                ));
            }
            if !seen.insert(component.name.as_str()) {
                return Err(invalid(&component.name, "declared more than once"));
            }
        }

        for component in &self.components {
            validate_component(self, component)?;
        }
        Ok(())
    }

    /// Components in dependency-free lookup form.
    #[must_use]
    pub fn index(&self) -> HashMap<&str, &ComponentType> {
        self.components
            .iter()
            .map(|c| (c.name.as_str(), c))
            .collect()
    }
}

fn validate_component(catalog: &TypeCatalog, component: &ComponentType) -> Result<()> {
    let mut fields = HashSet::new();
    for embed in &component.embeds {
        catalog.require(&embed.type_name, &component.name)?;
        let field = embed.field_name();
        if !is_identifier(&field) {
            return Err(invalid(
                &component.name,
                format!("embed field {field:?} is not a valid identifier"),
            ));
        }
        if !fields.insert(field.clone()) {
            return Err(invalid(
                &component.name,
                format!("embed field {field:?} used more than once"),
            ));
        }
    }

    let mut methods = HashSet::new();
    for method in &component.methods {
        if !is_identifier(&method.name) {
            return Err(invalid(
                &component.name,
                format!("{:?} is not a valid method name", method.name),
            ));
        }
        if !methods.insert(method.name.as_str()) {
            return Err(invalid(
                &component.name,
                format!("method {} declared more than once", method.name),
            ));
        }
        let last = method.params.len().saturating_sub(1);
        let mut bindings = HashSet::new();
        for (i, param) in method.params.iter().enumerate() {
            if param.variadic && i != last {
                return Err(invalid(
                    &component.name,
                    format!(
                        "method {}: only the last parameter may be variadic",
                        method.name
                    ),
                ));
            }
            let binding = param.binding(i);
            if !is_identifier(&binding) || !bindings.insert(binding.clone()) {
                return Err(invalid(
                    &component.name,
                    format!("method {}: bad parameter name {binding:?}", method.name),
                ));
            }
            if param.ty.trim().is_empty() {
                return Err(invalid(
                    &component.name,
                    format!("method {}: parameter {binding} has no type", method.name),
                ));
            }
        }
    }
    Ok(())
}

fn invalid(component: &str, details: impl Into<String>) -> MksError {
    MksError::InvalidDefinition {
        component: component.to_string(),
        details: details.into(),
    }
}

/// Plain (non-raw, non-keyword) Rust identifier.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    syn::parse_str::<syn::Ident>(name).is_ok()
}
