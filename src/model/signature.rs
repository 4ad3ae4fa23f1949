//! Method signature descriptors supplied by the source-analysis front end.

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// How the method takes its receiver.
///
/// Proxying does not care whether the receiver mutates state, but the
/// synthesized method must repeat the receiver form exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Receiver {
    #[default]
    #[serde(rename = "&self")]
    Shared,
    #[serde(rename = "&mut self")]
    Exclusive,
    #[serde(rename = "self")]
    Owned,
}

impl Receiver {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shared => "&self",
            Self::Exclusive => "&mut self",
            Self::Owned => "self",
        }
    }
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name; unnamed parameters are numbered `arg0`, `arg1`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rust type as written in the source. For a variadic parameter this is
    /// the element type.
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub variadic: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            variadic: false,
        }
    }

    pub fn variadic(name: impl Into<String>, elem_ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: elem_ty.into(),
            variadic: true,
        }
    }

    /// Binding name used in generated code.
    #[must_use]
    pub fn binding(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("arg{index}"))
    }
}

/// Full signature of a method declared on a component.
///
/// Two signatures describe the same method when their names match; types are
/// fixed by the declaring component and never overloaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub receiver: Receiver,
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub results: Vec<String>,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            receiver: Receiver::Shared,
            params: Vec::new(),
            results: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        self.receiver = receiver;
        self
    }

    #[must_use]
    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.results.push(ty.into());
        self
    }

    /// Whether the trailing parameter is variadic.
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.params.last().is_some_and(|p| p.variadic)
    }

    /// Human-readable rendering used in reports: `name(&self, a: T, ..: U) -> R`.
    #[must_use]
    pub fn display(&self) -> String {
        let mut parts = vec![self.receiver.as_str().to_string()];
        for (i, p) in self.params.iter().enumerate() {
            if p.variadic {
                parts.push(format!("{}: ...{}", p.binding(i), p.ty));
            } else {
                parts.push(format!("{}: {}", p.binding(i), p.ty));
            }
        }
        let ret = match self.results.len() {
            0 => String::new(),
            1 => format!(" -> {}", self.results[0]),
            _ => format!(" -> ({})", self.results.join(", ")),
        };
        format!("{}({}){ret}", self.name, parts.join(", "))
    }
}
