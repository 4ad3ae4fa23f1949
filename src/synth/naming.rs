//! Names of generated items.

#![allow(missing_docs)]

use heck::ToUpperCamelCase;
use proc_macro2::Ident;
use quote::format_ident;

/// Every identifier emitted for one proxied method of one root type.
#[derive(Debug, Clone)]
pub struct MethodNames {
    /// The proxied method itself.
    pub method: Ident,
    /// Field on the mocks struct holding this method's control state.
    pub slot: Ident,
    pub call: Ident,
    pub fake: Ident,
    pub mock: Ident,
    pub stub: Ident,
    pub do_fn: Ident,
    pub return_fn: Ident,
    pub calls_fn: Ident,
    /// `Type::method`, stored in the control state for diagnostics.
    pub qualified: String,
}

impl MethodNames {
    #[must_use]
    pub fn new(root: &str, method: &str, control_prefix: &str) -> Self {
        let pascal = method.to_upper_camel_case();
        Self {
            method: format_ident!("{}", method),
            slot: format_ident!("{}", method),
            call: format_ident!("{}{}Call", root, pascal),
            fake: format_ident!("{}{}Fake", root, pascal),
            mock: format_ident!("{}{}Mock", root, pascal),
            stub: format_ident!("{}{}_stub", control_prefix, method),
            do_fn: format_ident!("{}{}_do", control_prefix, method),
            return_fn: format_ident!("{}{}_return", control_prefix, method),
            calls_fn: format_ident!("{}{}_calls", control_prefix, method),
            qualified: format!("{root}::{method}"),
        }
    }
}

/// Name of the per-type struct aggregating all method control states.
#[must_use]
pub fn mocks_struct(root: &str) -> Ident {
    format_ident!("{}Mocks", root)
}
