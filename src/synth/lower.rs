//! Signature lowering: from declared Rust type strings to the typed shapes
//! the emitter needs, rejecting anything a proxy cannot represent.
//!
//! Lowering is total or fails: a signature either lowers completely or yields
//! `UnsupportedSignature`, so no partially understood method reaches emission.

#![allow(missing_docs)]

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::visit::{self, Visit};

use crate::core::errors::{MksError, Result};
use crate::model::signature::{MethodSignature, Receiver};

/// Locals used by generated proxy bodies; parameters may not shadow them.
pub const RESERVED_LOCALS: [&str; 4] = ["__call", "__dispatch", "__out", "__fake"];

/// How a parameter value is captured into the call record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capture {
    /// Owned value, recorded with `Clone` (shared handles keep identity).
    Clone,
    /// `&T`, recorded as `<T as ToOwned>::Owned`.
    ToOwned,
    /// Variadic tail: `&[T]` in the signature, `Vec<T>` in the record.
    Slice,
}

#[derive(Debug, Clone)]
pub struct LoweredParam {
    pub binding: Ident,
    /// Type as it appears in the proxy signature.
    pub sig_ty: syn::Type,
    /// Owned element or referent type; equal to `sig_ty` for `Capture::Clone`.
    pub base_ty: syn::Type,
    pub capture: Capture,
}

impl LoweredParam {
    /// Field type in the generated call record.
    #[must_use]
    pub fn record_ty(&self) -> TokenStream {
        let base = &self.base_ty;
        match self.capture {
            Capture::Clone => quote!(#base),
            Capture::ToOwned => quote!(<#base as ::std::borrow::ToOwned>::Owned),
            Capture::Slice => quote!(::std::vec::Vec<#base>),
        }
    }

    /// Expression producing the recorded value from the binding.
    #[must_use]
    pub fn record_expr(&self) -> TokenStream {
        let binding = &self.binding;
        let base = &self.base_ty;
        match self.capture {
            Capture::Clone => quote!(::std::clone::Clone::clone(&#binding)),
            Capture::ToOwned => quote!(::std::borrow::ToOwned::to_owned(#binding)),
            Capture::Slice => quote!(<[#base]>::to_vec(#binding)),
        }
    }
}

/// A method signature in emit-ready form.
#[derive(Debug, Clone)]
pub struct LoweredMethod {
    pub name: String,
    pub receiver: Receiver,
    pub params: Vec<LoweredParam>,
    pub results: Vec<syn::Type>,
}

impl LoweredMethod {
    #[must_use]
    pub fn receiver_tokens(&self) -> TokenStream {
        match self.receiver {
            Receiver::Exclusive => quote!(&mut self),
            Receiver::Shared | Receiver::Owned => quote!(&self),
        }
    }

    /// `binding: Type` pairs for the proxy signature.
    #[must_use]
    pub fn inputs(&self) -> Vec<TokenStream> {
        self.params
            .iter()
            .map(|p| {
                let binding = &p.binding;
                let ty = &p.sig_ty;
                quote!(#binding: #ty)
            })
            .collect()
    }

    #[must_use]
    pub fn bindings(&self) -> Vec<&Ident> {
        self.params.iter().map(|p| &p.binding).collect()
    }

    #[must_use]
    pub fn input_types(&self) -> Vec<&syn::Type> {
        self.params.iter().map(|p| &p.sig_ty).collect()
    }

    /// The method's return type as one Rust type (`()` when nothing is returned).
    #[must_use]
    pub fn output_ty(&self) -> TokenStream {
        match self.results.as_slice() {
            [] => quote!(()),
            [single] => quote!(#single),
            many => quote!((#(#many),*)),
        }
    }

    /// `-> R`, or nothing for unit.
    #[must_use]
    pub fn output_arrow(&self) -> TokenStream {
        if self.results.is_empty() {
            TokenStream::new()
        } else {
            let ty = self.output_ty();
            quote!(-> #ty)
        }
    }

    /// The no-error default served by `stub()`.
    #[must_use]
    pub fn zero_value(&self) -> TokenStream {
        match self.results.as_slice() {
            [] => quote!(()),
            [single] => zero_of(single),
            many => {
                let zeros = many.iter().map(zero_of);
                quote!((#(#zeros),*))
            }
        }
    }
}

fn zero_of(ty: &syn::Type) -> TokenStream {
    if is_result(ty) {
        quote!(::std::result::Result::Ok(::std::default::Default::default()))
    } else {
        quote!(::std::default::Default::default())
    }
}

fn is_result(ty: &syn::Type) -> bool {
    match strip_parens(ty) {
        syn::Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .is_some_and(|seg| seg.ident == "Result"),
        _ => false,
    }
}

fn strip_parens(ty: &syn::Type) -> &syn::Type {
    match ty {
        syn::Type::Paren(inner) => strip_parens(&inner.elem),
        syn::Type::Group(inner) => strip_parens(&inner.elem),
        other => other,
    }
}

/// Lower one signature of a method on `component`.
pub fn lower(component: &str, sig: &MethodSignature) -> Result<LoweredMethod> {
    let fail = |details: String| MksError::unsupported(component, &sig.name, details);

    syn::parse_str::<Ident>(&sig.name)
        .map_err(|_| fail(format!("{:?} is not a usable method name", sig.name)))?;

    if sig.receiver == Receiver::Owned {
        return Err(fail(
            "by-value self receivers consume the value and cannot be intercepted".to_string(),
        ));
    }

    let last = sig.params.len().saturating_sub(1);
    let mut params = Vec::with_capacity(sig.params.len());
    for (i, param) in sig.params.iter().enumerate() {
        let name = param.binding(i);
        if param.variadic && i != last {
            return Err(fail(format!("parameter {name}: only the last parameter may be variadic")));
        }
        if RESERVED_LOCALS.contains(&name.as_str()) {
            return Err(fail(format!("parameter {name}: name is reserved for generated code")));
        }
        let binding = syn::parse_str::<Ident>(&name)
            .map_err(|_| fail(format!("{name:?} is not a usable parameter name")))?;
        let ty = parse_type(&param.ty).map_err(|e| fail(format!("parameter {name}: {e}")))?;
        let lowered = if param.variadic {
            lower_variadic(binding, ty)
        } else {
            lower_param(binding, ty)
        };
        params.push(lowered.map_err(|e| fail(format!("parameter {name}: {e}")))?);
    }

    let mut results = Vec::with_capacity(sig.results.len());
    for (i, raw) in sig.results.iter().enumerate() {
        let ty = parse_type(raw)
            .and_then(|ty| {
                if matches!(strip_parens(&ty), syn::Type::Reference(_)) {
                    return Err("results may not borrow".to_string());
                }
                check_owned(&ty)?;
                Ok(ty)
            })
            .map_err(|e| fail(format!("result {i}: {e}")))?;
        results.push(ty);
    }

    Ok(LoweredMethod {
        name: sig.name.clone(),
        receiver: sig.receiver,
        params,
        results,
    })
}

fn parse_type(raw: &str) -> std::result::Result<syn::Type, String> {
    syn::parse_str::<syn::Type>(raw).map_err(|e| format!("cannot parse type {raw:?}: {e}"))
}

fn lower_param(binding: Ident, ty: syn::Type) -> std::result::Result<LoweredParam, String> {
    if let syn::Type::Reference(reference) = strip_parens(&ty) {
        if reference.mutability.is_some() {
            return Err("&mut parameters cannot be recorded".to_string());
        }
        if let Some(lifetime) = &reference.lifetime
            && lifetime.ident != "static"
        {
            return Err(format!("named lifetime '{} is not supported", lifetime.ident));
        }
        let base = (*reference.elem).clone();
        check_owned(&base)?;
        return Ok(LoweredParam {
            binding,
            sig_ty: ty.clone(),
            base_ty: base,
            capture: Capture::ToOwned,
        });
    }
    check_owned(&ty)?;
    Ok(LoweredParam {
        binding,
        sig_ty: ty.clone(),
        base_ty: ty,
        capture: Capture::Clone,
    })
}

fn lower_variadic(binding: Ident, elem: syn::Type) -> std::result::Result<LoweredParam, String> {
    if matches!(strip_parens(&elem), syn::Type::Reference(_)) {
        return Err("variadic element type must be owned".to_string());
    }
    check_owned(&elem)?;
    let sig_ty: syn::Type = syn::parse_quote!(&[#elem]);
    Ok(LoweredParam {
        binding,
        sig_ty,
        base_ty: elem,
        capture: Capture::Slice,
    })
}

/// Reject shapes that cannot be named in a stored record or a fake signature.
fn check_owned(ty: &syn::Type) -> std::result::Result<(), String> {
    if let syn::Type::TraitObject(_) = strip_parens(ty) {
        return Err("bare dyn Trait is unsized".to_string());
    }
    let mut shape = ShapeCheck::default();
    shape.visit_type(ty);
    shape.problem.map_or(Ok(()), Err)
}

#[derive(Default)]
struct ShapeCheck {
    problem: Option<String>,
}

impl ShapeCheck {
    fn flag(&mut self, problem: impl Into<String>) {
        if self.problem.is_none() {
            self.problem = Some(problem.into());
        }
    }
}

impl<'ast> Visit<'ast> for ShapeCheck {
    fn visit_type(&mut self, ty: &'ast syn::Type) {
        if let syn::Type::Verbatim(tokens) = ty {
            self.flag(format!("unrecognized type syntax `{tokens}`"));
            return;
        }
        visit::visit_type(self, ty);
    }

    fn visit_type_reference(&mut self, _: &'ast syn::TypeReference) {
        self.flag("references nested inside other types are not supported");
    }

    fn visit_type_ptr(&mut self, _: &'ast syn::TypePtr) {
        self.flag("raw pointers are not supported");
    }

    fn visit_type_impl_trait(&mut self, _: &'ast syn::TypeImplTrait) {
        self.flag("impl Trait cannot be named in a stored record");
    }

    fn visit_type_infer(&mut self, _: &'ast syn::TypeInfer) {
        self.flag("inferred type `_` is not allowed in signatures");
    }

    fn visit_type_never(&mut self, _: &'ast syn::TypeNever) {
        self.flag("`!` is not supported");
    }

    fn visit_type_macro(&mut self, _: &'ast syn::TypeMacro) {
        self.flag("macro types cannot be resolved at generation time");
    }

    fn visit_lifetime(&mut self, lifetime: &'ast syn::Lifetime) {
        if lifetime.ident != "static" {
            self.flag(format!("named lifetime '{} is not supported", lifetime.ident));
        }
    }
}
