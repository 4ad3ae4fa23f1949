//! Proxy emission.
//!
//! For a resolved root type `Name` with test predicate `P` this produces:
//!
//! * `NameMocks`, the aggregate of every method's control state, expected in a
//!   `#[cfg(P)]` field on the user's struct (name set by `synth.mock_field`);
//! * per method, a call-record struct, a fake type alias and a control-state
//!   type alias;
//! * per method, two definitions of the proxy: an inlined pure delegation for
//!   `cfg(not(P))`, and the dispatching body for `cfg(P)`;
//! * per method, the four test-only controls `_stub`, `_do`, `_return` and
//!   `_calls`.
//!
//! The output is meant to be `include!`d into the module that declares `Name`,
//! so field access and type names resolve exactly as they do there.

#![allow(missing_docs)]

use std::collections::HashSet;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::core::errors::{MksError, Result};
use crate::resolver::method_set::{OriginPath, ResolvedMethod, ResolvedMethodSet};
use crate::synth::lower::{LoweredMethod, lower};
use crate::synth::naming::{MethodNames, mocks_struct};
use crate::synth::options::SynthOptions;

/// Summary of one proxied method, for reports and logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedMethod {
    pub name: String,
    pub depth: usize,
    pub origin: OriginPath,
    pub controls: Vec<String>,
}

/// Everything generated for one root type.
#[derive(Debug, Clone)]
pub struct SynthesizedProxy {
    pub component: String,
    pub methods: Vec<SynthesizedMethod>,
    pub items: Vec<TokenStream>,
}

impl SynthesizedProxy {
    #[must_use]
    pub fn tokens(&self) -> TokenStream {
        self.items.iter().cloned().collect()
    }

    /// Source text, one item per paragraph.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            out.push_str(&item.to_string());
            out.push_str("\n\n");
        }
        out
    }
}

struct Planned<'a> {
    resolved: &'a ResolvedMethod,
    lowered: LoweredMethod,
    names: MethodNames,
    path: Vec<Ident>,
}

/// Generate the proxy surface for every method in `set`.
///
/// Every signature is lowered before any tokens are produced; one unsupported
/// signature fails the whole type.
pub fn synthesize(set: &ResolvedMethodSet, options: &SynthOptions) -> Result<SynthesizedProxy> {
    let root = set.root.as_str();
    let root_ident = syn::parse_str::<Ident>(root).map_err(|_| MksError::Emit {
        component: root.to_string(),
        details: format!("{root:?} is not a usable type name"),
    })?;

    let mut planned = Vec::with_capacity(set.len());
    for (name, resolved) in set.iter() {
        let lowered = lower(root, &resolved.signature)?;
        let names = MethodNames::new(root, name, &options.control_prefix);
        let path = origin_idents(root, &resolved.origin)?;
        planned.push(Planned {
            resolved,
            lowered,
            names,
            path,
        });
    }
    check_collisions(set, &planned)?;

    let mut items = vec![emit_mocks_struct(&root_ident, &planned, options)];
    for plan in &planned {
        items.extend(emit_method_types(plan, options));
    }
    items.push(emit_proxy_impl(&root_ident, &planned, options));
    items.push(emit_controls_impl(&root_ident, &planned, options));

    let all: TokenStream = items.iter().cloned().collect();
    syn::parse2::<syn::File>(all).map_err(|e| MksError::Emit {
        component: root.to_string(),
        details: e.to_string(),
    })?;

    let methods = planned
        .iter()
        .map(|plan| SynthesizedMethod {
            name: plan.lowered.name.clone(),
            depth: plan.resolved.depth,
            origin: plan.resolved.origin.clone(),
            controls: [
                &plan.names.stub,
                &plan.names.do_fn,
                &plan.names.return_fn,
                &plan.names.calls_fn,
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        })
        .collect();

    Ok(SynthesizedProxy {
        component: root.to_string(),
        methods,
        items,
    })
}

fn origin_idents(root: &str, origin: &OriginPath) -> Result<Vec<Ident>> {
    origin
        .fields()
        .into_iter()
        .map(|field| {
            syn::parse_str::<Ident>(field).map_err(|_| MksError::Emit {
                component: root.to_string(),
                details: format!("embed field {field:?} is not a usable identifier"),
            })
        })
        .collect()
}

/// Control functions share the type's inherent namespace with its own methods.
fn check_collisions(set: &ResolvedMethodSet, planned: &[Planned<'_>]) -> Result<()> {
    let mut taken: HashSet<String> = set.own_methods().iter().cloned().collect();
    taken.extend(planned.iter().map(|p| p.lowered.name.clone()));
    for plan in planned {
        let names = &plan.names;
        for control in [&names.stub, &names.do_fn, &names.return_fn, &names.calls_fn] {
            if !taken.insert(control.to_string()) {
                return Err(MksError::Emit {
                    component: set.root.clone(),
                    details: format!("generated control {control} collides with another method"),
                });
            }
        }
    }
    Ok(())
}

fn emit_mocks_struct(root: &Ident, planned: &[Planned<'_>], options: &SynthOptions) -> TokenStream {
    let cfg = &options.test_cfg;
    let rt = &options.runtime_path;
    let mocks = mocks_struct(&root.to_string());
    let slots: Vec<&Ident> = planned.iter().map(|p| &p.names.slot).collect();
    let mock_tys: Vec<&Ident> = planned.iter().map(|p| &p.names.mock).collect();
    let qualified: Vec<&str> = planned.iter().map(|p| p.names.qualified.as_str()).collect();
    let doc = format!(" Per-method mock control state for [`{root}`].");

    quote! {
        #[doc = #doc]
        #[cfg(#cfg)]
        #[derive(Debug)]
        pub struct #mocks {
            #(pub #slots: #mock_tys,)*
        }

        #[cfg(#cfg)]
        impl ::std::default::Default for #mocks {
            fn default() -> Self {
                Self {
                    #(#slots: #rt::MethodMock::new(#qualified),)*
                }
            }
        }
    }
}

fn emit_method_types(plan: &Planned<'_>, options: &SynthOptions) -> Vec<TokenStream> {
    let cfg = &options.test_cfg;
    let rt = &options.runtime_path;
    let names = &plan.names;
    let lowered = &plan.lowered;
    let (call, fake, mock) = (&names.call, &names.fake, &names.mock);

    let fields = lowered.params.iter().map(|p| {
        let binding = &p.binding;
        let ty = p.record_ty();
        quote!(pub #binding: #ty)
    });
    let derives = if options.call_derives.is_empty() {
        TokenStream::new()
    } else {
        let derives = &options.call_derives;
        quote!(#[derive(#(#derives),*)])
    };
    let input_tys = lowered.input_types();
    let arrow = lowered.output_arrow();
    let out = lowered.output_ty();
    let call_doc = format!(" Parameters recorded for one call to `{}`.", names.qualified);

    vec![
        quote! {
            #[doc = #call_doc]
            #[cfg(#cfg)]
            #derives
            pub struct #call {
                #(#fields,)*
            }
        },
        quote! {
            #[cfg(#cfg)]
            pub type #fake = dyn Fn(#(#input_tys),*) #arrow + Send + Sync;
        },
        quote! {
            #[cfg(#cfg)]
            pub type #mock = #rt::MethodMock<#call, #fake, #out>;
        },
    ]
}

fn emit_proxy_impl(root: &Ident, planned: &[Planned<'_>], options: &SynthOptions) -> TokenStream {
    let cfg = &options.test_cfg;
    let rt = &options.runtime_path;
    let mock_field = &options.mock_field;

    let methods = planned.iter().map(|plan| {
        let lowered = &plan.lowered;
        let names = &plan.names;
        let method = &names.method;
        let slot = &names.slot;
        let call = &names.call;
        let receiver = lowered.receiver_tokens();
        let inputs = lowered.inputs();
        let arrow = lowered.output_arrow();
        let bindings = lowered.bindings();
        let path = &plan.path;
        let captured = lowered.params.iter().map(|p| {
            let binding = &p.binding;
            let expr = p.record_expr();
            quote!(#binding: #expr)
        });

        quote! {
            #[cfg(not(#cfg))]
            #[inline]
            pub fn #method(#receiver, #(#inputs),*) #arrow {
                self.#(#path).*.#method(#(#bindings),*)
            }

            #[cfg(#cfg)]
            pub fn #method(#receiver, #(#inputs),*) #arrow {
                let __call = #call { #(#captured,)* };
                let __dispatch = self.#mock_field.#slot.enter(__call);
                match __dispatch {
                    #rt::Dispatch::Real => self.#(#path).*.#method(#(#bindings),*),
                    #rt::Dispatch::Return(__out) => __out,
                    #rt::Dispatch::Fake(__fake) => __fake(#(#bindings),*),
                }
            }
        }
    });

    quote! {
        impl #root {
            #(#methods)*
        }
    }
}

fn emit_controls_impl(
    root: &Ident,
    planned: &[Planned<'_>],
    options: &SynthOptions,
) -> TokenStream {
    let cfg = &options.test_cfg;
    let rt = &options.runtime_path;
    let mock_field = &options.mock_field;

    let controls = planned.iter().map(|plan| {
        let lowered = &plan.lowered;
        let names = &plan.names;
        let slot = &names.slot;
        let call = &names.call;
        let (stub, do_fn, return_fn, calls_fn) =
            (&names.stub, &names.do_fn, &names.return_fn, &names.calls_fn);
        let zero = lowered.zero_value();
        let input_tys = lowered.input_types();
        let arrow = lowered.output_arrow();
        let out = lowered.output_ty();
        let ReturnShape {
            generics,
            params: return_params,
            canned,
            value: return_value,
        } = return_shape(&lowered.results);
        let return_bound = canned.map(|canned| quote!(where #canned: #rt::Canned<#out>));
        let method = &names.qualified;
        let stub_doc = format!(" Serve every call to `{method}` with a no-error zero value.");
        let do_doc = format!(" Route every call to `{method}` to `fake`.");
        let do_log_doc = format!(
            " The call being served is already recorded when `fake` runs, so on the first call `{calls_fn}()` has one entry."
        );
        let return_doc = format!(" Serve every call to `{method}` with the given result (must be `Clone`).");
        let calls_doc = format!(" Calls to `{method}` so far, in arrival order.");

        quote! {
            #[doc = #stub_doc]
            pub fn #stub(&self) {
                self.#mock_field.#slot.stub_with(|| #zero);
            }

            #[doc = #do_doc]
            #[doc = ""]
            #[doc = #do_log_doc]
            pub fn #do_fn(&self, fake: impl Fn(#(#input_tys),*) #arrow + Send + Sync + 'static) {
                self.#mock_field.#slot.fake(::std::sync::Arc::new(fake));
            }

            #[doc = #return_doc]
            pub fn #return_fn #generics(&self, #(#return_params),*) #return_bound {
                self.#mock_field.#slot.returns(#return_value);
            }

            #[doc = #calls_doc]
            pub fn #calls_fn(&self) -> ::std::vec::Vec<#rt::CallRecord<#call>> {
                self.#mock_field.#slot.calls()
            }
        }
    });

    quote! {
        #[cfg(#cfg)]
        impl #root {
            #(#controls)*
        }
    }
}

/// Signature pieces of `_return`.
///
/// Each value parameter gets its own type parameter and the bound
/// `<canned>: Canned<R>` ties them back to the result types, so `R: Clone` is
/// only checked where a test calls the control.
struct ReturnShape {
    generics: Option<TokenStream>,
    params: Vec<TokenStream>,
    canned: Option<TokenStream>,
    value: TokenStream,
}

fn return_shape(results: &[syn::Type]) -> ReturnShape {
    match results {
        [] => ReturnShape {
            generics: None,
            params: Vec::new(),
            canned: None,
            value: quote!(()),
        },
        [_] => ReturnShape {
            generics: Some(quote!(<__V>)),
            params: vec![quote!(value: __V)],
            canned: Some(quote!(__V)),
            value: quote!(value),
        },
        many => {
            let idents: Vec<Ident> = (0..many.len()).map(|i| format_ident!("r{}", i)).collect();
            let tys: Vec<Ident> = (0..many.len()).map(|i| format_ident!("__V{}", i)).collect();
            ReturnShape {
                generics: Some(quote!(<#(#tys),*>)),
                params: idents
                    .iter()
                    .zip(&tys)
                    .map(|(ident, ty)| quote!(#ident: #ty))
                    .collect(),
                canned: Some(quote!((#(#tys),*))),
                value: quote!((#(#idents),*)),
            }
        }
    }
}
