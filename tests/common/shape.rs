//! Token-level comparison of generated proxies against hand-kept fixtures.

use quote::ToTokens;

pub fn compact(tokens: &impl ToTokens) -> String {
    tokens
        .to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

/// Items with doc and derive attributes dropped; cfg gates kept.
pub fn shape(file: &syn::File) -> Vec<String> {
    let cfgs = |attrs: &[syn::Attribute]| -> String {
        attrs
            .iter()
            .filter(|a| a.path().is_ident("cfg"))
            .map(compact)
            .collect()
    };
    let mut out = Vec::new();
    for item in &file.items {
        match item {
            syn::Item::Struct(s) => out.push(format!(
                "{}struct{}{}",
                cfgs(&s.attrs),
                s.ident,
                compact(&s.fields)
            )),
            syn::Item::Type(t) => out.push(format!(
                "{}type{}={}",
                cfgs(&t.attrs),
                t.ident,
                compact(&t.ty)
            )),
            syn::Item::Impl(imp) => {
                let header = format!(
                    "{}impl{}for{}",
                    cfgs(&imp.attrs),
                    imp.trait_
                        .as_ref()
                        .map(|(_, path, _)| compact(path))
                        .unwrap_or_default(),
                    compact(&imp.self_ty)
                );
                for inner in &imp.items {
                    if let syn::ImplItem::Fn(f) = inner {
                        out.push(format!(
                            "{header}::{}{}{}",
                            cfgs(&f.attrs),
                            compact(&f.sig),
                            compact(&f.block)
                        ));
                    }
                }
            }
            other => out.push(compact(other)),
        }
    }
    out.sort();
    out
}

/// Assert two files hold the same items, ignoring docs, derives and layout.
pub fn assert_same_shape(generated: &syn::File, fixture: &syn::File) {
    let generated = shape(generated);
    let fixture = shape(fixture);
    for (g, f) in generated.iter().zip(&fixture) {
        assert_eq!(g, f);
    }
    assert_eq!(generated.len(), fixture.len());
}
