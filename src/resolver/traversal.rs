//! Breadth-first method resolution over the composition graph.
//!
//! Depth 0 is the root itself: its own methods shadow everything below and
//! are never proxied. From depth 1 down, every component on the current level
//! contributes the methods it declares directly. A name first seen through
//! exactly one path wins at that depth; a name first seen through several
//! paths at the same depth is ambiguous and dropped. Either way the name is
//! settled and deeper occurrences are ignored.

#![allow(missing_docs)]

use std::collections::{BTreeMap, HashSet};

use crate::core::errors::Result;
use crate::model::catalog::{ComponentType, TypeCatalog};
use crate::model::signature::MethodSignature;
use crate::resolver::graph::detect_cycle;
use crate::resolver::method_set::{Ambiguity, OriginPath, ResolvedMethod, ResolvedMethodSet};

/// Resolve the proxy-eligible method set for `root`.
///
/// Fails on unknown components and on cycles; ambiguity is never an error
/// here, it is reported through [`ResolvedMethodSet::ambiguous`].
pub fn resolve(catalog: &TypeCatalog, root: &str) -> Result<ResolvedMethodSet> {
    detect_cycle(catalog, root)?;
    let root_ty = catalog.require(root, "<root>")?;

    let mut out = ResolvedMethodSet::new(root);
    let mut settled: HashSet<&str> = HashSet::new();
    for method in &root_ty.methods {
        settled.insert(method.name.as_str());
        out.mark_own(method.name.clone());
    }

    let mut expanded: HashSet<&str> = HashSet::from([root_ty.name.as_str()]);
    let mut frontier = children(catalog, root_ty, &OriginPath::default(), &expanded)?;
    let mut depth = 1;

    while !frontier.is_empty() {
        let mut level: BTreeMap<&str, Vec<(&OriginPath, &MethodSignature)>> = BTreeMap::new();
        for (path, component) in &frontier {
            let component: &ComponentType = component;
            for method in &component.methods {
                if !settled.contains(method.name.as_str()) {
                    level
                        .entry(method.name.as_str())
                        .or_default()
                        .push((path, method));
                }
            }
        }

        for (name, hits) in level {
            settled.insert(name);
            if let [(origin, signature)] = hits.as_slice() {
                out.insert(
                    name.to_string(),
                    ResolvedMethod {
                        signature: (*signature).clone(),
                        depth,
                        origin: (*origin).clone(),
                    },
                );
            } else {
                let mut origins: Vec<OriginPath> =
                    hits.iter().map(|(origin, _)| (*origin).clone()).collect();
                origins.sort();
                out.mark_ambiguous(name.to_string(), Ambiguity { depth, origins });
            }
        }

        expanded.extend(frontier.iter().map(|&(_, c)| c.name.as_str()));
        let mut next = Vec::new();
        for (path, component) in &frontier {
            next.extend(children(catalog, component, path, &expanded)?);
        }
        frontier = next;
        depth += 1;
    }

    Ok(out)
}

/// Nested components of `component`, skipping types already expanded at a
/// shallower depth (everything they declare is already settled).
fn children<'a>(
    catalog: &'a TypeCatalog,
    component: &'a ComponentType,
    path: &OriginPath,
    expanded: &HashSet<&str>,
) -> Result<Vec<(OriginPath, &'a ComponentType)>> {
    let mut out = Vec::with_capacity(component.embeds.len());
    for embed in &component.embeds {
        let child = catalog.require(&embed.type_name, &component.name)?;
        if expanded.contains(child.name.as_str()) {
            continue;
        }
        out.push((path.child(embed.field_name(), &child.name), child));
    }
    Ok(out)
}
