//! Composition graph checks run before method resolution.

#![allow(missing_docs)]

use std::collections::HashMap;

use crate::core::errors::{MksError, Result};
use crate::model::catalog::TypeCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Visiting,
    Done,
}

/// Reject cycles among the components reachable from `root`.
///
/// The error names the cycle in traversal order, closing on the repeated
/// component: `A -> B -> A`.
pub fn detect_cycle(catalog: &TypeCatalog, root: &str) -> Result<()> {
    catalog.require(root, "<root>")?;
    let mut marks = HashMap::new();
    let mut stack = Vec::new();
    visit(catalog, root, &mut marks, &mut stack)
}

/// Reject cycles anywhere in the catalog.
pub fn detect_any_cycle(catalog: &TypeCatalog) -> Result<()> {
    let mut marks = HashMap::new();
    for name in catalog.names() {
        if !marks.contains_key(name) {
            let mut stack = Vec::new();
            visit(catalog, name, &mut marks, &mut stack)?;
        }
    }
    Ok(())
}

fn visit<'a>(
    catalog: &'a TypeCatalog,
    name: &'a str,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
) -> Result<()> {
    match marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::Visiting) => {
            let start = stack.iter().position(|n| *n == name).unwrap_or(0);
            let mut cycle: Vec<&str> = stack[start..].to_vec();
            cycle.push(name);
            return Err(MksError::CyclicComposition {
                cycle: cycle.join(" -> "),
            });
        }
        None => {}
    }

    let component = catalog.require(name, stack.last().copied().unwrap_or("<root>"))?;
    marks.insert(name, Mark::Visiting);
    stack.push(name);
    for embed in &component.embeds {
        visit(catalog, &embed.type_name, marks, stack)?;
    }
    stack.pop();
    marks.insert(name, Mark::Done);
    Ok(())
}
