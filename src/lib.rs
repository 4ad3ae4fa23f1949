#![forbid(unsafe_code)]

//! mockseam: generates test-only method proxies for composed types.
//!
//! Given a root type built from nested components, mockseam works out which
//! methods the root exposes through composition, then emits a proxy for each
//! one. Outside test builds a proxy is a plain inlined delegation. Inside test
//! builds it can be stubbed, replaced by a fake, given canned return values,
//! and inspected through its call log.
//!
//! Three layers:
//! 1. **Resolver**: cycle rejection and breadth-first shadowing over the
//!    component catalog
//! 2. **Synthesizer**: signature lowering and token emission with `syn`/`quote`
//! 3. **Runtime**: per-method mode state and call records used by the
//!    generated code
//!
//! # Library usage
//!
//! ```rust,no_run
//! use mockseam::prelude::*;
//!
//! # fn main() -> mockseam::core::errors::Result<()> {
//! let catalog = TypeCatalog::load(std::path::Path::new("mockseam-defs.toml"))?;
//! let generator = Generator::new(Config::load(None)?)?;
//! let file = generator.generate(&catalog, &["Client".to_string()])?;
//! generator.write(&file, std::path::Path::new("src/client_mock.rs"))?;
//! # Ok(())
//! # }
//! ```

pub mod prelude;

pub mod core;
pub mod generator;
pub mod logger;
pub mod model;
pub mod resolver;
pub mod runtime;
pub mod synth;
