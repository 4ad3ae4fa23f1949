//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use mockseam::prelude::*;
//! ```

// Core
pub use crate::core::config::{AmbiguityPolicy, Config};
pub use crate::core::errors::{MksError, Result};

// Model
pub use crate::model::catalog::{ComponentType, Embed, TypeCatalog};
pub use crate::model::signature::{MethodSignature, Param, Receiver};

// Resolver
pub use crate::resolver::method_set::{OriginPath, ResolvedMethod, ResolvedMethodSet};
pub use crate::resolver::traversal::resolve;

// Synthesizer
pub use crate::synth::options::SynthOptions;
pub use crate::synth::proxy::{SynthesizedProxy, synthesize};

// Generator
pub use crate::generator::output::Freshness;
pub use crate::generator::pipeline::{GeneratedFile, Generator};

// Runtime
pub use crate::runtime::{CallRecord, Canned, Dispatch, MethodMock, ModeKind, Seam, SeamGuard};
