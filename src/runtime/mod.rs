//! Test-time runtime for generated proxies: per-method mock control state,
//! call log, and injectable collaborator seams.
//!
//! Generated code refers to these items through the configured runtime path
//! (`::mockseam::runtime` by default) and only inside test-build cfg gates, so
//! production artifacts never link against this module.

pub mod log;
pub mod seam;
pub mod state;

pub use log::CallRecord;
pub use seam::{Seam, SeamGuard};
pub use state::{Canned, Dispatch, MethodMock, ModeKind};
