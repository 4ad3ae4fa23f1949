//! Generation pipeline: from a component catalog to a written, digest-stamped
//! source file, plus the freshness check used as a CI gate.

pub mod digest;
pub mod output;
pub mod pipeline;
