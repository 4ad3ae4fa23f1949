//! Generation event logging: JSONL append-only writer with graceful degradation.

pub mod generation;
pub mod jsonl;
