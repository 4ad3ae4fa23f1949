//! Method-set resolver: cycle rejection, breadth-first shadowing, and the
//! flat resolved method set consumed by the synthesizer.

pub mod graph;
pub mod method_set;
pub mod traversal;
