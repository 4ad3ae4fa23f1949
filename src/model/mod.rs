//! Descriptor model: component types, embeds, and method signatures.

pub mod catalog;
pub mod signature;
