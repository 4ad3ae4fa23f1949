//! Proxy synthesizer: lowers resolved signatures and emits the delegating
//! proxies plus their test-only control surface as Rust tokens.

pub mod lower;
pub mod naming;
pub mod options;
pub mod proxy;
