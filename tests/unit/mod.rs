//! Unit-level property tests over the public API

pub mod cipher_laws;
pub mod pipeline;
