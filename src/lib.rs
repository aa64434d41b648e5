//! CTF Text Analysis Toolkit
//!

pub mod cipher;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod decoder;
pub mod detection;
pub mod errors;
pub mod extraction;
pub mod processor;
pub mod types;
