#![forbid(unsafe_code)]
//! TrustTree — summarize a trust database path dump as a directory tree
//! aggregated by file extension.

pub mod cli;
pub mod filters;
pub mod input;
pub mod render;
pub mod tree;
