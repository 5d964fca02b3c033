//! # Envfold
//!
//! Build-time inlining of environment variable references in Rust's `syn` AST.
//!
//! Envfold is a single tree-rewriting pass: it finds `process.env.KEY` and
//! `process.env["KEY"]` access chains in a host-owned `syn` tree and replaces
//! each with a literal taken from an environment snapshot. Unset variables
//! become the bare `undefined` identifier, never the string `"undefined"`.
//! Keys listed in the pass configuration are skipped, as is any reference
//! sitting in the target slot of an assignment.
//!
//! ## Architecture
//!
//! - **Matcher**: recognize the fixed `process.env` access chain and extract
//!   the statically known key
//! - **Rewrite**: decide `NoOp` vs `ReplaceWith` as a pure function of node
//!   shape, exclusion set, and snapshot
//! - **Visitor**: a `syn::visit_mut::VisitMut` pass driven by the host's
//!   traversal, with the assignment-target guard
//! - **Snapshot**: the environment as an injected read-only mapping, captured
//!   from the real process environment on request
//!
//! The pass is stateless across nodes: each visit is a pure function of the
//! node, its slot in the parent, the exclusion set, and the snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod env;
pub mod error;
pub mod matcher;
pub mod rewrite;
pub mod visitor;

// Re-export main types
pub use config::InlineConfig;
pub use env::EnvSnapshot;
pub use error::{EnvfoldError, Result};
pub use matcher::env_access_key;
pub use rewrite::{decide, Action};
pub use visitor::Inliner;

/// Envfold version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
