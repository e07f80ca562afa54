//! `WeldRegistry` - welding-machine registration and process sign-off
//!
//! This crate provides a small registry for welding-machine records with
//! derived statistics, a versioned JSON export, a paginated process report,
//! and a one-way approval workflow that relays the sign-off to an email
//! endpoint.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,        // Will add gradually
    clippy::missing_panics_doc,        // Will add gradually
)]

/// Command-line interface - the presentation layer
pub mod cli;
/// Configuration management for database and application settings
pub mod config;
/// Core business logic - record store, statistics, approval and reporting
pub mod core;
/// SeaORM entity definitions for the storage table
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Persisted record types and operation inputs
pub mod models;
/// Fire-and-forget email relay collaborator
pub mod relay;
/// Whole-blob persistence over the storage table
pub mod storage;

#[cfg(test)]
pub mod test_utils;
