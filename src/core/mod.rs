//! Core business logic - framework-agnostic record store, statistics,
//! approval workflow and report generation. Nothing in here knows about the
//! CLI; callers re-query the store after every mutation.

/// Approval workflow - one-way sign-off over the registry contents
pub mod approval;
/// Record store operations - register, delete, list, export
pub mod machine;
/// Paginated process report generation
pub mod report;
/// Statistics derived from the machine list
pub mod stats;
