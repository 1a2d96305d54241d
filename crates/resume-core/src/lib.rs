//! resume-core — the data model, scoring engine, and AI-suggestion merge
//! pipeline behind the resume builder.
//!
//! The surrounding application (editors, rendering, the suggestion generator's
//! network client) lives elsewhere; this crate owns the invariants: unique
//! entity ids, duplicate-free skill buckets, 0–100 integer scores, idempotent
//! suggestion merges, and the debounced autosave/hydration flow over an
//! abstract key-value store.

pub mod config;
pub mod errors;
pub mod merge;
pub mod models;
pub mod persistence;
pub mod scoring;

pub use config::PersistenceConfig;
pub use errors::CoreError;
