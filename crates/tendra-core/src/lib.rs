//! tendra-core
//!
//! Pure domain types for the assessment fusion and scenario engine.
//! No I/O and no clinical logic — this is the shared vocabulary of the
//! Tendra system: the needs profile, the scenario bundle DTOs, raw
//! assessment records, and the contract types external collaborators
//! (CAP evaluator, explanation model, coordinator UI) depend on.

pub mod error;
pub mod models;
pub mod scales;
