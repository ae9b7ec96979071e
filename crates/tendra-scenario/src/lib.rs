//! Scenario bundle generation.
//!
//! Turns a fused needs profile into priced care-plan alternatives, one per
//! requested axis. The generator is a rule engine: it selects service-line
//! templates relevant to the profile, shapes the selection along the axis,
//! forces coverage of any safety needs the profile raises, and prices the
//! result against an operator-supplied funding policy.
//!
//! Everything here is pure computation. Persistence and the external
//! explanation model sit on the other side of `ScenarioBundleDto` and
//! `narrative::explanation_context`.

pub mod catalog;
pub mod generator;
pub mod narrative;
pub mod policy;
pub mod safety;
