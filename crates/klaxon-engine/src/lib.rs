//! The KLAXON alerting engine.
//!
//! Ties the pieces together: the pure warning evaluator, the per-category
//! debounce clock, and the playback dispatcher that drives an external
//! audio sink. The host calls [`engine::AlertEngine::tick`] once per
//! simulation tick with the latest telemetry snapshot; everything else is
//! internal. Completely headless (no audio backend dependency), enabling
//! deterministic testing.

pub mod debounce;
pub mod engine;
pub mod evaluate;
pub mod sink;

pub use klaxon_core as core;
pub use klaxon_synth as synth;
