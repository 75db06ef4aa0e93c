//! Tone synthesis for KLAXON.
//!
//! Pure, deterministic sample-buffer generators for beeps, sweeps, and
//! multi-tone composite patterns, plus the fixed pattern recipe each
//! warning category falls back to when no recorded clip is available.
//! No audio backend dependency — buffers are handed to the sink as data.

pub mod patterns;
pub mod tone;

pub use klaxon_core as core;
