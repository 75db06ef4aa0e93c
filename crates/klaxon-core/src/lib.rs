//! Core types and definitions for the KLAXON alerting engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! telemetry snapshots, warning categories and levels, state, constants,
//! and per-tick reports. It has no dependency on any audio backend or
//! runtime framework.

pub mod constants;
pub mod enums;
pub mod state;
pub mod types;
