//! Core primitives for the boreal coding-agent runtime.
//!
//! This crate is the leaf of the workspace. It provides:
//! - Content-hash based file change tracking (`tracker`)
//! - Environment-driven runtime settings (`settings`)
//! - Development-time tracing initialization (`logging`)
//!
//! Nothing here talks to an LLM or spawns processes; the higher layers
//! (`boreal-harness`, `boreal-agent`) build on these primitives.

pub mod logging;
pub mod settings;
pub mod tracker;
