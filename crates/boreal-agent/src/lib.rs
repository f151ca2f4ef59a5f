//! Task execution engine for the boreal agent runtime.
//!
//! Drives one bounded, stateful conversation with a reasoning engine
//! that can request tool invocations: submit conversation, execute the
//! requested tools sequentially, feed results back, repeat until the
//! engine signals completion or the iteration budget is spent, then
//! report what changed on disk.

pub mod executor;
pub mod prompt;
