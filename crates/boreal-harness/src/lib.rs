//! Harness layer for the boreal agent runtime.
//!
//! Sits between the execution loop and the outside world:
//! - Provider abstraction for the reasoning engine (`provider`): the
//!   engine is a black box that takes a conversation plus a tool
//!   catalog and replies with either a final answer or a list of
//!   requested tool invocations.
//! - Tool catalog and dispatch (`tools`): the six filesystem/shell
//!   operations an engine may request, executed against a working
//!   directory with file-tracker bookkeeping.

pub mod provider;
pub mod tools;
