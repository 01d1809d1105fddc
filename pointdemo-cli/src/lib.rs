//! Support library for the `pointdemo` binary.
//!
//! Exposes the command and logging modules so tests can drive the commands
//! against an in-process registry without spawning a subprocess.

pub mod cli;
pub mod logging;
