//! wavelab CLI library.
//!
//! Command implementations for the `wavelab` binary. Each command reads WAV
//! files, runs one or more effects from `wavelab-audio` and writes the result.

pub mod commands;
