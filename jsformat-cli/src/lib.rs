//! Library half of the `jsformat` binary, split out so argument parsing and
//! command execution can be tested without spawning a process.

pub mod cli;
pub mod logging;
