//! Argument parsing and terminal output for the `notez` binary. Not part of
//! the library API.

pub(crate) mod args;
pub(crate) mod print;
