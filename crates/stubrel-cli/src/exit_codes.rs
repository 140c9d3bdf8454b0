//! Process exit codes. Part of the CLI contract.

pub const SUCCESS: i32 = 0;
pub const BUILD_FAILED: i32 = 1; // Archive build, I/O or parse failure
pub const CONFIG_ERROR: i32 = 2; // Bad flags or unreadable input (clap also exits with 2)
