//! Exit code constants for the taskparams CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files)
//! - 2: Parse failure (invalid task, run, or config document)
//! - 3: Placeholders left unresolved in strict mode

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unreadable input files.
pub const USER_ERROR: i32 = 1;

/// Parse failure: a task, run, or config document is invalid.
pub const PARSE_FAILURE: i32 = 2;

/// Strict mode found placeholders that no replacement resolved.
pub const UNRESOLVED_PLACEHOLDERS: i32 = 3;
