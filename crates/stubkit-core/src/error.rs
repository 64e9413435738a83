//! Error types for command construction and execution

use std::io;
use thiserror::Error;

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or executing commands
///
/// Construction errors (`EmptyProcessName`, `EmptyStubTarget`) surface at
/// factory-call time so an unusable command is never created. Execution
/// errors are variant-specific and distinguishable by kind so the caller
/// can choose an appropriate process exit status.
#[derive(Error, Debug)]
pub enum Error {
    /// A runner command was requested without naming a launch target
    #[error("process name must not be empty")]
    EmptyProcessName,

    /// A stubber command was requested without naming a stub target
    #[error("stub target must not be empty")]
    EmptyStubTarget,

    /// The target process could not be started
    #[error("failed to launch '{process}': {source}")]
    LaunchFailed {
        process: String,
        #[source]
        source: io::Error,
    },

    /// The target process started but exited with a non-zero code
    #[error("process exited with code {code}")]
    ProcessExited { code: i32 },

    /// The target process was terminated without reporting an exit code
    #[error("process terminated without an exit code")]
    ProcessTerminated,

    /// The external stub engine rejected or failed the request
    #[error("stub application failed for '{target}': {reason}")]
    StubFailed { target: String, reason: String },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
