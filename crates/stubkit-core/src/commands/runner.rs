//! Runner command implementation

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process;
use tracing::{debug, info};

use crate::commands::Command;
use crate::error::{Error, Result};

/// Launch-time options for a runner command, fixed at construction
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Working directory for the child; inherits the tool's when unset
    pub working_dir: Option<PathBuf>,

    /// Whether the child inherits the tool's environment
    pub inherit_env: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            working_dir: None,
            inherit_env: true,
        }
    }
}

/// Launches a target process and waits for it to exit
///
/// Construction only records the launch intent; locating the executable is
/// deferred to `execute`, which blocks (asynchronously) until the child
/// exits so the tool's own status can mirror the child's. The argument
/// string is split on whitespace at execution time.
pub struct RunnerCommand {
    process: String,
    arguments: String,
    options: LaunchOptions,
}

impl RunnerCommand {
    /// Record a launch target; rejects an empty process name
    pub(crate) fn new(process: String, arguments: String, options: LaunchOptions) -> Result<Self> {
        if process.is_empty() {
            return Err(Error::EmptyProcessName);
        }
        Ok(Self {
            process,
            arguments,
            options,
        })
    }
}

#[async_trait]
impl Command for RunnerCommand {
    async fn execute(&self) -> Result<()> {
        info!("launching '{}' with arguments '{}'", self.process, self.arguments);

        let mut child = process::Command::new(&self.process);
        if !self.arguments.is_empty() {
            child.args(self.arguments.split_whitespace());
        }
        if let Some(dir) = &self.options.working_dir {
            child.current_dir(dir);
        }
        if !self.options.inherit_env {
            child.env_clear();
        }

        let status = child.status().await.map_err(|source| Error::LaunchFailed {
            process: self.process.clone(),
            source,
        })?;

        debug!("'{}' exited with {}", self.process, status);

        if status.success() {
            Ok(())
        } else {
            match status.code() {
                Some(code) => Err(Error::ProcessExited { code }),
                None => Err(Error::ProcessTerminated),
            }
        }
    }
}
