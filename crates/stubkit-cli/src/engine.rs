//! External stub engine integration
//!
//! The injection mechanism is a separate executable; this module drives it
//! through the [`StubEngine`] boundary trait.

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process;
use tracing::debug;

use crate::config::StubConfig;
use stubkit_core::{Error, StubEngine, StubRequest};

/// Stub engine that shells out to the configured injector executable
///
/// The injector is invoked with the target identifier as its first
/// argument, followed by `--settings <path>` when a settings file was
/// requested. A non-zero injector exit is a stub-application failure.
pub struct ExternalStubEngine {
    program: PathBuf,
}

impl ExternalStubEngine {
    pub fn new(program: PathBuf) -> Self {
        Self { program }
    }

    /// Build the engine from configuration; fails when none is configured
    pub fn from_config(config: &StubConfig) -> Result<Self> {
        let program = config.engine.clone().ok_or_else(|| {
            anyhow::anyhow!(
                "no stub engine configured; set `engine` under `[stub]` in the config file"
            )
        })?;
        Ok(Self::new(program))
    }
}

#[async_trait]
impl StubEngine for ExternalStubEngine {
    async fn apply(&self, request: &StubRequest) -> stubkit_core::Result<()> {
        debug!(
            "invoking injector '{}' for '{}'",
            self.program.display(),
            request.target
        );

        let mut cmd = process::Command::new(&self.program);
        cmd.arg(&request.target);
        if let Some(settings) = &request.settings {
            cmd.arg("--settings").arg(settings);
        }

        let status = cmd.status().await.map_err(|source| Error::LaunchFailed {
            process: self.program.display().to_string(),
            source,
        })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::StubFailed {
                target: request.target.clone(),
                reason: format!("injector exited with {status}"),
            })
        }
    }
}
