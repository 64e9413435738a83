//! Command implementations for stubkit

pub mod help;
pub mod runner;
pub mod stubber;

pub use help::HelpCommand;
pub use runner::{LaunchOptions, RunnerCommand};
pub use stubber::StubberCommand;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for executable tool commands
///
/// `execute` is the single operation of the contract and the only place a
/// command may perform observable effects. Dispatch sites hold a
/// `dyn Command` handle and never name a concrete variant.
#[async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> Result<()>;
}
