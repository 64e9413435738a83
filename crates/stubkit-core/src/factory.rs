//! Stateless construction functions for tool commands
//!
//! One function per command variant, each taking the minimal data that
//! variant needs and returning a shared handle to a freshly constructed,
//! validated command. Dispatch sites depend only on these signatures and
//! on the [`Command`] trait, never on concrete variant types.

use std::path::PathBuf;
use std::sync::Arc;

use crate::commands::{Command, HelpCommand, LaunchOptions, RunnerCommand, StubberCommand};
use crate::error::Result;
use crate::options::OptionsDescription;
use crate::stub::{StubEngine, StubRequest};

/// Build a command that renders the given options description as usage text
///
/// The description is copied, never mutated. A description is always
/// renderable, so construction cannot fail.
pub fn help_command(description: &OptionsDescription) -> Arc<dyn Command> {
    Arc::new(HelpCommand::new(description.clone()))
}

/// Build a command that launches `process` with `arguments`
///
/// The process name must be non-empty; the argument string may be empty.
/// Launch options (working directory, environment inheritance) are fixed
/// here as well. Whether the executable exists is an execute-time concern.
pub fn runner_command(
    process: impl Into<String>,
    arguments: impl Into<String>,
    options: LaunchOptions,
) -> Result<Arc<dyn Command>> {
    let cmd = RunnerCommand::new(process.into(), arguments.into(), options)?;
    Ok(Arc::new(cmd))
}

/// Build a command that applies a stub to `target` through `engine`
///
/// The target identifier must be non-empty. The engine handle is supplied
/// by the caller; this crate never constructs one.
pub fn stubber_command(
    target: impl Into<String>,
    settings: Option<PathBuf>,
    engine: Arc<dyn StubEngine>,
) -> Result<Arc<dyn Command>> {
    let request = StubRequest {
        target: target.into(),
        settings,
    };
    let cmd = StubberCommand::new(request, engine)?;
    Ok(Arc::new(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_runner_rejects_empty_process_for_any_arguments() {
        for arguments in ["", "some arguments", "   "] {
            let result = runner_command("", arguments, LaunchOptions::default());
            assert!(matches!(result, Err(Error::EmptyProcessName)));
        }
    }

    #[test]
    fn test_help_command_from_description() {
        let mut desc = OptionsDescription::new();
        desc.add("run", "run a process");
        desc.add("stub", "apply a stub");

        // Construction must not consume or mutate the caller's description.
        let _cmd = help_command(&desc);
        assert_eq!(desc.len(), 2);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_commands_from_same_inputs_are_independent() {
        let first = runner_command("true", "", LaunchOptions::default()).unwrap();
        let second = runner_command("true", "", LaunchOptions::default()).unwrap();

        drop(first);
        assert!(second.execute().await.is_ok());
    }
}
