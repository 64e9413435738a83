//! Help command implementation

use async_trait::async_trait;
use tracing::debug;

use crate::commands::Command;
use crate::error::Result;
use crate::options::OptionsDescription;

/// Renders an options description as usage text on stdout
///
/// Holds its own copy of the description; the caller's structure is never
/// mutated or retained.
pub struct HelpCommand {
    description: OptionsDescription,
}

impl HelpCommand {
    pub(crate) fn new(description: OptionsDescription) -> Self {
        Self { description }
    }

    /// Render the usage text without printing it
    pub fn render(&self) -> String {
        self.description.render()
    }
}

#[async_trait]
impl Command for HelpCommand {
    async fn execute(&self) -> Result<()> {
        debug!("rendering usage text for {} options", self.description.len());
        print!("{}", self.render());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_description() -> OptionsDescription {
        let mut desc = OptionsDescription::new();
        desc.add("run", "run a process");
        desc.add("stub", "apply a stub");
        desc
    }

    #[test]
    fn test_render_includes_all_options() {
        let cmd = HelpCommand::new(sample_description());
        let rendered = cmd.render();
        assert!(rendered.contains("run a process"));
        assert!(rendered.contains("apply a stub"));
    }

    #[test]
    fn test_construction_copies_description() {
        let mut desc = sample_description();
        let cmd = HelpCommand::new(desc.clone());

        // Later mutation of the caller's description must not leak in.
        desc.add("extra", "added after construction");
        assert!(!cmd.render().contains("added after construction"));
    }

    #[tokio::test]
    async fn test_execute_always_succeeds() {
        let cmd = HelpCommand::new(OptionsDescription::new());
        assert!(cmd.execute().await.is_ok());
    }
}
