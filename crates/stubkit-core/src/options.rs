//! Options description consumed by the help command
//!
//! An insertion-ordered mapping from option name to human-readable help
//! text. The argument parser builds one of these and hands it to the
//! factory; the help command only ever renders it.

/// A single named option and its help text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionEntry {
    pub name: String,
    pub help: String,
}

/// Insertion-ordered option-name to help-text mapping
///
/// Adding a name that is already present replaces its help text rather
/// than appending a duplicate entry.
#[derive(Debug, Clone, Default)]
pub struct OptionsDescription {
    caption: Option<String>,
    entries: Vec<OptionEntry>,
}

impl OptionsDescription {
    /// Create an empty description
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty description with a caption line (typically a usage line)
    pub fn with_caption(caption: impl Into<String>) -> Self {
        Self {
            caption: Some(caption.into()),
            entries: Vec::new(),
        }
    }

    /// Add an option, replacing the help text of an existing entry with the same name
    pub fn add(&mut self, name: impl Into<String>, help: impl Into<String>) -> &mut Self {
        let name = name.into();
        let help = help.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => entry.help = help,
            None => self.entries.push(OptionEntry { name, help }),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        self.entries.iter()
    }

    /// Render the description as usage text
    ///
    /// A description is always renderable; an empty one renders to a bare
    /// `Options:` header.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(caption) = &self.caption {
            out.push_str(caption);
            out.push_str("\n\n");
        }
        out.push_str("Options:\n");
        let width = self.entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
        for entry in &self.entries {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                entry.name,
                entry.help,
                width = width
            ));
        }
        out
    }
}
