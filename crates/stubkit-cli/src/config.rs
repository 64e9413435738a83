//! Configuration management for the stubkit CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stubkit_core::LaunchOptions;

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Process launch configuration
    #[serde(default)]
    pub runner: RunnerConfig,

    /// Stub engine configuration
    #[serde(default)]
    pub stub: StubConfig,
}

/// Process launch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Working directory for launched processes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub working_dir: Option<PathBuf>,

    /// Whether launched processes inherit the tool's environment
    #[serde(default = "default_inherit_env")]
    pub inherit_env: bool,
}

fn default_inherit_env() -> bool {
    true
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            working_dir: None,
            inherit_env: true,
        }
    }
}

impl RunnerConfig {
    /// Launch options handed to the runner command factory
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            working_dir: self.working_dir.clone(),
            inherit_env: self.inherit_env,
        }
    }
}

/// Stub engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StubConfig {
    /// Path to the external injector executable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<PathBuf>,

    /// Directory searched for bare stub settings file names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_dir: Option<PathBuf>,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            engine: None,
            settings_dir: Some(
                dirs::config_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("stubkit")
                    .join("settings"),
            ),
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

            let config: Config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

            Ok(config)
        } else {
            // Create default config
            let config = Config::default();
            config.save(&config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".config"))
            .join("stubkit")
            .join("config.toml")
    }

    /// Resolve a stub settings file name to a path
    ///
    /// An existing path is used as-is; a bare name is searched in the
    /// configured settings directory.
    pub fn resolve_settings(&self, name: &str) -> Result<PathBuf> {
        let direct = Path::new(name);
        if direct.exists() {
            return Ok(direct.to_path_buf());
        }

        if let Some(dir) = &self.stub.settings_dir {
            let candidate = dir.join(name);
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        anyhow::bail!("Stub settings '{}' not found", name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_creates_default_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.stub.engine.is_none());
        assert!(path.exists());
    }

    #[test]
    fn test_load_roundtrips_engine_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[stub]\nengine = \"/usr/local/bin/injector\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(
            config.stub.engine,
            Some(PathBuf::from("/usr/local/bin/injector"))
        );
    }

    #[test]
    fn test_runner_section_roundtrips_into_launch_options() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[runner]\nworking_dir = \"/srv/app\"\ninherit_env = false\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.runner.working_dir, Some(PathBuf::from("/srv/app")));
        assert!(!config.runner.inherit_env);

        let options = config.runner.launch_options();
        assert_eq!(options.working_dir, Some(PathBuf::from("/srv/app")));
        assert!(!options.inherit_env);
    }

    #[test]
    fn test_runner_defaults_inherit_environment() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[runner]\nworking_dir = \"/srv/app\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.runner.inherit_env);

        // A config with no [runner] section at all behaves the same way.
        let config = Config::default();
        assert!(config.runner.inherit_env);
        assert!(config.runner.working_dir.is_none());
    }

    #[test]
    fn test_resolve_settings_prefers_existing_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("indirection.toml");
        std::fs::write(&file, "").unwrap();

        let config = Config::default();
        let resolved = config.resolve_settings(file.to_str().unwrap()).unwrap();
        assert_eq!(resolved, file);
    }

    #[test]
    fn test_resolve_settings_searches_settings_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("indirection.toml"), "").unwrap();

        let mut config = Config::default();
        config.stub.settings_dir = Some(dir.path().to_path_buf());

        let resolved = config.resolve_settings("indirection.toml").unwrap();
        assert_eq!(resolved, dir.path().join("indirection.toml"));
    }

    #[test]
    fn test_resolve_settings_missing_fails() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.stub.settings_dir = Some(dir.path().to_path_buf());

        assert!(config.resolve_settings("nope.toml").is_err());
    }
}
