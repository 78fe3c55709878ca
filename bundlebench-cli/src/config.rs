//! Configuration loading from bundlebench.toml
//!
//! Configuration can be specified in a `bundlebench.toml` file discovered by
//! walking up from the current directory. CLI flags override file values.
//! There is no ambient mutable state; the resolved configuration is passed
//! into the orchestrator at construction time.

use bundlebench_core::Producer;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// BundleBench configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchConfig {
    /// Application under benchmark
    #[serde(default)]
    pub app: AppConfig,
    /// External tool invocations
    #[serde(default)]
    pub tools: ToolsConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// The application all producers bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory of the React Native application; external tools run with
    /// this as their working directory
    #[serde(default = "default_app_dir")]
    pub dir: PathBuf,
    /// Target platform passed to every producer
    #[serde(default = "default_platform")]
    pub platform: String,
    /// Entry file passed to the bundlers
    #[serde(default = "default_entry_file")]
    pub entry_file: String,
    /// Producer all percentage diffs are computed against
    #[serde(default = "default_baseline")]
    pub baseline: Producer,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dir: default_app_dir(),
            platform: default_platform(),
            entry_file: default_entry_file(),
            baseline: default_baseline(),
        }
    }
}

fn default_app_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_platform() -> String {
    "ios".to_string()
}
fn default_entry_file() -> String {
    "index.js".to_string()
}
fn default_baseline() -> Producer {
    Producer::Metro
}

/// External tool invocations.
///
/// Each bundler entry is a program plus leading arguments; keeping these
/// configurable lets tests substitute stub tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Command prefix for the React Native CLI (Metro and Re.Pack)
    #[serde(default = "default_react_native")]
    pub react_native: Vec<String>,
    /// Command prefix for the Expo CLI
    #[serde(default = "default_expo")]
    pub expo: Vec<String>,
    /// Path to the Hermes bytecode compiler, relative to the app directory
    #[serde(default = "default_hermesc")]
    pub hermesc: String,
    /// Enable Expo's experimental tree shaking during export
    #[serde(default)]
    pub tree_shaking: bool,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            react_native: default_react_native(),
            expo: default_expo(),
            hermesc: default_hermesc(),
            tree_shaking: false,
        }
    }
}

fn default_react_native() -> Vec<String> {
    vec!["npx".to_string(), "react-native".to_string()]
}
fn default_expo() -> Vec<String> {
    vec!["npx".to_string(), "expo".to_string()]
}
fn default_hermesc() -> String {
    "./node_modules/react-native/sdks/hermesc/osx-bin/hermesc".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Workspace directory holding one subdirectory per variant; reset at
    /// the start of every run. Relative paths resolve against the current
    /// directory.
    #[serde(default = "default_workspace")]
    pub workspace: PathBuf,
    /// Default output format: human, json, github
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            workspace: default_workspace(),
            format: default_format(),
        }
    }
}

fn default_workspace() -> PathBuf {
    PathBuf::from("artifacts")
}
fn default_format() -> String {
    "human".to_string()
}

impl BenchConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current
    /// directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("bundlebench.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// The workspace directory resolved to an absolute path, so artifact
    /// paths stay valid for tools running with the app directory as cwd.
    pub fn workspace_path(&self) -> PathBuf {
        if self.output.workspace.is_absolute() {
            self.output.workspace.clone()
        } else {
            std::env::current_dir()
                .unwrap_or_else(|_| PathBuf::from("."))
                .join(&self.output.workspace)
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# BundleBench Configuration

[app]
# Directory of the React Native application
dir = "."
# Target platform passed to every producer
platform = "ios"
# Entry file passed to the bundlers
entry_file = "index.js"
# Producer all percentage diffs are computed against
baseline = "metro"

[tools]
# Command prefix for the React Native CLI (Metro and Re.Pack)
react_native = ["npx", "react-native"]
# Command prefix for the Expo CLI
expo = ["npx", "expo"]
# Path to the Hermes bytecode compiler, relative to the app directory
hermesc = "./node_modules/react-native/sdks/hermesc/osx-bin/hermesc"
# Enable Expo's experimental tree shaking during export
tree_shaking = false

[output]
# Workspace directory, reset at the start of every run
workspace = "artifacts"
# Default output format: human, json, github
format = "human"
"#
        .to_string()
    }
}
