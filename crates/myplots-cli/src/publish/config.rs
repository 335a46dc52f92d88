// Publish settings from publish.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::PublishError;

pub const CONFIG_FILE: &str = "publish.toml";

/// Top-level layout of publish.toml
#[derive(Debug, Clone, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    publish: PublishConfig,
}

/// Where the docs are built and where they get published
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublishConfig {
    /// Remote repository holding the site branch
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch the site is served from
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Docs directory, relative to the project root
    #[serde(default = "default_docs_dir")]
    pub docs_dir: String,

    /// Build output, relative to the docs directory. Removed before each build.
    #[serde(default = "default_build_dir")]
    pub build_dir: String,

    /// Generated HTML, relative to the docs directory
    #[serde(default = "default_html_dir")]
    pub html_dir: String,

    /// Docs build command, run from the project root. Split on whitespace,
    /// no shell involved.
    #[serde(default = "default_build_command")]
    pub build_command: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            branch: default_branch(),
            commit_message: default_commit_message(),
            docs_dir: default_docs_dir(),
            build_dir: default_build_dir(),
            html_dir: default_html_dir(),
            build_command: default_build_command(),
        }
    }
}

impl PublishConfig {
    /// Parse from a publish.toml string
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.publish)
    }

    /// Load from a config file
    pub fn from_file(path: &Path) -> Result<Self, PublishError> {
        let content = std::fs::read_to_string(path).map_err(|source| PublishError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| PublishError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load publish.toml from the project root, falling back to defaults
    /// when the file does not exist
    pub fn load_default(root: &Path) -> Result<Self, PublishError> {
        let path = root.join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!(path = %path.display(), "using publish config");
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<(), PublishError> {
        let required = [
            ("remote", &self.remote),
            ("branch", &self.branch),
            ("commit_message", &self.commit_message),
            ("docs_dir", &self.docs_dir),
            ("build_dir", &self.build_dir),
            ("html_dir", &self.html_dir),
            ("build_command", &self.build_command),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PublishError::InvalidConfig(format!("`{}` must not be empty", field)));
            }
        }

        Ok(())
    }
}

/// Find the project root: the closest of `start` and its ancestors that
/// holds publish.toml or a docs directory
pub fn discover_root(start: &Path) -> Option<PathBuf> {
    let docs_dir = default_docs_dir();
    start
        .ancestors()
        .find(|dir| dir.join(CONFIG_FILE).is_file() || dir.join(&docs_dir).is_dir())
        .map(Path::to_path_buf)
}

// Default values
fn default_remote() -> String {
    "git@github.com:jthorniley/notebooks.git".to_string()
}

fn default_branch() -> String {
    "gh-pages".to_string()
}

fn default_commit_message() -> String {
    "PublishPages".to_string()
}

fn default_docs_dir() -> String {
    "docs".to_string()
}

fn default_build_dir() -> String {
    "_build".to_string()
}

fn default_html_dir() -> String {
    "_build/html".to_string()
}

fn default_build_command() -> String {
    "poetry run bash convert.sh".to_string()
}
