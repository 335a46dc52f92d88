use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("unable to find project root {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("docs folder not found at {}", .0.display())]
    DocsNotFound(PathBuf),

    #[error("built HTML not found at {}", .0.display())]
    HtmlNotFound(PathBuf),

    #[error("failed to start `{command}`. Is it installed?")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command `{command}` failed ({})", exit_description(.code))]
    CommandFailed { command: String, code: Option<i32> },

    #[error("failed to create temporary directory")]
    TempDir(#[source] std::io::Error),

    #[error("filesystem operation failed on {}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}
