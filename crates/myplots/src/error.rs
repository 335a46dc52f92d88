use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorschemeError>;

/// Errors raised while locating, parsing or reading a color scheme
#[derive(Debug, Error)]
pub enum ColorschemeError {
    #[error("color scheme '{name}' not found at {}", .path.display())]
    NotFound { name: String, path: PathBuf },

    #[error("failed to read color scheme {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed color scheme {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The requested color role is absent, or its value is not a string
    #[error("color role '{role}' is not defined by the color scheme")]
    MissingRole { role: String },
}

impl ColorschemeError {
    pub(crate) fn missing_role(role: &str) -> Self {
        ColorschemeError::MissingRole {
            role: role.to_string(),
        }
    }
}
