use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{ColorschemeError, Result};

/// A parsed color scheme: color role names mapped to hex strings.
///
/// The Windows Terminal layout also carries a `"name"` entry and some
/// exports add non-string metadata. Those are kept as-is and only rejected
/// when looked up as a color.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ThemeDefinition {
    roles: HashMap<String, Value>,
}

impl ThemeDefinition {
    /// Parse a definition from a JSON string
    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load a definition from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ColorschemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| ColorschemeError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Raw value of a color role, exactly as written in the file
    pub fn color(&self, role: &str) -> Result<&str> {
        self.roles
            .get(role)
            .and_then(Value::as_str)
            .ok_or_else(|| ColorschemeError::missing_role(role))
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.get(role).is_some_and(Value::is_string)
    }

    /// Scheme name, when the file declares one
    pub fn name(&self) -> Option<&str> {
        self.roles.get("name").and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for ThemeDefinition
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            roles: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Value::String(v.into())))
                .collect(),
        }
    }
}

/// Strip every leading `#` from a hex color.
pub fn strip_hash(value: &str) -> &str {
    value.trim_start_matches('#')
}
