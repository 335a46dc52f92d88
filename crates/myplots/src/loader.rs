use std::path::{Path, PathBuf};

use crate::definition::ThemeDefinition;
use crate::error::{ColorschemeError, Result};
use crate::params::RcParams;
use crate::style::{RoleNames, StyleConfig};

/// Where color schemes live unless told otherwise, relative to the
/// working directory
pub const DEFAULT_THEME_DIR: &str = "iTerm2-Color-Schemes/windowsterminal";

/// Color scheme lookup rooted at a theme directory
#[derive(Debug, Clone)]
pub struct Colorschemes {
    theme_dir: PathBuf,
}

impl Default for Colorschemes {
    fn default() -> Self {
        Self::new(DEFAULT_THEME_DIR)
    }
}

impl Colorschemes {
    pub fn new(theme_dir: impl Into<PathBuf>) -> Self {
        Self {
            theme_dir: theme_dir.into(),
        }
    }

    pub fn theme_dir(&self) -> &Path {
        &self.theme_dir
    }

    /// File a scheme name maps to: `<theme dir>/<name>.json`
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.theme_dir.join(format!("{}.json", name))
    }

    /// Read and parse a scheme
    pub fn definition(&self, name: &str) -> Result<ThemeDefinition> {
        let path = self.path_for(name);
        if !path.is_file() {
            return Err(ColorschemeError::NotFound {
                name: name.to_string(),
                path,
            });
        }

        tracing::debug!(path = %path.display(), "loading color scheme");
        ThemeDefinition::from_file(&path)
    }

    /// Load a scheme and derive its plot style
    pub fn load(&self, name: &str, roles: &RoleNames) -> Result<StyleConfig> {
        let definition = self.definition(name)?;
        StyleConfig::from_definition(&definition, roles)
    }

    /// Load a scheme and write its style into `params`.
    ///
    /// On error `params` is left exactly as it was.
    pub fn apply(&self, name: &str, roles: &RoleNames, params: &mut RcParams) -> Result<()> {
        let style = self.load(name, roles)?;
        style.apply_to(params);
        Ok(())
    }

    /// Names of the schemes available in the theme directory, sorted
    pub fn available(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.theme_dir).map_err(|source| ColorschemeError::Io {
            path: self.theme_dir.clone(),
            source,
        })?;

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();

        Ok(names)
    }
}

/// Load a scheme from [`DEFAULT_THEME_DIR`]
pub fn load_colorscheme(name: &str, roles: &RoleNames) -> Result<StyleConfig> {
    Colorschemes::default().load(name, roles)
}
