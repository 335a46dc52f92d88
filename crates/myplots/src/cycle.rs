use serde::Serialize;

use crate::definition::ThemeDefinition;
use crate::error::Result;

/// Color roles tried for the series color cycle, in assignment order
pub const CYCLE_CANDIDATES: [&str; 10] = [
    "red",
    "blue",
    "yellow",
    "green",
    "purple",
    "cyan",
    "brightRed",
    "brightGreen",
    "brightPurple",
    "brightCyan",
];

/// Ordered colors assigned to successive data series.
///
/// Values are the raw strings from the scheme, leading `#` included.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ColorCycle {
    colors: Vec<String>,
}

impl ColorCycle {
    /// Build the cycle from a scheme, dropping candidates that would blend
    /// into the grid or the background.
    ///
    /// Comparison is on the raw values: `"#00ffff"` and `"00ffff"` are
    /// different colors here even though both strip to the same style value.
    /// Every candidate role must be defined.
    pub fn from_definition(def: &ThemeDefinition, grid: &str, background: &str) -> Result<Self> {
        let mut colors = Vec::with_capacity(CYCLE_CANDIDATES.len());

        for role in CYCLE_CANDIDATES {
            let value = def.color(role)?;
            if value == grid || value == background {
                tracing::debug!(role, value, "dropping cycle color that matches grid or background");
                continue;
            }
            colors.push(value.to_string());
        }

        Ok(Self { colors })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str)
    }

    /// Endless iterator over the cycle, the way a plotting backend hands out
    /// series colors. Yields nothing when the cycle is empty.
    pub fn cycle(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(String::as_str).cycle()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl FromIterator<String> for ColorCycle {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
