use std::fmt;

use crate::cycle::ColorCycle;

/// Style keys written by [`StyleConfig::apply_to`](crate::StyleConfig::apply_to)
pub mod keys {
    pub const AXES_EDGECOLOR: &str = "axes.edgecolor";
    pub const GRID_COLOR: &str = "grid.color";
    pub const PATCH_FACECOLOR: &str = "patch.facecolor";
    pub const FIGURE_FACECOLOR: &str = "figure.facecolor";
    pub const AXES_FACECOLOR: &str = "axes.facecolor";
    pub const LEGEND_FACECOLOR: &str = "legend.facecolor";
    pub const LEGEND_EDGECOLOR: &str = "legend.edgecolor";
    pub const TEXT_COLOR: &str = "text.color";
    pub const AXES_PROP_CYCLE: &str = "axes.prop_cycle";
}

/// A single style parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RcValue {
    Color(String),
    ColorCycle(ColorCycle),
    /// Any other setting, kept verbatim
    Raw(String),
}

impl fmt::Display for RcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RcValue::Color(color) => write!(f, "{}", color),
            RcValue::Raw(raw) => write!(f, "{}", raw),
            RcValue::ColorCycle(cycle) => {
                // `#` starts a comment in rc files unless quoted
                let colors: Vec<String> = cycle.iter().map(|c| format!("'{}'", c)).collect();
                write!(f, "cycler('color', [{}])", colors.join(", "))
            }
        }
    }
}

/// Caller-owned plotting style parameters.
///
/// Keys keep their first insertion position, so rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RcParams {
    entries: Vec<(String, RcValue)>,
}

impl RcParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value in place
    pub fn set(&mut self, key: &str, value: RcValue) {
        match self.entries.iter_mut().find(|(k, _)| k.as_str() == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&RcValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RcValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a matplotlibrc style file
    pub fn to_matplotlibrc(&self) -> String {
        let mut out = String::new();
        for (key, value) in self.iter() {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}
