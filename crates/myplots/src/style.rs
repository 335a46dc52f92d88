use serde::Serialize;

use crate::cycle::ColorCycle;
use crate::definition::{strip_hash, ThemeDefinition};
use crate::error::Result;
use crate::params::{keys, RcParams, RcValue};

/// Which scheme roles stand for the background, foreground and grid colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleNames {
    pub background: String,
    pub foreground: String,
    pub grid: String,
}

impl Default for RoleNames {
    fn default() -> Self {
        Self {
            background: "background".to_string(),
            foreground: "foreground".to_string(),
            grid: "grid".to_string(),
        }
    }
}

impl RoleNames {
    pub fn with_background(mut self, role: impl Into<String>) -> Self {
        self.background = role.into();
        self
    }

    pub fn with_foreground(mut self, role: impl Into<String>) -> Self {
        self.foreground = role.into();
        self
    }

    pub fn with_grid(mut self, role: impl Into<String>) -> Self {
        self.grid = role.into();
        self
    }
}

/// Plot style derived from a color scheme.
///
/// Single colors are stored without the leading `#`; the color cycle keeps
/// the raw scheme values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleConfig {
    pub axes_edgecolor: String,
    pub grid_color: String,
    pub patch_facecolor: String,
    pub figure_facecolor: String,
    pub axes_facecolor: String,
    pub legend_facecolor: String,
    pub legend_edgecolor: String,
    pub text_color: String,
    pub color_cycle: ColorCycle,
}

impl StyleConfig {
    /// Resolve every style value from a scheme.
    ///
    /// Roles are looked up grid, background, foreground, then the cycle
    /// candidates; the first missing one is reported.
    pub fn from_definition(def: &ThemeDefinition, roles: &RoleNames) -> Result<Self> {
        let grid = def.color(&roles.grid)?;
        let background = def.color(&roles.background)?;
        let foreground = def.color(&roles.foreground)?;

        let color_cycle = ColorCycle::from_definition(def, grid, background)?;

        let grid_hex = strip_hash(grid).to_string();
        let background_hex = strip_hash(background).to_string();

        Ok(Self {
            axes_edgecolor: grid_hex.clone(),
            grid_color: grid_hex.clone(),
            patch_facecolor: grid_hex.clone(),
            figure_facecolor: background_hex.clone(),
            axes_facecolor: background_hex.clone(),
            legend_facecolor: background_hex,
            legend_edgecolor: grid_hex,
            text_color: strip_hash(foreground).to_string(),
            color_cycle,
        })
    }

    /// The style as `(key, value)` pairs, in assignment order
    pub fn entries(&self) -> Vec<(&'static str, RcValue)> {
        vec![
            (keys::AXES_EDGECOLOR, RcValue::Color(self.axes_edgecolor.clone())),
            (keys::GRID_COLOR, RcValue::Color(self.grid_color.clone())),
            (keys::PATCH_FACECOLOR, RcValue::Color(self.patch_facecolor.clone())),
            (keys::FIGURE_FACECOLOR, RcValue::Color(self.figure_facecolor.clone())),
            (keys::AXES_FACECOLOR, RcValue::Color(self.axes_facecolor.clone())),
            (keys::LEGEND_FACECOLOR, RcValue::Color(self.legend_facecolor.clone())),
            (keys::LEGEND_EDGECOLOR, RcValue::Color(self.legend_edgecolor.clone())),
            (keys::TEXT_COLOR, RcValue::Color(self.text_color.clone())),
            (keys::AXES_PROP_CYCLE, RcValue::ColorCycle(self.color_cycle.clone())),
        ]
    }

    /// Write the style into a parameter set, overwriting the keys it owns
    /// and leaving every other key alone.
    pub fn apply_to(&self, params: &mut RcParams) {
        for (key, value) in self.entries() {
            params.set(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColorschemeError;

    fn scheme() -> ThemeDefinition {
        ThemeDefinition::from_json(
            r##"{
                "background": "#000000",
                "foreground": "#ffffff",
                "grid": "#444444",
                "red": "#ff0000",
                "blue": "#0000ff",
                "yellow": "#ffff00",
                "green": "#00ff00",
                "purple": "#800080",
                "cyan": "#00ffff",
                "brightRed": "#ff5555",
                "brightGreen": "#55ff55",
                "brightPurple": "#ff55ff",
                "brightCyan": "#55ffff"
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_default_roles() {
        let roles = RoleNames::default();
        assert_eq!(roles.background, "background");
        assert_eq!(roles.foreground, "foreground");
        assert_eq!(roles.grid, "grid");
    }

    #[test]
    fn test_style_with_default_roles() {
        let style = StyleConfig::from_definition(&scheme(), &RoleNames::default()).unwrap();

        assert_eq!(style.grid_color, "444444");
        assert_eq!(style.axes_facecolor, "000000");
        assert_eq!(style.text_color, "ffffff");
        assert_eq!(style.color_cycle.len(), 10);
    }

    #[test]
    fn test_reports_first_missing_role() {
        let roles = RoleNames::default()
            .with_grid("nope")
            .with_background("also-missing");

        match StyleConfig::from_definition(&scheme(), &roles) {
            Err(ColorschemeError::MissingRole { role }) => assert_eq!(role, "nope"),
            other => panic!("expected MissingRole, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_overwrites_only_style_keys() {
        let style = StyleConfig::from_definition(&scheme(), &RoleNames::default()).unwrap();
        let mut params = RcParams::new();
        params.set("lines.linewidth", RcValue::Raw("2.0".to_string()));
        params.set(keys::TEXT_COLOR, RcValue::Color("red".to_string()));

        style.apply_to(&mut params);

        assert_eq!(params.get("lines.linewidth"), Some(&RcValue::Raw("2.0".to_string())));
        assert_eq!(params.get(keys::TEXT_COLOR), Some(&RcValue::Color("ffffff".to_string())));
        assert_eq!(params.len(), 10);
    }
}
