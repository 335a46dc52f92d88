use anyhow::{Context, Result};
use colored::Colorize;
use myplots::{Colorschemes, RcParams, RoleNames};
use std::path::Path;

use crate::StyleFormat;

pub fn execute(
    name: Option<&str>,
    roles: &RoleNames,
    theme_dir: &Path,
    format: StyleFormat,
    list: bool,
) -> Result<()> {
    let schemes = Colorschemes::new(theme_dir);

    if list {
        let names = schemes
            .available()
            .with_context(|| format!("Failed to list color schemes in {}", theme_dir.display()))?;

        if names.is_empty() {
            eprintln!("  {} No color schemes in {}", "ℹ".cyan(), theme_dir.display());
        }
        for name in names {
            println!("{}", name);
        }
        return Ok(());
    }

    let name = name.context("A color scheme name is required")?;
    let style = schemes
        .load(name, roles)
        .with_context(|| format!("Failed to load color scheme '{}'", name))?;

    match format {
        StyleFormat::Rc => {
            let mut params = RcParams::new();
            style.apply_to(&mut params);
            print!("{}", params.to_matplotlibrc());
        }
        StyleFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&style)?);
        }
    }

    Ok(())
}
