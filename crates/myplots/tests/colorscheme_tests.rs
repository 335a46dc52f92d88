//! Integration tests for loading color schemes from disk
//!
//! Covers:
//! - Style values derived from the grid, background and foreground roles
//! - Color cycle filtering and ordering
//! - Error cases (missing file, malformed JSON, missing role)
//! - Applying a style to caller-owned parameters

use myplots::params::keys;
use myplots::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const DARK: &str = r##"{
    "name": "Dark",
    "background": "#000000",
    "foreground": "#ffffff",
    "black": "#000000",
    "red": "#ff0000",
    "blue": "#0000ff",
    "yellow": "#ffff00",
    "green": "#00ff00",
    "purple": "#800080",
    "cyan": "#00ffff",
    "white": "#cccccc",
    "brightRed": "#ff5555",
    "brightGreen": "#55ff55",
    "brightPurple": "#ff55ff",
    "brightCyan": "#55ffff"
}"##;

fn theme_dir(schemes: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, content) in schemes {
        fs::write(dir.path().join(format!("{}.json", name)), content).unwrap();
    }
    dir
}

fn cyan_grid() -> RoleNames {
    RoleNames::default().with_grid("cyan")
}

#[test]
fn test_load_with_cyan_grid() {
    let dir = theme_dir(&[("Dark", DARK)]);
    let style = Colorschemes::new(dir.path()).load("Dark", &cyan_grid()).unwrap();

    assert_eq!(style.axes_edgecolor, "00ffff");
    assert_eq!(style.grid_color, "00ffff");
    assert_eq!(style.patch_facecolor, "00ffff");
    assert_eq!(style.legend_edgecolor, "00ffff");
    assert_eq!(style.figure_facecolor, "000000");
    assert_eq!(style.axes_facecolor, "000000");
    assert_eq!(style.legend_facecolor, "000000");
    assert_eq!(style.text_color, "ffffff");
}

#[test]
fn test_cycle_excludes_grid_and_keeps_order() {
    let dir = theme_dir(&[("Dark", DARK)]);
    let style = Colorschemes::new(dir.path()).load("Dark", &cyan_grid()).unwrap();

    assert_eq!(
        style.color_cycle.iter().collect::<Vec<_>>(),
        vec![
            "#ff0000", "#0000ff", "#ffff00", "#00ff00", "#800080", "#ff5555", "#55ff55", "#ff55ff",
            "#55ffff",
        ]
    );
}

#[test]
fn test_cycle_never_contains_grid_or_background() {
    let dir = theme_dir(&[("Dark", DARK)]);
    let schemes = Colorschemes::new(dir.path());
    let definition = schemes.definition("Dark").unwrap();

    for grid in CYCLE_CANDIDATES {
        for background in ["background", "red", "blue", "brightCyan"] {
            let roles = RoleNames::default().with_grid(grid).with_background(background);
            let style = StyleConfig::from_definition(&definition, &roles).unwrap();

            let grid_raw = definition.color(grid).unwrap();
            let background_raw = definition.color(background).unwrap();
            assert!(style.color_cycle.iter().all(|c| c != grid_raw && c != background_raw));

            // Survivors appear in candidate order.
            let positions: Vec<usize> = style
                .color_cycle
                .iter()
                .map(|c| {
                    CYCLE_CANDIDATES
                        .iter()
                        .position(|role| definition.color(role).unwrap() == c)
                        .unwrap()
                })
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

#[test]
fn test_cycle_filter_ignores_hash_spelling() {
    // grid "00ffff" without '#' does not match cyan "#00ffff"
    let scheme = DARK.replace(r##""foreground": "#ffffff","##, r##""foreground": "#ffffff", "grid": "00ffff","##);
    let dir = theme_dir(&[("Quirk", scheme.as_str())]);

    let style = Colorschemes::new(dir.path()).load("Quirk", &RoleNames::default()).unwrap();

    assert_eq!(style.grid_color, "00ffff");
    assert_eq!(style.color_cycle.len(), 10);
    assert!(style.color_cycle.iter().any(|c| c == "#00ffff"));
}

#[test]
fn test_default_grid_role_must_exist() {
    let dir = theme_dir(&[("Dark", DARK)]);

    match Colorschemes::new(dir.path()).load("Dark", &RoleNames::default()) {
        Err(ColorschemeError::MissingRole { role }) => assert_eq!(role, "grid"),
        other => panic!("expected MissingRole, got {:?}", other),
    }
}

#[test]
fn test_missing_file() {
    let dir = theme_dir(&[]);

    match Colorschemes::new(dir.path()).load("Nope", &cyan_grid()) {
        Err(ColorschemeError::NotFound { name, path }) => {
            assert_eq!(name, "Nope");
            assert_eq!(path, dir.path().join("Nope.json"));
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_malformed_json() {
    let dir = theme_dir(&[("Broken", r##"{"background": "#000000""##)]);

    let err = Colorschemes::new(dir.path()).load("Broken", &cyan_grid()).unwrap_err();
    assert!(matches!(err, ColorschemeError::Parse { .. }));
}

#[test]
fn test_missing_role_leaves_params_untouched() {
    let dir = theme_dir(&[("Dark", DARK)]);
    let schemes = Colorschemes::new(dir.path());

    let mut params = RcParams::new();
    params.set(keys::TEXT_COLOR, RcValue::Color("123456".to_string()));
    let before = params.clone();

    let roles = cyan_grid().with_foreground("brightYellow");
    let err = schemes.apply("Dark", &roles, &mut params).unwrap_err();

    assert!(matches!(err, ColorschemeError::MissingRole { ref role } if role == "brightYellow"));
    assert_eq!(params, before);
}

#[test]
fn test_apply_writes_every_style_key() {
    let dir = theme_dir(&[("Dark", DARK)]);
    let mut params = RcParams::new();

    Colorschemes::new(dir.path())
        .apply("Dark", &cyan_grid(), &mut params)
        .unwrap();

    let written: Vec<&str> = params.iter().map(|(k, _)| k).collect();
    assert_eq!(
        written,
        vec![
            keys::AXES_EDGECOLOR,
            keys::GRID_COLOR,
            keys::PATCH_FACECOLOR,
            keys::FIGURE_FACECOLOR,
            keys::AXES_FACECOLOR,
            keys::LEGEND_FACECOLOR,
            keys::LEGEND_EDGECOLOR,
            keys::TEXT_COLOR,
            keys::AXES_PROP_CYCLE,
        ]
    );
    assert!(params
        .to_matplotlibrc()
        .starts_with("axes.edgecolor: 00ffff\ngrid.color: 00ffff\n"));
}

#[test]
fn test_available_lists_json_files() {
    let dir = theme_dir(&[("Zenburn", DARK), ("Dark", DARK)]);
    fs::write(dir.path().join("README.md"), "not a scheme").unwrap();

    let names = Colorschemes::new(dir.path()).available().unwrap();
    assert_eq!(names, vec!["Dark".to_string(), "Zenburn".to_string()]);
}
