//! myplots - plot styling from terminal color schemes
//!
//! Reads a color scheme in the Windows Terminal JSON layout (the format the
//! iTerm2-Color-Schemes collection exports) and derives the plot style
//! settings a plotting backend needs: face and edge colors, text color and
//! the color cycle used for successive data series.
//!
//! Nothing here touches global state. [`Colorschemes::load`] returns a
//! [`StyleConfig`]; the caller decides where it goes, usually by writing it
//! into an [`RcParams`] with [`StyleConfig::apply_to`].
//!
//! ```no_run
//! use myplots::{Colorschemes, RcParams, RoleNames};
//!
//! let schemes = Colorschemes::default();
//! let style = schemes.load("Dracula", &RoleNames::default().with_grid("cyan"))?;
//!
//! let mut params = RcParams::new();
//! style.apply_to(&mut params);
//! println!("{}", params.to_matplotlibrc());
//! # Ok::<(), myplots::ColorschemeError>(())
//! ```

pub mod cycle;
pub mod definition;
pub mod error;
pub mod loader;
pub mod params;
pub mod style;

pub use cycle::{ColorCycle, CYCLE_CANDIDATES};
pub use definition::{strip_hash, ThemeDefinition};
pub use error::{ColorschemeError, Result};
pub use loader::{load_colorscheme, Colorschemes, DEFAULT_THEME_DIR};
pub use params::{RcParams, RcValue};
pub use style::{RoleNames, StyleConfig};
