mod commands;
mod publish;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "myplots")]
#[command(version, about = "myplots CLI - docs publishing and plot styles", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rebuild the docs and force-publish them to the hosting branch
    Publish {
        /// Project root (defaults to the current directory)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Config file (defaults to publish.toml in the project root)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Remote repository to publish to
        #[arg(long)]
        remote: Option<String>,

        /// Branch holding the published site
        #[arg(long)]
        branch: Option<String>,

        /// Commit message for the publish commit
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Resolve a color scheme and print the plot style it produces
    Style {
        /// Color scheme name (file stem in the theme directory)
        #[arg(required_unless_present = "list")]
        name: Option<String>,

        /// Role used for face colors
        #[arg(long, default_value = "background")]
        background: String,

        /// Role used for text
        #[arg(long, default_value = "foreground")]
        foreground: String,

        /// Role used for edges and grid lines
        #[arg(long, default_value = "grid")]
        grid: String,

        /// Directory holding <name>.json color schemes
        #[arg(long, env = "MYPLOTS_THEME_DIR", default_value = myplots::DEFAULT_THEME_DIR)]
        theme_dir: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "rc")]
        format: StyleFormat,

        /// List available color schemes instead
        #[arg(long)]
        list: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StyleFormat {
    /// matplotlibrc lines
    Rc,
    /// JSON object
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Publish {
            root,
            config,
            remote,
            branch,
            message,
        } => {
            let overrides = commands::publish::Overrides {
                remote,
                branch,
                message,
            };
            commands::publish::execute(root, config, overrides)?;
        }
        Commands::Style {
            name,
            background,
            foreground,
            grid,
            theme_dir,
            format,
            list,
        } => {
            let roles = myplots::RoleNames {
                background,
                foreground,
                grid,
            };
            commands::style::execute(name.as_deref(), &roles, &theme_dir, format, list)?;
        }
    }

    Ok(())
}
