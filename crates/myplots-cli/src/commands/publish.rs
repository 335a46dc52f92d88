use anyhow::{Context, Result};
use colored::Colorize;
use std::env;
use std::path::PathBuf;

use crate::publish::{discover_root, Pipeline, PublishConfig, Step, SystemRunner};

/// Command-line overrides applied on top of publish.toml
#[derive(Debug, Default)]
pub struct Overrides {
    pub remote: Option<String>,
    pub branch: Option<String>,
    pub message: Option<String>,
}

impl Overrides {
    fn apply(self, config: &mut PublishConfig) {
        if let Some(remote) = self.remote {
            config.remote = remote;
        }
        if let Some(branch) = self.branch {
            config.branch = branch;
        }
        if let Some(message) = self.message {
            config.commit_message = message;
        }
    }
}

pub fn execute(root: Option<PathBuf>, config: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    println!("{}", "Rebuilding docs...".green().bold());
    println!();

    let root = match root {
        Some(root) => root,
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            discover_root(&cwd).unwrap_or(cwd)
        }
    };

    let mut config = match config {
        Some(path) => PublishConfig::from_file(&path),
        None => PublishConfig::load_default(&root),
    }
    .context("Failed to load publish config")?;
    overrides.apply(&mut config);
    config.validate()?;

    println!("  {} Remote: {}", "→".cyan(), config.remote.bold());
    println!("  {} Branch: {}", "→".cyan(), config.branch.bold());
    println!();

    let pipeline = Pipeline::new(root, config, SystemRunner);

    let result = pipeline.run(|report| {
        println!("  {} {:<15} {}", "✓".green(), report.step.name(), report.detail.dimmed());
    });

    match result {
        Ok(report) => {
            println!();
            println!("  {} Checkout at {}", "ℹ".cyan(), report.workdir.display());
            println!(
                "{}",
                format!(
                    "Published to {} ({} steps)",
                    pipeline.config().branch,
                    report.steps.len()
                )
                .green()
                .bold()
            );
            Ok(())
        }
        Err(failure) => {
            println!("  {} {:<15} {}", "✗".red(), failure.step.name(), failure.source);

            let skipped = Step::ALL
                .iter()
                .skip_while(|s| **s != failure.step)
                .skip(1);
            for step in skipped {
                println!("  {} {}", "-".dimmed(), step.name().dimmed());
            }

            println!();
            println!(
                "  {} {} of {} steps completed",
                "ℹ".cyan(),
                failure.completed.len(),
                Step::ALL.len()
            );
            if let Some(workdir) = &failure.workdir {
                println!("  {} Checkout left at {}", "⚠".yellow(), workdir.display());
            }
            println!();

            Err(failure).context("Failed to publish docs")
        }
    }
}
