//! The docs publish pipeline.
//!
//! A fixed, linear sequence of steps: rebuild the docs, clone the site
//! branch into a fresh temporary directory, replace its contents with the
//! new HTML, then commit and push. The first failing step stops the run.
//! Nothing is rolled back and the temporary checkout is never removed.

use std::fmt;
use std::path::{Path, PathBuf};

use super::config::PublishConfig;
use super::error::PublishError;
use super::fs::{copy_directory, remove_dir_if_exists};
use super::runner::{CommandLine, CommandRunner};

const WORKDIR_PREFIX: &str = "myplots-publish-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    LocateRoot,
    LocateDocs,
    CleanBuild,
    BuildDocs,
    CreateWorkdir,
    Clone,
    Checkout,
    RemoveTracked,
    CopyHtml,
    Stage,
    Commit,
    Push,
}

impl Step {
    /// Every step, in execution order
    pub const ALL: [Step; 12] = [
        Step::LocateRoot,
        Step::LocateDocs,
        Step::CleanBuild,
        Step::BuildDocs,
        Step::CreateWorkdir,
        Step::Clone,
        Step::Checkout,
        Step::RemoveTracked,
        Step::CopyHtml,
        Step::Stage,
        Step::Commit,
        Step::Push,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Step::LocateRoot => "locate-root",
            Step::LocateDocs => "locate-docs",
            Step::CleanBuild => "clean-build",
            Step::BuildDocs => "build-docs",
            Step::CreateWorkdir => "create-workdir",
            Step::Clone => "clone",
            Step::Checkout => "checkout",
            Step::RemoveTracked => "remove-tracked",
            Step::CopyHtml => "copy-html",
            Step::Stage => "stage",
            Step::Commit => "commit",
            Step::Push => "push",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A completed step and what it did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: Step,
    pub detail: String,
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct PublishReport {
    /// Temporary checkout the site was published from
    pub workdir: PathBuf,
    pub steps: Vec<StepReport>,
}

/// The step that stopped a run, and everything that ran before it
#[derive(Debug, thiserror::Error)]
#[error("publish step `{step}` failed")]
pub struct StepFailure {
    pub step: Step,
    pub completed: Vec<StepReport>,
    /// Temporary checkout, if one was created. It is left on disk.
    pub workdir: Option<PathBuf>,
    #[source]
    pub source: PublishError,
}

/// Bookkeeping for a single run
struct Progress<'a> {
    completed: Vec<StepReport>,
    workdir: Option<PathBuf>,
    on_step: &'a mut dyn FnMut(&StepReport),
}

impl<'a> Progress<'a> {
    fn new(on_step: &'a mut dyn FnMut(&StepReport)) -> Self {
        Self {
            completed: Vec::new(),
            workdir: None,
            on_step,
        }
    }

    fn finish<T>(
        &mut self,
        step: Step,
        result: Result<T, PublishError>,
        detail: impl FnOnce(&T) -> String,
    ) -> Result<T, StepFailure> {
        match result {
            Ok(value) => {
                let detail = detail(&value);
                tracing::info!(step = %step, "{}", detail);
                let report = StepReport { step, detail };
                (self.on_step)(&report);
                self.completed.push(report);
                Ok(value)
            }
            Err(source) => {
                tracing::debug!(step = %step, error = %source, "publish step failed");
                Err(StepFailure {
                    step,
                    completed: std::mem::take(&mut self.completed),
                    workdir: self.workdir.clone(),
                    source,
                })
            }
        }
    }
}

pub struct Pipeline<R> {
    root: PathBuf,
    config: PublishConfig,
    runner: R,
    temp_root: Option<PathBuf>,
}

impl<R: CommandRunner> Pipeline<R> {
    pub fn new(root: impl Into<PathBuf>, config: PublishConfig, runner: R) -> Self {
        Self {
            root: root.into(),
            config,
            runner,
            temp_root: None,
        }
    }

    /// Create the temporary checkout under `dir` instead of the system
    /// temp directory
    #[cfg(test)]
    pub fn with_temp_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(dir.into());
        self
    }

    pub fn config(&self) -> &PublishConfig {
        &self.config
    }

    /// Run every step in order, stopping at the first failure.
    ///
    /// `on_step` sees each step as soon as it completes, while later steps
    /// are still pending.
    pub fn run(&self, mut on_step: impl FnMut(&StepReport)) -> Result<PublishReport, StepFailure> {
        let mut progress = Progress::new(&mut on_step);

        let root = progress.finish(Step::LocateRoot, self.locate_root(), |p| {
            format!("project root {}", p.display())
        })?;

        let docs = progress.finish(Step::LocateDocs, self.locate_docs(&root), |p| {
            format!("docs in {}", p.display())
        })?;

        let build_dir = docs.join(&self.config.build_dir);
        let removed = remove_dir_if_exists(&build_dir).map_err(|source| PublishError::Filesystem {
            path: build_dir.clone(),
            source,
        });
        progress.finish(Step::CleanBuild, removed, |removed| {
            if *removed {
                format!("removed {}", build_dir.display())
            } else {
                format!("no previous build at {}", build_dir.display())
            }
        })?;

        let build = self.build_command();
        let built = build.and_then(|cmd| self.exec(&cmd, &root).map(|_| cmd));
        progress.finish(Step::BuildDocs, built, |cmd| cmd.to_string())?;

        let workdir = progress.finish(Step::CreateWorkdir, self.create_workdir(), |p| {
            format!("building in {}", p.display())
        })?;
        progress.workdir = Some(workdir.clone());

        let clone = CommandLine::git(["clone", self.config.remote.as_str(), "."]);
        let checkout = CommandLine::git(["checkout", self.config.branch.as_str()]);
        let remove = CommandLine::git(["rm", "*"]);

        for (step, cmd) in [
            (Step::Clone, &clone),
            (Step::Checkout, &checkout),
            (Step::RemoveTracked, &remove),
        ] {
            progress.finish(step, self.exec(cmd, &workdir), |_| cmd.to_string())?;
        }

        let html = docs.join(&self.config.html_dir);
        progress.finish(Step::CopyHtml, self.copy_html(&html, &workdir), |count| {
            format!("copied {} files from {}", count, html.display())
        })?;

        let stage = CommandLine::git(["add", "*"]);
        let commit = CommandLine::git(["commit", "-m"]).arg(&self.config.commit_message);
        let push = CommandLine::git(["push"]);

        for (step, cmd) in [
            (Step::Stage, &stage),
            (Step::Commit, &commit),
            (Step::Push, &push),
        ] {
            progress.finish(step, self.exec(cmd, &workdir), |_| cmd.to_string())?;
        }

        Ok(PublishReport {
            workdir,
            steps: progress.completed,
        })
    }

    fn locate_root(&self) -> Result<PathBuf, PublishError> {
        let root = self
            .root
            .canonicalize()
            .map_err(|_| PublishError::RootNotFound(self.root.clone()))?;

        if !root.is_dir() {
            return Err(PublishError::RootNotFound(root));
        }
        Ok(root)
    }

    fn locate_docs(&self, root: &Path) -> Result<PathBuf, PublishError> {
        let docs = root.join(&self.config.docs_dir);
        if !docs.is_dir() {
            return Err(PublishError::DocsNotFound(docs));
        }
        Ok(docs)
    }

    fn build_command(&self) -> Result<CommandLine, PublishError> {
        CommandLine::parse(&self.config.build_command)
            .ok_or_else(|| PublishError::InvalidConfig("`build_command` must not be empty".to_string()))
    }

    fn create_workdir(&self) -> Result<PathBuf, PublishError> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(WORKDIR_PREFIX);

        let dir = match &self.temp_root {
            Some(parent) => builder.tempdir_in(parent),
            None => builder.tempdir(),
        }
        .map_err(PublishError::TempDir)?;

        // Left on disk after the run
        Ok(dir.keep())
    }

    fn copy_html(&self, html: &Path, workdir: &Path) -> Result<usize, PublishError> {
        if !html.is_dir() {
            return Err(PublishError::HtmlNotFound(html.to_path_buf()));
        }

        copy_directory(html, workdir).map_err(|source| PublishError::Filesystem {
            path: html.to_path_buf(),
            source,
        })
    }

    /// Run a command and turn a non-zero exit into an error
    fn exec(&self, cmd: &CommandLine, cwd: &Path) -> Result<(), PublishError> {
        let status = self.runner.run(cmd, cwd)?;
        if !status.success() {
            return Err(PublishError::CommandFailed {
                command: cmd.to_string(),
                code: status.code,
            });
        }
        Ok(())
    }
}
