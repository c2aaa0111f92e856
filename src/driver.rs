use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::descriptor::load_descriptor;
use crate::error::{RenameError, RenameResult};
use crate::file_list::list_files;
use crate::plan::RenamePlan;
use crate::rename_engine::{RenameEngine, RunSummary};
use crate::tui;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Rename every file in plan order.
    #[default]
    Apply,
    /// Print the plan without touching the filesystem.
    DryRun,
    /// Review the plan in the terminal UI and apply it on confirmation.
    Interactive,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub files_location: PathBuf,
    pub descriptor_location: PathBuf,
    pub mode: RunMode,
    pub extensions: Vec<String>,
}

impl RunConfig {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

#[derive(Debug, Default)]
pub struct ConfigBuilder {
    files_location: Option<PathBuf>,
    descriptor_location: Option<PathBuf>,
    mode: RunMode,
    extensions: Vec<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files_location<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.files_location = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn descriptor_location<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.descriptor_location = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn mode(mut self, mode: RunMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> RenameResult<RunConfig> {
        let files_location = self
            .files_location
            .ok_or_else(|| RenameError::invalid_input_path("", "files location is required"))?;

        let descriptor_location = self.descriptor_location.ok_or_else(|| {
            RenameError::invalid_input_path("", "descriptor location is required")
        })?;

        Ok(RunConfig {
            files_location,
            descriptor_location,
            mode: self.mode,
            extensions: self.extensions,
        })
    }
}

/// Lists the files, loads the descriptor and builds the plan. Nothing on disk
/// changes here.
pub fn prepare(config: &RunConfig) -> RenameResult<RenameEngine> {
    let files = list_files(&config.files_location, &config.extensions)?;
    let seasons = load_descriptor(&config.descriptor_location)?;

    let plan = RenamePlan::new(files, Some(seasons.as_slice()))?;
    debug!("Built rename plan with {} entries", plan.len());

    RenameEngine::new(plan)
}

/// Runs one rename session as configured. Dry-run lines go to `out`.
pub fn run<W: Write>(config: &RunConfig, out: &mut W) -> RenameResult<RunSummary> {
    let engine = prepare(config)?;

    let summary = match config.mode {
        RunMode::DryRun => {
            engine.write_dry_run(out)?;
            RunSummary {
                planned: engine.plan().len(),
                ..RunSummary::default()
            }
        }
        RunMode::Interactive => tui::review(&engine)?,
        RunMode::Apply => engine.rename_files()?,
    };

    info!(
        "{} planned, {} renamed, {} unchanged",
        summary.planned, summary.renamed, summary.unchanged
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = RunConfig::builder()
            .files_location("/test/show")
            .descriptor_location("/test/show.json")
            .mode(RunMode::DryRun)
            .extensions(["mkv", "mp4"])
            .build()
            .unwrap();

        assert_eq!(config.files_location, PathBuf::from("/test/show"));
        assert_eq!(config.descriptor_location, PathBuf::from("/test/show.json"));
        assert_eq!(config.mode, RunMode::DryRun);
        assert_eq!(config.extensions, ["mkv", "mp4"]);
    }

    #[test]
    fn test_config_builder_requires_locations() {
        assert!(matches!(
            ConfigBuilder::new().descriptor_location("d.json").build(),
            Err(RenameError::InvalidInputPath { .. })
        ));
        assert!(matches!(
            ConfigBuilder::new().files_location("show").build(),
            Err(RenameError::InvalidInputPath { .. })
        ));
    }

    #[test]
    fn test_default_mode_applies() {
        let config = ConfigBuilder::new()
            .files_location("show")
            .descriptor_location("d.json")
            .build()
            .unwrap();
        assert_eq!(config.mode, RunMode::Apply);
        assert!(config.extensions.is_empty());
    }
}
