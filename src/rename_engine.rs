use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{RenameError, RenameResult};
use crate::plan::{FileRename, RenamePlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    Unchanged,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub planned: usize,
    pub renamed: usize,
    pub unchanged: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: RenameOutcome) {
        match outcome {
            RenameOutcome::Renamed => self.renamed += 1,
            RenameOutcome::Unchanged => self.unchanged += 1,
        }
    }
}

/// Applies a validated [`RenamePlan`] to the filesystem.
#[derive(Debug)]
pub struct RenameEngine {
    plan: RenamePlan,
}

impl RenameEngine {
    /// Wraps `plan` after checking that applying it in order cannot overwrite
    /// any file.
    pub fn new(plan: RenamePlan) -> RenameResult<Self> {
        check_collisions(&plan)?;
        Ok(Self { plan })
    }

    pub fn plan(&self) -> &RenamePlan {
        &self.plan
    }

    /// Writes one `old -> new` line per planned entry.
    pub fn write_dry_run<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for file in &self.plan {
            writeln!(out, "{} -> {}", file.source, file.target)?;
        }
        Ok(())
    }

    pub fn rename_file(&self, file: &FileRename) -> RenameResult<RenameOutcome> {
        if !file.needs_rename() {
            debug!("'{}' already has its target name", file.source);
            return Ok(RenameOutcome::Unchanged);
        }

        let source = Path::new(&file.source);
        let target = Path::new(&file.target);
        let io_error = |error: io::Error| RenameError::Io {
            source_path: source.to_path_buf(),
            target: target.to_path_buf(),
            error,
        };

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
        }
        fs::rename(source, target).map_err(io_error)?;

        info!("Renamed '{}' -> '{}'", file.source, file.target);
        Ok(RenameOutcome::Renamed)
    }

    /// Renames every entry in plan order, stopping at the first failure.
    pub fn rename_files(&self) -> RenameResult<RunSummary> {
        let mut summary = RunSummary {
            planned: self.plan.len(),
            ..RunSummary::default()
        };

        for file in &self.plan {
            summary.record(self.rename_file(file)?);
        }

        Ok(summary)
    }
}

/// Rejects plans where two entries share a target, or where a target already
/// exists and is not moved out of the way by an earlier entry.
pub fn check_collisions(plan: &RenamePlan) -> RenameResult<()> {
    let mut targets: HashMap<&str, &str> = HashMap::new();
    let mut moved: HashSet<&str> = HashSet::new();

    for file in plan {
        if let Some(previous) = targets.insert(&file.target, &file.source) {
            return Err(RenameError::TargetCollision {
                target: file.target.clone(),
                reason: format!("planned for both '{}' and '{}'", previous, file.source),
            });
        }

        if file.needs_rename()
            && !moved.contains(file.target.as_str())
            && fs::symlink_metadata(&file.target).is_ok()
        {
            return Err(RenameError::TargetCollision {
                target: file.target.clone(),
                reason: format!("already exists and would be overwritten by '{}'", file.source),
            });
        }

        if file.needs_rename() {
            moved.insert(&file.source);
        }
    }

    Ok(())
}
