use tracing::debug;

use crate::rename_engine::{RenameEngine, RenameOutcome};

use super::app::App;
use super::models::ProcessingStatus;

impl App {
    /// Applies the plan in order. The first failure marks the remaining
    /// entries as skipped and is kept in `apply_error`.
    pub fn process_files(&mut self, engine: &RenameEngine) {
        if self.finished {
            return;
        }

        let total_files = self.files.len();
        for index in 0..total_files {
            if self.apply_error.is_some() {
                self.files[index].status = ProcessingStatus::Skipped;
                continue;
            }

            match engine.rename_file(&self.files[index].rename) {
                Ok(RenameOutcome::Renamed) => {
                    self.files[index].status = ProcessingStatus::Success;
                    self.stats.successful += 1;
                }
                Ok(RenameOutcome::Unchanged) => {
                    self.files[index].status = ProcessingStatus::Unchanged;
                    self.stats.unchanged += 1;
                }
                Err(e) => {
                    debug!("Stopping after failed rename: {}", e);
                    self.files[index].status = ProcessingStatus::Error;
                    self.files[index].error_message = Some(e.to_string());
                    self.stats.failed += 1;
                    self.apply_error = Some(e);
                }
            }

            self.stats.processed += 1;
            self.processing_progress = (index + 1) as f64 / total_files as f64;
        }

        self.processing_progress = 1.0;
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::descriptor::SeasonSpec;
    use crate::error::RenameError;
    use crate::plan::RenamePlan;

    #[test]
    fn test_process_files_renames_everything() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        fs::write(dir.path().join("a.mkv"), "").unwrap();
        fs::write(dir.path().join("S01E02.mkv"), "").unwrap();

        let plan = RenamePlan::new(
            vec![format!("{}/S01E02.mkv", root), format!("{}/a.mkv", root)],
            Some(&[SeasonSpec::new("S1", 1), SeasonSpec::new("S2", 1)][..]),
        )
        .unwrap();
        let engine = RenameEngine::new(plan).unwrap();
        let mut app = App::new(engine.plan());

        app.process_files(&engine);

        assert!(app.finished);
        assert!(app.apply_error.is_none());
        assert_eq!(app.stats.successful, 2);
        assert_eq!(app.summary().renamed, 2);
        assert!(dir.path().join("S01E01.mkv").is_file());
        assert!(dir.path().join("S02E01.mkv").is_file());
    }

    #[test]
    fn test_process_files_stops_at_first_error() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        fs::write(dir.path().join("a.mkv"), "").unwrap();
        fs::write(dir.path().join("c.mkv"), "").unwrap();

        let plan = RenamePlan::new(
            vec![
                format!("{}/a.mkv", root),
                format!("{}/b.mkv", root),
                format!("{}/c.mkv", root),
            ],
            Some(&[SeasonSpec::new("S1", 3)][..]),
        )
        .unwrap();
        let engine = RenameEngine::new(plan).unwrap();
        let mut app = App::new(engine.plan());

        app.process_files(&engine);

        let statuses: Vec<ProcessingStatus> = app.files.iter().map(|f| f.status.clone()).collect();
        assert_eq!(
            statuses,
            [
                ProcessingStatus::Success,
                ProcessingStatus::Error,
                ProcessingStatus::Skipped
            ]
        );
        assert!(matches!(app.apply_error, Some(RenameError::Io { .. })));
        assert!(app.files[1].error_message.is_some());
        assert!(dir.path().join("c.mkv").is_file());
    }
}
