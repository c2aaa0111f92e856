use crate::plan::FileRename;

#[derive(Debug, Clone)]
pub struct PlanItem {
    pub rename: FileRename,
    pub status: ProcessingStatus,
    pub error_message: Option<String>,
}

impl PlanItem {
    pub fn source_name(&self) -> &str {
        file_name(&self.rename.source)
    }

    pub fn target_name(&self) -> &str {
        file_name(&self.rename.target)
    }
}

impl From<&FileRename> for PlanItem {
    fn from(rename: &FileRename) -> Self {
        Self {
            rename: rename.clone(),
            status: ProcessingStatus::Pending,
            error_message: None,
        }
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit(std::path::is_separator).next().unwrap_or(path)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStatus {
    Pending,
    Success,
    Unchanged,
    Error,
    Skipped,
}

#[derive(Debug, Default)]
pub struct ProcessingStats {
    pub total: usize,
    pub processed: usize,
    pub successful: usize,
    pub unchanged: usize,
    pub failed: usize,
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    None,
    Apply,
    Quit,
}
