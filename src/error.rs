use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Invalid input path: '{path}' ({reason})")]
    InvalidInputPath { path: String, reason: String },

    #[error("Invalid description format: {0}")]
    InvalidDescriptionFormat(String),

    #[error("Invalid episode count: descriptor declares {declared} episodes but {found} files were found")]
    InvalidEpisodeCount { declared: u64, found: usize },

    #[error("Invalid season format: no season number in '{0}'")]
    InvalidSeasonFormat(String),

    #[error("Target collision: '{target}' ({reason})")]
    TargetCollision { target: String, reason: String },

    #[error("Failed to rename '{}' -> '{}': {error}", .source_path.display(), .target.display())]
    Io {
        source_path: PathBuf,
        target: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl RenameError {
    pub fn invalid_input_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        RenameError::InvalidInputPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Process exit status reported by the `renamer` binary for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            RenameError::Output(_) => 1,
            RenameError::InvalidInputPath { .. } => 2,
            RenameError::InvalidDescriptionFormat(_) => 3,
            RenameError::InvalidEpisodeCount { .. } => 4,
            RenameError::InvalidSeasonFormat(_) => 5,
            RenameError::TargetCollision { .. } => 6,
            RenameError::Io { .. } => 7,
        }
    }
}

pub type RenameResult<T> = Result<T, RenameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_non_zero_and_distinct() {
        let errors = [
            RenameError::Output(io::Error::other("tty")),
            RenameError::invalid_input_path("", "empty path"),
            RenameError::InvalidDescriptionFormat("bad".to_string()),
            RenameError::InvalidEpisodeCount { declared: 3, found: 2 },
            RenameError::InvalidSeasonFormat("First season".to_string()),
            RenameError::TargetCollision {
                target: "S01E01".to_string(),
                reason: "duplicate".to_string(),
            },
            RenameError::Io {
                source_path: PathBuf::from("a"),
                target: PathBuf::from("b"),
                error: io::Error::other("denied"),
            },
        ];

        let mut codes: Vec<u8> = errors.iter().map(RenameError::exit_code).collect();
        assert!(codes.iter().all(|code| *code != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_episode_count_message() {
        let err = RenameError::InvalidEpisodeCount { declared: 5, found: 4 };
        assert_eq!(
            err.to_string(),
            "Invalid episode count: descriptor declares 5 episodes but 4 files were found"
        );
    }
}
