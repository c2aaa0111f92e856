use std::path;

use tracing::debug;

use crate::descriptor::SeasonSpec;
use crate::error::{RenameError, RenameResult};
use crate::season::extract_season_number;

/// Canonical `S{season}E{episode}` token, both numbers padded to at least two digits.
pub fn canonical_name(season: u32, episode: u32) -> String {
    format!("S{:02}E{:02}", season, episode)
}

/// Expands the descriptor into the flat, ordered sequence of canonical names.
pub fn canonical_names(descriptor: &[SeasonSpec]) -> RenameResult<Vec<String>> {
    let mut names = Vec::new();
    for season in descriptor {
        let number = extract_season_number(&season.label)?;
        debug!(
            "Season '{}' -> {} ({} episodes)",
            season.label, number, season.episode_count
        );
        names.extend((1..=season.episode_count).map(|episode| canonical_name(number, episode)));
    }
    Ok(names)
}

/// Replaces the base name of `file` with `canonical`, keeping its directory
/// and the text after the last `.` of the base name.
pub fn retarget(file: &str, canonical: &str) -> String {
    let (dir, base) = match file.rfind(path::is_separator) {
        Some(index) => file.split_at(index + 1),
        None => ("", file),
    };

    match base.rsplit_once('.') {
        Some((_, extension)) => format!("{}{}.{}", dir, canonical, extension),
        None => format!("{}{}", dir, canonical),
    }
}

/// Builds the target names for `files`, index-aligned with the input.
///
/// Without a descriptor the files are returned unchanged. Otherwise the
/// descriptor must declare exactly as many episodes as there are files.
pub fn build_plan<S: AsRef<str>>(
    files: &[S],
    descriptor: Option<&[SeasonSpec]>,
) -> RenameResult<Vec<String>> {
    let Some(descriptor) = descriptor else {
        return Ok(files.iter().map(|f| f.as_ref().to_string()).collect());
    };

    let declared: u64 = descriptor.iter().map(|s| u64::from(s.episode_count)).sum();
    if declared != files.len() as u64 {
        return Err(RenameError::InvalidEpisodeCount {
            declared,
            found: files.len(),
        });
    }

    let names = canonical_names(descriptor)?;
    Ok(files
        .iter()
        .zip(&names)
        .map(|(file, name)| retarget(file.as_ref(), name))
        .collect())
}

/// A source file paired with the path it is renamed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRename {
    pub source: String,
    pub target: String,
}

impl FileRename {
    pub fn needs_rename(&self) -> bool {
        self.source != self.target
    }
}

/// Ordered rename plan, one entry per input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenamePlan {
    entries: Vec<FileRename>,
}

impl RenamePlan {
    pub fn new(files: Vec<String>, descriptor: Option<&[SeasonSpec]>) -> RenameResult<Self> {
        let targets = build_plan(files.as_slice(), descriptor)?;
        let entries = files
            .into_iter()
            .zip(targets)
            .map(|(source, target)| FileRename { source, target })
            .collect();
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[FileRename] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRename> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a RenamePlan {
    type Item = &'a FileRename;
    type IntoIter = std::slice::Iter<'a, FileRename>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
