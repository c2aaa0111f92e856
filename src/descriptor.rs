use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{RenameError, RenameResult};

/// One season of the descriptor: its label and how many episodes it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSpec {
    pub label: String,
    pub episode_count: u32,
}

impl SeasonSpec {
    pub fn new(label: impl Into<String>, episode_count: u32) -> Self {
        Self {
            label: label.into(),
            episode_count,
        }
    }
}

impl<S: Into<String>> From<(S, u32)> for SeasonSpec {
    fn from((label, episode_count): (S, u32)) -> Self {
        Self::new(label, episode_count)
    }
}

#[derive(Debug, Deserialize)]
struct DescriptorFile {
    seasons: Vec<SeasonEntry>,
}

#[derive(Debug, Deserialize)]
struct SeasonEntry {
    name: String,
    episode_count: EpisodeCount,
}

// Counts show up both as JSON numbers and as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EpisodeCount {
    Number(u32),
    Text(String),
}

impl EpisodeCount {
    fn resolve(self, season: &str) -> RenameResult<u32> {
        match self {
            EpisodeCount::Number(count) => Ok(count),
            EpisodeCount::Text(text) => text.trim().parse().map_err(|_| {
                RenameError::InvalidDescriptionFormat(format!(
                    "episode_count '{}' of season '{}' is not a non-negative integer",
                    text, season
                ))
            }),
        }
    }
}

/// Parses descriptor JSON into the ordered list of seasons.
pub fn parse_descriptor(content: &[u8]) -> RenameResult<Vec<SeasonSpec>> {
    let file: DescriptorFile = serde_json::from_slice(content)
        .map_err(|e| RenameError::InvalidDescriptionFormat(e.to_string()))?;

    file.seasons
        .into_iter()
        .map(|entry| {
            let episode_count = entry.episode_count.resolve(&entry.name)?;
            Ok(SeasonSpec {
                label: entry.name,
                episode_count,
            })
        })
        .collect()
}

/// Loads the season descriptor stored at `path`.
pub fn load_descriptor(path: &Path) -> RenameResult<Vec<SeasonSpec>> {
    if path.as_os_str().is_empty() {
        return Err(RenameError::invalid_input_path("", "empty descriptor path"));
    }
    if !path.is_file() {
        return Err(RenameError::invalid_input_path(
            path.display().to_string(),
            "descriptor is not a regular file",
        ));
    }

    let content = fs::read(path).map_err(|e| {
        RenameError::invalid_input_path(path.display().to_string(), e.to_string())
    })?;
    let seasons = parse_descriptor(&content)?;

    debug!(
        "Loaded {} seasons from {}: {:?}",
        seasons.len(),
        path.display(),
        seasons
    );
    Ok(seasons)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW1: &str = r#"{
        "name": "Show 1",
        "seasons": [
            {"name": "S1", "episodes": ["1", "2"], "episode_count": 2},
            {"name": "S2", "episodes": ["1", "2"], "episode_count": 2}
        ]
    }"#;

    #[test]
    fn test_parse_descriptor() {
        let seasons = parse_descriptor(SHOW1.as_bytes()).unwrap();
        assert_eq!(seasons, vec![SeasonSpec::new("S1", 2), SeasonSpec::new("S2", 2)]);
    }

    #[test]
    fn test_parse_numeric_string_count() {
        let seasons =
            parse_descriptor(br#"{"seasons": [{"name": "Season 3", "episode_count": " 12 "}]}"#)
                .unwrap();
        assert_eq!(seasons, vec![SeasonSpec::new("Season 3", 12)]);
    }

    #[test]
    fn test_parse_keeps_descriptor_order() {
        let seasons = parse_descriptor(
            br#"{"seasons": [
                {"name": "S3", "episode_count": 1},
                {"name": "S1", "episode_count": 2}
            ]}"#,
        )
        .unwrap();
        let labels: Vec<&str> = seasons.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["S3", "S1"]);
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        let bad: [&[u8]; 8] = [
            b"",
            b"not json",
            b"[]",
            br#"{"name": "Show"}"#,
            br#"{"seasons": {"name": "S1", "episode_count": 1}}"#,
            br#"{"seasons": [{"episode_count": 1}]}"#,
            br#"{"seasons": [{"name": "S1", "episode_count": -1}]}"#,
            br#"{"seasons": [{"name": "S1", "episode_count": "many"}]}"#,
        ];

        for content in bad {
            assert!(
                matches!(
                    parse_descriptor(content),
                    Err(RenameError::InvalidDescriptionFormat(_))
                ),
                "expected rejection of {:?}",
                String::from_utf8_lossy(content)
            );
        }
    }

    #[test]
    fn test_load_descriptor_paths() {
        let dir = tempfile::tempdir().unwrap();

        assert!(matches!(
            load_descriptor(Path::new("")),
            Err(RenameError::InvalidInputPath { .. })
        ));
        assert!(matches!(
            load_descriptor(dir.path()),
            Err(RenameError::InvalidInputPath { .. })
        ));
        assert!(matches!(
            load_descriptor(&dir.path().join("missing.json")),
            Err(RenameError::InvalidInputPath { .. })
        ));

        let description = dir.path().join("description.json");
        fs::write(&description, "").unwrap();
        assert!(matches!(
            load_descriptor(&description),
            Err(RenameError::InvalidDescriptionFormat(_))
        ));

        fs::write(&description, SHOW1).unwrap();
        assert_eq!(
            load_descriptor(&description).unwrap(),
            vec![SeasonSpec::new("S1", 2), SeasonSpec::new("S2", 2)]
        );
    }
}
