use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RenameError, RenameResult};

// Last run of digits in the label, taken whole.
static SEASON_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[^0-9]*$").expect("season number pattern is valid"));

/// Extracts the season number from a human-readable season label.
///
/// When the label carries several digit runs the last one wins, so
/// `"S1 Episode 2"` yields `2`. Leading zeros are ignored.
pub fn extract_season_number(label: &str) -> RenameResult<u32> {
    let digits = SEASON_NUMBER
        .captures(label)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| RenameError::InvalidSeasonFormat(label.to_string()))?;

    digits
        .as_str()
        .parse()
        .map_err(|_| RenameError::InvalidSeasonFormat(label.to_string()))
}
