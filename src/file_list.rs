use std::fs;
use std::path::Path;

use tracing::{debug, trace, warn};

use crate::error::{RenameError, RenameResult};

/// Lists the regular files directly inside `dir`, sorted lexically.
///
/// Subdirectories, hidden files (names starting with `.`) and names that are
/// not valid UTF-8 are ignored. When `extensions` is non-empty only files
/// whose extension matches one of them (case-insensitive, leading dot
/// optional) are returned. Each entry is rendered as `{dir}/{file_name}`.
pub fn list_files(dir: &Path, extensions: &[String]) -> RenameResult<Vec<String>> {
    if dir.as_os_str().is_empty() {
        return Err(RenameError::invalid_input_path("", "empty files location"));
    }
    if !dir.is_dir() {
        return Err(RenameError::invalid_input_path(
            dir.display().to_string(),
            "files location is not a directory",
        ));
    }

    let dir_str = dir.to_str().ok_or_else(|| {
        RenameError::invalid_input_path(dir.display().to_string(), "path is not valid UTF-8")
    })?;
    let read_error =
        |e: std::io::Error| RenameError::invalid_input_path(dir_str.to_string(), e.to_string());

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let entry = entry.map_err(read_error)?;
        // Follows symlinks, so a link to a regular file counts as one.
        if !entry.path().is_file() {
            trace!("Skipping non-file entry {}", entry.path().display());
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                warn!(
                    "Skipping {}/{} (file name is not valid UTF-8)",
                    dir_str,
                    name.to_string_lossy()
                );
                continue;
            }
        };

        if name.starts_with('.') {
            trace!("Skipping hidden file {}", name);
            continue;
        }

        if !matches_extension(&name, extensions) {
            trace!("Skipping {} (extension filter)", name);
            continue;
        }

        files.push(format!("{}/{}", dir_str, name));
    }

    files.sort();
    debug!("Found {} files in {}", files.len(), dir_str);
    Ok(files)
}

fn matches_extension(name: &str, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }

    match name.rsplit_once('.') {
        Some((_, ext)) => extensions
            .iter()
            .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext)),
        None => false,
    }
}
