//! Candidate file discovery.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// List regular files in `dir` whose name ends with `extension`.
///
/// Subdirectories (including the archive directory) are never returned.
/// Paths are sorted so runs are reproducible; callers must not rely on any
/// cross-file ordering.
pub fn scan_directory(dir: &Path, extension: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        match path.file_name().map(|name| name.to_str()) {
            Some(Some(name)) if name.ends_with(extension) => candidates.push(path),
            Some(None) => warn!("Skipping {}: file name is not valid UTF-8", path.display()),
            _ => debug!("Ignoring {}", path.display()),
        }
    }

    candidates.sort();
    Ok(candidates)
}
