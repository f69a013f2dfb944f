//! File system scanner for preset files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::manifest::Manifest;

/// File suffixes recognised as presets.
pub const PRESET_SUFFIXES: [&str; 2] = [".preset.yaml", ".preset.yml"];

/// Whether a path names a preset file.
pub fn is_preset_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| PRESET_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Recursively collect preset files under `root`, sorted by path.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    if !root.exists() {
        return Vec::new();
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.is_file() && is_preset_file(path) && !manifest.is_excluded(path))
        .collect();

    found.sort();
    found
}

/// Scan every manifest source relative to `base_path`.
pub fn scan_sources(base_path: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for source in manifest.effective_sources() {
        let source_path = if Path::new(&source).is_absolute() {
            PathBuf::from(&source)
        } else {
            base_path.join(&source)
        };
        found.extend(scan_directory(&source_path, manifest));
    }

    found.dedup();
    found
}
