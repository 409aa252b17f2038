use crate::models::error::{Result, ScanError};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Every entry under `root`, root first, parents before children and siblings by name.
/// Stops at the first entry that cannot be read.
pub fn walk_entries(root: &Path) -> impl Iterator<Item = Result<DirEntry>> + '_ {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .map(move |entry| {
            entry.map_err(|cause| ScanError::Walk {
                root: root.to_path_buf(),
                cause,
            })
        })
}

pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Text after the last `.` of the base name, so `.bashrc` gives `bashrc` and `archive.tar.gz` gives `gz`
pub fn extension_of(path: &Path) -> String {
    file_name_of(path)
        .rsplit_once('.')
        .map(|(_, extension)| extension.to_string())
        .unwrap_or_default()
}
