// crates/find_candidate_files/src/lib.rs

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Rules deciding which directories are walked and which files are kept.
///
/// Suffixes are matched against the whole file name with a plain
/// `ends_with`, so `types.d.ts` counts as a `.ts` file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateFilter {
    /// Leading character marking a hidden file or directory.
    pub hidden_prefix: char,
    /// Directory names that are never descended into.
    pub excluded_dirs: Vec<String>,
    /// File name suffixes that always disqualify a file.
    pub excluded_suffixes: Vec<String>,
    /// A file must end with one of these to be kept.
    pub included_suffixes: Vec<String>,
}

impl Default for CandidateFilter {
    /// The `.tsx` entry carries its dot so that a name like `foo.xtsx` is not kept.
    fn default() -> Self {
        Self {
            hidden_prefix: '.',
            excluded_dirs: to_strings(&[
                "node_modules",
                "__pycache__",
                ".venv",
                ".git",
                "public",
                "prisma",
            ]),
            excluded_suffixes: to_strings(&[".pyc", ".log", ".tmp"]),
            included_suffixes: to_strings(&[".js", ".ts", ".tsx", ".html", ".css"]),
        }
    }
}

impl CandidateFilter {
    /// Returns true if a directory with this name may be descended into.
    pub fn allows_dir(&self, name: &str) -> bool {
        !name.starts_with(self.hidden_prefix) && !self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Returns true if a file with this name is a candidate.
    pub fn allows_file(&self, name: &str) -> bool {
        !name.starts_with(self.hidden_prefix)
            && !self.excluded_suffixes.iter().any(|s| name.ends_with(s.as_str()))
            && self.included_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}

/// Recursively lists every candidate file under `root`.
///
/// Excluded and hidden directories are pruned, not just filtered, so nothing
/// below them is visited. The root itself is always walked, even when it is
/// `.`. Unreadable entries are skipped with a warning. Symlinks to files are
/// kept; symlinked directories are not followed. An empty vector means
/// nothing matched; the order is whatever the filesystem yields.
pub fn find_candidate_files(root: &Path, filter: &CandidateFilter) -> Vec<PathBuf> {
    let candidates: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| keep_walking(entry, filter))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(is_file_or_file_link)
        .filter(|entry| filter.allows_file(&entry.file_name().to_string_lossy()))
        .map(DirEntry::into_path)
        .collect();

    log::debug!(
        "{} candidate file(s) found under {}",
        candidates.len(),
        root.display()
    );
    candidates
}

fn keep_walking(entry: &DirEntry, filter: &CandidateFilter) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    filter.allows_dir(&entry.file_name().to_string_lossy())
}

/// Regular files, plus symlinks resolving to a regular file. Links to
/// directories are neither followed nor returned.
fn is_file_or_file_link(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
