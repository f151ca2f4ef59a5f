//! Content-hash based file change tracking.
//!
//! A `FileTracker` is scoped to one working directory and detects
//! creates, modifications, and deletions between two checkpoints by
//! comparing SHA-256 digests of file contents. Hashing (rather than
//! mtime comparison) makes detection robust against clock skew,
//! metadata-only touches, and tools that rewrite a file with
//! identical bytes.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

// ---------------------------------------------------------------------------
// Change records
// ---------------------------------------------------------------------------

/// The kind of mutation detected for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Created,
    Modified,
    Deleted,
    Read,
}

/// A single detected file mutation. Immutable once recorded.
///
/// The hash pair encodes the action: an absent `before_hash` with a
/// present `after_hash` means created, the inverse means deleted, and
/// two differing hashes mean modified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileChange {
    /// Path relative to the tracker's working directory.
    pub path: String,
    pub action: ChangeAction,
    /// UTC timestamp of detection, ISO-8601.
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_size: Option<u64>,
}

/// Projection of a [`FileChange`] used in summaries, with the size
/// delta precomputed when both sizes are known.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedChange {
    pub path: String,
    pub action: ChangeAction,
    pub timestamp: String,
    pub before_hash: Option<String>,
    pub after_hash: Option<String>,
    pub size_change: Option<i64>,
}

/// Aggregated view over every change a tracker has recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub total_changes: usize,
    pub files_created: usize,
    pub files_modified: usize,
    pub files_deleted: usize,
    pub files_read: usize,
    pub created_files: Vec<String>,
    pub modified_files: Vec<String>,
    pub deleted_files: Vec<String>,
    pub read_files: Vec<String>,
    pub detailed_changes: Vec<DetailedChange>,
}

// ---------------------------------------------------------------------------
// FileTracker
// ---------------------------------------------------------------------------

/// Content hash and size captured when a file is first tracked.
#[derive(Debug, Clone)]
struct Baseline {
    hash: String,
    size: u64,
}

/// Tracks file changes within a single working directory.
///
/// Baselines are established by [`FileTracker::track_file`] (or
/// implicitly by [`FileTracker::record_read`]); [`FileTracker::check_changes`]
/// compares current disk state against those baselines and also scans
/// for files that were never tracked, reporting them as created.
pub struct FileTracker {
    working_directory: PathBuf,
    /// Relative path -> content hash and size at tracking time.
    tracked_files: HashMap<String, Baseline>,
    /// Paths recorded as read. Accounting only; not diffed.
    read_files: HashSet<String>,
    /// Every change ever produced by this instance, in detection order.
    changes: Vec<FileChange>,
}

impl FileTracker {
    /// Create a tracker scoped to `working_directory`.
    pub fn new(working_directory: impl Into<PathBuf>) -> Self {
        Self {
            working_directory: working_directory.into(),
            tracked_files: HashMap::new(),
            read_files: HashSet::new(),
            changes: Vec::new(),
        }
    }

    pub fn working_directory(&self) -> &Path {
        &self.working_directory
    }

    /// SHA-256 of the file's raw bytes, hex-encoded. `None` if the path
    /// does not exist, is not a regular file, or cannot be read.
    fn hash_file(path: &Path) -> Option<String> {
        if !path.is_file() {
            return None;
        }
        match fs::read(path) {
            Ok(bytes) => Some(hex::encode(Sha256::digest(&bytes))),
            Err(err) => {
                warn!(path = %path.display(), %err, "failed to hash file");
                None
            }
        }
    }

    /// File size in bytes, or `None` if the file is gone or unreadable.
    fn file_size(path: &Path) -> Option<u64> {
        fs::metadata(path).ok().filter(|m| m.is_file()).map(|m| m.len())
    }

    /// Start tracking `path` (relative to the working directory),
    /// recording its current content hash as the baseline.
    ///
    /// Silent no-op when the file does not exist or cannot be read;
    /// callers must not assume tracking succeeded.
    pub fn track_file(&mut self, path: &str) {
        let full = self.working_directory.join(path);
        if let Some(hash) = Self::hash_file(&full) {
            debug!(path, hash = &hash[..8], "tracking file");
            let size = Self::file_size(&full).unwrap_or(0);
            self.tracked_files.insert(path.to_owned(), Baseline { hash, size });
        }
    }

    /// Record that `path` was read. Also establishes a tracking
    /// baseline if the path is not tracked yet, so a later rewrite is
    /// detected as a modification. Idempotent.
    pub fn record_read(&mut self, path: &str) {
        self.read_files.insert(path.to_owned());
        if !self.tracked_files.contains_key(path) {
            self.track_file(path);
        }
    }

    /// Compare current disk state against all tracked baselines and
    /// scan for untracked files, returning the changes detected by
    /// this call. The same records are appended to the cumulative
    /// change log consumed by [`FileTracker::get_summary`].
    ///
    /// Untracked files found by the scan are reported as created but
    /// are not promoted into the tracked set, so repeated calls
    /// re-report them until the tracker is reset. Scan errors degrade
    /// the created-file portion of the result; they never fail the
    /// check.
    pub fn check_changes(&mut self) -> Vec<FileChange> {
        let mut detected = Vec::new();
        let timestamp = Utc::now().to_rfc3339();

        for (path, baseline) in &self.tracked_files {
            let full = self.working_directory.join(path);
            let current_hash = Self::hash_file(&full);

            match current_hash {
                None => {
                    info!(path, "file deleted");
                    detected.push(FileChange {
                        path: path.clone(),
                        action: ChangeAction::Deleted,
                        timestamp: timestamp.clone(),
                        before_hash: Some(baseline.hash.clone()),
                        after_hash: None,
                        before_size: Some(baseline.size),
                        after_size: None,
                    });
                }
                Some(ref hash) if *hash != baseline.hash => {
                    info!(path, "file modified");
                    detected.push(FileChange {
                        path: path.clone(),
                        action: ChangeAction::Modified,
                        timestamp: timestamp.clone(),
                        before_hash: Some(baseline.hash.clone()),
                        after_hash: current_hash.clone(),
                        // Size at tracking time, not a second read of the
                        // current file; the delta stays truthful even if
                        // the file changed again mid-check.
                        before_size: Some(baseline.size),
                        after_size: Self::file_size(&full),
                    });
                }
                Some(_) => {}
            }
        }

        for entry in WalkDir::new(&self.working_directory) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    error!(%err, "error scanning for new files");
                    break;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let rel_path = match entry.path().strip_prefix(&self.working_directory) {
                Ok(rel) => rel.to_string_lossy().into_owned(),
                Err(_) => continue,
            };
            if self.tracked_files.contains_key(&rel_path) {
                continue;
            }
            if let Some(hash) = Self::hash_file(entry.path()) {
                info!(path = %rel_path, "file created");
                detected.push(FileChange {
                    path: rel_path,
                    action: ChangeAction::Created,
                    timestamp: timestamp.clone(),
                    before_hash: None,
                    after_hash: Some(hash),
                    before_size: None,
                    after_size: Self::file_size(entry.path()),
                });
            }
        }

        self.changes.extend(detected.iter().cloned());
        detected
    }

    /// Aggregate the cumulative change log into a summary. Pure: no
    /// hashes are recomputed, and repeated calls without an
    /// intervening [`FileTracker::check_changes`] return identical output.
    pub fn get_summary(&self) -> ChangeSummary {
        let paths_for = |action: ChangeAction| -> Vec<String> {
            self.changes
                .iter()
                .filter(|c| c.action == action)
                .map(|c| c.path.clone())
                .collect()
        };

        let created_files = paths_for(ChangeAction::Created);
        let modified_files = paths_for(ChangeAction::Modified);
        let deleted_files = paths_for(ChangeAction::Deleted);

        let mut read_files: Vec<String> = self.read_files.iter().cloned().collect();
        read_files.sort();

        let detailed_changes = self
            .changes
            .iter()
            .map(|c| DetailedChange {
                path: c.path.clone(),
                action: c.action,
                timestamp: c.timestamp.clone(),
                before_hash: c.before_hash.clone(),
                after_hash: c.after_hash.clone(),
                size_change: match (c.before_size, c.after_size) {
                    (Some(before), Some(after)) => Some(after as i64 - before as i64),
                    _ => None,
                },
            })
            .collect();

        ChangeSummary {
            total_changes: self.changes.len(),
            files_created: created_files.len(),
            files_modified: modified_files.len(),
            files_deleted: deleted_files.len(),
            files_read: self.read_files.len(),
            created_files,
            modified_files,
            deleted_files,
            read_files,
            detailed_changes,
        }
    }

    /// Return the tracker to its initial empty state. The filesystem
    /// is untouched.
    pub fn reset(&mut self) {
        self.tracked_files.clear();
        self.changes.clear();
        self.read_files.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
