//! Lazy directory traversal shared by count, search, rename and analysis.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{FsOpError, Result};
use crate::spec::{
    EnumEntryKind, EnumTraversalMode, SpecFileEntry, SpecWalkOptions, SpecWalkWarning,
};

/// One traversal item: an entry, or a warning about a skipped path.
pub type TypeWalkItem = std::result::Result<SpecFileEntry, SpecWalkWarning>;

#[derive(Debug, Clone)]
struct SpecDirEntry {
    path_dir: PathBuf,
    name_dir: String,
}

/// Iterator over the entries under one root.
///
/// Directory state is re-read from the OS as the iterator advances; nothing is
/// snapshotted up front.
#[derive(Debug)]
pub struct Traversal {
    options: SpecWalkOptions,
    path_root: PathBuf,
    l_dirs_pending: Vec<PathBuf>,
    queue_items: VecDeque<TypeWalkItem>,
    set_visited_dirs: HashSet<(u64, u64)>,
}

/// Start a traversal of `root`.
///
/// Fails with [`FsOpError::DirectoryNotFound`] when `root` is missing or is
/// not a directory. Everything after that is reported per item.
pub fn walk_entries<P: AsRef<Path>>(root: P, options: SpecWalkOptions) -> Result<Traversal> {
    let path_root = root.as_ref().to_path_buf();
    if !path_root.is_dir() {
        return Err(FsOpError::DirectoryNotFound(path_root));
    }
    debug!(root = %path_root.display(), mode = ?options.rule_mode, "walk start");

    Ok(Traversal {
        options,
        path_root: path_root.clone(),
        l_dirs_pending: vec![path_root],
        queue_items: VecDeque::new(),
        set_visited_dirs: HashSet::new(),
    })
}

/// Total byte length of every file at every depth under `dir`.
///
/// Warnings for skipped subtrees are appended to `l_warnings`.
pub fn sum_directory_size<P: AsRef<Path>>(
    dir: P,
    if_follow_symlinks: bool,
    l_warnings: &mut Vec<SpecWalkWarning>,
) -> Result<u64> {
    let options = SpecWalkOptions {
        rule_mode: EnumTraversalMode::Recursive,
        if_follow_symlinks,
    };
    let mut size_total = 0_u64;
    for item in walk_entries(dir, options)? {
        match item {
            Ok(entry) => size_total = size_total.saturating_add(entry.size_bytes),
            Err(warning) => l_warnings.push(warning),
        }
    }
    Ok(size_total)
}

impl Traversal {
    /// Root this traversal started from.
    pub fn root(&self) -> &Path {
        &self.path_root
    }

    fn push_warning(&mut self, path: PathBuf, message: String) {
        warn!("{message}");
        self.queue_items
            .push_back(Err(SpecWalkWarning { path, message }));
    }

    /// Returns `false` when `path_dir` was already entered through another link.
    fn should_enter_directory(&mut self, path_dir: &Path) -> bool {
        if !self.options.if_follow_symlinks {
            return true;
        }
        let stat_dir = match fs::metadata(path_dir) {
            Ok(v) => v,
            Err(e) => {
                self.push_warning(
                    path_dir.to_path_buf(),
                    format!("Failed to stat directory {} ({e})", path_dir.display()),
                );
                return false;
            }
        };
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            let tuple_dir_identifier = (stat_dir.dev(), stat_dir.ino());
            if !self.set_visited_dirs.insert(tuple_dir_identifier) {
                self.push_warning(
                    path_dir.to_path_buf(),
                    format!("Symlink loop detected: {}", path_dir.display()),
                );
                return false;
            }
        }
        #[cfg(not(unix))]
        {
            let _ = stat_dir;
        }
        true
    }

    fn scan_directory(&mut self, path_dir: PathBuf) {
        if !self.should_enter_directory(&path_dir) {
            return;
        }

        let iter_entries = match fs::read_dir(&path_dir) {
            Ok(iter) => iter,
            Err(e) => {
                let message = format!("Failed to read directory {} ({e})", path_dir.display());
                self.push_warning(path_dir, message);
                return;
            }
        };

        let mut l_dirs: Vec<SpecDirEntry> = Vec::new();
        let mut l_files: Vec<SpecFileEntry> = Vec::new();
        let mut l_others: Vec<SpecFileEntry> = Vec::new();

        for entry_res in iter_entries {
            let entry = match entry_res {
                Ok(v) => v,
                Err(e) => {
                    let message = format!(
                        "Failed to read directory entry under {} ({e})",
                        path_dir.display()
                    );
                    self.push_warning(path_dir.clone(), message);
                    continue;
                }
            };

            let path_entry = entry.path();
            let c_name = entry.file_name().to_string_lossy().to_string();
            let cfg_file_type = match entry.file_type() {
                Ok(v) => v,
                Err(e) => {
                    let message = format!("Failed to inspect {} ({e})", path_entry.display());
                    self.push_warning(path_entry, message);
                    continue;
                }
            };

            // Symlinks are classified by their target.
            let meta_entry = if cfg_file_type.is_symlink() {
                fs::metadata(&path_entry)
            } else {
                entry.metadata()
            };
            let meta_entry = match meta_entry {
                Ok(v) => v,
                Err(e) if cfg_file_type.is_symlink() => {
                    if self.options.rule_mode == EnumTraversalMode::ImmediateChildrenOnly {
                        debug!(path = %path_entry.display(), "broken symlink listed as other");
                        l_others.push(derive_other_entry(path_entry, c_name));
                        continue;
                    }
                    let message = format!("Broken symlink: {} ({e})", path_entry.display());
                    self.push_warning(path_entry, message);
                    continue;
                }
                Err(e) => {
                    let message = format!("Failed to inspect {} ({e})", path_entry.display());
                    self.push_warning(path_entry, message);
                    continue;
                }
            };

            if meta_entry.is_dir() {
                // Not following: linked directories still count as children
                // one level deep, but are never descended into.
                if cfg_file_type.is_symlink()
                    && !self.options.if_follow_symlinks
                    && self.options.rule_mode == EnumTraversalMode::Recursive
                {
                    debug!(path = %path_entry.display(), "symlinked directory not followed");
                    continue;
                }
                l_dirs.push(SpecDirEntry {
                    path_dir: path_entry,
                    name_dir: c_name,
                });
            } else if meta_entry.is_file() {
                l_files.push(SpecFileEntry {
                    path: path_entry,
                    name: c_name,
                    kind: EnumEntryKind::File,
                    size_bytes: meta_entry.len(),
                });
            } else if self.options.rule_mode == EnumTraversalMode::ImmediateChildrenOnly {
                l_others.push(derive_other_entry(path_entry, c_name));
            } else {
                let message = format!("Special file skipped: {}", path_entry.display());
                self.push_warning(path_entry, message);
            }
        }

        l_files.sort_by(|a, b| a.name.cmp(&b.name));
        l_dirs.sort_by(|a, b| a.name_dir.cmp(&b.name_dir));
        l_others.sort_by(|a, b| a.name.cmp(&b.name));

        self.queue_items.extend(l_files.into_iter().map(Ok));

        match self.options.rule_mode {
            EnumTraversalMode::Recursive => {
                // Reversed so the first name is popped first.
                self.l_dirs_pending
                    .extend(l_dirs.into_iter().rev().map(|d| d.path_dir));
            }
            EnumTraversalMode::ImmediateChildrenOnly => {
                self.queue_items.extend(l_dirs.into_iter().map(|d| {
                    Ok(SpecFileEntry {
                        path: d.path_dir,
                        name: d.name_dir,
                        kind: EnumEntryKind::Directory,
                        size_bytes: 0,
                    })
                }));
                self.queue_items.extend(l_others.into_iter().map(Ok));
            }
        }
    }
}

fn derive_other_entry(path: PathBuf, name: String) -> SpecFileEntry {
    SpecFileEntry {
        path,
        name,
        kind: EnumEntryKind::Other,
        size_bytes: 0,
    }
}

impl Iterator for Traversal {
    type Item = TypeWalkItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.queue_items.pop_front() {
                return Some(item);
            }
            let path_dir = self.l_dirs_pending.pop()?;
            self.scan_directory(path_dir);
        }
    }
}
