//! Operation result models and their human-readable text.

use std::fmt;
use std::path::PathBuf;

use crate::error::{FsOpError, Result};
use crate::size::format_size;
use crate::spec::{EnumEntryKind, SpecRenameDirective, SpecWalkWarning};

/// What `remove_entry` deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumRemoved {
    /// A single file inside the directory.
    File(PathBuf),
    /// The (empty) directory itself.
    Directory(PathBuf),
}

impl fmt::Display for EnumRemoved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "Removed file {}", path.display()),
            Self::Directory(path) => write!(f, "Removed directory {}", path.display()),
        }
    }
}

/// Result of `count_files`.
#[derive(Debug, Default, Clone)]
pub struct ReportCount {
    /// Directory that was counted.
    pub path_dir: PathBuf,
    /// Regular files reachable at any depth.
    pub cnt_files: u64,
    /// Subtrees that could not be read.
    pub warnings: Vec<SpecWalkWarning>,
}

impl fmt::Display for ReportCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Files in {}: {}",
            self.path_dir.display(),
            self.cnt_files
        )
    }
}

/// Result of `find_matching_files`: the match set plus diagnostics.
#[derive(Debug, Default, Clone)]
pub struct ReportSearch {
    /// Pattern as supplied.
    pub pattern: String,
    /// Matching paths in traversal order.
    pub matches: Vec<PathBuf>,
    /// Subtrees skipped because of I/O errors.
    pub warnings: Vec<SpecWalkWarning>,
}

impl ReportSearch {
    /// Number of matching files.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Header line followed by one line per match.
    pub fn format_lines(&self) -> Vec<String> {
        let mut l_lines = Vec::with_capacity(self.matches.len() + 1);
        l_lines.push(format!(
            "Files matching '{}': {}",
            self.pattern,
            self.match_count()
        ));
        l_lines.extend(self.matches.iter().map(|p| p.display().to_string()));
        l_lines
    }
}

/// One immediate child in a size report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecSizeEntry {
    /// Child basename.
    pub name: String,
    /// File or directory.
    pub kind: EnumEntryKind,
    /// Own length for files; recursive sum for directories.
    pub size_bytes: u64,
}

/// Result of `analyze_directory`.
#[derive(Debug, Default, Clone)]
pub struct ReportSize {
    /// Directory that was analyzed.
    pub path_dir: PathBuf,
    /// Immediate children in traversal order.
    pub entries: Vec<SpecSizeEntry>,
    /// Sum over all children.
    pub size_total: u64,
    /// Subtrees that could not be read.
    pub warnings: Vec<SpecWalkWarning>,
}

impl ReportSize {
    /// One `"{name} {size}"` line per child, then the total.
    ///
    /// Fails with [`FsOpError::UnsupportedMagnitude`] when any size is out of
    /// the formatting range.
    pub fn format_lines(&self) -> Result<Vec<String>> {
        let mut l_lines = Vec::with_capacity(self.entries.len() + 1);
        for entry in &self.entries {
            let suffix_dir = match entry.kind {
                EnumEntryKind::Directory => "/",
                EnumEntryKind::File | EnumEntryKind::Other => "",
            };
            l_lines.push(format!(
                "{}{suffix_dir} {}",
                entry.name,
                format_size(entry.size_bytes)?
            ));
        }
        l_lines.push(format!("Total: {}", format_size(self.size_total)?));
        Ok(l_lines)
    }
}

/// Result of a folder-wide rename.
///
/// The batch stops at the first failure; earlier renames stay applied.
#[derive(Debug, Default)]
pub struct ReportRename {
    /// Renames applied, in order.
    pub directives: Vec<SpecRenameDirective>,
    /// Files found but never attempted because the batch stopped.
    pub cnt_not_attempted: usize,
    /// Error that stopped the batch, if any.
    pub failure: Option<FsOpError>,
    /// Paths skipped while listing the folder.
    pub warnings: Vec<SpecWalkWarning>,
}

impl ReportRename {
    /// `true` when every file was renamed.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// One line per rename.
    pub fn format_lines(&self) -> Vec<String> {
        self.directives
            .iter()
            .map(|d| {
                format!(
                    "Renamed: {} -> {}",
                    d.path_src.display(),
                    d.path_dst.display()
                )
            })
            .collect()
    }
}

impl fmt::Display for ReportRename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[RENAME] renamed={} not_attempted={} failed={}",
            self.directives.len(),
            self.cnt_not_attempted,
            u8::from(self.failure.is_some())
        )
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{ReportSearch, ReportSize, SpecSizeEntry};
    use crate::error::FsOpError;
    use crate::spec::EnumEntryKind;

    #[test]
    fn report_size_format_lines_mark_directories() {
        let report = ReportSize {
            path_dir: PathBuf::from("d"),
            entries: vec![
                SpecSizeEntry {
                    name: "a.bin".to_string(),
                    kind: EnumEntryKind::File,
                    size_bytes: 2048,
                },
                SpecSizeEntry {
                    name: "sub".to_string(),
                    kind: EnumEntryKind::Directory,
                    size_bytes: 0,
                },
            ],
            size_total: 2048,
            warnings: vec![],
        };

        let l_lines = report.format_lines().expect("format");
        assert_eq!(l_lines, vec!["a.bin 2.00 KB", "sub/ 0 B", "Total: 2.00 KB"]);
    }

    #[test]
    fn report_size_format_propagates_unsupported_magnitude() {
        let report = ReportSize {
            size_total: 1024_u64.pow(4),
            ..ReportSize::default()
        };
        let err = report.format_lines().expect_err("too large");
        assert!(matches!(err, FsOpError::UnsupportedMagnitude(_)));
    }

    #[test]
    fn report_search_lines_start_with_header() {
        let report = ReportSearch {
            pattern: "log".to_string(),
            matches: vec![PathBuf::from("a/app.log")],
            warnings: vec![],
        };
        assert_eq!(
            report.format_lines(),
            vec!["Files matching 'log': 1", "a/app.log"]
        );
    }
}
