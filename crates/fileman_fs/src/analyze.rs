//! Per-child disk usage of a directory.

use std::path::Path;

use tracing::warn;

use crate::error::Result;
use crate::report::{ReportSize, SpecSizeEntry};
use crate::spec::{EnumEntryKind, EnumTraversalMode, SpecWalkOptions, SpecWalkWarning};
use crate::walk::{sum_directory_size, walk_entries};

/// Size every immediate child of `directory`.
///
/// Files count their own length, subdirectories the sum of every file beneath
/// them, anything else (broken links, fifos, sockets) zero. Only
/// `options.if_follow_symlinks` is honoured; the listing is always one level
/// deep.
pub fn analyze_directory<P: AsRef<Path>>(
    directory: P,
    options: SpecWalkOptions,
) -> Result<ReportSize> {
    let path_dir = directory.as_ref().to_path_buf();
    let options_children = SpecWalkOptions {
        rule_mode: EnumTraversalMode::ImmediateChildrenOnly,
        ..options
    };

    let mut report = ReportSize {
        path_dir: path_dir.clone(),
        ..ReportSize::default()
    };
    for item in walk_entries(&path_dir, options_children)? {
        let entry = match item {
            Ok(v) => v,
            Err(warning) => {
                report.warnings.push(warning);
                continue;
            }
        };

        let size_bytes = match entry.kind {
            EnumEntryKind::File => entry.size_bytes,
            EnumEntryKind::Directory => size_child_directory(
                &entry.path,
                options.if_follow_symlinks,
                &mut report.warnings,
            ),
            EnumEntryKind::Other => 0,
        };
        report.size_total = report.size_total.saturating_add(size_bytes);
        report.entries.push(SpecSizeEntry {
            name: entry.name,
            kind: entry.kind,
            size_bytes,
        });
    }
    Ok(report)
}

/// Recursive size of one listed child. A child that vanished since listing
/// counts as zero and leaves a warning.
fn size_child_directory(
    path_dir: &Path,
    if_follow_symlinks: bool,
    l_warnings: &mut Vec<SpecWalkWarning>,
) -> u64 {
    match sum_directory_size(path_dir, if_follow_symlinks, l_warnings) {
        Ok(v) => v,
        Err(e) => {
            let message = format!("Failed to size directory {} ({e})", path_dir.display());
            warn!("{message}");
            l_warnings.push(SpecWalkWarning {
                path: path_dir.to_path_buf(),
                message,
            });
            0
        }
    }
}
