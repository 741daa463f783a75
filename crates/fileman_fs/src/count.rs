//! Recursive file counting.

use std::path::Path;

use tracing::debug;

use crate::error::FsOpError;
use crate::report::ReportCount;
use crate::spec::{EnumTraversalMode, SpecWalkOptions};
use crate::walk::walk_entries;

/// Count regular files at any depth under `directory`.
///
/// A missing directory counts as empty rather than failing. The traversal mode
/// in `options` is ignored; counting is always recursive.
pub fn count_files<P: AsRef<Path>>(directory: P, options: SpecWalkOptions) -> ReportCount {
    let path_dir = directory.as_ref().to_path_buf();
    let options = SpecWalkOptions {
        rule_mode: EnumTraversalMode::Recursive,
        ..options
    };
    let mut report = ReportCount {
        path_dir: path_dir.clone(),
        ..ReportCount::default()
    };

    let traversal = match walk_entries(&path_dir, options) {
        Ok(v) => v,
        Err(FsOpError::DirectoryNotFound(_)) => {
            debug!(dir = %path_dir.display(), "count on missing directory");
            return report;
        }
        Err(e) => {
            debug!("count walk failed: {e}");
            return report;
        }
    };

    for item in traversal {
        match item {
            Ok(_) => report.cnt_files += 1,
            Err(warning) => report.warnings.push(warning),
        }
    }
    report
}
