//! Creation-date lookup and date-suffixed renaming.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use tracing::{debug, info};

use crate::conf::{C_DATE_FORMAT, C_DATE_SEPARATOR, N_RENAME_SUFFIX_MAX};
use crate::error::{FsOpError, Result};
use crate::report::ReportRename;
use crate::spec::{
    EnumEntryKind, EnumRenameCollisionStrategy, SpecConfirmation, SpecRenameDirective,
    SpecWalkOptions,
};
use crate::walk::walk_entries;

/// Local calendar date on which `path` was created.
///
/// Uses the platform birth time. Filesystems that do not report one fall back
/// to the modification time.
pub fn read_creation_date<P: AsRef<Path>>(path: P) -> Result<NaiveDate> {
    let path = path.as_ref();
    let stat_path = fs::metadata(path).map_err(|source| map_metadata_error(path, source))?;
    let time_created = match stat_path.created() {
        Ok(v) => v,
        Err(e) => {
            debug!(
                "birth time unavailable for {} ({e}); using modification time",
                path.display()
            );
            stat_path
                .modified()
                .map_err(|source| map_metadata_error(path, source))?
        }
    };
    Ok(DateTime::<Local>::from(time_created).date_naive())
}

/// `{stem}_{YYYY-MM-DD}{.ext}` next to `path`.
pub fn derive_dated_name<P: AsRef<Path>>(path: P, date_created: NaiveDate) -> PathBuf {
    derive_dated_name_with_suffix(path.as_ref(), date_created, None)
}

fn derive_dated_name_with_suffix(
    path: &Path,
    date_created: NaiveDate,
    n_suffix: Option<usize>,
) -> PathBuf {
    let mut name_new = OsString::new();
    if let Some(stem) = path.file_stem() {
        name_new.push(stem);
    }
    name_new.push(C_DATE_SEPARATOR);
    name_new.push(date_created.format(C_DATE_FORMAT).to_string());
    if let Some(n) = n_suffix {
        name_new.push(format!("{C_DATE_SEPARATOR}{n}"));
    }
    if let Some(ext) = path.extension() {
        name_new.push(".");
        name_new.push(ext);
    }
    path.with_file_name(name_new)
}

fn map_metadata_error(path: &Path, source: io::Error) -> FsOpError {
    if source.kind() == io::ErrorKind::NotFound {
        return FsOpError::NotFound(path.to_path_buf());
    }
    FsOpError::MetadataFailed {
        path: path.to_path_buf(),
        source,
    }
}

fn is_path_taken(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn resolve_rename_target(
    path_src: &Path,
    date_created: NaiveDate,
    rule_collision: EnumRenameCollisionStrategy,
) -> Result<PathBuf> {
    let path_dst = derive_dated_name(path_src, date_created);
    if !is_path_taken(&path_dst) {
        return Ok(path_dst);
    }

    match rule_collision {
        EnumRenameCollisionStrategy::Error => Err(FsOpError::RenameTargetExists(path_dst)),
        EnumRenameCollisionStrategy::Overwrite => {
            debug!("overwriting existing {}", path_dst.display());
            Ok(path_dst)
        }
        EnumRenameCollisionStrategy::Suffix => (1..=N_RENAME_SUFFIX_MAX)
            .map(|n| derive_dated_name_with_suffix(path_src, date_created, Some(n)))
            .find(|p| !is_path_taken(p))
            .ok_or(FsOpError::RenameTargetExists(path_dst)),
    }
}

fn rename_entry_with_date(
    path_src: &Path,
    rule_collision: EnumRenameCollisionStrategy,
) -> Result<SpecRenameDirective> {
    // Read once, before the path changes.
    let date_created = read_creation_date(path_src)?;
    let path_dst = resolve_rename_target(path_src, date_created, rule_collision)?;

    fs::rename(path_src, &path_dst).map_err(|source| FsOpError::RenameFailed {
        path_src: path_src.to_path_buf(),
        path_dst: path_dst.clone(),
        source,
    })?;
    info!("Renamed {} -> {}", path_src.display(), path_dst.display());

    Ok(SpecRenameDirective {
        path_src: path_src.to_path_buf(),
        path_dst,
        date_created,
    })
}

/// Rename one file or directory to carry its creation date.
///
/// `report.txt` created on 2025-02-16 becomes `report_2025-02-16.txt`. What
/// happens when that name is taken is decided by `rule_collision`.
pub fn rename_with_date<P: AsRef<Path>>(
    path: P,
    rule_collision: EnumRenameCollisionStrategy,
    _confirmation: SpecConfirmation,
) -> Result<SpecRenameDirective> {
    rename_entry_with_date(path.as_ref(), rule_collision)
}

/// Rename every file under `folder` (one level or recursive, per `options`).
///
/// Files are listed before the first rename so renamed names are never
/// revisited. The batch stops at the first failure without rolling back; the
/// returned report says how far it got. Only a missing `folder` is an `Err`.
pub fn rename_folder_with_date<P: AsRef<Path>>(
    folder: P,
    options: SpecWalkOptions,
    rule_collision: EnumRenameCollisionStrategy,
    _confirmation: SpecConfirmation,
) -> Result<ReportRename> {
    let mut report = ReportRename::default();
    let mut l_paths_file = Vec::new();
    for item in walk_entries(folder, options)? {
        match item {
            Ok(entry) if entry.kind == EnumEntryKind::File => l_paths_file.push(entry.path),
            Ok(_) => {}
            Err(warning) => report.warnings.push(warning),
        }
    }

    let n_files = l_paths_file.len();
    for (idx, path_file) in l_paths_file.iter().enumerate() {
        match rename_entry_with_date(path_file, rule_collision) {
            Ok(directive) => report.directives.push(directive),
            Err(e) => {
                report.cnt_not_attempted = n_files - idx - 1;
                report.failure = Some(e);
                break;
            }
        }
    }
    Ok(report)
}
