//! Single-file copy with metadata preservation.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use filetime::{FileTime, set_file_times};
use tracing::{debug, info};

use crate::error::{FsOpError, Result};
use crate::path::resolve_path;

/// Copy `dir_source/filename` to `path_destination`.
///
/// When `path_destination` is an existing directory the file lands inside it
/// under its basename. Bytes, permission bits and access/modification times are
/// preserved; on Linux extended attributes are copied best-effort.
///
/// Returns the path that was written. A failure part-way through may leave a
/// truncated destination behind; nothing is cleaned up.
pub fn copy_file<P, Q>(filename: &str, dir_source: P, path_destination: Q) -> Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let path_file_src = resolve_path(dir_source, filename);
    if filename.is_empty() || !path_file_src.is_file() {
        return Err(FsOpError::FileNotFound(path_file_src));
    }

    let path_destination = path_destination.as_ref();
    let path_file_dst = match path_file_src.file_name() {
        Some(name_file) if path_destination.is_dir() => path_destination.join(name_file),
        _ => path_destination.to_path_buf(),
    };
    debug!(
        src = %path_file_src.display(),
        dst = %path_file_dst.display(),
        "copy start"
    );

    copy_file_with_metadata(&path_file_src, &path_file_dst).map_err(|source| {
        FsOpError::CopyFailed {
            path_src: path_file_src.clone(),
            path_dst: path_file_dst.clone(),
            source,
        }
    })?;

    info!(
        "Copied {} -> {}",
        path_file_src.display(),
        path_file_dst.display()
    );
    Ok(path_file_dst)
}

fn is_same_file(path_a: &Path, path_b: &Path) -> bool {
    match (fs::canonicalize(path_a), fs::canonicalize(path_b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn copy_file_with_metadata(path_file_src: &Path, path_file_dst: &Path) -> io::Result<()> {
    // Copying a file onto itself would truncate it.
    if is_same_file(path_file_src, path_file_dst) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        ));
    }
    fs::copy(path_file_src, path_file_dst)?;

    let stat_src = fs::metadata(path_file_src)?;
    fs::set_permissions(path_file_dst, stat_src.permissions())?;

    let file_time_access = FileTime::from_last_access_time(&stat_src);
    let file_time_modify = FileTime::from_last_modification_time(&stat_src);
    set_file_times(path_file_dst, file_time_access, file_time_modify)?;

    #[cfg(target_os = "linux")]
    copy_xattrs_linux(path_file_src, path_file_dst);
    Ok(())
}

#[cfg(target_os = "linux")]
fn copy_xattrs_linux(path_file_src: &Path, path_file_dst: &Path) {
    let iter_xattr_names = match xattr::list(path_file_src) {
        Ok(v) => v,
        Err(e) => {
            debug!("xattr listing unavailable for {} ({e})", path_file_src.display());
            return;
        }
    };

    for name in iter_xattr_names {
        let Some(raw_value) = xattr::get(path_file_src, &name).ok().flatten() else {
            continue;
        };
        if let Err(e) = xattr::set(path_file_dst, &name, &raw_value) {
            debug!(
                "xattr {} not copied to {} ({e})",
                name.to_string_lossy(),
                path_file_dst.display()
            );
        }
    }
}
