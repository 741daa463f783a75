//! File or empty-directory removal.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{FsOpError, Result};
use crate::path::resolve_path;
use crate::report::EnumRemoved;
use crate::spec::SpecConfirmation;

/// Remove `directory/filename`, or `directory` itself when `filename` is
/// `None` or empty.
///
/// The directory must exist; that is checked before anything else. Directory
/// removal is never recursive: a non-empty directory fails with
/// [`FsOpError::RemoveFailed`] and is left untouched.
pub fn remove_entry<P: AsRef<Path>>(
    directory: P,
    filename: Option<&str>,
    _confirmation: SpecConfirmation,
) -> Result<EnumRemoved> {
    let path_dir = directory.as_ref();
    if !path_dir.is_dir() {
        return Err(FsOpError::DirectoryNotFound(path_dir.to_path_buf()));
    }

    match filename.filter(|name| !name.is_empty()) {
        Some(name) => {
            let path_file = resolve_path(path_dir, name);
            if !path_file.is_file() {
                return Err(FsOpError::FileNotFound(path_file));
            }
            fs::remove_file(&path_file).map_err(|source| FsOpError::RemoveFailed {
                path: path_file.clone(),
                source,
            })?;
            info!("Removed file {}", path_file.display());
            Ok(EnumRemoved::File(path_file))
        }
        None => {
            fs::remove_dir(path_dir).map_err(|source| FsOpError::RemoveFailed {
                path: path_dir.to_path_buf(),
                source,
            })?;
            info!("Removed directory {}", path_dir.display());
            Ok(EnumRemoved::Directory(path_dir.to_path_buf()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::remove_entry;
    use crate::error::FsOpError;
    use crate::report::EnumRemoved;
    use crate::spec::SpecConfirmation;

    fn confirmed() -> SpecConfirmation {
        SpecConfirmation::from_token("yes").expect("confirm")
    }

    #[test]
    fn remove_entry_deletes_named_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path_file = tmp.path().join("test_file.txt");
        fs::write(&path_file, "bye").expect("write");

        let removed = remove_entry(tmp.path(), Some("test_file.txt"), confirmed()).expect("remove");
        assert_eq!(removed, EnumRemoved::File(path_file.clone()));
        assert!(!path_file.exists());
        assert!(tmp.path().is_dir());
    }

    #[test]
    fn remove_entry_missing_file_keeps_directory() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("keep.txt"), "k").expect("write");

        let err = remove_entry(tmp.path(), Some("nonexist_file.txt"), confirmed())
            .expect_err("missing file");
        assert!(matches!(err, FsOpError::FileNotFound(_)));
        assert!(tmp.path().join("keep.txt").exists());
    }

    #[test]
    fn remove_entry_missing_directory_short_circuits() {
        let tmp = TempDir::new().expect("tempdir");
        let path_missing = tmp.path().join("nonexistent_directory");

        for filename in [Some("any_file.txt"), None] {
            let err = remove_entry(&path_missing, filename, confirmed()).expect_err("missing dir");
            assert!(matches!(err, FsOpError::DirectoryNotFound(_)));
        }
    }

    #[test]
    fn remove_entry_empty_directory_succeeds() {
        let tmp = TempDir::new().expect("tempdir");
        let path_dir = tmp.path().join("empty");
        fs::create_dir(&path_dir).expect("mkdir");

        let removed = remove_entry(&path_dir, Some(""), confirmed()).expect("remove dir");
        assert_eq!(removed, EnumRemoved::Directory(path_dir.clone()));
        assert!(!path_dir.exists());
    }

    #[test]
    fn remove_entry_non_empty_directory_fails_untouched() {
        let tmp = TempDir::new().expect("tempdir");
        let path_dir = tmp.path().join("full");
        fs::create_dir(&path_dir).expect("mkdir");
        fs::write(path_dir.join("inner.txt"), "x").expect("write");

        let err = remove_entry(&path_dir, None, confirmed()).expect_err("not empty");
        assert!(matches!(err, FsOpError::RemoveFailed { .. }));
        assert!(path_dir.join("inner.txt").exists());
    }

    #[test]
    fn remove_entry_refuses_to_delete_subdirectory_as_file() {
        let tmp = TempDir::new().expect("tempdir");
        fs::create_dir(tmp.path().join("sub")).expect("mkdir");

        let err = remove_entry(tmp.path(), Some("sub"), confirmed()).expect_err("not a file");
        assert!(matches!(err, FsOpError::FileNotFound(_)));
        assert!(tmp.path().join("sub").is_dir());
    }
}
