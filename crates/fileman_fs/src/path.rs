//! Base directory + name joining.

use std::path::{Path, PathBuf};

/// Join `name` onto `dir_base`. An empty name resolves to `dir_base` itself.
pub fn resolve_path<P: AsRef<Path>>(dir_base: P, name: &str) -> PathBuf {
    let dir_base = dir_base.as_ref();
    if name.is_empty() {
        return dir_base.to_path_buf();
    }
    dir_base.join(name)
}
