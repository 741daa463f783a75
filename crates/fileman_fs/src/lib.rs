//! `fileman_fs` v1:
//! Local filesystem management engine.
//!
//! Layout:
//! - `walk`    : lazy traversal (recursive or one level), loop guard
//! - `copy`    : single-file copy with metadata
//! - `remove`  : file or empty-directory removal
//! - `count`   : recursive file counting
//! - `search`  : case-insensitive basename search
//! - `rename`  : creation-date lookup and date-suffixed renames
//! - `analyze` : per-child disk usage
//! - `path`    : base + name resolution
//! - `size`    : human-readable byte counts
//! - `spec`    : enums/options/entries/confirmation
//! - `report`  : result models
//! - `error`   : typed failures
//! - `conf`    : constants
//!
//! Everything is synchronous and single-threaded. The engine never prompts;
//! destructive calls take a [`SpecConfirmation`] obtained by the caller.

pub mod analyze;
pub mod conf;
pub mod copy;
pub mod count;
pub mod error;
pub mod path;
pub mod remove;
pub mod rename;
pub mod report;
pub mod search;
pub mod size;
pub mod spec;
pub mod walk;

pub use analyze::analyze_directory;
pub use copy::copy_file;
pub use count::count_files;
pub use error::{EnumFsErrorKind, FsOpError};
pub use path::resolve_path;
pub use remove::remove_entry;
pub use rename::{derive_dated_name, read_creation_date, rename_folder_with_date, rename_with_date};
pub use report::{EnumRemoved, ReportCount, ReportRename, ReportSearch, ReportSize, SpecSizeEntry};
pub use search::find_matching_files;
pub use size::format_size;
pub use spec::{
    EnumEntryKind, EnumRenameCollisionStrategy, EnumSearchPatternMode, EnumTraversalMode,
    SpecConfirmation, SpecFileEntry, SpecRenameDirective, SpecWalkOptions, SpecWalkWarning,
};
pub use walk::{Traversal, sum_directory_size, walk_entries};
