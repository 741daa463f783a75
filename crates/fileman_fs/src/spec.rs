//! Operation specification models: enums, options, entries, confirmation.

use std::fmt;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::conf::C_CONFIRM_TOKEN;
use crate::error::FsOpError;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Which part of a tree a traversal visits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumTraversalMode {
    /// Every regular file at every depth; directories are never yielded.
    #[default]
    Recursive,
    /// Direct children only; subdirectories are yielded as single entries.
    ImmediateChildrenOnly,
}

/// Kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumEntryKind {
    /// Regular file (or symlink resolving to one).
    File,
    /// Directory (only yielded in immediate-children-only mode).
    Directory,
    /// Broken symlink, fifo, socket or device (immediate-children-only mode).
    Other,
}

/// Pattern interpretation for `find_matching_files`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumSearchPatternMode {
    /// Unanchored regular expression search.
    #[default]
    Regex,
    /// Shell-like wildcard match on the whole basename.
    Glob,
    /// Plain substring match.
    Literal,
}

/// What the date namer does when the derived name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumRenameCollisionStrategy {
    /// Fail with `RenameTargetExists` and leave both paths untouched.
    #[default]
    Error,
    /// Replace the existing target.
    Overwrite,
    /// Append `_1`, `_2`, ... before the extension until a free name is found.
    Suffix,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsInit

/// Traversal options passed explicitly at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpecWalkOptions {
    /// Recursive or immediate-children-only.
    pub rule_mode: EnumTraversalMode,
    /// Descend into symlinked directories (guarded against loops).
    pub if_follow_symlinks: bool,
}

impl SpecWalkOptions {
    /// Options for a full recursive walk.
    pub fn recursive() -> Self {
        Self {
            rule_mode: EnumTraversalMode::Recursive,
            ..Self::default()
        }
    }

    /// Options for a one-level walk.
    pub fn immediate() -> Self {
        Self {
            rule_mode: EnumTraversalMode::ImmediateChildrenOnly,
            ..Self::default()
        }
    }
}

/// One traversed entry. Computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecFileEntry {
    /// Entry path, rooted at the traversal root.
    pub path: PathBuf,
    /// Entry basename.
    pub name: String,
    /// File or directory.
    pub kind: EnumEntryKind,
    /// Own byte length for files; `0` for everything else.
    pub size_bytes: u64,
}

/// A rename derived from an entry's creation date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRenameDirective {
    /// Path before renaming.
    pub path_src: PathBuf,
    /// Path after renaming.
    pub path_dst: PathBuf,
    /// Date embedded in the new name.
    pub date_created: NaiveDate,
}

/// Non-fatal traversal problem: an unreadable subtree, broken link, loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecWalkWarning {
    /// Path the problem was observed at.
    pub path: PathBuf,
    /// User-facing message.
    pub message: String,
}

impl fmt::Display for SpecWalkWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Proof that the caller received an affirmative confirmation.
///
/// Destructive operations take this by value; the engine never prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecConfirmation {
    _private: (),
}

impl SpecConfirmation {
    /// Accept `token` when it equals the confirmation token, ignoring case.
    pub fn from_token(token: &str) -> Result<Self, FsOpError> {
        if token.trim().eq_ignore_ascii_case(C_CONFIRM_TOKEN) {
            return Ok(Self { _private: () });
        }
        Err(FsOpError::ConfirmationDeclined {
            token: token.to_string(),
        })
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
