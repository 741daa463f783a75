//! Command-line surface: clap definitions and flag parsers.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use fileman_fs::{EnumRenameCollisionStrategy, EnumSearchPatternMode, SpecWalkOptions};

/// A simple file manager for managing files and directories.
#[derive(Parser, Debug)]
#[command(name = "fileman", version, arg_required_else_help = true)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every traversing command.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct WalkArgs {
    /// Descend into symlinked directories (loops are detected and skipped).
    #[arg(long = "follow-symlinks")]
    pub follow_symlinks: bool,
}

impl WalkArgs {
    pub fn to_options(self, if_recursive: bool) -> SpecWalkOptions {
        let options = if if_recursive {
            SpecWalkOptions::recursive()
        } else {
            SpecWalkOptions::immediate()
        };
        SpecWalkOptions {
            if_follow_symlinks: self.follow_symlinks,
            ..options
        }
    }
}

/// Confirmation and collision flags for renaming commands.
#[derive(Args, Debug, Clone)]
pub struct RenameArgs {
    /// Confirmation token; must be `yes` for anything to be renamed.
    #[arg(long = "confirm", value_name = "TOKEN")]
    pub confirm: Option<String>,

    /// What to do when the dated name already exists: error, overwrite, suffix.
    #[arg(
        long = "on-conflict",
        value_name = "RULE",
        default_value = "error",
        value_parser = parse_rule_collision
    )]
    pub on_conflict: EnumRenameCollisionStrategy,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy a file to a destination (file path or directory).
    Copy {
        /// Name of the file inside DIRECTORY.
        filename: String,
        /// Directory holding the file.
        directory: PathBuf,
        /// Target file or directory.
        #[arg(default_value = ".")]
        destination: PathBuf,
    },

    /// Remove a file from a directory, or the (empty) directory itself.
    Remove {
        /// Directory to remove from (or to remove, when FILENAME is omitted).
        directory: PathBuf,
        /// File to delete inside DIRECTORY.
        filename: Option<String>,
        /// Confirmation token; must be `yes` for anything to be removed.
        #[arg(long = "confirm", value_name = "TOKEN")]
        confirm: Option<String>,
    },

    /// Count the files in a directory, recursively.
    Count {
        directory: PathBuf,
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Find files whose name matches a pattern (case-insensitive).
    Find {
        directory: PathBuf,
        pattern: String,
        /// How PATTERN is read: regex, glob, literal.
        #[arg(
            long = "pattern-mode",
            value_name = "MODE",
            default_value = "regex",
            value_parser = parse_rule_pattern
        )]
        pattern_mode: EnumSearchPatternMode,
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Print the creation date of a file.
    #[command(name = "creation-date", alias = "creation_date")]
    CreationDate { full_path: PathBuf },

    /// Rename a file or folder, appending its creation date.
    #[command(name = "rename-file", alias = "rename_file_with_date")]
    RenameFile {
        full_path: PathBuf,
        #[command(flatten)]
        rename: RenameArgs,
    },

    /// Rename every file in a folder, appending each creation date.
    #[command(name = "rename-folder", alias = "rename_files_with_date")]
    RenameFolder {
        folder_path: PathBuf,
        /// Include files in subfolders.
        #[arg(long = "recursive")]
        recursive: bool,
        #[command(flatten)]
        rename: RenameArgs,
        #[command(flatten)]
        walk: WalkArgs,
    },

    /// Show the size of every entry in a directory and the total.
    Analyze {
        directory: PathBuf,
        #[command(flatten)]
        walk: WalkArgs,
    },
}

pub fn parse_rule_pattern(value: &str) -> Result<EnumSearchPatternMode, String> {
    match value {
        "regex" => Ok(EnumSearchPatternMode::Regex),
        "glob" => Ok(EnumSearchPatternMode::Glob),
        "literal" => Ok(EnumSearchPatternMode::Literal),
        _ => Err(format!(
            "Invalid pattern mode: `{value}`. Expected one of: ['regex', 'glob', 'literal']"
        )),
    }
}

pub fn parse_rule_collision(value: &str) -> Result<EnumRenameCollisionStrategy, String> {
    match value {
        "error" => Ok(EnumRenameCollisionStrategy::Error),
        "overwrite" => Ok(EnumRenameCollisionStrategy::Overwrite),
        "suffix" => Ok(EnumRenameCollisionStrategy::Suffix),
        _ => Err(format!(
            "Invalid conflict rule: `{value}`. Expected one of: ['error', 'overwrite', 'suffix']"
        )),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use fileman_fs::{EnumRenameCollisionStrategy, EnumSearchPatternMode, EnumTraversalMode};

    use super::{Cli, Command, parse_rule_collision, parse_rule_pattern};

    #[test]
    fn parse_rule_helpers_reject_unknown_values() {
        assert_eq!(parse_rule_pattern("glob"), Ok(EnumSearchPatternMode::Glob));
        assert!(parse_rule_pattern("fuzzy").is_err());
        assert_eq!(
            parse_rule_collision("suffix"),
            Ok(EnumRenameCollisionStrategy::Suffix)
        );
        assert!(parse_rule_collision("replace").is_err());
    }

    #[test]
    fn cli_requires_a_command() {
        assert!(Cli::try_parse_from(["fileman"]).is_err());
    }

    #[test]
    fn cli_find_defaults_to_regex() {
        let cli = Cli::try_parse_from(["fileman", "find", "docs", r"\.txt$"]).expect("parse");
        match cli.command {
            Command::Find {
                pattern,
                pattern_mode,
                walk,
                ..
            } => {
                assert_eq!(pattern, r"\.txt$");
                assert_eq!(pattern_mode, EnumSearchPatternMode::Regex);
                assert!(!walk.follow_symlinks);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_accepts_legacy_command_names() {
        let cli = Cli::try_parse_from([
            "fileman",
            "rename_files_with_date",
            "photos",
            "--recursive",
            "--confirm",
            "YES",
        ])
        .expect("parse");
        match cli.command {
            Command::RenameFolder {
                recursive,
                rename,
                walk,
                ..
            } => {
                assert!(recursive);
                assert_eq!(rename.confirm.as_deref(), Some("YES"));
                assert_eq!(rename.on_conflict, EnumRenameCollisionStrategy::Error);
                assert_eq!(
                    walk.to_options(recursive).rule_mode,
                    EnumTraversalMode::Recursive
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_remove_filename_is_optional() {
        let cli = Cli::try_parse_from(["fileman", "remove", "old_dir"]).expect("parse");
        match cli.command {
            Command::Remove {
                filename, confirm, ..
            } => {
                assert!(filename.is_none());
                assert!(confirm.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
