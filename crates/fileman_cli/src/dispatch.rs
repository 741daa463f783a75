//! Maps parsed commands onto engine calls and renders their text.

use fileman_fs::{
    EnumFsErrorKind, FsOpError, SpecConfirmation, analyze_directory, copy_file, count_files,
    find_matching_files, read_creation_date, remove_entry, rename_folder_with_date,
    rename_with_date,
};
use tracing::debug;

use crate::cli::Command;

/// Output lines for stdout plus the failure, if any. Lines are printed even
/// when the command failed part-way (e.g. a stopped rename batch).
#[derive(Debug, Default)]
pub struct ReportCommand {
    pub lines: Vec<String>,
    pub failure: Option<FsOpError>,
}

impl From<FsOpError> for ReportCommand {
    fn from(failure: FsOpError) -> Self {
        Self {
            lines: Vec::new(),
            failure: Some(failure),
        }
    }
}

impl ReportCommand {
    fn ok(lines: Vec<String>) -> Self {
        Self {
            lines,
            failure: None,
        }
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        self.failure
            .as_ref()
            .map_or(0, |failure| map_exit_code(failure.kind()))
    }
}

/// Distinct exit status per failure class (0 and 2 are success and usage).
pub fn map_exit_code(kind: EnumFsErrorKind) -> u8 {
    match kind {
        EnumFsErrorKind::NotFound => 3,
        EnumFsErrorKind::PermissionOrIoFailure => 4,
        EnumFsErrorKind::InvalidPattern => 5,
        EnumFsErrorKind::UnsupportedMagnitude => 6,
        EnumFsErrorKind::TargetExists => 7,
        EnumFsErrorKind::NotConfirmed => 8,
    }
}

fn confirm(token: Option<&str>) -> Result<SpecConfirmation, FsOpError> {
    SpecConfirmation::from_token(token.unwrap_or_default())
}

fn format_skipped(n_skipped: usize) -> Option<String> {
    (n_skipped > 0).then(|| format!("Skipped {n_skipped} unreadable path(s); see log output"))
}

/// Run one command to completion.
pub fn run_command(command: Command) -> ReportCommand {
    debug!(?command, "dispatch");
    match execute(command) {
        Ok(report) => report,
        Err(failure) => ReportCommand::from(failure),
    }
}

fn execute(command: Command) -> Result<ReportCommand, FsOpError> {
    match command {
        Command::Copy {
            filename,
            directory,
            destination,
        } => {
            let path_written = copy_file(&filename, &directory, &destination)?;
            Ok(ReportCommand::ok(vec![format!(
                "The file {filename} was copied to {}",
                path_written.display()
            )]))
        }

        Command::Remove {
            directory,
            filename,
            confirm: token,
        } => {
            let confirmation = confirm(token.as_deref())?;
            let removed = remove_entry(&directory, filename.as_deref(), confirmation)?;
            Ok(ReportCommand::ok(vec![removed.to_string()]))
        }

        Command::Count { directory, walk } => {
            let report = count_files(&directory, walk.to_options(true));
            let mut l_lines = vec![report.to_string()];
            l_lines.extend(format_skipped(report.warnings.len()));
            Ok(ReportCommand::ok(l_lines))
        }

        Command::Find {
            directory,
            pattern,
            pattern_mode,
            walk,
        } => {
            let report =
                find_matching_files(&directory, &pattern, pattern_mode, walk.to_options(true))?;
            let mut l_lines = report.format_lines();
            l_lines.extend(format_skipped(report.warnings.len()));
            Ok(ReportCommand::ok(l_lines))
        }

        Command::CreationDate { full_path } => {
            let date_created = read_creation_date(&full_path)?;
            Ok(ReportCommand::ok(vec![format!(
                "Creation date of {}: {date_created}",
                full_path.display()
            )]))
        }

        Command::RenameFile { full_path, rename } => {
            let confirmation = confirm(rename.confirm.as_deref())?;
            let directive = rename_with_date(&full_path, rename.on_conflict, confirmation)?;
            Ok(ReportCommand::ok(vec![format!(
                "Renamed: {} -> {}",
                directive.path_src.display(),
                directive.path_dst.display()
            )]))
        }

        Command::RenameFolder {
            folder_path,
            recursive,
            rename,
            walk,
        } => {
            let confirmation = confirm(rename.confirm.as_deref())?;
            let mut report = rename_folder_with_date(
                &folder_path,
                walk.to_options(recursive),
                rename.on_conflict,
                confirmation,
            )?;
            let mut l_lines = report.format_lines();
            l_lines.extend(format_skipped(report.warnings.len()));
            l_lines.push(report.to_string());
            Ok(ReportCommand {
                lines: l_lines,
                failure: report.failure.take(),
            })
        }

        Command::Analyze { directory, walk } => {
            let report = analyze_directory(&directory, walk.to_options(false))?;
            let mut l_lines = report.format_lines()?;
            l_lines.extend(format_skipped(report.warnings.len()));
            Ok(ReportCommand::ok(l_lines))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use fileman_fs::{
        EnumFsErrorKind, EnumRenameCollisionStrategy, FsOpError, derive_dated_name,
        read_creation_date,
    };
    use tempfile::TempDir;

    use super::{map_exit_code, run_command};
    use crate::cli::{Command, RenameArgs, WalkArgs};

    #[test]
    fn exit_codes_are_distinct_and_nonzero() {
        let l_kinds = [
            EnumFsErrorKind::NotFound,
            EnumFsErrorKind::PermissionOrIoFailure,
            EnumFsErrorKind::InvalidPattern,
            EnumFsErrorKind::UnsupportedMagnitude,
            EnumFsErrorKind::TargetExists,
            EnumFsErrorKind::NotConfirmed,
        ];
        let mut l_codes: Vec<u8> = l_kinds.iter().map(|k| map_exit_code(*k)).collect();
        assert!(l_codes.iter().all(|c| *c > 2));
        l_codes.sort_unstable();
        l_codes.dedup();
        assert_eq!(l_codes.len(), l_kinds.len());
    }

    #[test]
    fn remove_without_confirmation_changes_nothing() {
        let tmp = TempDir::new().expect("tempdir");
        let path_file = tmp.path().join("keep.txt");
        fs::write(&path_file, "k").expect("write");

        let report = run_command(Command::Remove {
            directory: tmp.path().to_path_buf(),
            filename: Some("keep.txt".to_string()),
            confirm: Some("no".to_string()),
        });
        assert!(matches!(
            report.failure,
            Some(FsOpError::ConfirmationDeclined { .. })
        ));
        assert_eq!(report.exit_code(), 8);
        assert!(path_file.exists());
    }

    #[test]
    fn count_missing_directory_reports_zero() {
        let tmp = TempDir::new().expect("tempdir");
        let path_missing = tmp.path().join("missing");

        let report = run_command(Command::Count {
            directory: path_missing.clone(),
            walk: WalkArgs::default(),
        });
        assert_eq!(report.exit_code(), 0);
        assert_eq!(
            report.lines,
            vec![format!("Files in {}: 0", path_missing.display())]
        );
    }

    #[test]
    fn analyze_prints_sizes_and_total() {
        let tmp = TempDir::new().expect("tempdir");
        fs::write(tmp.path().join("big.bin"), vec![0_u8; 2048]).expect("write");
        fs::create_dir(tmp.path().join("sub")).expect("mkdir");

        let report = run_command(Command::Analyze {
            directory: tmp.path().to_path_buf(),
            walk: WalkArgs::default(),
        });
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.lines, vec!["big.bin 2.00 KB", "sub/ 0 B", "Total: 2.00 KB"]);
    }

    #[test]
    fn find_invalid_pattern_maps_to_its_exit_code() {
        let tmp = TempDir::new().expect("tempdir");
        let report = run_command(Command::Find {
            directory: tmp.path().to_path_buf(),
            pattern: "(".to_string(),
            pattern_mode: fileman_fs::EnumSearchPatternMode::Regex,
            walk: WalkArgs::default(),
        });
        assert_eq!(report.exit_code(), 5);
    }

    #[test]
    fn rename_folder_stopped_batch_keeps_lines_and_fails() {
        let tmp = TempDir::new().expect("tempdir");
        for name in ["a.txt", "b.txt", "c.txt"] {
            fs::write(tmp.path().join(name), name).expect("write");
        }
        let path_a = tmp.path().join("a.txt");
        let path_a_dated =
            derive_dated_name(&path_a, read_creation_date(&path_a).expect("date a"));
        let path_b = tmp.path().join("b.txt");
        let path_b_dated =
            derive_dated_name(&path_b, read_creation_date(&path_b).expect("date b"));
        fs::create_dir(&path_b_dated).expect("block b");

        let report = run_command(Command::RenameFolder {
            folder_path: tmp.path().to_path_buf(),
            recursive: false,
            rename: RenameArgs {
                confirm: Some("yes".to_string()),
                on_conflict: EnumRenameCollisionStrategy::Error,
            },
            walk: WalkArgs::default(),
        });

        assert!(matches!(
            report.failure,
            Some(FsOpError::RenameTargetExists(_))
        ));
        assert_eq!(report.exit_code(), 7);
        assert_eq!(
            report.lines,
            vec![
                format!(
                    "Renamed: {} -> {}",
                    path_a.display(),
                    path_a_dated.display()
                ),
                "[RENAME] renamed=1 not_attempted=1 failed=1".to_string(),
            ]
        );
        assert!(path_a_dated.exists());
        assert!(path_b.exists());
        assert!(tmp.path().join("c.txt").exists());
    }
}
