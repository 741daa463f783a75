//! Engine constants.

/// Token a caller must supply (case-insensitive) to confirm a destructive command.
pub const C_CONFIRM_TOKEN: &str = "yes";
/// `chrono` format of the date suffix appended by the date namer.
pub const C_DATE_FORMAT: &str = "%Y-%m-%d";
/// Separator placed between the original stem and the date suffix.
pub const C_DATE_SEPARATOR: &str = "_";
/// Environment variable read by the CLI for its log filter.
pub const C_ENV_LOG_FILTER: &str = "FILEMAN_LOG";
/// Log level used when neither the environment nor flags set one.
pub const C_LOG_LEVEL_DEFAULT: &str = "warn";

/// Bytes per formatting step.
pub const N_BYTES_PER_UNIT: u64 = 1024;
/// Unit labels in ascending order; anything past the last one is unsupported.
pub const TUP_SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Upper bound on `_N` suffixes tried before a rename gives up.
pub const N_RENAME_SUFFIX_MAX: usize = 10_000;
