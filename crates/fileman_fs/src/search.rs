//! Case-insensitive basename search.

use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use crate::error::{FsOpError, Result};
use crate::report::ReportSearch;
use crate::spec::{EnumSearchPatternMode, EnumTraversalMode, SpecWalkOptions};
use crate::walk::walk_entries;

////////////////////////////////////////////////////////////////////////////////
// #region PatternMatching

/// Compiled basename matcher.
#[derive(Debug, Clone)]
pub(crate) enum TypeSearchMatcher {
    /// Lowercased needle.
    Literal(String),
    Glob(GlobMatcher),
    Regex(Regex),
}

impl TypeSearchMatcher {
    pub(crate) fn compile(pattern: &str, rule_pattern: EnumSearchPatternMode) -> Result<Self> {
        let map_err = |message: String| FsOpError::InvalidPattern {
            pattern: pattern.to_string(),
            message,
        };
        match rule_pattern {
            EnumSearchPatternMode::Literal => Ok(Self::Literal(pattern.to_lowercase())),
            EnumSearchPatternMode::Glob => {
                let glob = GlobBuilder::new(pattern)
                    .case_insensitive(true)
                    .literal_separator(true)
                    .build()
                    .map_err(|e| map_err(e.to_string()))?;
                Ok(Self::Glob(glob.compile_matcher()))
            }
            EnumSearchPatternMode::Regex => {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| map_err(e.to_string()))?;
                Ok(Self::Regex(regex))
            }
        }
    }

    pub(crate) fn is_match(&self, name: &str) -> bool {
        match self {
            Self::Literal(needle) => name.to_lowercase().contains(needle.as_str()),
            Self::Glob(matcher) => matcher.is_match(name),
            Self::Regex(regex) => regex.is_match(name),
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

/// Collect every file under `directory` whose basename matches `pattern`.
///
/// Matching is case-insensitive and looks at the basename only. Regex patterns
/// are searched, not anchored. Unreadable subtrees are skipped and listed in
/// [`ReportSearch::warnings`]; the search itself still succeeds.
pub fn find_matching_files<P: AsRef<Path>>(
    directory: P,
    pattern: &str,
    rule_pattern: EnumSearchPatternMode,
    options: SpecWalkOptions,
) -> Result<ReportSearch> {
    let matcher = TypeSearchMatcher::compile(pattern, rule_pattern)?;
    let options = SpecWalkOptions {
        rule_mode: EnumTraversalMode::Recursive,
        ..options
    };
    let traversal = walk_entries(directory, options)?;
    debug!(root = %traversal.root().display(), pattern, "search start");

    let mut report = ReportSearch {
        pattern: pattern.to_string(),
        ..ReportSearch::default()
    };
    for item in traversal {
        match item {
            Ok(entry) => {
                if matcher.is_match(&entry.name) {
                    report.matches.push(entry.path);
                }
            }
            Err(warning) => report.warnings.push(warning),
        }
    }

    if !report.warnings.is_empty() {
        warn!(
            "Search finished with {} skipped path(s); results may be partial",
            report.warnings.len()
        );
    }
    Ok(report)
}
