//! Human-readable byte magnitudes.

use crate::conf::{N_BYTES_PER_UNIT, TUP_SIZE_UNITS};
use crate::error::{FsOpError, Result};

/// Format `size_bytes` as `"{n} B"` or `"{x:.2} KB|MB|GB"`.
///
/// Sizes of 1024⁴ bytes and above are rejected with
/// [`FsOpError::UnsupportedMagnitude`] instead of being mislabelled.
pub fn format_size(size_bytes: u64) -> Result<String> {
    if size_bytes < N_BYTES_PER_UNIT {
        return Ok(format!("{size_bytes} {}", TUP_SIZE_UNITS[0]));
    }

    let mut n_threshold = N_BYTES_PER_UNIT;
    for unit in &TUP_SIZE_UNITS[1..] {
        let n_threshold_next = n_threshold * N_BYTES_PER_UNIT;
        if size_bytes < n_threshold_next {
            let value = size_bytes as f64 / n_threshold as f64;
            return Ok(format!("{value:.2} {unit}"));
        }
        n_threshold = n_threshold_next;
    }

    Err(FsOpError::UnsupportedMagnitude(size_bytes))
}

#[cfg(test)]
mod tests {
    use super::format_size;
    use crate::error::FsOpError;

    #[test]
    fn format_size_unit_boundaries() {
        assert_eq!(format_size(0).unwrap(), "0 B");
        assert_eq!(format_size(1023).unwrap(), "1023 B");
        assert_eq!(format_size(1024).unwrap(), "1.00 KB");
        assert_eq!(format_size(2048).unwrap(), "2.00 KB");
        assert_eq!(format_size(1536).unwrap(), "1.50 KB");
        assert_eq!(format_size(1024 * 1024).unwrap(), "1.00 MB");
        assert_eq!(format_size(5 * 1024 * 1024 * 1024).unwrap(), "5.00 GB");
    }

    #[test]
    fn format_size_rejects_terabytes() {
        let n_tib = 1024_u64.pow(4);
        assert!(format_size(n_tib - 1).is_ok());
        let err = format_size(n_tib).expect_err("out of range");
        assert!(matches!(err, FsOpError::UnsupportedMagnitude(n) if n == n_tib));
    }
}
