use std::cmp::Ordering;

use crate::path::convert;

/// Host-family path behavior: how universal form renders natively and how two
/// paths compare. Exactly two variants exist; the platform picks one at
/// compile time via the `HostStyle` alias, but both are always compiled so
/// either family can be exercised from any host.
pub trait PathStyle {
    /// Renders universal form into the host family's native syntax.
    fn to_native(uni: &str) -> String;

    /// Ordering of two universal-form paths under this host family's
    /// filesystem case semantics.
    fn compare(a: &str, b: &str) -> Ordering;
}

/// Windows family: backslash separators, `X:` drive prefix, ASCII
/// case-insensitive comparison.
pub struct MswStyle;

/// POSIX family: native form is the universal form itself, comparison is
/// byte-exact.
pub struct PosixStyle;

impl PathStyle for MswStyle {
    fn to_native(uni: &str) -> String {
        convert::convert_to_msw(uni)
    }

    fn compare(a: &str, b: &str) -> Ordering {
        a.bytes()
            .map(|c| c.to_ascii_lowercase())
            .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
    }
}

impl PathStyle for PosixStyle {
    fn to_native(uni: &str) -> String {
        uni.to_owned()
    }

    fn compare(a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

#[cfg(windows)]
pub type HostStyle = MswStyle;

#[cfg(not(windows))]
pub type HostStyle = PosixStyle;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msw_compare_ignores_ascii_case() {
        assert_eq!(MswStyle::compare("/C/One", "/c/one"), Ordering::Equal);
        assert_eq!(MswStyle::compare("/c/a", "/c/b"), Ordering::Less);
    }

    #[test]
    fn test_posix_compare_is_case_sensitive() {
        assert_ne!(PosixStyle::compare("/C/One", "/c/one"), Ordering::Equal);
        assert_eq!(PosixStyle::compare("/c/one", "/c/one"), Ordering::Equal);
    }

    #[test]
    fn test_posix_native_is_identity() {
        assert_eq!(PosixStyle::to_native("/c/one/two"), "/c/one/two");
    }

    #[test]
    fn test_msw_native_uses_drive_prefix() {
        assert_eq!(MswStyle::to_native("/c/one/two"), "C:\\one\\two");
    }
}
