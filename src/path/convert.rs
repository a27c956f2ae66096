//! Conversions between the universal path form (forward slashes only, with a
//! `/<letter>` drive shorthand) and the Windows-native form (backslashes with
//! an `X:` drive prefix).
//!
//! Failure is reported through `Result`; the messages are written for humans
//! since callers surface them on stderr verbatim. The converters themselves
//! never print.

use anyhow::anyhow;

use crate::core::Result;

/// True for either separator accepted in Windows-syntax input.
pub fn is_msw_path_sep(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Converts a Windows-syntax path (possibly already slash-mixed) into
/// universal form.
///
/// Drive prefixes become the `/<letter>` shorthand, lowercased. A bare `c:`
/// converts to `/c`. Paths rooted without a drive (`\foo`, or `/foo` where
/// `foo` is not a drive shorthand) are ambiguous on Windows and rejected.
/// Drive-relative paths (`c:foo`) depend on Windows' per-drive current
/// directory, which has no portable equivalent, so they are rejected rather
/// than guessed at. A leading double separator marks a network name and
/// passes through with only slash direction fixed.
pub fn convert_from_msw(msw_path: &str) -> Result<String> {
    let src = msw_path.as_bytes();
    if src.is_empty() {
        return Ok(String::new());
    }

    if src[0].is_ascii_alphanumeric() && src.get(1) == Some(&b':') {
        let mut result = String::with_capacity(msw_path.len());
        result.push('/');
        result.push(src[0].to_ascii_lowercase() as char);

        // `c:` by itself maps to `/c`, useful for internal path parsing.
        let rest = &msw_path[2..];
        if rest.is_empty() {
            return Ok(result);
        }

        if !is_msw_path_sep(rest.as_bytes()[0] as char) {
            // Windows keeps a current directory per drive; resolving `c:foo`
            // against it cannot be replicated on any other OS.
            return Err(anyhow!(
                "Invalid msw-specific non-rooted path with drive letter: {}\n\
                 Non-rooted paths of this type are not supported due to the non-standard\n\
                 and non-portable nature of the specification.",
                msw_path
            ));
        }

        result.push_str(&rest.replace('\\', "/"));
        return Ok(result);
    }

    if src[0] == b'\\' && src.get(1) != Some(&b'\\') {
        return Err(rooted_without_drive(msw_path));
    }

    if src[0] == b'/' && src.get(1) != Some(&b'/') {
        // Allow the formats `/c` and `/c/...` and nothing else. Windows
        // drives are a-z and 0-9 only, so the ASCII check also rejects any
        // unicode char (which is what we want).
        let drive_ok = src.get(1).is_some_and(|c| c.is_ascii_alphanumeric())
            && matches!(src.get(2), None | Some(&b'/'));
        if !drive_ok {
            return Err(rooted_without_drive(msw_path));
        }
    }

    Ok(msw_path.replace('\\', "/"))
}

fn rooted_without_drive(msw_path: &str) -> anyhow::Error {
    anyhow!(
        "Invalid path layout: {}\n\
         Rooted paths without drive specification are not allowed.\n\
         Please explicitly specify the drive letter in the path.",
        msw_path
    )
}

/// Converts universal form into Windows-native syntax.
///
/// `/c/...` becomes `C:\...`, a redundant leading `./` (or `.\`) is dropped
/// and every remaining `/` becomes `\`. Each rewrite maps one byte to one
/// byte, so the output can never outgrow the input; if it does the conversion
/// itself is broken and the process aborts.
pub fn convert_to_msw(uni_path: &str) -> String {
    if uni_path.is_empty() {
        return String::new();
    }

    let src = uni_path.as_bytes();
    let mut result = String::with_capacity(uni_path.len());
    let mut rest = uni_path;

    if src[0] == b'/' && src.get(1).is_some_and(|c| c.is_ascii_alphanumeric()) && src.get(2) == Some(&b'/') {
        result.push(src[1].to_ascii_uppercase() as char);
        result.push(':');
        rest = &uni_path[2..];
    } else if src[0] == b'.' && matches!(src.get(1), Some(&b'/') | Some(&b'\\')) {
        rest = &uni_path[2..];
    }

    result.push_str(&rest.replace('/', "\\"));

    assert!(
        result.len() <= uni_path.len(),
        "native form longer than universal form: {:?} -> {:?}",
        uni_path,
        result
    );
    result
}

/// Creates universal form from an incoming user-provided string, performing
/// sanity checks on the input.
///
/// A string already starting with `/` is assumed to be in universal form and
/// is copied verbatim; anything else goes through [`convert_from_msw`]. One
/// trailing separator is stripped if present.
pub fn path_from_string(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let mut uni = if raw.starts_with('/') {
        raw.to_owned()
    } else {
        convert_from_msw(raw)?
    };

    if uni.ends_with('/') {
        uni.truncate(uni.len() - 1);
    }
    Ok(uni)
}

#[cfg(test)]
mod tests {
    use super::*;

    mod from_msw {
        use super::*;

        #[test]
        fn test_empty_input() {
            assert_eq!(convert_from_msw("").unwrap(), "");
        }

        #[test]
        fn test_drive_letter_shorthand() {
            assert_eq!(convert_from_msw("c:").unwrap(), "/c");
            assert_eq!(convert_from_msw("C:").unwrap(), "/c");
            assert_eq!(convert_from_msw("0:").unwrap(), "/0");
        }

        #[test]
        fn test_drive_rooted_path() {
            assert_eq!(convert_from_msw("c:\\one").unwrap(), "/c/one");
            assert_eq!(convert_from_msw("C:\\one\\two\\three").unwrap(), "/c/one/two/three");
            assert_eq!(convert_from_msw("c:/mixed\\seps").unwrap(), "/c/mixed/seps");
        }

        #[test]
        fn test_drive_relative_rejected() {
            assert!(convert_from_msw("c:some\\dir").is_err());
            assert!(convert_from_msw("C:relative").is_err());
        }

        #[test]
        fn test_single_backslash_root_rejected() {
            assert!(convert_from_msw("\\onlyroot").is_err());
        }

        #[test]
        fn test_single_slash_root_without_drive_rejected() {
            assert!(convert_from_msw("/woombey/to").is_err());
            assert!(convert_from_msw("/").is_err());
        }

        #[test]
        fn test_slash_drive_shorthand_accepted() {
            assert_eq!(convert_from_msw("/c").unwrap(), "/c");
            assert_eq!(convert_from_msw("/c/woombey/to").unwrap(), "/c/woombey/to");
        }

        #[test]
        fn test_network_uri_passthrough() {
            assert_eq!(convert_from_msw("\\\\server\\share").unwrap(), "//server/share");
            assert_eq!(convert_from_msw("//server/share").unwrap(), "//server/share");
        }

        #[test]
        fn test_plain_relative_path() {
            assert_eq!(convert_from_msw("some\\dir\\file.txt").unwrap(), "some/dir/file.txt");
            assert_eq!(convert_from_msw("already/unix").unwrap(), "already/unix");
        }

        #[test]
        fn test_unicode_components_pass_through() {
            assert_eq!(convert_from_msw("c:\\папка\\файл").unwrap(), "/c/папка/файл");
        }
    }

    mod to_msw {
        use super::*;

        #[test]
        fn test_empty_input() {
            assert_eq!(convert_to_msw(""), "");
        }

        #[test]
        fn test_drive_form() {
            assert_eq!(convert_to_msw("/c/one"), "C:\\one");
            assert_eq!(convert_to_msw("/c/one/two"), "C:\\one\\two");
        }

        #[test]
        fn test_bare_drive_is_not_drive_form() {
            // `/c` lacks the trailing separator required by the drive
            // pattern, so it converts as a plain path.
            assert_eq!(convert_to_msw("/c"), "\\c");
        }

        #[test]
        fn test_current_dir_prefix_stripped() {
            assert_eq!(convert_to_msw("./rel/file"), "rel\\file");
            assert_eq!(convert_to_msw(".\\rel"), "rel");
        }

        #[test]
        fn test_relative_path() {
            assert_eq!(convert_to_msw("rel/file.txt"), "rel\\file.txt");
        }

        #[test]
        fn test_output_never_longer_than_input() {
            for uni in ["/c/one/two", "rel/a/b", "./x", "/0/y", "//net/share"] {
                assert!(convert_to_msw(uni).len() <= uni.len());
            }
        }

        #[test]
        fn test_round_trip_idempotence() {
            // For a universal path with a drive letter, conversion is
            // idempotent after the first normalization.
            for uni in ["/c/one", "/d/two/three", "/0/weird"] {
                let native = convert_to_msw(uni);
                let back = convert_from_msw(&native).unwrap();
                assert_eq!(convert_to_msw(&back), native);
            }
        }
    }

    mod from_string {
        use super::*;

        #[test]
        fn test_empty() {
            assert_eq!(path_from_string("").unwrap(), "");
        }

        #[test]
        fn test_leading_slash_copied_verbatim() {
            assert_eq!(path_from_string("/c/one/two").unwrap(), "/c/one/two");
        }

        #[test]
        fn test_drive_shorthand() {
            assert_eq!(path_from_string("c:").unwrap(), "/c");
            assert_eq!(path_from_string("c:\\").unwrap(), "/c");
            assert_eq!(path_from_string("c:\\one").unwrap(), "/c/one");
        }

        #[test]
        fn test_separator_idempotence() {
            let uni = path_from_string("c:\\one\\two\\three").unwrap();
            assert_eq!(uni, "/c/one/two/three");
            assert!(!uni.contains('\\'));
        }

        #[test]
        fn test_trailing_separator_stripped() {
            assert_eq!(path_from_string("/c/one/").unwrap(), "/c/one");
            assert_eq!(path_from_string("rel\\dir\\").unwrap(), "rel/dir");
        }

        #[test]
        fn test_ambiguous_input_is_error() {
            assert!(path_from_string("\\onlyroot").is_err());
        }
    }
}
