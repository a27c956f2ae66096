//! Small string helpers that std's `str` methods do not already cover.

/// Filename illegals on Windows, for use with [`replace_char_set`].
pub const MSW_FNAME_ILLEGAL: &str = "\\/:?\"<>|";

/// Trims every character of `delims` from both ends of `s`.
///
/// The delimiter set is caller-chosen so that, e.g., the config parser can
/// treat quotes as whitespace.
pub fn trim<'a>(s: &'a str, delims: &str) -> &'a str {
    s.trim_matches(|c| delims.contains(c))
}

/// Parses the loose boolean vocabulary accepted in config files:
/// `0`/`1`, `true`/`false`, `on`/`off` (ASCII case-insensitive).
/// Anything else is `None`.
pub fn parse_boolean(s: &str) -> Option<bool> {
    match s {
        "0" => return Some(false),
        "1" => return Some(true),
        _ => {}
    }
    if s.eq_ignore_ascii_case("true") || s.eq_ignore_ascii_case("on") {
        return Some(true);
    }
    if s.eq_ignore_ascii_case("false") || s.eq_ignore_ascii_case("off") {
        return Some(false);
    }
    None
}

/// Replaces every character of `set` found in `s` with `replacement`.
/// Typical use: `replace_char_set(name, MSW_FNAME_ILLEGAL, '_')` to build a
/// filename that is legal on any host.
pub fn replace_char_set(s: &str, set: &str, replacement: char) -> String {
    s.chars()
        .map(|c| if set.contains(c) { replacement } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_custom_delims() {
        assert_eq!(trim("  \"quoted value\" \t", " \t\r\n\""), "quoted value");
        assert_eq!(trim("plain", " \t"), "plain");
        assert_eq!(trim("\t\t", " \t"), "");
    }

    #[test]
    fn test_parse_boolean() {
        assert_eq!(parse_boolean("1"), Some(true));
        assert_eq!(parse_boolean("0"), Some(false));
        assert_eq!(parse_boolean("true"), Some(true));
        assert_eq!(parse_boolean("On"), Some(true));
        assert_eq!(parse_boolean("FALSE"), Some(false));
        assert_eq!(parse_boolean("off"), Some(false));
        assert_eq!(parse_boolean("2"), None);
        assert_eq!(parse_boolean("yep"), None);
        assert_eq!(parse_boolean(""), None);
    }

    #[test]
    fn test_replace_char_set() {
        assert_eq!(
            replace_char_set("a/b\\c:d?e", MSW_FNAME_ILLEGAL, '_'),
            "a_b_c_d_e"
        );
        assert_eq!(replace_char_set("clean-name", MSW_FNAME_ILLEGAL, '_'), "clean-name");
    }
}
