//! Version token extraction
//!
//! Finds the first `VERSION ... x.y.z` declaration in raw file content. Each
//! dotted component is a single ASCII digit, so `1.22.3` is not found.
//! Content need not be UTF-8: an invalid byte counts as one character.

use std::sync::LazyLock;

use regex::bytes::Regex;

/// Pattern locating the version declaration
pub const VERSION_PATTERN: &str = r"VERSION.+(\d.\d.\d)";

/// [`VERSION_PATTERN`] as compiled: `\d` is ASCII-only and `.` matches one
/// character or one invalid byte, never a newline.
const COMPILED_PATTERN: &str = concat!(
    r"VERSION(?-u:[^\n])+",
    r"((?-u:\d)(?:.|(?-u:[^\n]))(?-u:\d)(?:.|(?-u:[^\n]))(?-u:\d))"
);

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMPILED_PATTERN).expect("COMPILED_PATTERN is a valid regex"));

/// Returns the version token in `source`, or a diagnostic naming
/// [`VERSION_PATTERN`] when there is none.
///
/// Never fails: a missing declaration is reported as data.
pub fn extract_version(source: &[u8]) -> String {
    match VERSION_RE.captures(source).and_then(|caps| caps.get(1)) {
        Some(version) => String::from_utf8_lossy(version.as_bytes()).into_owned(),
        None => no_match_message(),
    }
}

/// Diagnostic returned when no version declaration is present
pub fn no_match_message() -> String {
    format!("ERROR - no match found for {VERSION_PATTERN}. Did we change format?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::go_const("package sendgrid\n\nconst VERSION = \"1.2.3\"\n", "1.2.3")]
    #[case::var_block("var (\n\tVERSION string = \"3.1.0\"\n)", "3.1.0")]
    #[case::first_declaration_wins("VERSION = \"1.0.0\"\nVERSION = \"2.0.0\"\n", "1.0.0")]
    #[case::loose_separators("VERSION = \"4-5-6\"", "4-5-6")]
    #[case::suffix_ignored("VERSION = \"1.2.3-beta\"", "1.2.3")]
    #[case::multibyte_separators("VERSION = 1é2é3", "1é2é3")]
    fn extract_version_finds_token(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(extract_version(source.as_bytes()), expected);
    }

    #[rstest]
    #[case::invalid_byte_before_version(b"VERSION \xff = \"1.2.3\"", "1.2.3")]
    #[case::invalid_byte_on_previous_line(b"\xff\xfe\nVERSION = \"7.8.9\"", "7.8.9")]
    #[case::invalid_byte_separators(b"VERSION 4\xff5\xfe6", "4\u{fffd}5\u{fffd}6")]
    fn extract_version_reads_non_utf8_content(#[case] source: &[u8], #[case] expected: &str) {
        assert_eq!(extract_version(source), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_marker("const Version = \"1.2.3\"")]
    #[case::no_digits("VERSION = \"unknown\"")]
    #[case::marker_after_version("1.2.3 VERSION")]
    #[case::non_ascii_digits("VERSION = \"١.٢.٣\"")]
    #[case::fullwidth_digits("VERSION = \"１.２.３\"")]
    fn extract_version_reports_missing_declaration(#[case] source: &str) {
        let result = extract_version(source.as_bytes());

        assert!(result.contains(VERSION_PATTERN));
        assert_eq!(result, no_match_message());
    }

    #[test]
    fn extract_version_matches_only_single_digit_components() {
        // The last possible match is taken by the greedy `.+`.
        assert_eq!(extract_version(b"VERSION = \"10.2.3\""), "0.2.3");
        assert_eq!(extract_version(b"VERSION = \"1.22.3\""), no_match_message());
    }

    #[test]
    fn extract_version_is_deterministic() {
        let source = b"const VERSION = \"5.4.3\"";

        assert_eq!(extract_version(source), extract_version(source));
        assert_eq!(extract_version(b""), extract_version(b""));
    }
}
