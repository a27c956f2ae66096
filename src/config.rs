//! `key=value` config file parsing.
//!
//! Lines are trimmed with quotes treated as whitespace, so CLI options can be
//! quoted in files without the quotes leaking into values. `#` starts a
//! comment (which also tolerates bash-style hashbangs); `;` is the legacy
//! comment marker.

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::core::Result;
use crate::{UniPath, fs, strutil};

const TRIM_SET: &str = " \t\r\n\"";

/// Parses a single config line, feeding any `key=value` pair to `push`.
/// Comments and blank lines are skipped successfully; a non-empty line
/// without `=` is malformed: a diagnostic goes to stderr and false comes
/// back.
pub fn parse_line(raw: &str, push: &mut impl FnMut(&str, &str), linenum: usize) -> bool {
    let line = strutil::trim(raw, TRIM_SET);

    if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
        return true;
    }

    match line.split_once('=') {
        Some((key, value)) => {
            push(strutil::trim(key, TRIM_SET), strutil::trim(value, TRIM_SET));
            true
        }
        None => {
            eprintln!("Skipping invalid entry (line {}): {}", linenum, line);
            false
        }
    }
}

/// Parses the config file at `path` line by line. A missing file is a
/// silent no-op; read failures are real errors.
pub fn parse_file(path: &UniPath, push: &mut impl FnMut(&str, &str)) -> Result<()> {
    if !fs::exists(path) {
        return Ok(());
    }

    let reader = BufReader::new(File::open(path.as_str())?);
    for (idx, line) in reader.lines().enumerate() {
        parse_line(&line?, push, idx + 1);
    }
    Ok(())
}
