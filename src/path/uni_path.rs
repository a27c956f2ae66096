//! The `UniPath` value type: a filesystem path held in universal form with a
//! cached native-form rendering.

use std::cmp::Ordering;
use std::fmt;

use crate::core::{HostStyle, PathStyle};
use crate::path::convert;

const SEPARATOR: char = '/';

/// A filesystem path in canonical universal form.
///
/// ### Internal state
///
/// * `uni` — the universal form: forward slashes only, optional `/<letter>`
///   drive shorthand, no trailing separator. This is the sole source of
///   truth.
/// * `native` — the host platform's rendering of `uni` (backslashes and an
///   `X:` prefix on Windows, identical to `uni` on POSIX). Derived cache,
///   recomputed on every mutation; it never diverges from `uni`.
///
/// ### Invariants
///
/// 1. `uni` never ends with a trailing separator (trimmed at construction).
/// 2. `uni` contains no backslash.
/// 3. Ambiguous input (drive-relative, or rooted without a drive shorthand)
///    constructs the *empty* path after writing a diagnostic to stderr.
///    The empty path is the only failure signal.
/// 4. A leading `//` marks a network name and passes through untouched apart
///    from slash direction.
///
/// ### Lifecycle
///
/// Plain value type: constructed implicitly from strings, cloned and assigned
/// freely, no shared ownership. Not internally synchronized; treat an
/// instance as single-owner or synchronize externally.
///
/// ### Example
///
/// ```
/// use path_kit::UniPath;
///
/// let mut p = UniPath::from("c:\\games\\doom");
/// assert_eq!(p.uni_str(), "/c/games/doom");
///
/// p.append("wads");
/// assert_eq!(p.uni_str(), "/c/games/doom/wads");
/// assert_eq!(p.filename(), "wads");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UniPath {
    uni: String,    // universal form, source of truth
    native: String, // derived, regenerated by commit()
}

impl UniPath {
    pub fn new() -> UniPath {
        UniPath::default()
    }

    pub fn is_empty(&self) -> bool {
        self.uni.is_empty()
    }

    pub fn clear(&mut self) {
        self.uni.clear();
        self.native.clear();
    }

    /// The universal form: forward slashes, `/<letter>` drive shorthand.
    pub fn uni_str(&self) -> &str {
        &self.uni
    }

    /// The native form expected by the host's libc and filesystem calls.
    pub fn as_str(&self) -> &str {
        &self.native
    }

    /// Appends a path component, inserting exactly one separator.
    ///
    /// A component that normalizes to a rooted path replaces this path
    /// entirely (joining with an absolute path discards the prefix). Empty
    /// or ambiguous components are ignored.
    pub fn append(&mut self, comp: &str) -> &mut UniPath {
        if comp.is_empty() {
            return self;
        }
        let unicomp = match convert::path_from_string(comp) {
            Ok(uni) => uni,
            Err(e) => {
                eprintln!("{e}");
                return self;
            }
        };
        if unicomp.is_empty() {
            return self;
        }

        if unicomp.starts_with(SEPARATOR) {
            // rooted component overrides the original path completely.
            self.uni = unicomp;
        } else {
            if !self.uni.is_empty() && !self.uni.ends_with(SEPARATOR) {
                self.uni.push(SEPARATOR);
            }
            self.uni.push_str(&unicomp);
        }
        self.commit();
        self
    }

    /// Non-mutating [`append`](UniPath::append).
    pub fn join(&self, comp: &str) -> UniPath {
        let mut joined = self.clone();
        joined.append(comp);
        joined
    }

    /// Raw, non-interpreting concatenation onto both forms.
    ///
    /// Mimics `std::filesystem` in performing no platform-specific
    /// interpretation: no separator is inserted and backslashes in `src` are
    /// treated as literal filename bytes. Intended for suffix work like
    /// `path.concat(".bak")`.
    pub fn concat(&mut self, src: &str) -> &mut UniPath {
        self.uni.push_str(src);
        self.native.push_str(src);
        self
    }

    /// Edits the universal form in place through `f`, then regenerates the
    /// native cache. Every direct buffer mutation goes through here so the
    /// two forms cannot diverge.
    pub fn modify_uni(&mut self, f: impl FnOnce(&mut String)) {
        f(&mut self.uni);
        self.commit();
    }

    /// Substring from the last `.` to the end; empty if the path has no dot.
    pub fn extension(&self) -> &str {
        match self.uni.rfind('.') {
            Some(pos) => &self.uni[pos..],
            None => "",
        }
    }

    /// Substring after the last separator; the whole path if there is none.
    pub fn filename(&self) -> &str {
        match self.uni.rfind(SEPARATOR) {
            Some(pos) => &self.uni[pos + 1..],
            None => &self.uni,
        }
    }

    /// Everything before the last separator; the path itself if there is
    /// none.
    pub fn parent_path(&self) -> UniPath {
        match self.uni.rfind(SEPARATOR) {
            Some(pos) => UniPath::from(&self.uni[..pos]),
            None => self.clone(),
        }
    }

    /// POSIX-style alias for `parent_path()`.
    pub fn dirname(&self) -> UniPath {
        self.parent_path()
    }

    pub fn is_absolute(&self) -> bool {
        self.uni.starts_with(SEPARATOR)
    }

    /// True for the reserved device paths `/dev/null` and `/dev/tty` and
    /// anything nested under them. Device paths are reported as existing
    /// without ever querying the real filesystem.
    pub fn is_device(&self) -> bool {
        if !self.uni.starts_with('/') {
            return false;
        }
        self.uni == "/dev/null"
            || self.uni == "/dev/tty"
            || self.uni.starts_with("/dev/null/")
            || self.uni.starts_with("/dev/tty/")
    }

    /// Immutable extension replacement; intentionally differs from the
    /// mutable STL flavor because nobody expects mutable string operations
    /// in this context.
    pub fn replace_extension(&self, extension: &str) -> UniPath {
        UniPath::from(replace_extension(&self.uni, extension))
    }

    /// Removes `ext_to_remove` only when the path currently ends with it
    /// exactly; otherwise the path is returned unchanged.
    pub fn remove_extension(&self, ext_to_remove: &str) -> UniPath {
        UniPath::from(remove_extension(&self.uni, ext_to_remove))
    }

    fn commit(&mut self) {
        self.native = HostStyle::to_native(&self.uni);
    }
}

/// Replaces the extension of a plain universal-form string. Extension
/// replacement is platform-agnostic, so no `UniPath` needs to be involved.
///
/// STL conformance:
///  * appends the extension even if none previously existed;
///  * inserts a dot automatically if the caller omitted it;
///  * an empty extension removes the old one and appends nothing.
pub fn replace_extension(path: &str, extension: &str) -> String {
    let mut result = match path.rfind('.') {
        Some(pos) => path[..pos].to_owned(),
        None => path.to_owned(),
    };
    if !extension.is_empty() {
        if !extension.starts_with('.') {
            result.push('.');
        }
        result.push_str(extension);
    }
    result
}

/// Strips `ext_to_remove` from the end of `path` if present; an empty
/// `ext_to_remove` strips whatever extension is there.
pub fn remove_extension(path: &str, ext_to_remove: &str) -> String {
    if ext_to_remove.is_empty() {
        return replace_extension(path, "");
    }
    match path.strip_suffix(ext_to_remove) {
        Some(stripped) => stripped.to_owned(),
        None => path.to_owned(),
    }
}

impl From<&str> for UniPath {
    /// Implicit construction from a raw platform string. Ambiguous input
    /// yields the empty path after a stderr diagnostic; callers detect
    /// failure by checking `is_empty()`.
    fn from(src: &str) -> UniPath {
        let uni = match convert::path_from_string(src) {
            Ok(uni) => uni,
            Err(e) => {
                eprintln!("{e}");
                String::new()
            }
        };
        let native = HostStyle::to_native(&uni);
        UniPath { uni, native }
    }
}

impl From<String> for UniPath {
    fn from(src: String) -> UniPath {
        UniPath::from(src.as_str())
    }
}

impl From<&String> for UniPath {
    fn from(src: &String) -> UniPath {
        UniPath::from(src.as_str())
    }
}

impl From<&std::path::Path> for UniPath {
    fn from(src: &std::path::Path) -> UniPath {
        UniPath::from(src.to_string_lossy().as_ref())
    }
}

impl fmt::Display for UniPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.native)
    }
}

impl PartialEq for UniPath {
    fn eq(&self, other: &UniPath) -> bool {
        HostStyle::compare(&self.uni, &other.uni) == Ordering::Equal
    }
}

impl Eq for UniPath {}

impl PartialOrd for UniPath {
    fn partial_cmp(&self, other: &UniPath) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UniPath {
    fn cmp(&self, other: &UniPath) -> Ordering {
        HostStyle::compare(&self.uni, &other.uni)
    }
}

impl PartialEq<&str> for UniPath {
    fn eq(&self, other: &&str) -> bool {
        *self == UniPath::from(*other)
    }
}

impl PartialEq<UniPath> for &str {
    fn eq(&self, other: &UniPath) -> bool {
        other == self
    }
}
