//! Cross-platform path normalization and lightweight filesystem helpers.
//! Represents every path in one canonical, slash-separated "universal" form
//! and translates to/from native Windows syntax at the edges.
//!
//! ### Overview
//!
//! `path-kit` lets the rest of a program forget which path syntax the host
//! speaks. The [`UniPath`] value type stores the universal form (forward
//! slashes only, with a `/<letter>` drive shorthand for Windows drives) and
//! keeps a cached native rendering for handing to libc-level APIs.
//!
//! **Key ideas**:
//! - **One source of truth**: the universal form; the native form is a
//!   derived cache that can never diverge.
//! - **Refuse to guess**: drive-relative Windows paths (`c:foo`) and rooted
//!   paths without a drive letter are ambiguous; conversion rejects them
//!   with a diagnostic instead of silently mis-resolving.
//! - **Value semantics**: paths are plain values, freely cloned and
//!   compared; comparison follows the host family's case convention.
//! - **Device paths**: `/dev/null` and `/dev/tty` always exist, no matter
//!   what the host filesystem claims.

mod config;
mod core;
pub mod fs;
mod path;
mod strutil;
mod tokenize;

pub use crate::core::{HostStyle, MswStyle, PathStyle, PosixStyle, Result};
pub use crate::path::{
    UniPath, convert_from_msw, convert_to_msw, is_msw_path_sep, path_from_string,
    remove_extension, replace_extension,
};

pub use crate::config::{parse_file, parse_line};
pub use crate::strutil::{MSW_FNAME_ILLEGAL, parse_boolean, replace_char_set, trim};
pub use crate::tokenize::Tokenizer;
