pub mod convert;
mod uni_path;

pub use convert::{convert_from_msw, convert_to_msw, is_msw_path_sep, path_from_string};
pub use uni_path::{UniPath, remove_extension, replace_extension};
