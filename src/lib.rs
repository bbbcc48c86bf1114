pub mod config;
pub mod core;
pub mod store;

pub use crate::core::spacing::{fix_spacing, fix_spacing_batch, fix_spacing_str, fix_spacing_str_batch};
pub use crate::core::unicode::is_korean;
pub use crate::core::utf8::{decode, encode, Codepoint, REPLACEMENT_CHARACTER};
