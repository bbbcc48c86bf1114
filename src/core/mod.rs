//! UTF-8 코덱과 띄어쓰기 보정 엔진

pub mod spacing;
pub mod unicode;
pub mod utf8;

pub use spacing::{fix_spacing, fix_spacing_batch, fix_spacing_str, fix_spacing_str_batch, transform};
pub use unicode::is_korean;
pub use utf8::{decode, encode, Codepoint, REPLACEMENT_CHARACTER};
