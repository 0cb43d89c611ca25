pub mod constants;
pub mod text;

pub use constants::*;
pub use text::{collapse_whitespace, safe_truncate_chars};
