//! Result extraction from acquired pages
//!
//! `collect` walks the result containers of a page, `extract` turns one
//! container into a record, and `normalize` makes its link absolute.

pub mod collector;
pub mod extractor;
pub mod normalize;

pub use collector::collect;
pub use extractor::extract;
pub use normalize::{normalize_link, normalize_record};
