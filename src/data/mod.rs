//! Input-side helpers: rank-file loading and name selection.

pub mod load;
pub mod search;

pub use load::{read_files, read_rank_file};
pub use search::{parse_selection, search_names};
