pub mod report;
pub mod time;

pub use report::{format_top_scores, render_score_table, write_score_table};
pub use time::parse_block_timestamp;
