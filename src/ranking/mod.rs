mod rank;
mod report;

pub use rank::rank;
pub use report::{GUTTER, render_report, render_table};
