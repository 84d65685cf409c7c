//! Content types and the bundled sample data.

mod samples;
mod types;

pub use samples::{sample_pages, sample_posts};
pub use types::{Page, Post};
