pub mod api;
pub mod error;
pub mod formatter;

// Re-export the main public API
pub use api::{format_string, rewrite_file, FileStatus};
pub use error::SqlfixError;
