pub mod errors;
pub mod format;

pub use errors::clean_api_error;
pub use format::{format_with_commas, truncate_chars};
