//! Fixed user-facing texts shown in the message area and table.

pub const PROMPT_TOO_SHORT: &str = "Enter at least 2 characters to search.";
pub const SEARCHING: &str = "Searching…";
pub const UNEXPECTED_FORMAT: &str = "Unexpected response format.";
pub const NOTICE_FALLBACK: &str = "No data.";
pub const NOTHING_FOUND: &str = "Nothing found";
pub const OPEN_LINK_LABEL: &str = "Open";

pub fn found_summary(count: usize) -> String {
    format!("Found: {count}")
}

pub fn request_error(description: &str) -> String {
    format!("Request error: {description}")
}
