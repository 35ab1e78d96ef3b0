//! Presentation of derived address information.
//!
//! - [`report`] - Fixed multi-line text report
//! - [`html`] - HTML escaping with line breaks
//! - [`json`] - JSON output

mod html;
mod json;
mod report;

pub use html::to_html;
pub use json::to_json;
pub use report::describe;
