//! studydrill-report — report rendering.
//!
//! Renders a `SessionReport` to Markdown or to a self-contained HTML page;
//! JSON persistence lives on the report type itself in `studydrill-core`.

pub mod html;
pub mod markdown;

pub use html::{generate_html, write_html_report};
pub use markdown::{render_markdown, write_markdown_report};
