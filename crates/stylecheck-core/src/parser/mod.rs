//! Stylesheet ingestion.
//!
//! CSS tokenization and parsing is delegated to the `cssparser` crate; this
//! module turns its token stream into the rule/declaration/comment model the
//! lint rules consume.

mod css;

pub use css::{parse_css, scan_comments};
