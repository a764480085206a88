//! Diagnostics and report aggregation.

mod diagnostics;
mod reporter;

pub use diagnostics::{Diagnostic, Severity};
pub use reporter::Report;
