//! VOSI validation conditions
//!
//! A catalog of the warnings and fatal conditions a validator raises while
//! checking VOSI documents (table sets, capabilities, availability), plus
//! the machinery to render, report and document them.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod docs;
pub mod error;
pub mod report;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{lookup, Condition, NO_ARGS};
    pub use crate::config::{ReportConfig, Verify};
    pub use crate::diagnostics::{Code, Diagnostic, DiagnosticBag, Position, Severity};
    pub use crate::error::{CatalogError, FatalCondition, InvalidValue, VosiError};
    pub use crate::report::Reporter;
}
