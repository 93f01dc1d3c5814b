//! Error types
//!
//! Three tiers: document-fatal conditions ([`FatalCondition`]), catalog
//! misuse by the calling engine ([`CatalogError`]), and configuration
//! loading failures ([`ConfigError`]). [`VosiError`] unifies them.

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::diagnostics::{Code, Diagnostic};

/// Misuse of the catalog by the calling engine
///
/// These are programming errors, never document-quality conditions.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum CatalogError {
    #[error("unknown condition code '{0}'")]
    #[diagnostic(
        code(vosi::unknown_code),
        help("codes run from W01 to W35 and E01 to E09")
    )]
    UnknownCode(String),

    #[error("'{0}' is not a condition code")]
    #[diagnostic(
        code(vosi::malformed_code),
        help("a code is W or E followed by two digits, e.g. W01")
    )]
    MalformedCode(String),

    #[error("{code} takes {expected} argument(s), got {found}")]
    #[diagnostic(code(vosi::argument_count))]
    ArgumentCount {
        code: Code,
        expected: usize,
        found: usize,
    },
}

/// A fatal condition raised against a document
///
/// Matched as a domain condition through [`VosiError::Fatal`] and as a
/// generic value failure through `InvalidValue::from`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .diagnostic.formatted())]
pub struct FatalCondition {
    diagnostic: Diagnostic,
}

impl FatalCondition {
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }

    pub fn condition_code(&self) -> Code {
        self.diagnostic.code
    }

    pub fn message(&self) -> &str {
        &self.diagnostic.message
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }

    /// True for `E` codes; warnings escalated by the verify policy keep
    /// their warning classification
    pub fn is_value_error(&self) -> bool {
        self.diagnostic.is_value_error()
    }
}

impl MietteDiagnostic for FatalCondition {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!("vosi::{}", self.diagnostic.code)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(format!(
            "run `vosi-diag explain {}` for details",
            self.diagnostic.code
        )))
    }
}

/// A value in the document failed validation
///
/// The coarse-grained view of a fatal condition, for callers that do not
/// care which rule was broken.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
#[error("invalid value: {message}")]
#[diagnostic(code(vosi::invalid_value))]
pub struct InvalidValue {
    pub message: String,
    pub source_condition: Option<Code>,
}

impl From<FatalCondition> for InvalidValue {
    fn from(fatal: FatalCondition) -> Self {
        Self {
            message: fatal.diagnostic.formatted(),
            source_condition: Some(fatal.diagnostic.code),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error, MietteDiagnostic)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    #[diagnostic(code(vosi::config::io))]
    Io { path: String, message: String },

    #[error("failed to parse configuration: {0}")]
    #[diagnostic(code(vosi::config::parse))]
    Parse(String),

    #[error("failed to serialize configuration: {0}")]
    #[diagnostic(code(vosi::config::serialize))]
    Serialize(String),
}

/// Any error surfaced by this crate
#[derive(Debug, Error, MietteDiagnostic)]
pub enum VosiError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Fatal(#[from] FatalCondition),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("not a rendered diagnostic line: {0}")]
    #[diagnostic(
        code(vosi::unrecognized_line),
        help("expected `source:line:column: CODE: message`")
    )]
    UnrecognizedLine(String),

    #[error("{0}")]
    #[diagnostic(code(vosi::io))]
    Io(String),
}

impl VosiError {
    /// True when this error stems from a document value, not from misuse
    pub fn is_value_error(&self) -> bool {
        match self {
            VosiError::Fatal(fatal) => fatal.is_value_error(),
            _ => false,
        }
    }

    /// The fatal condition, if this error is one
    pub fn as_fatal(&self) -> Option<&FatalCondition> {
        match self {
            VosiError::Fatal(fatal) => Some(fatal),
            _ => None,
        }
    }

    /// The coarse invalid-value view, if this error is a document failure
    ///
    /// Agrees with [`VosiError::is_value_error`]: an escalated warning is
    /// handed back unchanged.
    pub fn into_invalid_value(self) -> Result<InvalidValue, VosiError> {
        match self {
            VosiError::Fatal(fatal) if fatal.is_value_error() => Ok(fatal.into()),
            other => Err(other),
        }
    }
}

impl From<std::io::Error> for VosiError {
    fn from(e: std::io::Error) -> Self {
        VosiError::Io(e.to_string())
    }
}

/// Result alias for crate operations
pub type Result<T, E = VosiError> = std::result::Result<T, E>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
