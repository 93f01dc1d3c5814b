//! Emitted VOSI diagnostics
//!
//! This module provides the values a validator produces while walking a
//! document: stable condition codes, document positions, rendered
//! diagnostic instances and ordered collections of them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;

pub mod error_codes;
pub use error_codes::*;

/// Severity class of a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Recoverable schema non-conformance; validation continues
    Warning,
    /// The document cannot be modeled further; validation aborts
    Fatal,
}

impl Severity {
    /// Letter that prefixes codes of this class
    pub const fn prefix(self) -> char {
        match self {
            Severity::Warning => 'W',
            Severity::Fatal => 'E',
        }
    }

    /// Fatal conditions double as invalid-value failures
    pub const fn is_value_error(self) -> bool {
        matches!(self, Severity::Fatal)
    }

    /// Lowercase label used in human-readable output
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Fatal => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A condition code such as `W01` or `E07`
///
/// Codes order warnings before errors, then by ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Code {
    severity: Severity,
    ordinal: u8,
}

impl Code {
    /// Warning code `Wnn`
    pub const fn warning(ordinal: u8) -> Self {
        Self {
            severity: Severity::Warning,
            ordinal,
        }
    }

    /// Fatal code `Enn`
    pub const fn fatal(ordinal: u8) -> Self {
        Self {
            severity: Severity::Fatal,
            ordinal,
        }
    }

    /// Severity encoded by the prefix
    pub const fn severity(self) -> Severity {
        self.severity
    }

    /// Numeric part of the code
    pub const fn ordinal(self) -> u8 {
        self.ordinal
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.severity.prefix(), self.ordinal)
    }
}

impl FromStr for Code {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CatalogError::MalformedCode(s.to_string());

        let mut chars = s.chars();
        let severity = match chars.next() {
            Some('W') | Some('w') => Severity::Warning,
            Some('E') | Some('e') => Severity::Fatal,
            _ => return Err(malformed()),
        };
        let digits = chars.as_str();
        if digits.len() != 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let ordinal = digits.parse::<u8>().map_err(|_| malformed())?;

        Ok(Self { severity, ordinal })
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for Code {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Where in a document a condition was detected
///
/// Every component is optional; unknown parts render as `?`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// File or stream identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Line (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// Column (1-indexed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl Position {
    /// A position with nothing known
    pub fn unknown() -> Self {
        Self::default()
    }

    /// A position at a line and column of an unnamed document
    pub fn at(line: usize, column: usize) -> Self {
        Self {
            source: None,
            line: Some(line),
            column: Some(column),
        }
    }

    /// Attach a source identifier
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Fill in the source only if none is set yet
    pub fn or_source(mut self, source: Option<&str>) -> Self {
        if self.source.is_none() {
            self.source = source.map(str::to_string);
        }
        self
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn part<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "?".to_string())
        }

        write!(
            f,
            "{}:{}:{}",
            part(&self.source),
            part(&self.line),
            part(&self.column)
        )
    }
}

/// A condition emitted against a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DiagnosticRecord")]
pub struct Diagnostic {
    /// Stable condition code (e.g., "W01")
    pub code: Code,

    /// Severity level
    pub severity: Severity,

    /// Rendered message
    pub message: String,

    /// Location in the document
    #[serde(default)]
    pub position: Position,
}

/// Wire form of [`Diagnostic`]; `severity` may be omitted but must match the code
#[derive(Deserialize)]
struct DiagnosticRecord {
    code: Code,
    #[serde(default)]
    severity: Option<Severity>,
    message: String,
    #[serde(default)]
    position: Position,
}

impl TryFrom<DiagnosticRecord> for Diagnostic {
    type Error = String;

    fn try_from(record: DiagnosticRecord) -> Result<Self, Self::Error> {
        let expected = record.code.severity();
        match record.severity {
            Some(given) if given != expected => Err(format!(
                "{} is a {} condition, not a {}",
                record.code, expected, given
            )),
            _ => Ok(Diagnostic::new(record.code, record.message, record.position)),
        }
    }
}

impl Diagnostic {
    /// Create a diagnostic; severity follows the code's prefix
    pub fn new(code: Code, message: impl Into<String>, position: Position) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            position,
        }
    }

    /// Check if this condition aborts validation
    pub fn is_fatal(&self) -> bool {
        matches!(self.severity, Severity::Fatal)
    }

    /// Check if this condition is also an invalid-value failure
    pub fn is_value_error(&self) -> bool {
        self.severity.is_value_error()
    }

    /// The `source:line:column: CODE: message` form
    pub fn formatted(&self) -> String {
        format!("{}: {}: {}", self.position, self.code, self.message)
    }

    /// Format as JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format as human-readable text with the offending document line
    pub fn to_human_readable(&self, document: &str) -> String {
        let mut output = format!(
            "{}[{}]: {}\n  --> {}\n",
            self.severity.label(),
            self.code,
            self.message,
            self.position
        );

        let Some(line_no) = self.position.line else {
            return output;
        };
        let lines: Vec<&str> = document.lines().collect();
        if line_no > 0 && line_no <= lines.len() {
            let line = lines[line_no - 1];
            output.push_str(&format!("   |\n{:>3} | {}\n   |", line_no, line));

            let marker_start = self.position.column.unwrap_or(1).saturating_sub(1);
            output.push_str(&format!(" {}^\n", " ".repeat(marker_start)));
        }

        output
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// An ordered collection of diagnostics for one document
#[derive(Debug, Default, Clone)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    /// Create a new empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if there are any fatal conditions
    pub fn has_fatal(&self) -> bool {
        self.diagnostics.iter().any(|d| d.is_fatal())
    }

    /// Check if there are any warnings
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, Severity::Warning))
    }

    /// Count warnings
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
            .count()
    }

    /// Count fatal conditions
    pub fn fatal_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_fatal()).count()
    }

    /// Distinct codes in first-seen order
    pub fn codes(&self) -> Vec<Code> {
        let mut seen = Vec::new();
        for d in &self.diagnostics {
            if !seen.contains(&d.code) {
                seen.push(d.code);
            }
        }
        seen
    }

    /// Diagnostics carrying the given code
    pub fn with_code(&self, code: Code) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take all diagnostics
    pub fn take(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Merge another bag into this one
    pub fn merge(&mut self, other: DiagnosticBag) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Get the number of diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Check if the bag is empty
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Format all diagnostics as a JSON array
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.diagnostics).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format all diagnostics as rendered lines
    pub fn format_text(&self) -> String {
        self.diagnostics
            .iter()
            .map(Diagnostic::formatted)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Diagnostic> for DiagnosticBag {
    fn from(diagnostic: Diagnostic) -> Self {
        let mut bag = DiagnosticBag::new();
        bag.push(diagnostic);
        bag
    }
}
