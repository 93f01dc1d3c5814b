//! Emission of catalog conditions against a document
//!
//! A [`Reporter`] lives for one validation pass. The validating engine
//! hands it a code, substitution arguments and a [`Position`]; the
//! reporter renders the message through the catalog and either records a
//! warning or returns a [`FatalCondition`] for the engine to propagate.
//!
//! Warnings pass through the configured [`Verify`] policy, and each code
//! is recorded at most `max_warnings` times per document.

mod parse;

pub use parse::{parse_line, ParsedLine};

use std::collections::HashMap;
use std::fmt;

use crate::catalog;
use crate::config::{ReportConfig, Verify};
use crate::diagnostics::{Code, Diagnostic, DiagnosticBag, Position};
use crate::error::{CatalogError, FatalCondition, VosiError};

/// Appended to the last warning of a code before suppression starts
pub const SUPPRESSION_NOTICE: &str = " (suppressing further warnings of this type...)";

/// Per-document condition sink
#[derive(Debug, Default)]
pub struct Reporter {
    config: ReportConfig,
    counts: HashMap<Code, usize>,
    bag: DiagnosticBag,
}

impl Reporter {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            config,
            counts: HashMap::new(),
            bag: DiagnosticBag::new(),
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Render a condition into a diagnostic at `position`
    pub fn diagnostic<I>(&self, code: &str, args: I, position: Position) -> Result<Diagnostic, CatalogError>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let condition = catalog::lookup(code)?;
        let message = condition.render(args)?;
        let position = position.or_source(self.config.source.as_deref());
        Ok(Diagnostic::new(condition.code, message, position))
    }

    /// Record a warning, subject to the verify policy and the per-code cap
    ///
    /// The code is checked even when warnings are ignored, so engine bugs
    /// surface regardless of policy.
    pub fn warn<I>(&mut self, code: &str, args: I, position: Position) -> Result<(), CatalogError>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let mut diagnostic = self.diagnostic(code, args, position)?;
        if self.config.verify == Verify::Ignore {
            return Ok(());
        }

        let count = self.counts.entry(diagnostic.code).or_insert(0);
        *count += 1;
        let count = *count;

        if count > self.config.max_warnings {
            tracing::debug!(code = %diagnostic.code, count, "warning suppressed");
            return Ok(());
        }
        if count == self.config.max_warnings {
            diagnostic.message.push_str(SUPPRESSION_NOTICE);
        }

        tracing::warn!(code = %diagnostic.code, "{}", diagnostic.formatted());
        self.bag.push(diagnostic);
        Ok(())
    }

    /// Build the fatal error for a condition
    ///
    /// Always returns `Err`; the engine propagates it with `?`.
    pub fn raise<T, I>(&self, code: &str, args: I, position: Position) -> Result<T, VosiError>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let diagnostic = self.diagnostic(code, args, position)?;
        tracing::debug!(code = %diagnostic.code, "raising condition");
        Err(FatalCondition::new(diagnostic).into())
    }

    /// Warn, or raise when the policy is [`Verify::Exception`]
    ///
    /// `exception_code` defaults to `warning_code`.
    pub fn warn_or_raise<I>(
        &mut self,
        warning_code: &str,
        exception_code: Option<&str>,
        args: I,
        position: Position,
    ) -> Result<(), VosiError>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if self.config.verify == Verify::Exception {
            return self.raise(exception_code.unwrap_or(warning_code), args, position);
        }
        self.warn(warning_code, args, position)?;
        Ok(())
    }

    /// Route a condition by its catalog severity
    ///
    /// Warnings are recorded and `Ok(())` returned; fatal codes come back
    /// as `Err`.
    pub fn emit<I>(&mut self, code: &str, args: I, position: Position) -> Result<(), VosiError>
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if catalog::lookup(code)?.is_fatal() {
            return self.raise(code, args, position);
        }
        self.warn(code, args, position)?;
        Ok(())
    }

    /// How many times a code was warned, including suppressed ones
    pub fn emitted_count(&self, code: Code) -> usize {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    /// How many warnings of a code were dropped by the cap
    pub fn suppressed_count(&self, code: Code) -> usize {
        self.emitted_count(code)
            .saturating_sub(self.config.max_warnings)
    }

    pub fn diagnostics(&self) -> &DiagnosticBag {
        &self.bag
    }

    pub fn into_diagnostics(self) -> DiagnosticBag {
        self.bag
    }
}

#[cfg(test)]
mod tests;
