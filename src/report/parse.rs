//! Parsing rendered diagnostic lines back into their parts

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use super::SUPPRESSION_NOTICE;
use crate::diagnostics::{Code, Severity};

const LINE_PATTERN: &str = r"^(?P<source>.*?):(?:(?P<line>[0-9]+)|\?):(?:(?P<column>[0-9]+)|\?): (?P<code>[WE][0-9]{2}): (?P<message>.*)$";

fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("rendered-line pattern compiles"))
}

/// Fields recovered from a `source:line:column: CODE: message` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    pub source: Option<String>,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub code: Code,
    pub message: String,
    /// The line carried the suppression notice, which is stripped from `message`
    pub suppressing: bool,
}

impl ParsedLine {
    pub fn is_warning(&self) -> bool {
        self.code.severity() == Severity::Warning
    }

    pub fn is_fatal(&self) -> bool {
        self.code.severity() == Severity::Fatal
    }
}

/// Parse one rendered line; `None` if it is not a diagnostic line
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let caps = line_regex().captures(line.trim_end())?;

    let source = match &caps["source"] {
        "?" | "" => None,
        s => Some(s.to_string()),
    };
    let line_no = caps.name("line").and_then(|m| m.as_str().parse().ok());
    let column = caps.name("column").and_then(|m| m.as_str().parse().ok());
    let code: Code = caps["code"].parse().ok()?;

    let raw = &caps["message"];
    let (message, suppressing) = match raw.strip_suffix(SUPPRESSION_NOTICE) {
        Some(stripped) => (stripped.to_string(), true),
        None => (raw.to_string(), false),
    };

    Some(ParsedLine {
        source,
        line: line_no,
        column,
        code,
        message,
        suppressing,
    })
}
