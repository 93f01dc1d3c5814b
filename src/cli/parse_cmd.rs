//! Handler for the `vosi-diag parse` subcommand.

use crate::error::{Result, VosiError};
use crate::report::{parse_line, ParsedLine};

pub(crate) fn describe(parsed: &ParsedLine) -> String {
    fn or_unknown<T: ToString>(value: &Option<T>) -> String {
        value
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    let kind = if parsed.is_fatal() { "error" } else { "warning" };
    let mut out = format!(
        "code:     {}\nkind:     {}\nsource:   {}\nline:     {}\ncolumn:   {}\nmessage:  {}",
        parsed.code,
        kind,
        or_unknown(&parsed.source),
        or_unknown(&parsed.line),
        or_unknown(&parsed.column),
        parsed.message
    );
    if parsed.suppressing {
        out.push_str("\nfurther warnings of this code were suppressed");
    }
    out
}

pub(crate) fn run_parse(line: &str, json: bool) -> Result<()> {
    let parsed = parse_line(line).ok_or_else(|| VosiError::UnrecognizedLine(line.to_string()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&parsed).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        println!("{}", describe(&parsed));
    }
    Ok(())
}

