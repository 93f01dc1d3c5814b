//! Handler for the `vosi-diag list` subcommand.

use serde::Serialize;

use crate::catalog::{self, Condition};
use crate::diagnostics::Severity;
use crate::error::Result;

#[derive(Debug, Serialize)]
pub(crate) struct ListEntry {
    code: String,
    severity: Severity,
    message: String,
}

impl From<&Condition> for ListEntry {
    fn from(condition: &Condition) -> Self {
        Self {
            code: condition.code.to_string(),
            severity: condition.severity(),
            message: condition.short_name(),
        }
    }
}

pub(crate) fn selected(warnings: bool, errors: bool) -> Vec<&'static Condition> {
    match (warnings, errors) {
        (true, false) => catalog::by_severity(Severity::Warning).collect(),
        (false, true) => catalog::by_severity(Severity::Fatal).collect(),
        _ => catalog::all().iter().collect(),
    }
}

pub(crate) fn format_list(conditions: &[&Condition]) -> String {
    conditions
        .iter()
        .map(|c| format!("{}  {:<7}  {}", c.code, c.severity().label(), c.short_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn run_list(warnings: bool, errors: bool, json: bool) -> Result<()> {
    let conditions = selected(warnings, errors);

    if json {
        let entries: Vec<ListEntry> = conditions.iter().map(|c| ListEntry::from(*c)).collect();
        println!(
            "{}",
            serde_json::to_string(&entries).unwrap_or_else(|_| "[]".to_string())
        );
    } else {
        println!("{}", format_list(&conditions));
    }

    Ok(())
}
