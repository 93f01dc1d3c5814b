//! Reference documentation generated from the catalog

use crate::catalog::{self, Condition};
use crate::diagnostics::Severity;

const WARNINGS_PREAMBLE: &str = "Most of the following warnings indicate violations of the VOSI \
specification. They should be reported to the authors of the tools that produced the document.";

const EXCEPTIONS_PREAMBLE: &str = "These fatal conditions stop validation of a document that does \
not conform to the specification. Each one is also an invalid-value failure.";

/// Markdown reference of every condition, warnings then exceptions
pub fn reference_markdown() -> String {
    let mut out = String::from("# VOSI conditions\n\n");

    out.push_str("## Warnings\n\n");
    out.push_str(WARNINGS_PREAMBLE);
    out.push_str("\n\n");
    for condition in catalog::by_severity(Severity::Warning) {
        write_entry(&mut out, condition);
    }

    out.push_str("## Exceptions\n\n");
    out.push_str(EXCEPTIONS_PREAMBLE);
    out.push_str("\n\n");
    for condition in catalog::by_severity(Severity::Fatal) {
        write_entry(&mut out, condition);
    }

    out
}

fn write_entry(out: &mut String, condition: &Condition) {
    out.push_str(&format!("<a id=\"{}\"></a>\n", condition.code));
    out.push_str(&format!(
        "### {}: {}\n\n",
        condition.code,
        condition.short_name()
    ));
    out.push_str(condition.summary);
    out.push_str("\n\n");

    if !condition.references.is_empty() {
        let links: Vec<String> = condition
            .references
            .iter()
            .map(|r| format!("<{}>", r))
            .collect();
        out.push_str(&format!("References: {}\n\n", links.join(", ")));
    }
}

/// Plain-text explanation of one code, `None` if it is not registered
pub fn explain(code: &str) -> Option<String> {
    let condition = catalog::lookup(code).ok()?;

    let mut out = format!("{}: {}\n\n", condition.code, condition.short_name());
    out.push_str(&format!("Severity: {}\n\n", condition.severity()));
    out.push_str(condition.summary);
    out.push_str("\n\n");
    out.push_str(&format!("Message: {}\n", condition.template));
    if !condition.default_args.is_empty() {
        out.push_str(&format!("Defaults: {}\n", condition.default_args.join(", ")));
    }
    if condition.is_fatal() {
        out.push_str("\nValidation of the document stops when this condition is raised.\n");
    }
    if !condition.references.is_empty() {
        out.push_str("\nReferences:\n");
        for reference in condition.references {
            out.push_str(&format!("  {}\n", reference));
        }
    }

    Some(out)
}

#[cfg(test)]
#[path = "docs_tests.rs"]
mod tests;
