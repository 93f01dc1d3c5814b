//! Handler for the `vosi-diag explain` subcommand.

use crate::catalog;
use crate::docs;
use crate::error::Result;

pub(crate) fn run_explain(code: &str, json: bool) -> Result<()> {
    // Unregistered codes surface as catalog errors.
    let condition = catalog::lookup(code)?;

    if json {
        let value = serde_json::json!({
            "code": condition.code,
            "severity": condition.severity(),
            "template": condition.template,
            "default_args": condition.default_args,
            "summary": condition.summary,
            "references": condition.references,
            "value_error": condition.is_value_error(),
        });
        println!("{}", value);
        return Ok(());
    }

    if let Some(text) = docs::explain(code) {
        print!("{}", text);
    }
    Ok(())
}
