//! Handler for the `vosi-diag render` subcommand.

use crate::config::Config;
use crate::diagnostics::{Diagnostic, Position};
use crate::error::{FatalCondition, Result};
use crate::report::Reporter;

#[derive(Debug, Clone, Default)]
pub(crate) struct RenderRequest {
    pub code: String,
    pub args: Vec<String>,
    pub source: Option<String>,
    pub line: Option<usize>,
    pub column: Option<usize>,
    pub strict: bool,
}

pub(crate) fn render(request: &RenderRequest, config: Config) -> Result<Diagnostic> {
    let reporter = Reporter::new(config.report);
    let position = Position {
        source: request.source.clone(),
        line: request.line,
        column: request.column,
    };
    Ok(reporter.diagnostic(&request.code, &request.args, position)?)
}

pub(crate) fn run_render(request: RenderRequest, config: Config, json: bool) -> Result<()> {
    let diagnostic = render(&request, config)?;

    if json {
        println!("{}", diagnostic.to_json());
    } else {
        println!("{}", diagnostic.formatted());
    }

    if request.strict && diagnostic.is_fatal() {
        return Err(FatalCondition::new(diagnostic).into());
    }
    Ok(())
}
