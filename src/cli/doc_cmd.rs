//! Handler for the `vosi-diag doc` subcommand.

use std::path::Path;

use crate::docs;
use crate::error::Result;

pub(crate) fn run_doc(output: Option<&Path>) -> Result<()> {
    let markdown = docs::reference_markdown();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &markdown)?;
            tracing::info!(path = %path.display(), "wrote condition reference");
            println!("Generated {}", path.display());
        }
        None => print!("{}", markdown),
    }

    Ok(())
}
