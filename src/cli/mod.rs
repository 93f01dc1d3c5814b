//! Command-line interface for browsing the VOSI condition catalog
//!
//! Provides commands: list, explain, render, doc, parse

mod doc_cmd;
mod explain_cmd;
mod list_cmd;
mod parse_cmd;
mod render_cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::Result;

/// vosi-diag - VOSI validation condition catalog
#[derive(Parser, Debug)]
#[command(name = "vosi-diag")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to the nearest vosi.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List condition codes
    List {
        /// Only warnings
        #[arg(long, conflicts_with = "errors")]
        warnings: bool,

        /// Only fatal conditions
        #[arg(long)]
        errors: bool,
    },

    /// Explain a condition code in detail
    Explain {
        /// Condition code to explain (e.g., W01, E07)
        code: String,
    },

    /// Render a condition message
    Render {
        /// Condition code
        code: String,

        /// Substitution arguments (defaults are used when none are given)
        #[arg(value_name = "ARGS")]
        args: Vec<String>,

        /// Document identifier
        #[arg(long)]
        source: Option<String>,

        /// Line in the document
        #[arg(long)]
        line: Option<usize>,

        /// Column in the document
        #[arg(long)]
        column: Option<usize>,

        /// Exit with an error when the condition is fatal
        #[arg(long)]
        strict: bool,
    },

    /// Generate the markdown reference of all conditions
    Doc {
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Parse a rendered diagnostic line
    Parse {
        /// A line such as "tables.xml:3:7: W05: ..."
        line: String,
    },
}

impl Cli {
    /// Run the CLI
    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        init_logging(cli.verbose);
        cli.execute()
    }

    /// Dispatch an already parsed command line
    pub fn execute(self) -> Result<()> {
        match self.command {
            Command::List { warnings, errors } => {
                list_cmd::run_list(warnings, errors, self.json)?;
            }
            Command::Explain { code } => {
                explain_cmd::run_explain(&code, self.json)?;
            }
            Command::Render {
                code,
                args,
                source,
                line,
                column,
                strict,
            } => {
                let config = load_config(self.config.as_deref())?;
                let request = render_cmd::RenderRequest {
                    code,
                    args,
                    source,
                    line,
                    column,
                    strict,
                };
                render_cmd::run_render(request, config, self.json)?;
            }
            Command::Doc { output } => {
                doc_cmd::run_doc(output.as_deref())?;
            }
            Command::Parse { line } => {
                parse_cmd::run_parse(&line, self.json)?;
            }
        }

        Ok(())
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<Config> {
    let cwd = std::env::current_dir()?;
    Ok(Config::resolve(explicit, &cwd)?)
}
