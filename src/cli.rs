use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use crate::domain::{extract, source, tally};
use crate::presentation::{csv, table};

/// 🔍 Per-author contribution explorer
#[derive(Parser)]
#[command(
    name = "gittally",
    version,
    about = "✨ Who added and removed what, ranked — for any Git repo",
    long_about = None
)]
pub struct Cli {
    /// 📁 Local repo path, or a remote URL to clone (http…, git@github…)
    #[arg(default_value = ".")]
    pub source: String,

    /// ✉️ Only output email addresses
    #[arg(long)]
    pub email_only: bool,

    /// 🔼 Show results in ascending order
    #[arg(long)]
    pub asc: bool,

    /// Drop commits whose author has no email
    #[arg(long)]
    pub require_email: bool,

    /// Save name/email rows to a csv file (output.csv by default)
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = "output.csv")]
    pub csv_output: Option<String>,

    /// Emit the full result as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let workspace = source::acquire(&self.source)
            .with_context(|| format!("cannot resolve source {}", self.source))?;
        let raw = extract::numstat_log(workspace.dir())?;

        let opts = tally::ParseOptions {
            require_email: self.require_email,
        };
        let tally = tally::aggregate(&raw, opts)?;
        debug!("tallied {} authors", tally.len());

        let ordered = tally.into_ordered(self.asc);

        if self.email_only {
            table::print_emails(&ordered);
        } else if self.json {
            println!("{}", serde_json::to_string_pretty(&ordered)?);
        } else {
            println!("{}", table::render(&ordered));
        }

        if let Some(path) = self.csv_output.as_deref() {
            csv::write_authors(path, &ordered)?;
            println!("csv saved to {path}");
        }

        Ok(())
    }
}
