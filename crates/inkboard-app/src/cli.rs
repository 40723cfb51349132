//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Replay a recorded input script into a board and save every committed change.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// JSON script of input steps
    pub script: PathBuf,

    /// board configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// directory to store documents in; defaults to the platform data dir
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// document id to open and save; defaults to the script's file stem
    #[arg(long)]
    pub document: Option<String>,
}

impl CliArgs {
    /// The document id to use.
    pub fn document_id(&self) -> String {
        self.document.clone().unwrap_or_else(|| {
            self.script
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled")
                .to_string()
        })
    }
}
