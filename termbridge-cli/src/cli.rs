//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use termbridge_core::export::ExportFormat;

/// termbridge command-line interface for bulk session import and export
#[derive(Parser)]
#[command(name = "termbridge-cli")]
#[command(author, version, about = "termbridge command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "TERMBRIDGE_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Import sessions from a delimited host file
    #[command(about = "Create session records from a delimited host data file")]
    Import {
        /// The host data file (first line is the field header)
        file: PathBuf,

        /// Field delimiter; use NONE for single-field files
        #[arg(short, long)]
        delimiter: Option<String>,

        /// Directory the session records are written under
        #[arg(long)]
        store_dir: Option<PathBuf>,

        /// Directory the summary report is written to (default: documents,
        /// then desktop, then the config directory)
        #[arg(long)]
        report_dir: Option<PathBuf>,

        /// Target host application major version
        #[arg(long)]
        target_version: Option<u32>,

        /// Target operating environment
        #[arg(long, value_enum)]
        target_os: Option<TargetOsArg>,

        /// Overwrite sessions at existing paths instead of creating
        /// timestamp-suffixed siblings
        #[arg(long)]
        overwrite: bool,

        /// Validate and report without writing any session records
        #[arg(long)]
        dry_run: bool,
    },

    /// Export a monitoring-system inventory to a vendor session format
    #[command(about = "Render an inventory dump into a vendor session-import file")]
    Export {
        /// Export format
        #[arg(short, long, value_enum)]
        format: ExportFormatArg,

        /// Inventory dump (JSON array of device objects)
        #[arg(short, long)]
        inventory: PathBuf,

        /// Output file path (default: the format's conventional file name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Account name stamped into formats that carry one
        #[arg(short, long)]
        username: Option<String>,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Export format argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormatArg {
    /// PuTTY host list
    Putty,
    /// SuperPuTTY session XML
    Superputty,
    /// SecureCRT import CSV
    Securecrt,
    /// Xshell import CSV
    Xshell,
}

impl From<ExportFormatArg> for ExportFormat {
    fn from(arg: ExportFormatArg) -> Self {
        match arg {
            ExportFormatArg::Putty => Self::Putty,
            ExportFormatArg::Superputty => Self::SuperPutty,
            ExportFormatArg::Securecrt => Self::SecureCrt,
            ExportFormatArg::Xshell => Self::Xshell,
        }
    }
}

/// Target operating environment argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetOsArg {
    /// Windows-like target (reserved names checked, RDP possible)
    Windows,
    /// Unix-like target
    Unix,
}

impl TargetOsArg {
    /// Returns true for Windows-like targets.
    #[must_use]
    pub const fn windows_like(self) -> bool {
        matches!(self, Self::Windows)
    }
}
