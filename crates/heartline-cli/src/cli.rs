use std::path::PathBuf;

use clap::{Parser, Subcommand};
use heartline_export::ExportScope;

#[derive(Parser)]
#[command(name = "heartline")]
#[command(about = "Heartline: export patient data into zip archives of delimited tables")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to ./heartline.toml when present)
    #[arg(short, long, global = true, env = "HEARTLINE_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export patient data into a zip archive
    Export(ExportArgs),
}

#[derive(clap::Args)]
pub struct ExportArgs {
    #[command(subcommand)]
    pub scope: ScopeCommand,
}

#[derive(Subcommand)]
pub enum ScopeCommand {
    /// Export a single user
    User {
        /// User ID
        user_id: String,
        #[command(flatten)]
        options: ExportOptions,
    },
    /// Export every patient of an organization
    Organization {
        /// Organization ID (matched exactly)
        organization: String,
        #[command(flatten)]
        options: ExportOptions,
    },
    /// Export every patient
    All {
        #[command(flatten)]
        options: ExportOptions,
    },
}

#[derive(clap::Args, Clone)]
pub struct ExportOptions {
    /// JSON fixture holding the store contents
    #[arg(short, long)]
    pub data: PathBuf,
    /// Archive path (defaults to the scope's archive file name)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ScopeCommand {
    pub fn into_parts(self) -> (ExportScope, ExportOptions) {
        match self {
            Self::User { user_id, options } => (ExportScope::SingleUser(user_id), options),
            Self::Organization {
                organization,
                options,
            } => (ExportScope::Organization(organization), options),
            Self::All { options } => (ExportScope::All, options),
        }
    }
}
