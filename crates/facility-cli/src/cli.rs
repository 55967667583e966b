// Command line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Facility management console
#[derive(Debug, Parser)]
#[command(name = "facility", version, about)]
pub struct Cli {
    /// Configuration file
    #[arg(
        short = 'c',
        long = "config",
        env = "FACILITY_CONFIG",
        default_value = "conf/application.yml"
    )]
    pub config: PathBuf,

    /// API base URL, e.g. http://localhost:8080/api
    #[arg(long = "base-url")]
    pub base_url: Option<String>,

    #[arg(short = 'u', long = "username")]
    pub username: Option<String>,

    #[arg(short = 'p', long = "password", env = "FACILITY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and show the account
    Login,
    /// Sign in, then end the session
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Overview of notices and documents
    Dashboard,
    /// Notice board
    #[command(subcommand)]
    Notices(NoticeCommand),
    /// Document archive
    #[command(subcommand)]
    Documents(DocumentCommand),
}

/// Page selection; pages are numbered from 1
#[derive(Debug, Clone, Copy, Args)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page (defaults to ui.page_size)
    #[arg(long)]
    pub size: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum NoticeCommand {
    List(PageArgs),
    Show {
        id: u64,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum DocumentCommand {
    List(PageArgs),
    Show {
        id: u64,
    },
    Upload {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        file: PathBuf,
    },
    Download {
        id: u64,
        /// Target directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}
