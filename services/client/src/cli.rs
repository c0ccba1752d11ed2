//! services/client/src/cli.rs
//!
//! Command line surface of the `notes` binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notes", version, about = "Beautify, summarize and save class notes", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Log in with an existing account
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and log in
    Signup {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the navigation links for the current session
    Nav,
    /// Beautify and summarize notes read from FILE (or stdin)
    Process {
        /// Path to the raw notes; `-` or nothing reads stdin
        file: Option<PathBuf>,
        /// Save the result once both stages succeed
        #[arg(long)]
        save: bool,
    },
    /// List every saved note
    Saved,
}
