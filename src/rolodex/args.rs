use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version)]
#[command(about = "A single-user contact book with a terminal menu and a small web UI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this contacts file instead of the default data directory
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive menu (the default when no command is given)
    #[command(alias = "m")]
    Menu,

    /// Serve the web interface
    #[command(alias = "s")]
    Serve {
        /// Address to bind, e.g. 127.0.0.1:5000
        #[arg(short, long)]
        addr: Option<String>,
    },
}
