use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ideabook", version)]
#[command(about = "Keep a running list of blog ideas from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new idea
    #[command(alias = "n")]
    Add {
        /// Idea title
        #[arg(required = false)]
        title: Option<String>,

        /// Idea description
        #[arg(required = false)]
        description: Option<String>,
    },

    /// List ideas
    #[command(alias = "ls")]
    List,

    /// Show a single idea in full
    #[command(alias = "v")]
    Show {
        /// Position in the listing (e.g. 1)
        position: usize,
    },

    /// Edit an idea
    #[command(alias = "e")]
    Edit {
        /// Position in the listing (e.g. 1)
        position: usize,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete an idea
    #[command(alias = "rm")]
    Delete {
        /// Position in the listing (e.g. 1)
        position: usize,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., show-descriptions)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
