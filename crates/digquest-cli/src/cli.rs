use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "digquest")]
#[command(about = "Inspect and maintain the DigQuest client cache")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Optional path to the local cache file
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_path: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List cached entries of a kind
    List {
        /// Entity kind to list
        #[arg(value_enum)]
        kind: Kind,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add or update one entry in the cache after a user action
    Add {
        /// Entity kind to store
        #[arg(value_enum)]
        kind: Kind,
        /// JSON file holding the entity (stdin when omitted)
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,
    },
    /// Remove an entry after a server-confirmed delete
    Remove {
        /// Entity kind to remove from
        #[arg(value_enum)]
        kind: Kind,
        /// Server-assigned id
        id: i64,
    },
    /// Wipe a kind's cache, including retired legacy keys
    Clear {
        /// Entity kind to clear
        #[arg(value_enum)]
        kind: Kind,
    },
    /// Merge a server collection into the cache and print the result
    Reconcile {
        /// Entity kind to reconcile
        #[arg(value_enum)]
        kind: Kind,
        /// JSON file holding the server collection (stdin when omitted)
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,
        /// Output the merged collection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Shrink an image to upload constraints
    Optimize {
        /// Source image file
        input: PathBuf,
        /// Where to write the optimized image
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
        /// Maximum output width in pixels
        #[arg(long, default_value_t = 1200)]
        max_width: u32,
        /// Maximum output height in pixels
        #[arg(long, default_value_t = 1200)]
        max_height: u32,
        /// Initial JPEG quality (0.0 to 1.0)
        #[arg(long, default_value_t = 0.82)]
        quality: f32,
        /// Target upper bound for the output size in bytes
        #[arg(long, default_value_t = 2_500_000)]
        max_bytes: usize,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

/// Entity kinds addressable from the command line
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Kind {
    Finds,
    Locations,
    Posts,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
