use clap::Parser;
use std::ffi::OsString;
use std::num::NonZeroUsize;

#[derive(Parser, Debug)]
#[command(name = "bulk_rename")]
#[command(about = "Rename files and folders concurrently from a JSON task list")]
#[command(version)]
pub struct Cli {
    /// JSON array of tasks: [{"src": "<source>", "dst": "<dest>"}, ...]
    #[arg(allow_hyphen_values = true)]
    pub tasks: Option<OsString>,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,

    /// Maximum number of renames in flight (default: one per task)
    #[arg(short = 'j', long)]
    pub max_concurrent: Option<NonZeroUsize>,

    /// Create missing parent directories of each destination before renaming
    #[arg(long)]
    pub create_dest_dirs: bool,

    /// Suppress the banner and per-task result lines
    #[arg(short, long)]
    pub quiet: bool,
}
