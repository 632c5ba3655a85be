use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bn", about = concat!("[=] binder v", env!("CARGO_PKG_VERSION"), " - tasks and their documents, side by side"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a config file (default: ./binder.toml when present)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a freshly seeded hierarchy as JSON and exit
    Snapshot(SnapshotArgs),
}

#[derive(Args)]
pub struct SnapshotArgs {
    /// Number of tasks to seed
    #[arg(long, default_value_t = 1)]
    pub tasks: usize,

    /// Number of documents in each task
    #[arg(long, default_value_t = 1)]
    pub docs: usize,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,
}
