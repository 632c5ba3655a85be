use binder::cli::commands::{Cli, Commands};
use binder::cli::handlers;
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = binder::tui::run(config_path.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Snapshot(args)) => {
            if let Err(e) = handlers::cmd_snapshot(args) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
