use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "restwise-cli", version, about = "Restwise CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a bedtime
    Estimate(commands::estimate::EstimateArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Model artifact inspection
    Model {
        #[command(subcommand)]
        action: commands::model::ModelAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Estimate(args) => commands::estimate::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Model { action } => commands::model::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
