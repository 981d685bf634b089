use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "habitgrove-cli", version, about = "Habitgrove CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Habit catalog management
    Habit {
        #[command(subcommand)]
        action: commands::habit::HabitAction,
    },
    /// Record a check-in for a habit
    Checkin(commands::streak::CheckinArgs),
    /// Spend the one-time revive on a freshly broken streak
    Revive(commands::streak::ReviveArgs),
    /// Streak status for a habit
    Status(commands::streak::StatusArgs),
    /// Progress summaries across all habits
    Stats(commands::stats::StatsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Habit { action } => commands::habit::run(action),
        Commands::Checkin(args) => commands::streak::run_checkin(args),
        Commands::Revive(args) => commands::streak::run_revive(args),
        Commands::Status(args) => commands::streak::run_status(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
