pub mod init;
pub mod migrations;
pub mod schedule;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the HTTP server")]
    Serve(serve::ServeArgs),
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Show database schema version and migration history")]
    Migrations(migrations::MigrationsArgs),
    #[command(about = "Print the shifts of a week")]
    Schedule(schedule::ScheduleArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Init => init::cmd(),
            Commands::Migrations(args) => migrations::cmd(args),
            Commands::Schedule(args) => schedule::cmd(args),
        }
    }
}
