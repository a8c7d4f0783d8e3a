use crate::commands::{run_lead, run_redirects, LeadCommand, RedirectCommand};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lead_intake::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "lead-intake-site",
    about = "Serve the home-services site back end and run its lead forms from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Validate or submit a lead through one of the site's forms
    Lead {
        #[command(subcommand)]
        command: LeadCommand,
    },
    /// Inspect the legacy URL redirect table
    Redirects {
        #[command(subcommand)]
        command: RedirectCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Lead { command } => run_lead(command).await,
        Command::Redirects { command } => run_redirects(command),
    }
}
