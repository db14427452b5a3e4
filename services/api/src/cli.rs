use crate::report::{run_area_report, run_evaluation_report, AreaArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use plotcheck::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "plotcheck",
    about = "Check parcels against the zoning code from the command line or over HTTP",
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
    /// Evaluate the permissible building envelope for one parcel
    Evaluate(EvaluateArgs),
    /// Measure the ground area of a drawn boundary
    Area(AreaArgs),
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
        Command::Evaluate(args) => run_evaluation_report(args),
        Command::Area(args) => run_area_report(args),
    }
}
