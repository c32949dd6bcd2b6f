use crate::commands::{
    run_analyze, run_catalog, run_offers, run_scan, AnalyzeArgs, OffersArgs, ScanArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ecoscan::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EcoScan",
    about = "Estimate the carbon footprint of clothing and match eco-reward offers",
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
    /// Score a list of clothing labels without an image
    Analyze(AnalyzeArgs),
    /// Detect clothing in an image file and score it
    Scan(ScanArgs),
    /// List the offers a points balance unlocks
    Offers(OffersArgs),
    /// Print the offer catalog and carbon table
    Catalog,
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
        Command::Analyze(args) => run_analyze(args),
        Command::Scan(args) => run_scan(args).await,
        Command::Offers(args) => run_offers(args),
        Command::Catalog => run_catalog(),
    }
}
