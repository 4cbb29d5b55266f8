use crate::demo::{run_demo, run_financing_quote, run_fractional_quote, DemoArgs, FinancingArgs, FractionalArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use raices::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Raíces Platform Service",
    about = "Run the Raíces investor intake service and financing calculators from the command line",
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
    /// Print a financing or fractional-ownership quote
    Quote {
        #[command(subcommand)]
        command: QuoteCommand,
    },
    /// Run an end-to-end intake demo against an in-memory CMS
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum QuoteCommand {
    /// Full-ownership financing quote (annuity amortization)
    Financing(FinancingArgs),
    /// Fractional-ownership yield quote
    Fractional(FractionalArgs),
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
        Command::Quote {
            command: QuoteCommand::Financing(args),
        } => run_financing_quote(args),
        Command::Quote {
            command: QuoteCommand::Fractional(args),
        } => run_fractional_quote(args),
        Command::Demo(args) => run_demo(args).await,
    }
}
