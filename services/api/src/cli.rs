use crate::commands::{run_catalog_list, run_quiz_score, CatalogListArgs, QuizScoreArgs};
use crate::server;
use ayurveda_shop::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Ayurveda Storefront",
    about = "Run the Ayurvedic storefront API or score dosha quizzes from the command line",
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
    /// Score quiz answers offline
    Quiz {
        #[command(subcommand)]
        command: QuizCommand,
    },
    /// Inspect the product catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
enum QuizCommand {
    /// Score an answer set and list the recommended products
    Score(QuizScoreArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List catalog entries, optionally filtered by dosha
    List(CatalogListArgs),
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
        Command::Quiz {
            command: QuizCommand::Score(args),
        } => run_quiz_score(args),
        Command::Catalog {
            command: CatalogCommand::List(args),
        } => run_catalog_list(args),
    }
}
