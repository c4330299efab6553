mod args;
mod review;

use std::sync::Arc;

use args::GlobalArgs;
use clap::{Parser, Subcommand};
use pruner_lib::{
    client::CandidateSource, error::PrunerError, log::LoggingFormat, state::init_config,
    BackendClient, Config,
};

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive review session
    Review,
    /// Print the current candidate list without starting a session
    List,
    /// Show review statistics from the audit log
    Stats,
}

#[derive(Parser)]
#[command(author, version, about = "Pruner - follow-list review tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    pub global_args: GlobalArgs,
}

#[tokio::main]
async fn main() -> Result<(), PrunerError> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // The review TUI owns the terminal; its log pane replaces stdout logging.
    if !matches!(cli.command, Some(Commands::Review)) {
        setup_logging(&cli.global_args.logging_format);
    }

    let mut config = Config::load_config(&cli.global_args.config).unwrap_or_else(|e| {
        print_error(&format!("Failed to load config: {e}"));
        std::process::exit(1);
    });

    if let Some(url) = &cli.global_args.backend_url {
        config.backend.url = url.clone();
    }

    let backend_url = config.backend.url.clone();
    let request_timeout = config.backend.request_timeout_seconds;

    init_config(config).unwrap_or_else(|e| {
        print_error(&format!("Failed to initialize config: {e}"));
        std::process::exit(1);
    });

    match cli.command {
        Some(command) => {
            let client: Arc<dyn CandidateSource> =
                Arc::new(BackendClient::new(&backend_url, request_timeout)?);
            review::handle_review(command, client).await?;
        }
        None => {
            println!("No command specified. Use --help for usage information.");
            println!("Available commands:");
            println!("  review - Start an interactive review session");
            println!("  list   - Print the current candidate list");
            println!("  stats  - Show review statistics from the audit log");
        }
    }

    Ok(())
}

fn print_error(message: &str) {
    eprintln!("Error: {message}");
}

fn setup_logging(format: &LoggingFormat) {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    match format {
        LoggingFormat::Standard => subscriber.init(),
        LoggingFormat::Json => subscriber.json().init(),
    }
}
