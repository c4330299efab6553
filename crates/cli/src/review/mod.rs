pub mod config;
pub mod types;
pub mod state;
pub mod tui;
pub mod logic;
pub mod utils;

use std::sync::Arc;

use pruner_lib::{client::CandidateSource, error::PrunerError};

use crate::Commands;
use self::logic::run_review_tui;
use self::utils::{print_candidates, show_stats};

// --- Main Handler ---

pub async fn handle_review(
    command: Commands,
    client: Arc<dyn CandidateSource>,
) -> Result<(), PrunerError> {
    match command {
        Commands::Review => run_review_tui(client).await,
        Commands::List => print_candidates(client).await,
        Commands::Stats => show_stats(client).await,
    }
}
