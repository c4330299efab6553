use pruner_lib::candidate::RemoveCandidate;
use serde::{Deserialize, Serialize};

/// Which way the user decided a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Keep,
    Remove,
}

impl ReviewAction {
    pub fn label(&self) -> &'static str {
        match self {
            ReviewAction::Keep => "KEPT",
            ReviewAction::Remove => "REMOVED",
        }
    }
}

/// Events sent from background tasks -> UI main thread
pub enum UiEvent {
    FeedLoaded(Vec<RemoveCandidate>),
    FeedFailed(String),
    RemovalAcked(u64),
    RemovalFailed(u64, String),
}

/// Structure for the CSV audit log.
#[derive(Serialize, Deserialize, Clone)]
pub struct AuditRecord {
    pub timestamp: u64,
    pub date_utc: String,
    pub user_id: u64,
    pub screen_name: String,
    pub action: String,
}
