use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;

use pruner_lib::{
    candidate::RemoveCandidate,
    client::CandidateSource,
    error::PrunerError,
    state::get_config,
    CandidateFeed, ReviewSession,
};

use super::types::{AuditRecord, ReviewAction};

// --- Audit trail ---

/// Append one review decision to the audit CSV. The audit trail is best
/// effort: a broken log file never interrupts the review session.
pub fn log_review_decision(candidate: &RemoveCandidate, action: ReviewAction) {
    let config = match get_config() {
        Ok(config) => config,
        Err(_) => return,
    };

    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
    let record = AuditRecord {
        timestamp: now,
        date_utc: humantime::format_rfc3339_seconds(SystemTime::now()).to_string(),
        user_id: candidate.id,
        screen_name: candidate.screen_name.clone(),
        action: action.label().to_string(),
    };

    if let Err(e) = append_audit_record(&config.review.audit_file, &record) {
        log::warn!("Failed to write audit record: {e}");
    }
}

pub fn append_audit_record(path: &str, record: &AuditRecord) -> Result<(), PrunerError> {
    let file_exists = Path::new(path).exists();
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let mut wtr = csv::WriterBuilder::new().has_headers(!file_exists).from_writer(file);
    wtr.serialize(record)
        .map_err(|e| PrunerError::SerializationError(e.to_string()))?;
    wtr.flush()?;
    Ok(())
}

// --- Non-interactive candidate listing ---

pub async fn print_candidates(source: Arc<dyn CandidateSource>) -> Result<(), PrunerError> {
    let candidates = match source.fetch_candidates().await {
        Ok(candidates) => candidates,
        Err(e) => {
            // Same degradation as the review view: an unreachable backend
            // reads as an empty candidate list.
            log::warn!("Candidate fetch failed: {e}");
            Vec::new()
        }
    };

    let mut session = ReviewSession::new();
    session.replace_feed(CandidateFeed::Loaded(candidates));

    let rows = session.visible_rows();
    if rows.is_empty() {
        println!("No remove candidates.");
        return Ok(());
    }

    let now = Utc::now();
    for (index, row) in rows.iter().enumerate() {
        println!("Row {}:", index + 1);
        for candidate in row {
            let lock = if candidate.protected { " [protected]" } else { "" };
            let recency = candidate
                .recency_label(now)
                .map(|label| format!(" | last post {label} ago"))
                .unwrap_or_default();
            println!(
                "  {:>12}  @{}{} | following {} | followers {} | {} posts{} | {}",
                candidate.id,
                candidate.screen_name,
                lock,
                candidate.friends_count,
                candidate.followers_count,
                candidate.statuses_count,
                recency,
                candidate.bigger_profile_image(),
            );
        }
    }

    Ok(())
}

// --- Standalone Stats function ---

pub async fn show_stats(source: Arc<dyn CandidateSource>) -> Result<(), PrunerError> {
    let config = get_config()?;

    println!("Fetching current candidate list...");
    let pending = match source.fetch_candidates().await {
        Ok(candidates) => candidates.len(),
        Err(e) => {
            log::warn!("Candidate fetch failed: {e}");
            0
        }
    };

    let mut removed_total = 0u64;
    let mut kept_total = 0u64;
    let mut removed_30d = 0u64;
    let mut kept_30d = 0u64;

    let path = &config.review.audit_file;
    if Path::new(path).exists() {
        let file = File::open(path)?;
        let mut rdr = csv::Reader::from_reader(file);

        let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
        let thirty_days_ago = now.saturating_sub(30 * 24 * 60 * 60);

        for result in rdr.deserialize() {
            let record: AuditRecord = match result {
                Ok(record) => record,
                Err(_) => continue,
            };
            let recent = record.timestamp >= thirty_days_ago;
            if record.action == ReviewAction::Remove.label() {
                removed_total += 1;
                if recent {
                    removed_30d += 1;
                }
            } else {
                kept_total += 1;
                if recent {
                    kept_30d += 1;
                }
            }
        }
    }

    println!();
    println!("PRUNER REVIEW STATS");
    println!("--------------------------");
    println!("Pending Candidates: {pending}");
    println!("Removed (total):    {removed_total}");
    println!("Removed (30d):      {removed_30d}");
    println!("Kept (total):       {kept_total}");
    println!("Kept (30d):         {kept_30d}");
    println!("--------------------------");

    Ok(())
}
