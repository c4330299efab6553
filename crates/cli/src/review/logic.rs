use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::style::Color;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use pruner_lib::{
    candidate::RemoveCandidate, client::CandidateSource, constant::CARDS_PER_ROW,
    error::PrunerError, CandidateFeed,
};

use super::config::{SPINNER_FRAMES, TICK_RATE_MS};
use super::state::AppState;
use super::tui::ui;
use super::types::{ReviewAction, UiEvent};
use super::utils::log_review_decision;

pub async fn run_review_tui(source: Arc<dyn CandidateSource>) -> Result<(), PrunerError> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel();

    // The one list fetch of the session; further fetches only happen on an
    // explicit refresh request.
    spawn_fetch(source.clone(), tx.clone());

    let mut app = AppState::default();

    loop {
        terminal.draw(|f| ui(f, &app))?;

        while let Ok(event) = rx.try_recv() {
            apply_event(&mut app, event);
        }

        if app.is_loading {
            app.spinner_idx = (app.spinner_idx + 1) % SPINNER_FRAMES.len();
        }

        if event::poll(Duration::from_millis(TICK_RATE_MS))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Left => app.move_cursor(-1),
                    KeyCode::Right => app.move_cursor(1),
                    KeyCode::Up => app.move_cursor(-(CARDS_PER_ROW as isize)),
                    KeyCode::Down => app.move_cursor(CARDS_PER_ROW as isize),
                    KeyCode::Char('k') => decide(&mut app, ReviewAction::Keep, &source, &tx),
                    KeyCode::Char('r') => decide(&mut app, ReviewAction::Remove, &source, &tx),
                    KeyCode::Char('f') => {
                        app.is_loading = true;
                        app.status_msg = "Refreshing candidate list...".to_string();
                        spawn_fetch(source.clone(), tx.clone());
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    Ok(())
}

fn apply_event(app: &mut AppState, event: UiEvent) {
    match event {
        UiEvent::FeedLoaded(candidates) => {
            let count = candidates.len();
            app.session.replace_feed(CandidateFeed::Loaded(candidates));
            app.is_loading = false;
            app.status_msg = format!("{count} candidates loaded");
            app.clamp_cursor();
        }
        UiEvent::FeedFailed(error) => {
            // An unloadable list reads as an empty one; the session goes on.
            app.session.replace_feed(CandidateFeed::Failed(error.clone()));
            app.is_loading = false;
            app.status_msg = "Candidate fetch failed".to_string();
            app.push_log("System".to_string(), error, Color::Red);
            app.clamp_cursor();
        }
        UiEvent::RemovalAcked(user_id) => {
            app.push_log(
                format!("{user_id}"),
                "[CONFIRMED] Backend acknowledged removal".to_string(),
                Color::Green,
            );
        }
        UiEvent::RemovalFailed(user_id, error) => {
            // Not retried and not rolled back; the card stays gone.
            app.push_log(format!("{user_id}"), format!("[FAILED] {error}"), Color::Red);
        }
    }
}

fn spawn_fetch(source: Arc<dyn CandidateSource>, tx: mpsc::UnboundedSender<UiEvent>) {
    tokio::spawn(async move {
        match source.fetch_candidates().await {
            Ok(candidates) => {
                let _ = tx.send(UiEvent::FeedLoaded(candidates));
            }
            Err(e) => {
                let _ = tx.send(UiEvent::FeedFailed(e.to_string()));
            }
        }
    });
}

fn decide(
    app: &mut AppState,
    action: ReviewAction,
    source: &Arc<dyn CandidateSource>,
    tx: &mpsc::UnboundedSender<UiEvent>,
) {
    let candidate: RemoveCandidate = match app.session.visible().get(app.cursor) {
        Some(selected) => (*selected).clone(),
        None => return,
    };

    // The local mutation always lands before any network call goes out, so
    // the card is gone from the very next frame.
    let newly_recorded = match action {
        ReviewAction::Keep => app.session.mark_kept(candidate.id),
        ReviewAction::Remove => app.session.mark_removed(candidate.id),
    };
    if !newly_recorded {
        return;
    }

    log_review_decision(&candidate, action);

    match action {
        ReviewAction::Keep => {
            app.keeps += 1;
            app.push_log(
                format!("@{}", candidate.screen_name),
                "[KEPT] Deferred, backend not notified".to_string(),
                Color::Yellow,
            );
        }
        ReviewAction::Remove => {
            app.removals_requested += 1;
            app.push_log(
                format!("@{}", candidate.screen_name),
                format!("[REMOVING] Confirming removal of {}", candidate.id),
                Color::Magenta,
            );

            let source = source.clone();
            let tx = tx.clone();
            let user_id = candidate.id;
            tokio::spawn(async move {
                match source.confirm_removal(user_id).await {
                    Ok(_) => {
                        let _ = tx.send(UiEvent::RemovalAcked(user_id));
                    }
                    Err(e) => {
                        let _ = tx.send(UiEvent::RemovalFailed(user_id, e.to_string()));
                    }
                }
            });
        }
    }

    app.clamp_cursor();
}
