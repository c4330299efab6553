use pruner_lib::ReviewSession;
use ratatui::style::Color;

use super::config::MAX_LOG_LINES;

pub struct AppState {
    pub session: ReviewSession,
    pub cursor: usize,
    pub logs: Vec<(String, String, Color)>,
    pub status_msg: String,
    pub spinner_idx: usize,
    pub is_loading: bool,
    pub keeps: u64,
    pub removals_requested: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: ReviewSession::new(),
            cursor: 0,
            logs: vec![],
            status_msg: "Fetching candidates...".to_string(),
            spinner_idx: 0,
            is_loading: true,
            keeps: 0,
            removals_requested: 0,
        }
    }
}

impl AppState {
    pub fn visible_count(&self) -> usize {
        self.session.visible().len()
    }

    pub fn push_log(&mut self, who: String, details: String, color: Color) {
        if self.logs.len() >= MAX_LOG_LINES {
            self.logs.remove(0);
        }
        self.logs.push((who, details, color));
    }

    /// Move the selection by a signed card offset, clamped to the visible
    /// range.
    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, count as isize - 1) as usize;
    }

    /// Pull the selection back inside the visible range after a card
    /// disappears.
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }
}
