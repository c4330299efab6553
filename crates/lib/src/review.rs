use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::candidate::RemoveCandidate;
use crate::constant::CARDS_PER_ROW;

/// Fetch state of the candidate list.
///
/// `NotLoaded` and `Failed` both expose an empty sequence: the review view
/// renders whatever is available and never surfaces a fetch error as an
/// error state of its own.
#[derive(Debug, Clone, Default)]
pub enum CandidateFeed {
    #[default]
    NotLoaded,
    Loaded(Vec<RemoveCandidate>),
    Failed(String),
}

impl CandidateFeed {
    pub fn candidates(&self) -> &[RemoveCandidate] {
        match self {
            CandidateFeed::Loaded(candidates) => candidates,
            CandidateFeed::NotLoaded | CandidateFeed::Failed(_) => &[],
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CandidateFeed::Loaded(_))
    }
}

/// One review session: the fetched feed plus the set of candidate ids the
/// user already acted on.
///
/// The reviewed set is session-only state. It survives feed replacement, so
/// a candidate the backend re-returns after a refresh stays hidden; the
/// filter runs on every `visible` call, not once at fetch time.
pub struct ReviewSession {
    feed: CandidateFeed,
    reviewed: BTreeSet<u64>,
}

impl ReviewSession {
    pub fn new() -> Self {
        Self { feed: CandidateFeed::NotLoaded, reviewed: BTreeSet::new() }
    }

    pub fn feed(&self) -> &CandidateFeed {
        &self.feed
    }

    /// Install a new fetch result. The reviewed set is deliberately kept.
    pub fn replace_feed(&mut self, feed: CandidateFeed) {
        self.feed = feed;
    }

    /// Record a "keep" decision. Returns whether the id was newly recorded.
    pub fn mark_kept(&mut self, id: u64) -> bool {
        self.reviewed.insert(id)
    }

    /// Record a "remove" decision. Returns whether the id was newly
    /// recorded, so the caller issues at most one confirmation call per
    /// candidate.
    pub fn mark_removed(&mut self, id: u64) -> bool {
        self.reviewed.insert(id)
    }

    pub fn is_reviewed(&self, id: u64) -> bool {
        self.reviewed.contains(&id)
    }

    pub fn reviewed_count(&self) -> usize {
        self.reviewed.len()
    }

    /// Candidates still awaiting a decision, sorted for presentation:
    /// zero-following accounts first, the rest ascending by last post with
    /// never-posted accounts earliest. Ties keep feed order.
    pub fn visible(&self) -> Vec<&RemoveCandidate> {
        let mut visible: Vec<&RemoveCandidate> = self
            .feed
            .candidates()
            .iter()
            .filter(|candidate| !self.reviewed.contains(&candidate.id))
            .collect();
        visible.sort_by(|a, b| compare_candidates(a, b));
        visible
    }

    /// `visible`, chunked into fixed-width rows.
    pub fn visible_rows(&self) -> Vec<Vec<&RemoveCandidate>> {
        self.visible().chunks(CARDS_PER_ROW).map(<[_]>::to_vec).collect()
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

fn compare_candidates(a: &RemoveCandidate, b: &RemoveCandidate) -> Ordering {
    // false (zero following) orders before true, None (never posted) before
    // any timestamp.
    let key = |c: &RemoveCandidate| (c.friends_count != 0, c.last_post_time());
    key(a).cmp(&key(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::LastStatus;

    fn candidate(id: u64, friends_count: u64, last_post: Option<&str>) -> RemoveCandidate {
        RemoveCandidate {
            id,
            name: format!("User {id}"),
            screen_name: format!("user_{id}"),
            description: String::new(),
            profile_image_url: String::new(),
            friends_count,
            followers_count: 0,
            statuses_count: 0,
            status: last_post.map(|raw| LastStatus { created_at: raw.to_string() }),
            protected: false,
        }
    }

    fn visible_ids(session: &ReviewSession) -> Vec<u64> {
        session.visible().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_not_loaded_and_failed_render_empty() {
        let mut session = ReviewSession::new();
        assert!(session.visible_rows().is_empty());

        session.replace_feed(CandidateFeed::Failed("connection refused".to_string()));
        assert!(session.visible_rows().is_empty());
        assert!(!session.feed().is_loaded());
    }

    #[test]
    fn test_visible_is_fetched_minus_reviewed() {
        let mut session = ReviewSession::new();
        session.replace_feed(CandidateFeed::Loaded(vec![
            candidate(1, 3, None),
            candidate(2, 3, None),
            candidate(3, 3, None),
        ]));

        session.mark_removed(2);
        assert_eq!(visible_ids(&session), vec![1, 3]);

        session.mark_kept(1);
        assert_eq!(visible_ids(&session), vec![3]);
    }

    #[test]
    fn test_reviewed_ids_stay_hidden_after_refresh() {
        let mut session = ReviewSession::new();
        session.replace_feed(CandidateFeed::Loaded(vec![candidate(5, 1, None)]));
        session.mark_removed(5);
        assert!(visible_ids(&session).is_empty());

        // The backend re-returns the candidate on revalidation.
        session.replace_feed(CandidateFeed::Loaded(vec![
            candidate(5, 1, None),
            candidate(6, 1, None),
        ]));
        assert_eq!(visible_ids(&session), vec![6]);
    }

    #[test]
    fn test_marking_twice_is_idempotent() {
        let mut session = ReviewSession::new();
        session.replace_feed(CandidateFeed::Loaded(vec![
            candidate(1, 2, None),
            candidate(2, 2, None),
        ]));

        assert!(session.mark_removed(1));
        let after_first = visible_ids(&session);
        assert!(!session.mark_removed(1));
        assert_eq!(visible_ids(&session), after_first);
        assert_eq!(session.reviewed_count(), 1);

        assert!(session.mark_kept(2));
        assert!(!session.mark_kept(2));
        assert_eq!(session.reviewed_count(), 2);
    }

    #[test]
    fn test_zero_following_sorts_first() {
        let mut session = ReviewSession::new();
        // B has a very old post but follows people; A follows nobody.
        session.replace_feed(CandidateFeed::Loaded(vec![
            candidate(2, 5, Some("2005-01-01T00:00:00Z")),
            candidate(1, 0, Some("2024-01-01T00:00:00Z")),
        ]));
        assert_eq!(visible_ids(&session), vec![1, 2]);
    }

    #[test]
    fn test_sort_ascending_by_last_post() {
        let mut session = ReviewSession::new();
        session.replace_feed(CandidateFeed::Loaded(vec![
            candidate(1, 4, Some("2022-06-01T00:00:00Z")),
            candidate(2, 4, None),
            candidate(3, 4, Some("2015-02-01T00:00:00Z")),
        ]));
        // Never-posted first, then oldest post to newest.
        assert_eq!(visible_ids(&session), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut session = ReviewSession::new();
        session.replace_feed(CandidateFeed::Loaded(vec![
            candidate(31, 2, Some("2020-01-01T00:00:00Z")),
            candidate(12, 2, Some("2020-01-01T00:00:00Z")),
            candidate(25, 2, Some("2020-01-01T00:00:00Z")),
        ]));
        assert_eq!(visible_ids(&session), vec![31, 12, 25]);
    }

    #[test]
    fn test_seven_candidates_paginate_six_plus_one() {
        let mut session = ReviewSession::new();
        let feed: Vec<RemoveCandidate> = (1..=7)
            .map(|id| {
                // Input already ordered oldest post to newest.
                let stamp = format!("20{:02}-01-01T00:00:00Z", 10 + id);
                candidate(id, 3, Some(&stamp))
            })
            .collect();
        session.replace_feed(CandidateFeed::Loaded(feed));

        let rows = session.visible_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(rows[1].iter().map(|c| c.id).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_row_count_is_ceiling_and_rows_concatenate() {
        let mut session = ReviewSession::new();
        let feed: Vec<RemoveCandidate> = (1..=13).map(|id| candidate(id, 1, None)).collect();
        session.replace_feed(CandidateFeed::Loaded(feed));

        let rows = session.visible_rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), 6);
        assert_eq!(rows[1].len(), 6);
        assert_eq!(rows[2].len(), 1);

        let concatenated: Vec<u64> =
            rows.iter().flatten().map(|c| c.id).collect();
        assert_eq!(concatenated, visible_ids(&session));
    }

    #[test]
    fn test_is_reviewed() {
        let mut session = ReviewSession::new();
        session.mark_removed(9);
        assert!(session.is_reviewed(9));
        assert!(!session.is_reviewed(10));
    }
}
