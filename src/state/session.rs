/// Review session state machine
///
/// One `ReviewSession` owns everything about a single pass over a loaded
/// batch of photos: the ordered candidates, the cursor into them, the set
/// of photos already decided, and the guard that serializes decisions.
/// The session is pure state. All filesystem work (scanning, deleting)
/// happens outside and reports back through the transition methods here.

use std::collections::HashSet;

use super::data::PhotoEntry;

/// What a horizontal drag displacement means for the presented photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeAction {
    /// Dragged right past the threshold
    Keep,
    /// Dragged left past the threshold
    Delete,
    /// Still inside the dead zone
    None,
}

impl SwipeAction {
    /// Classify a horizontal displacement against the decision threshold.
    ///
    /// The boundary is exclusive on both sides: a drag of exactly the
    /// threshold distance is still no action.
    pub fn classify(dx: f32, threshold: f32) -> Self {
        if dx > threshold {
            SwipeAction::Keep
        } else if dx < -threshold {
            SwipeAction::Delete
        } else {
            SwipeAction::None
        }
    }
}

/// Re-entrancy guard for the presented photo.
/// Locked from the moment a decision starts until the session either
/// advances (keep, successful delete) or records a failed delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionGuard {
    Idle,
    Locked,
}

/// State for one pass over a loaded batch of photos
#[derive(Debug)]
pub struct ReviewSession {
    /// Ordered candidates, fixed once loaded
    candidates: Vec<PhotoEntry>,
    /// Index of the presented entry; equal to `candidates.len()` once
    /// every photo has been reviewed
    cursor: usize,
    /// Ids the user has kept or successfully deleted this session
    decided: HashSet<String>,
    guard: ActionGuard,
}

impl ReviewSession {
    /// Create an empty session. It is exhausted until `load` is called.
    pub fn new() -> Self {
        ReviewSession {
            candidates: Vec::new(),
            cursor: 0,
            decided: HashSet::new(),
            guard: ActionGuard::Idle,
        }
    }

    /// Start a fresh pass over `entries`.
    ///
    /// Replaces the candidates, rewinds the cursor, forgets every earlier
    /// decision and releases the guard. An empty batch is valid and leaves
    /// the session immediately exhausted.
    pub fn load(&mut self, entries: Vec<PhotoEntry>) {
        self.candidates = entries;
        self.cursor = 0;
        self.decided.clear();
        self.guard = ActionGuard::Idle;
    }

    /// The entry currently presented, or `None` once the session is exhausted
    pub fn current(&self) -> Option<&PhotoEntry> {
        self.candidates.get(self.cursor)
    }

    /// True once no entry remains to present
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    /// True while a decision for the presented entry is in flight
    pub fn is_locked(&self) -> bool {
        self.guard == ActionGuard::Locked
    }

    /// Total number of candidates in the loaded batch
    pub fn total(&self) -> usize {
        self.candidates.len()
    }

    /// Number of entries decided so far this session
    pub fn decided_count(&self) -> usize {
        self.decided.len()
    }

    /// Number of undecided entries from the cursor onward
    pub fn remaining(&self) -> usize {
        self.candidates[self.cursor..]
            .iter()
            .filter(|entry| !self.decided.contains(&entry.id))
            .count()
    }

    /// The presented entry followed by the next undecided entries,
    /// up to `count` in total. Used to warm display previews ahead of time.
    pub fn upcoming(&self, count: usize) -> Vec<&PhotoEntry> {
        self.candidates[self.cursor..]
            .iter()
            .filter(|entry| !self.decided.contains(&entry.id))
            .take(count)
            .collect()
    }

    /// Present the next undecided entry.
    ///
    /// Steps the cursor forward, skipping every entry whose id is already
    /// in the decided set (a photo can be decided out of order, e.g. when
    /// a deletion settles late). Stops at the first undecided entry or at
    /// the end of the batch. This is the only place the cursor moves, and
    /// it always releases the guard.
    pub fn advance(&mut self) {
        if self.cursor < self.candidates.len() {
            self.cursor += 1;
            while self.cursor < self.candidates.len()
                && self.decided.contains(&self.candidates[self.cursor].id)
            {
                self.cursor += 1;
            }
        }
        self.guard = ActionGuard::Idle;
    }

    /// Record a keep decision for the presented entry.
    ///
    /// Returns false and does nothing when a decision is already in flight
    /// or the session is exhausted; that is the debounce, not an error.
    /// On success the entry is marked decided and the guard locks until
    /// the caller's scheduled `advance` runs. Keeping never touches the
    /// deletion capability.
    pub fn keep(&mut self) -> bool {
        if self.guard == ActionGuard::Locked {
            return false;
        }
        let id = match self.current() {
            Some(entry) => entry.id.clone(),
            None => return false,
        };
        self.decided.insert(id);
        self.guard = ActionGuard::Locked;
        true
    }

    /// Start a delete decision for the presented entry.
    ///
    /// Returns the entry to hand to the deletion capability, or `None`
    /// when a decision is already in flight or the session is exhausted.
    /// Locks the guard; exactly one of `delete_succeeded` + `advance` or
    /// `delete_failed` must follow.
    pub fn begin_delete(&mut self) -> Option<PhotoEntry> {
        if self.guard == ActionGuard::Locked {
            return None;
        }
        let entry = self.current()?.clone();
        self.guard = ActionGuard::Locked;
        Some(entry)
    }

    /// Record that the deletion capability settled successfully.
    ///
    /// Marks the id decided. The guard stays locked until the scheduled
    /// `advance` runs, so the deleted photo dwells on screen without a
    /// second decision landing on it.
    pub fn delete_succeeded(&mut self, id: String) {
        self.decided.insert(id);
    }

    /// Record that the deletion capability settled with a failure.
    ///
    /// Releases the guard and leaves both the cursor and the decided set
    /// untouched. The same entry stays presented so the user can retry.
    pub fn delete_failed(&mut self) {
        self.guard = ActionGuard::Idle;
    }
}

impl Default for ReviewSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::path::PathBuf;

    fn entry(id: &str) -> PhotoEntry {
        PhotoEntry {
            id: id.to_string(),
            filename: format!("{}.jpg", id),
            path: PathBuf::from(format!("/photos/{}.jpg", id)),
            modified: Utc::now(),
        }
    }

    fn session_with(ids: &[&str]) -> ReviewSession {
        let mut session = ReviewSession::new();
        session.load(ids.iter().map(|id| entry(id)).collect());
        session
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(SwipeAction::classify(60.0, 50.0), SwipeAction::Keep);
        assert_eq!(SwipeAction::classify(-60.0, 50.0), SwipeAction::Delete);
        assert_eq!(SwipeAction::classify(0.0, 50.0), SwipeAction::None);

        // Boundary is exclusive on both sides
        assert_eq!(SwipeAction::classify(50.0, 50.0), SwipeAction::None);
        assert_eq!(SwipeAction::classify(-50.0, 50.0), SwipeAction::None);
        assert_eq!(SwipeAction::classify(51.0, 50.0), SwipeAction::Keep);
        assert_eq!(SwipeAction::classify(-51.0, 50.0), SwipeAction::Delete);
    }

    #[test]
    fn test_empty_load_is_exhausted() {
        let mut session = session_with(&[]);

        assert!(session.is_exhausted());
        assert!(session.current().is_none());
        assert!(!session.keep());
        assert!(session.begin_delete().is_none());
        assert_eq!(session.decided_count(), 0);
    }

    #[test]
    fn test_keep_locks_until_advance() {
        let mut session = session_with(&["a", "b"]);

        assert!(session.keep());
        assert!(session.is_locked());
        // The decided photo stays presented during the dwell
        assert_eq!(session.current().unwrap().id, "a");

        session.advance();
        assert!(!session.is_locked());
        assert_eq!(session.current().unwrap().id, "b");
        assert_eq!(session.decided_count(), 1);
    }

    #[test]
    fn test_second_decision_is_dropped_while_locked() {
        let mut session = session_with(&["a", "b"]);

        assert!(session.keep());

        // Follow-up gesture events from the same drag are no-ops
        assert!(!session.keep());
        assert!(session.begin_delete().is_none());
        assert_eq!(session.decided_count(), 1);
    }

    #[test]
    fn test_delete_failure_allows_retry() {
        let mut session = session_with(&["a"]);

        let target = session.begin_delete().expect("first delete starts");
        assert_eq!(target.id, "a");
        assert!(session.begin_delete().is_none());

        session.delete_failed();
        assert!(!session.is_locked());
        assert_eq!(session.decided_count(), 0);
        assert_eq!(session.current().unwrap().id, "a");

        // Retry on the same entry now goes through
        let retry = session.begin_delete().expect("retry starts");
        session.delete_succeeded(retry.id);
        session.advance();
        assert!(session.is_exhausted());
        assert_eq!(session.decided_count(), 1);
    }

    #[test]
    fn test_advance_skips_already_decided_entries() {
        let mut session = session_with(&["a", "b", "c"]);

        // "b" gets decided out of order while "a" is still presented
        assert!(session.keep());
        session.delete_succeeded("b".to_string());

        session.advance();
        assert_eq!(session.current().unwrap().id, "c");

        // Re-advancing never re-adds anything to the decided set
        let decided_before = session.decided_count();
        session.advance();
        assert_eq!(session.decided_count(), decided_before);
        assert!(session.is_exhausted());
    }

    #[test]
    fn test_full_review_scenario() {
        let mut session = session_with(&["a", "b", "c"]);

        // Delete "a", succeeds
        let target = session.begin_delete().unwrap();
        session.delete_succeeded(target.id);
        session.advance();
        assert_eq!(session.decided_count(), 1);
        assert_eq!(session.current().unwrap().id, "b");

        // Keep "b"
        assert!(session.keep());
        session.advance();
        assert_eq!(session.decided_count(), 2);
        assert_eq!(session.current().unwrap().id, "c");

        // Delete "c" fails, entry stays presented
        let _ = session.begin_delete().unwrap();
        session.delete_failed();
        assert_eq!(session.decided_count(), 2);
        assert_eq!(session.current().unwrap().id, "c");

        // Retried delete succeeds and exhausts the session
        let target = session.begin_delete().unwrap();
        session.delete_succeeded(target.id);
        session.advance();
        assert_eq!(session.decided_count(), 3);
        assert!(session.is_exhausted());
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut session = session_with(&["a"]);

        assert!(session.keep());
        session.advance();
        assert!(session.is_exhausted());

        session.advance();
        assert!(session.is_exhausted());
        assert!(!session.is_locked());
    }

    #[test]
    fn test_load_resets_previous_session() {
        let mut session = session_with(&["a", "b"]);
        assert!(session.keep());
        session.advance();

        session.load(vec![entry("x")]);
        assert_eq!(session.decided_count(), 0);
        assert!(!session.is_locked());
        assert_eq!(session.current().unwrap().id, "x");
        assert_eq!(session.remaining(), 1);
    }

    #[test]
    fn test_remaining_and_upcoming_skip_decided() {
        let mut session = session_with(&["a", "b", "c"]);
        session.delete_succeeded("b".to_string());

        assert_eq!(session.remaining(), 2);
        let upcoming: Vec<&str> = session
            .upcoming(3)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(upcoming, vec!["a", "c"]);
    }
}
