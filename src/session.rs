use crate::deck::{AllCards, Card, Deck, FilterSelection};
use crate::progress::{Outcome, Progress, ProgressKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Deck is empty, nothing to show.
    Idle,
    Hidden,
    Revealed,
    /// An outcome was recorded and the hold timer is running.
    Grading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveGrade {
    token: u64,
    outcome: Outcome,
}

/// One quiz run over a deck: cursor, flip state and the in-flight grade.
///
/// Grades are settled in two steps so the view can hold the graded card on
/// screen: [`Session::grade`] records the outcome immediately and hands back
/// a token, and [`Session::finish_grade`] advances only if that token is
/// still the live one. Anything that moves the cursor in between (a jump, a
/// filter change) clears the active grade, so the late timer finds a stale
/// token and does nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    deck: Deck,
    cursor: usize,
    flipped: bool,
    grading: Option<ActiveGrade>,
    next_token: u64,
    progress: Progress,
}

impl Session {
    pub fn new(deck: Deck, progress: Progress) -> Self {
        Self {
            deck,
            cursor: 0,
            flipped: false,
            grading: None,
            next_token: 1,
            progress,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.deck.is_empty() {
            Phase::Idle
        } else if self.grading.is_some() {
            Phase::Grading
        } else if self.flipped {
            Phase::Revealed
        } else {
            Phase::Hidden
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn flipped(&self) -> bool {
        self.flipped
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn grading_outcome(&self) -> Option<Outcome> {
        self.grading.map(|active| active.outcome)
    }

    /// Flips the card. Rejected while a grade is settling so the reveal
    /// the grade forced cannot be undone mid-hold.
    pub fn toggle_reveal(&mut self) -> bool {
        if self.grading.is_some() || self.deck.is_empty() {
            return false;
        }
        self.flipped = !self.flipped;
        true
    }

    pub fn reset_flip(&mut self) {
        if self.grading.is_none() {
            self.flipped = false;
        }
    }

    /// Records an outcome for the current card and opens the grading hold.
    /// The card is force-revealed so the answer is visible while it lingers.
    /// Returns the token the caller must pass back to [`Session::finish_grade`],
    /// or `None` when a grade is already in flight or the deck is empty.
    pub fn grade(&mut self, outcome: Outcome) -> Option<u64> {
        if self.grading.is_some() {
            return None;
        }
        let code = self.current_card()?.code.clone();
        self.flipped = true;
        self.progress.record(&code, outcome);
        let token = self.next_token;
        self.next_token += 1;
        self.grading = Some(ActiveGrade { token, outcome });
        Some(token)
    }

    /// Settles the grading hold: advances the cursor if `token` is still the
    /// live grade, otherwise leaves the session untouched. Returns whether
    /// the deck advanced.
    pub fn finish_grade(&mut self, token: u64) -> bool {
        match self.grading {
            Some(active) if active.token == token => {
                self.grading = None;
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Moves to the next card the player has not marked known. Wrapping past
    /// the end reshuffles the deck and restarts at the top; when every card
    /// is known the cursor advances exactly one step instead of spinning.
    fn advance(&mut self) {
        let len = self.deck.len();
        if len == 0 {
            return;
        }
        let start = self.cursor;
        let mut next = (start + 1) % len;
        while next != start {
            let known = self
                .deck
                .get(next)
                .map(|card| self.progress.is_known(&card.code))
                .unwrap_or(false);
            if !known {
                break;
            }
            next = (next + 1) % len;
        }
        if next == start {
            next = (start + 1) % len;
        }
        if next <= start {
            self.deck.shuffle();
            self.cursor = 0;
        } else {
            self.cursor = next;
        }
        self.flipped = false;
    }

    /// Jumps straight to a card by code, cancelling any grade in flight.
    pub fn jump(&mut self, code: &str) -> bool {
        let Some(position) = self.deck.position_of(code) else {
            return false;
        };
        self.grading = None;
        self.cursor = position;
        self.flipped = false;
        true
    }

    /// Rebuilds the deck for a new selection. The card currently on screen
    /// survives as a singleton deck if nothing else matches.
    pub fn apply_filter(&mut self, all: &AllCards, selection: &FilterSelection) {
        let fallback = self.current_card().cloned();
        self.deck = Deck::filtered(all, selection, fallback);
        self.cursor = 0;
        self.flipped = false;
        self.grading = None;
    }

    pub fn clear_progress(&mut self, kind: ProgressKind) {
        self.progress.clear(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::test_card;

    fn three_card_session() -> Session {
        let deck = Deck::new(vec![
            test_card("A", "Albania"),
            test_card("B", "Belgium"),
            test_card("C", "Croatia"),
        ]);
        Session::new(deck, Progress::new())
    }

    #[test]
    fn reveal_toggles_until_a_grade_locks_it() {
        let mut session = three_card_session();
        assert_eq!(session.phase(), Phase::Hidden);

        assert!(session.toggle_reveal());
        assert_eq!(session.phase(), Phase::Revealed);
        assert!(session.toggle_reveal());
        assert_eq!(session.phase(), Phase::Hidden);

        session.grade(Outcome::Correct);
        assert!(!session.toggle_reveal());
        assert!(session.flipped());
    }

    #[test]
    fn grading_records_and_force_reveals() {
        let mut session = three_card_session();

        let token = session.grade(Outcome::Correct);

        assert!(token.is_some());
        assert_eq!(session.phase(), Phase::Grading);
        assert!(session.flipped());
        assert!(session.progress().is_known("A"));
        assert_eq!(session.grading_outcome(), Some(Outcome::Correct));
    }

    #[test]
    fn a_second_grade_during_the_hold_is_rejected() {
        let mut session = three_card_session();

        let first = session.grade(Outcome::Correct);
        let second = session.grade(Outcome::Incorrect);

        assert!(first.is_some());
        assert!(second.is_none());
        // The rejected grade must not have touched the record.
        assert!(session.progress().is_known("A"));
        assert_eq!(session.progress().missed_count(), 0);
    }

    #[test]
    fn finishing_the_live_grade_advances() {
        let mut session = three_card_session();
        let token = session.grade(Outcome::Incorrect).unwrap();

        assert!(session.finish_grade(token));

        assert_eq!(session.cursor(), 1);
        assert_eq!(session.phase(), Phase::Hidden);
        assert!(!session.flipped());
    }

    #[test]
    fn a_jump_makes_the_pending_token_stale() {
        let mut session = three_card_session();
        let token = session.grade(Outcome::Correct).unwrap();

        assert!(session.jump("C"));
        assert!(!session.finish_grade(token));

        // The late timer must not move the cursor off the jump target.
        assert_eq!(session.current_card().map(|card| card.code.as_str()), Some("C"));
        assert_eq!(session.phase(), Phase::Hidden);
    }

    #[test]
    fn advancing_skips_known_cards() {
        let mut session = three_card_session();
        session.progress.record("B", Outcome::Correct);

        let token = session.grade(Outcome::Incorrect).unwrap();
        session.finish_grade(token);

        assert_eq!(session.current_card().map(|card| card.code.as_str()), Some("C"));
    }

    #[test]
    fn an_all_known_deck_still_advances_one_step() {
        let mut session = three_card_session();
        for code in ["A", "B", "C"] {
            session.progress.record(code, Outcome::Correct);
        }

        let token = session.grade(Outcome::Correct).unwrap();
        session.finish_grade(token);

        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn wrapping_reshuffles_and_restarts_at_the_top() {
        let mut session = three_card_session();
        assert!(session.jump("C"));

        let token = session.grade(Outcome::Correct).unwrap();
        session.finish_grade(token);

        assert_eq!(session.cursor(), 0);
        assert_eq!(session.phase(), Phase::Hidden);
        // Positions must agree with the reshuffled order.
        let code = session.current_card().map(|card| card.code.clone());
        assert_eq!(session.deck().position_of(code.as_deref().unwrap_or("")), Some(0));
    }

    #[test]
    fn jumping_to_an_absent_code_fails_cleanly() {
        let mut session = three_card_session();
        session.jump("B");

        assert!(!session.jump("ZZ"));
        assert_eq!(session.cursor(), 1);
    }

    #[test]
    fn filter_changes_cancel_the_hold_and_keep_the_screen_filled() {
        let deck = Deck::new(vec![test_card("A", "Albania"), test_card("B", "Belgium")]);
        let all = AllCards::new(vec![test_card("A", "Albania"), test_card("B", "Belgium")]);
        let mut session = Session::new(deck, Progress::new());
        let token = session.grade(Outcome::Correct).unwrap();

        // No card has continent metadata, so a narrowed selection matches
        // nothing and the current card survives as a singleton.
        let selection = FilterSelection {
            continents: [crate::deck::Continent::Oceania].into_iter().collect(),
            include_microstates: true,
        };
        session.apply_filter(&all, &selection);

        assert_eq!(session.deck().len(), 1);
        assert_eq!(session.current_card().map(|card| card.code.as_str()), Some("A"));
        assert!(!session.finish_grade(token));
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn an_empty_deck_is_idle_and_inert() {
        let mut session = Session::new(Deck::new(Vec::new()), Progress::new());

        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.toggle_reveal());
        assert!(session.grade(Outcome::Correct).is_none());
        assert!(session.current_card().is_none());
    }

    #[test]
    fn clearing_progress_affects_only_the_named_set() {
        let mut session = three_card_session();
        session.progress.record("A", Outcome::Correct);
        session.progress.record("B", Outcome::Incorrect);

        session.clear_progress(ProgressKind::Missed);

        assert!(session.progress().is_known("A"));
        assert_eq!(session.progress().missed_count(), 0);
    }
}
