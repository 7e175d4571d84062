use crate::deck::{display_cmp, AllCards};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressKind {
    Known,
    Missed,
}

/// Per-card outcome record. A code lives in at most one of the two sets;
/// recording an outcome moves it out of the other set.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Progress {
    known: BTreeSet<String>,
    missed: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEntry {
    pub code: String,
    pub name: String,
    pub icon: String,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores persisted sets. Older data could hold a code in both sets;
    /// the missed entry wins so a shaky card keeps coming back.
    pub fn from_sets(mut known: BTreeSet<String>, missed: BTreeSet<String>) -> Self {
        known.retain(|code| !missed.contains(code));
        Self { known, missed }
    }

    pub fn record(&mut self, code: &str, outcome: Outcome) {
        match outcome {
            Outcome::Correct => {
                self.missed.remove(code);
                self.known.insert(code.to_string());
            }
            Outcome::Incorrect => {
                self.known.remove(code);
                self.missed.insert(code.to_string());
            }
        }
    }

    pub fn is_known(&self, code: &str) -> bool {
        self.known.contains(code)
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn missed_count(&self) -> usize {
        self.missed.len()
    }

    pub fn codes(&self, kind: ProgressKind) -> &BTreeSet<String> {
        match kind {
            ProgressKind::Known => &self.known,
            ProgressKind::Missed => &self.missed,
        }
    }

    pub fn clear(&mut self, kind: ProgressKind) {
        match kind {
            ProgressKind::Known => self.known.clear(),
            ProgressKind::Missed => self.missed.clear(),
        }
    }

    /// Resolves one set against the card catalogue for display, sorted by
    /// country name. Codes that no longer resolve are skipped.
    pub fn snapshot(&self, kind: ProgressKind, all: &AllCards) -> Vec<ProgressEntry> {
        let mut entries: Vec<ProgressEntry> = self
            .codes(kind)
            .iter()
            .filter_map(|code| all.find(code))
            .map(|card| ProgressEntry {
                code: card.code.clone(),
                name: card.name.clone(),
                icon: card.icon.clone(),
            })
            .collect();
        entries.sort_by(|a, b| display_cmp(&a.name, &b.name));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::test_card;

    #[test]
    fn recording_moves_a_code_between_sets() {
        let mut progress = Progress::new();
        progress.record("FR", Outcome::Incorrect);
        assert_eq!(progress.missed_count(), 1);
        assert!(!progress.is_known("FR"));

        progress.record("FR", Outcome::Correct);
        assert!(progress.is_known("FR"));
        assert_eq!(progress.missed_count(), 0);

        progress.record("FR", Outcome::Incorrect);
        assert!(!progress.is_known("FR"));
        assert_eq!(progress.missed_count(), 1);
        assert_eq!(progress.known_count(), 0);

        // Repeating the same outcome changes nothing.
        progress.record("FR", Outcome::Incorrect);
        assert_eq!(progress.missed_count(), 1);
        assert_eq!(progress.known_count(), 0);
    }

    #[test]
    fn restored_overlap_resolves_as_missed() {
        let known: BTreeSet<String> = ["FR", "DE"].iter().map(|c| c.to_string()).collect();
        let missed: BTreeSet<String> = ["FR"].iter().map(|c| c.to_string()).collect();

        let progress = Progress::from_sets(known, missed);

        assert!(!progress.is_known("FR"));
        assert!(progress.is_known("DE"));
        assert!(progress.codes(ProgressKind::Missed).contains("FR"));
    }

    #[test]
    fn clearing_one_set_leaves_the_other() {
        let mut progress = Progress::new();
        progress.record("FR", Outcome::Correct);
        progress.record("DE", Outcome::Incorrect);

        progress.clear(ProgressKind::Known);

        assert_eq!(progress.known_count(), 0);
        assert_eq!(progress.missed_count(), 1);
    }

    #[test]
    fn snapshot_sorts_by_name_and_drops_stale_codes() {
        let all = AllCards::new(vec![
            test_card("FR", "France"),
            test_card("DE", "Germany"),
            test_card("AL", "albania"),
        ]);
        let mut progress = Progress::new();
        progress.record("DE", Outcome::Correct);
        progress.record("FR", Outcome::Correct);
        progress.record("AL", Outcome::Correct);
        progress.record("ZZ", Outcome::Correct);

        let entries = progress.snapshot(ProgressKind::Known, &all);

        let names: Vec<&str> = entries.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, vec!["albania", "France", "Germany"]);
    }
}
