use crate::deck::{display_cmp, Card};

pub const MAX_RESULTS: usize = 8;

/// Scores one card against a lowercased query. Higher is better, `None`
/// excludes the card entirely.
fn score(card: &Card, query: &str) -> Option<i32> {
    let code = card.code.to_lowercase();
    let name = card.name.to_lowercase();

    if code == query {
        return Some(1000);
    }
    if name == query {
        return Some(950);
    }
    if name.starts_with(query) {
        let spare = name.chars().count() as i32 - query.chars().count() as i32;
        return Some(800 - spare);
    }
    if code.starts_with(query) {
        return Some(760);
    }
    if let Some(byte_pos) = name.find(query) {
        let char_pos = name[..byte_pos].chars().count() as i32;
        return Some(650 - char_pos);
    }
    if is_subsequence(query, &name) {
        return Some(400);
    }
    None
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut chars = haystack.chars();
    needle.chars().all(|wanted| chars.any(|c| c == wanted))
}

/// Ranks `cards` against `query`: exact hits first, then prefixes, then
/// substrings, then loose character subsequences. At most [`MAX_RESULTS`]
/// cards come back; ties are broken by country name.
pub fn rank<'a>(cards: &'a [Card], query: &str) -> Vec<&'a Card> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let mut scored: Vec<(i32, &Card)> = cards
        .iter()
        .filter_map(|card| score(card, &query).map(|score| (score, card)))
        .collect();
    scored.sort_by(|(score_a, card_a), (score_b, card_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| display_cmp(&card_a.name, &card_b.name))
    });
    scored
        .into_iter()
        .take(MAX_RESULTS)
        .map(|(_, card)| card)
        .collect()
}

/// Controlled state for the jump-to-card box: the typed query, its current
/// result list and the keyboard-highlighted row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchBox {
    query: String,
    results: Vec<Card>,
    selected: usize,
}

impl SearchBox {
    pub fn set_query(&mut self, query: &str, cards: &[Card]) {
        self.query = query.to_string();
        self.results = rank(cards, query).into_iter().cloned().collect();
        self.selected = 0;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Card] {
        &self.results
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        !self.results.is_empty()
    }

    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + 1) % self.results.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.results.is_empty() {
            self.selected = (self.selected + self.results.len() - 1) % self.results.len();
        }
    }

    /// Confirms the highlighted result, clearing the box. Returns the card
    /// code to jump to.
    pub fn confirm(&mut self) -> Option<String> {
        self.confirm_at(self.selected)
    }

    pub fn confirm_at(&mut self, index: usize) -> Option<String> {
        let code = self.results.get(index).map(|card| card.code.clone())?;
        self.clear();
        Some(code)
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected = 0;
    }
}
