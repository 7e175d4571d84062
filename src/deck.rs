use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Continent {
    pub const ALL: [Continent; 6] = [
        Continent::Africa,
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::Oceania,
        Continent::SouthAmerica,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
        }
    }

    pub fn from_name(name: &str) -> Option<Continent> {
        let name = name.trim();
        Continent::ALL
            .iter()
            .copied()
            .find(|continent| continent.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Outlines,
    Flags,
    Capitals,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Outlines, Mode::Flags, Mode::Capitals];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Outlines => "Outlines",
            Mode::Flags => "Flags",
            Mode::Capitals => "Capitals",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub code: String,
    pub name: String,
    pub capital: Option<String>,
    pub shape_path: String,
    pub flag_path: String,
    pub continent: Option<Continent>,
    pub microstate: bool,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub continents: BTreeSet<Continent>,
    pub include_microstates: bool,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            continents: FilterSelection::all_continents(),
            include_microstates: true,
        }
    }
}

impl FilterSelection {
    pub fn all_continents() -> BTreeSet<Continent> {
        Continent::ALL.iter().copied().collect()
    }

    pub fn has_all_continents(&self) -> bool {
        self.continents.len() == Continent::ALL.len()
    }

    pub fn toggle_continent(&mut self, continent: Continent) {
        if !self.continents.remove(&continent) {
            self.continents.insert(continent);
        }
    }

    pub fn matches(&self, card: &Card) -> bool {
        if card.microstate && !self.include_microstates {
            return false;
        }
        // With every continent selected there is no continent constraint,
        // so cards with no metadata stay playable.
        if self.has_all_continents() {
            return true;
        }
        match card.continent {
            Some(continent) => self.continents.contains(&continent),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AllCards {
    cards: Vec<Card>,
}

impl AllCards {
    pub fn new(mut cards: Vec<Card>) -> Self {
        cards.shuffle(&mut rand::thread_rng());
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn find(&self, code: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.code == code)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The working deck: the filtered, ordered card sequence plus a
/// `code → position` map that is rebuilt on every membership or order
/// change.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Deck {
    cards: Vec<Card>,
    positions: HashMap<String, usize>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        let mut seen = HashSet::new();
        let cards = cards
            .into_iter()
            .filter(|card| seen.insert(card.code.clone()))
            .collect();
        let mut deck = Self {
            cards,
            positions: HashMap::new(),
        };
        deck.rebuild_positions();
        deck
    }

    /// Subsequence of `all` matching `selection`. When nothing matches and a
    /// card is currently on screen, that card is kept as a singleton deck so
    /// the board never goes blank.
    pub fn filtered(
        all: &AllCards,
        selection: &FilterSelection,
        fallback: Option<Card>,
    ) -> Self {
        let cards: Vec<Card> = all
            .cards()
            .iter()
            .filter(|card| selection.matches(card))
            .cloned()
            .collect();
        if cards.is_empty() {
            if let Some(card) = fallback {
                return Deck::new(vec![card]);
            }
        }
        Deck::new(cards)
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut rand::thread_rng());
        self.rebuild_positions();
    }

    pub fn position_of(&self, code: &str) -> Option<usize> {
        self.positions.get(code).copied()
    }

    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn rebuild_positions(&mut self) {
        self.positions.clear();
        for (position, card) in self.cards.iter().enumerate() {
            self.positions.insert(card.code.clone(), position);
        }
    }
}

pub(crate) fn display_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
pub(crate) fn test_card(code: &str, name: &str) -> Card {
    Card {
        code: code.to_string(),
        name: name.to_string(),
        capital: None,
        shape_path: format!("/shapes/{code}.svg"),
        flag_path: format!("/flags/{code}.svg"),
        continent: None,
        microstate: false,
        icon: String::new(),
    }
}
