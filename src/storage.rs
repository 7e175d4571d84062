use crate::deck::{Continent, FilterSelection, Mode};
use crate::progress::{Progress, ProgressKind};
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use log::warn;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeSet;

const MODE_KEY: &str = "geolearn.mode";
const FILTERS_KEY: &str = "geolearn.filters";
const KNOWN_KEY: &str = "geolearn.known";
const MISSED_KEY: &str = "geolearn.missed";

fn load_slot<T: DeserializeOwned>(key: &str) -> Option<T> {
    match LocalStorage::get::<T>(key) {
        Ok(value) => Some(value),
        Err(StorageError::KeyNotFound(_)) => None,
        Err(err) => {
            warn!("Discarding stored value for {}: {}", key, err);
            None
        }
    }
}

fn save_slot<T: Serialize>(key: &str, value: &T) {
    if let Err(err) = LocalStorage::set(key, value) {
        warn!("Failed to persist {}: {}", key, err);
    }
}

pub fn load_mode() -> Mode {
    load_slot::<Mode>(MODE_KEY).unwrap_or_default()
}

pub fn save_mode(mode: Mode) {
    save_slot(MODE_KEY, &mode);
}

pub fn load_filters() -> FilterSelection {
    load_slot::<StoredFilters>(FILTERS_KEY)
        .map(decode_filters)
        .unwrap_or_default()
}

pub fn save_filters(selection: &FilterSelection) {
    save_slot(FILTERS_KEY, &encode_filters(selection));
}

pub fn load_progress() -> Progress {
    let known = load_slot::<BTreeSet<String>>(KNOWN_KEY).unwrap_or_default();
    let missed = load_slot::<BTreeSet<String>>(MISSED_KEY).unwrap_or_default();
    Progress::from_sets(known, missed)
}

pub fn save_progress(progress: &Progress) {
    save_slot(KNOWN_KEY, progress.codes(ProgressKind::Known));
    save_slot(MISSED_KEY, progress.codes(ProgressKind::Missed));
}

/// On-disk filter shapes. The current form is an object; earlier releases
/// stored just the continent selection, either as a name array or as the
/// bare string "all".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredFilters {
    Current {
        continents: StoredContinents,
        microstates: bool,
    },
    Legacy(StoredContinents),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum StoredContinents {
    Sentinel(String),
    Names(Vec<String>),
}

fn decode_continents(stored: StoredContinents) -> BTreeSet<Continent> {
    match stored {
        StoredContinents::Sentinel(word) => {
            if !word.eq_ignore_ascii_case("all") {
                warn!("Unknown continent selection '{}', keeping everything", word);
            }
            FilterSelection::all_continents()
        }
        StoredContinents::Names(names) => names
            .iter()
            .filter_map(|name| Continent::from_name(name))
            .collect(),
    }
}

fn decode_filters(stored: StoredFilters) -> FilterSelection {
    match stored {
        StoredFilters::Current {
            continents,
            microstates,
        } => FilterSelection {
            continents: decode_continents(continents),
            include_microstates: microstates,
        },
        // The legacy slot predates the microstate toggle, which defaulted on.
        StoredFilters::Legacy(continents) => FilterSelection {
            continents: decode_continents(continents),
            include_microstates: true,
        },
    }
}

fn encode_filters(selection: &FilterSelection) -> StoredFilters {
    let continents = if selection.has_all_continents() {
        StoredContinents::Sentinel("all".to_string())
    } else {
        StoredContinents::Names(
            selection
                .continents
                .iter()
                .map(|continent| continent.name().to_string())
                .collect(),
        )
    };
    StoredFilters::Current {
        continents,
        microstates: selection.include_microstates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(text: &str) -> FilterSelection {
        decode_filters(serde_json::from_str(text).unwrap())
    }

    #[test]
    fn the_current_filter_shape_round_trips() {
        let selection = FilterSelection {
            continents: [Continent::Europe, Continent::Asia].into_iter().collect(),
            include_microstates: false,
        };

        let text = serde_json::to_string(&encode_filters(&selection)).unwrap();
        let restored = decode_str(&text);

        assert_eq!(restored, selection);
    }

    #[test]
    fn a_full_selection_is_stored_as_the_all_sentinel() {
        let value = serde_json::to_value(encode_filters(&FilterSelection::default())).unwrap();

        assert_eq!(value["continents"], "all");
        assert_eq!(value["microstates"], true);
    }

    #[test]
    fn legacy_name_arrays_imply_microstates() {
        let selection = decode_str(r#"["Europe", "South America"]"#);

        assert!(selection.include_microstates);
        assert_eq!(selection.continents.len(), 2);
        assert!(selection.continents.contains(&Continent::SouthAmerica));
    }

    #[test]
    fn the_legacy_all_sentinel_selects_everything() {
        let selection = decode_str(r#""all""#);

        assert!(selection.has_all_continents());
        assert!(selection.include_microstates);
    }

    #[test]
    fn unrecognised_continent_names_are_dropped() {
        let selection = decode_str(r#"["Europe", "Pangaea"]"#);

        assert_eq!(selection.continents.len(), 1);
        assert!(selection.continents.contains(&Continent::Europe));
    }

    #[test]
    fn an_unknown_sentinel_keeps_every_continent() {
        let selection = decode_str(r#""everything""#);

        assert!(selection.has_all_continents());
    }

    #[test]
    fn modes_persist_as_lowercase_names() {
        assert_eq!(serde_json::to_string(&Mode::Flags).unwrap(), "\"flags\"");
        let mode: Mode = serde_json::from_str("\"capitals\"").unwrap();
        assert_eq!(mode, Mode::Capitals);
    }
}
