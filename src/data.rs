use crate::deck::{AllCards, Card, Continent};
use futures::join;
use gloo_net::http::Request;
use log::warn;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

pub const CARDS_URL: &str = "data/countries.json";
pub const META_URL: &str = "data/country-meta.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("'{0}' was not found")]
    NotFound(String),
    #[error("network failure: {0}")]
    Network(String),
    #[error("invalid data: {0}")]
    Parse(String),
}

impl DataError {
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    fn parse<E: std::fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardRecord {
    code: String,
    name: String,
    #[serde(default)]
    capital: Option<String>,
    shape_path: String,
    flag_path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetaRecord {
    code: String,
    #[serde(default)]
    continent: Option<String>,
    #[serde(default)]
    microstate: bool,
    #[serde(default)]
    flag_icon: Option<String>,
}

async fn fetch_text(url: &str) -> Result<String, DataError> {
    let response = Request::get(url).send().await.map_err(DataError::network)?;

    if response.status() == 404 {
        return Err(DataError::NotFound(url.to_owned()));
    }

    if !response.ok() {
        return Err(DataError::Network(format!(
            "HTTP {} while fetching {}",
            response.status(),
            url
        )));
    }

    response.text().await.map_err(DataError::network)
}

async fn fetch_cards() -> Result<Vec<CardRecord>, DataError> {
    let text = fetch_text(CARDS_URL).await?;
    serde_json::from_str(&text).map_err(DataError::parse)
}

async fn fetch_meta() -> Result<Vec<MetaRecord>, DataError> {
    let text = fetch_text(META_URL).await?;
    serde_json::from_str(&text).map_err(DataError::parse)
}

/// Fetches the card list and the continent metadata concurrently. The card
/// list is required; metadata failures are logged and the cards come back
/// unclassified, so the quiz still works without filters.
pub async fn load_all_cards() -> Result<AllCards, DataError> {
    let (records, meta) = join!(fetch_cards(), fetch_meta());
    let records = records?;
    let meta = match meta {
        Ok(meta) => meta,
        Err(err) => {
            warn!("Continuing without country metadata: {}", err);
            Vec::new()
        }
    };
    build_all_cards(records, meta)
}

fn build_all_cards(
    records: Vec<CardRecord>,
    meta: Vec<MetaRecord>,
) -> Result<AllCards, DataError> {
    if records.is_empty() {
        return Err(DataError::Parse(
            "the country list does not contain any cards".to_string(),
        ));
    }

    let mut meta_by_code: HashMap<String, MetaRecord> = meta
        .into_iter()
        .map(|record| (record.code.trim().to_uppercase(), record))
        .collect();

    let mut seen = HashSet::new();
    let mut cards = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let code = record.code.trim().to_uppercase();
        let name = record.name.trim().to_string();
        if code.is_empty() || name.is_empty() {
            return Err(DataError::Parse(format!(
                "card {} is missing a code or name",
                index
            )));
        }
        if !seen.insert(code.clone()) {
            warn!("Ignoring duplicate card code {}", code);
            continue;
        }

        let meta = meta_by_code.remove(&code);
        let continent = match meta.as_ref().and_then(|m| m.continent.as_deref()) {
            Some(name) => {
                let parsed = Continent::from_name(name);
                if parsed.is_none() {
                    warn!("Unknown continent '{}' for {}", name, code);
                }
                parsed
            }
            None => None,
        };
        let microstate = meta.as_ref().map(|m| m.microstate).unwrap_or(false);
        let icon = meta.and_then(|m| m.flag_icon).unwrap_or_default();

        cards.push(Card {
            code,
            name,
            capital: record.capital.and_then(|capital| {
                let trimmed = capital.trim().to_string();
                (!trimmed.is_empty()).then_some(trimmed)
            }),
            shape_path: record.shape_path,
            flag_path: record.flag_path,
            continent,
            microstate,
            icon,
        });
    }

    Ok(AllCards::new(cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, name: &str) -> CardRecord {
        CardRecord {
            code: code.to_string(),
            name: name.to_string(),
            capital: None,
            shape_path: format!("shapes/{code}.svg"),
            flag_path: format!("flags/{code}.svg"),
        }
    }

    fn meta(code: &str, continent: &str, microstate: bool) -> MetaRecord {
        MetaRecord {
            code: code.to_string(),
            continent: Some(continent.to_string()),
            microstate,
            flag_icon: None,
        }
    }

    #[test]
    fn card_records_parse_the_published_shape() {
        let text = r#"[{
            "code": "fr",
            "name": "France",
            "capital": "Paris",
            "shapePath": "shapes/fr.svg",
            "flagPath": "flags/fr.svg"
        }]"#;

        let records: Vec<CardRecord> = serde_json::from_str(text).unwrap();

        assert_eq!(records[0].code, "fr");
        assert_eq!(records[0].capital.as_deref(), Some("Paris"));
        assert_eq!(records[0].shape_path, "shapes/fr.svg");
    }

    #[test]
    fn meta_records_tolerate_missing_fields() {
        let text = r#"[{"code": "FR"}, {"code": "SM", "flagIcon": "🇸🇲"}]"#;

        let records: Vec<MetaRecord> = serde_json::from_str(text).unwrap();

        assert_eq!(records[0].continent, None);
        assert!(!records[0].microstate);
        assert_eq!(records[1].flag_icon.as_deref(), Some("🇸🇲"));
    }

    #[test]
    fn an_empty_card_list_is_rejected() {
        let err = build_all_cards(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn a_blank_code_is_rejected_with_its_index() {
        let records = vec![record("FR", "France"), record("  ", "Atlantis")];

        let err = build_all_cards(records, Vec::new()).unwrap_err();

        assert!(err.to_string().contains("card 1"));
    }

    #[test]
    fn metadata_joins_by_code_case_insensitively() {
        let records = vec![record("FR", "France"), record("sm", "San Marino")];
        let mut fr_meta = meta("fr", "Europe", false);
        fr_meta.flag_icon = Some("🇫🇷".to_string());
        let meta = vec![fr_meta, meta("SM", "europe", true)];

        let all = build_all_cards(records, meta).unwrap();

        let france = all.find("FR").unwrap();
        assert_eq!(france.continent, Some(Continent::Europe));
        assert!(!france.microstate);
        assert_eq!(france.icon, "🇫🇷");

        let san_marino = all.find("SM").unwrap();
        assert_eq!(san_marino.continent, Some(Continent::Europe));
        assert!(san_marino.microstate);
    }

    #[test]
    fn cards_without_metadata_stay_unclassified() {
        let records = vec![record("FR", "France")];

        let all = build_all_cards(records, Vec::new()).unwrap();

        let france = all.find("FR").unwrap();
        assert_eq!(france.continent, None);
        assert!(!france.microstate);
        assert!(france.icon.is_empty());
    }

    #[test]
    fn an_unrecognised_continent_name_is_dropped() {
        let records = vec![record("FR", "France")];
        let meta = vec![meta("FR", "Pangaea", false)];

        let all = build_all_cards(records, meta).unwrap();

        assert_eq!(all.find("FR").unwrap().continent, None);
    }

    #[test]
    fn duplicate_codes_keep_the_first_record() {
        let records = vec![
            record("FR", "France"),
            record("fr", "Francia"),
            record("DE", "Germany"),
        ];

        let all = build_all_cards(records, Vec::new()).unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all.find("FR").unwrap().name, "France");
    }

    #[test]
    fn blank_capitals_become_none() {
        let mut with_blank = record("FR", "France");
        with_blank.capital = Some("   ".to_string());
        let mut with_value = record("DE", "Germany");
        with_value.capital = Some(" Berlin ".to_string());

        let all = build_all_cards(vec![with_blank, with_value], Vec::new()).unwrap();

        assert_eq!(all.find("FR").unwrap().capital, None);
        assert_eq!(all.find("DE").unwrap().capital.as_deref(), Some("Berlin"));
    }
}
