//! Heuristic classifier configuration.

use serde::{Deserialize, Deserializer, Serialize};

/// Extra keywords appended to the built-in keyword tables.
///
/// Both fields accept a TOML array or a comma-separated string, so
/// `TRIAGE_CLASSIFIER__EXTRA_PRODUCTIVE=budget,invoice` works from the
/// environment.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClassifierConfig {
    #[serde(default, deserialize_with = "list_or_csv")]
    pub extra_productive: Vec<String>,

    #[serde(default, deserialize_with = "list_or_csv")]
    pub extra_unproductive: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrCsv {
    List(Vec<String>),
    Csv(String),
}

fn list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match ListOrCsv::deserialize(deserializer)? {
        ListOrCsv::List(items) => items,
        ListOrCsv::Csv(value) => value.split(',').map(str::to_string).collect(),
    };

    Ok(raw
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect())
}
