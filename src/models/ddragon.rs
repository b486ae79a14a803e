use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `champion.json`: champions keyed by their Data Dragon id (e.g. `MonkeyKing`).
#[derive(Debug, Serialize, Deserialize)]
pub struct ChampionList {
    #[serde(default)]
    pub version: String,
    pub data: HashMap<String, ChampionSummary>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChampionSummary {
    pub id: String,
    /// Numeric champion id as a string, matching spectator `championId`.
    pub key: String,
    pub name: String,
}

/// `champion/{id}.json`: a single-entry map wrapping the full champion record.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChampionDetailDocument {
    pub data: HashMap<String, ChampionDetail>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChampionDetail {
    pub id: String,
    pub name: String,
    pub spells: Vec<Spell>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub cooldown: Vec<f64>,
    pub cooldown_burn: Option<String>,
}
