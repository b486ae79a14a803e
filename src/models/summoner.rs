use serde::{Deserialize, Serialize};

/// Summoner record from `summoner/v4`. Only `id` feeds the spectator lookup.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Summoner {
    pub id: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub puuid: String,
    pub name: String,
    #[serde(default)]
    pub summoner_level: u64,
}
