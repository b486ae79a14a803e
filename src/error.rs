#[derive(thiserror::Error, Debug)]
pub enum TrackerError {
    #[error("Champion data unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("Summoner not found: {0}")]
    SummonerNotFound(String),
    #[error("Summoner not in game")]
    NotInGame,
    #[error("No champion with id {0} in the static data")]
    UnknownChampion(i64),
    #[error("{champion} has no spell in slot {slot}")]
    MissingSpell { champion: String, slot: usize },
    #[error("Config error: {0}")]
    Config(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },
}
