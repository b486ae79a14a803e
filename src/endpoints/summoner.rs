use reqwest::StatusCode;

use crate::client::{read_json, RiotClient};
use crate::error::TrackerError;
use crate::models::summoner::Summoner;

impl RiotClient {
    /// Display name → summoner record.
    pub async fn summoner_by_name(&self, name: &str) -> Result<Summoner, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::SummonerNotFound(String::new()));
        }

        let url = self.platform_url(&["lol", "summoner", "v4", "summoners", "by-name", name])?;
        let resp = self.get_authed(url).await?;
        match resp.status() {
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST => {
                Err(TrackerError::SummonerNotFound(name.to_string()))
            }
            _ => read_json(resp).await,
        }
    }
}
