use reqwest::StatusCode;

use crate::client::{read_json, RiotClient};
use crate::error::TrackerError;
use crate::models::spectator::CurrentGameInfo;

impl RiotClient {
    /// Live game for an encrypted summoner id. A 404 means the summoner is not in a game.
    pub async fn active_game(&self, summoner_id: &str) -> Result<CurrentGameInfo, TrackerError> {
        let url = self.platform_url(&[
            "lol", "spectator", "v4", "active-games", "by-summoner", summoner_id,
        ])?;
        let resp = self.get_authed(url).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(TrackerError::NotInGame);
        }
        read_json(resp).await
    }
}
