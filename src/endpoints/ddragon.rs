use crate::client::RiotClient;
use crate::error::TrackerError;
use crate::models::ddragon::{ChampionDetail, ChampionDetailDocument, ChampionList};

impl RiotClient {
    /// Full champion list for a patch.
    pub async fn champion_list(&self, patch: &str) -> Result<ChampionList, TrackerError> {
        let url = self.ddragon_url(&["cdn", patch, "data", self.config.locale.as_str(), "champion.json"])?;
        self.get_json(url).await
            .map_err(|e| TrackerError::CatalogUnavailable(e.to_string()))
    }

    /// Spell data for one champion, addressed by its Data Dragon id.
    pub async fn champion_detail(&self, patch: &str, champion: &str) -> Result<ChampionDetail, TrackerError> {
        let file = format!("{}.json", champion);
        let url = self.ddragon_url(&["cdn", patch, "data", self.config.locale.as_str(), "champion", file.as_str()])?;
        let mut doc: ChampionDetailDocument = self.get_json(url).await?;

        doc.data.remove(champion)
            .ok_or_else(|| TrackerError::ApiError {
                status: 404,
                message: format!("{} missing from its own champion file", champion),
            })
    }

    /// Newest patch listed by Data Dragon.
    pub async fn latest_version(&self) -> Result<String, TrackerError> {
        let url = self.ddragon_url(&["api", "versions.json"])?;
        let versions: Vec<String> = self.get_json(url).await
            .map_err(|e| TrackerError::CatalogUnavailable(e.to_string()))?;
        versions.into_iter().next()
            .ok_or_else(|| TrackerError::CatalogUnavailable("empty versions list".into()))
    }

    /// Configured patch, or the newest one when configured as `latest`.
    pub async fn resolve_patch(&self) -> Result<String, TrackerError> {
        if self.config.wants_latest_patch() {
            let patch = self.latest_version().await?;
            tracing::debug!("Resolved latest patch to {}", patch);
            Ok(patch)
        } else {
            Ok(self.config.patch.clone())
        }
    }
}
