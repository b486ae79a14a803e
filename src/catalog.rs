use std::collections::HashMap;

use crate::client::RiotClient;
use crate::error::TrackerError;
use crate::models::ddragon::ChampionList;

/// Numeric champion key → Data Dragon champion id, for one patch.
#[derive(Debug, Clone, Default)]
pub struct ChampionCatalog {
    names: HashMap<String, String>,
}

impl ChampionCatalog {
    pub async fn fetch(client: &RiotClient, patch: &str) -> Result<Self, TrackerError> {
        tracing::debug!("Downloading champion list for patch {}", patch);
        let list = client.champion_list(patch).await?;
        let catalog = Self::from_list(list)?;
        tracing::debug!("Champion catalog has {} entries", catalog.len());
        Ok(catalog)
    }

    /// Fails if two champions claim the same key.
    pub fn from_list(list: ChampionList) -> Result<Self, TrackerError> {
        let mut names = HashMap::with_capacity(list.data.len());
        for (id, summary) in list.data {
            if let Some(previous) = names.insert(summary.key.clone(), id.clone()) {
                return Err(TrackerError::CatalogUnavailable(format!(
                    "key {} claimed by both {} and {}",
                    summary.key, previous, id
                )));
            }
        }
        Ok(Self { names })
    }

    pub fn name_for(&self, champion_id: i64) -> Result<&str, TrackerError> {
        self.names
            .get(&champion_id.to_string())
            .map(String::as_str)
            .ok_or(TrackerError::UnknownChampion(champion_id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
