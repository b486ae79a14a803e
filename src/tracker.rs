use futures::future::join_all;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Semaphore;

use crate::abilities::AbilitySet;
use crate::catalog::ChampionCatalog;
use crate::client::RiotClient;
use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::models::spectator::CurrentGameInfo;
use crate::report::Report;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    NotInGame { summoner: String },
    Report(Report),
}

/// Summoner name in, cooldown report out.
#[derive(Clone)]
pub struct CooldownTracker {
    client: RiotClient,
    fetch_limit: Arc<Semaphore>,
}

impl CooldownTracker {
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        config.validate()?;
        Ok(Self::from_client(RiotClient::new(config)?))
    }

    pub fn from_client(client: RiotClient) -> Self {
        let permits = client.config().max_concurrent_fetches.max(1);
        Self {
            client,
            fetch_limit: Arc::new(Semaphore::new(permits)),
        }
    }

    pub fn client(&self) -> &RiotClient {
        &self.client
    }

    /// Champion ids of the game's participants, in participant order.
    pub async fn resolve_roster(&self, game: &CurrentGameInfo, patch: &str) -> Result<Vec<String>, TrackerError> {
        let catalog = ChampionCatalog::fetch(&self.client, patch).await?;
        roster_names(&catalog, game)
    }

    /// Fetches every champion's spells with at most `max_concurrent_fetches` in flight.
    /// A failed champion becomes an `unavailable` block; the rest are unaffected.
    pub async fn fetch_abilities(&self, patch: &str, champions: &[String]) -> Report {
        let fetches = champions.iter().map(|champion| async move {
            let _permit = self.fetch_limit.acquire().await.ok();
            let result = self.client.champion_detail(patch, champion).await
                .and_then(|detail| AbilitySet::from_detail(champion, &detail));
            (champion, result)
        });

        let mut report = Report::new(patch);
        for (champion, result) in join_all(fetches).await {
            match result {
                Ok(set) => report.push_ok(set),
                Err(e) => {
                    tracing::warn!("Cooldowns for {} unavailable: {}", champion, e);
                    report.push_failed(champion.as_str(), e);
                }
            }
        }
        report
    }

    #[tracing::instrument(skip(self))]
    pub async fn lookup(&self, summoner_name: &str) -> Result<LookupOutcome, TrackerError> {
        tracing::debug!("Looking up summoner");
        let summoner = self.client.summoner_by_name(summoner_name).await?;

        tracing::debug!("Fetching active game for {}", summoner.name);
        let game = match self.client.active_game(&summoner.id).await {
            Ok(game) => game,
            Err(TrackerError::NotInGame) => {
                tracing::info!("{} is not in a game", summoner.name);
                return Ok(LookupOutcome::NotInGame { summoner: summoner.name });
            }
            Err(e) => return Err(e),
        };

        let patch = self.client.resolve_patch().await?;
        let champions = self.resolve_roster(&game, &patch).await?;
        tracing::info!("Game {} roster: {}", game.game_id, champions.join(", "));

        Ok(LookupOutcome::Report(self.fetch_abilities(&patch, &champions).await))
    }

    /// Always yields displayable text; errors become an explanation.
    pub async fn run(&self, summoner_name: &str) -> String {
        match self.lookup(summoner_name).await {
            Ok(LookupOutcome::Report(report)) if report.block_count() == 0 => {
                "The game has no participants to show.\n".to_string()
            }
            Ok(LookupOutcome::Report(report)) => report.render(),
            Ok(LookupOutcome::NotInGame { summoner }) => {
                format!("{} is not currently in an active game.\n", summoner)
            }
            Err(e) => {
                tracing::warn!("Lookup for {:?} failed: {}", summoner_name, e);
                format!(
                    "{}\nSomething went wrong. You may have a typo in the name, or the player is not currently playing on the {} server.\n",
                    e,
                    self.client.config().platform.to_uppercase()
                )
            }
        }
    }
}

pub fn roster_names(catalog: &ChampionCatalog, game: &CurrentGameInfo) -> Result<Vec<String>, TrackerError> {
    game.participants
        .iter()
        .map(|p| catalog.name_for(p.champion_id).map(str::to_string))
        .collect()
}
