use serde::Serialize;

use crate::abilities::{header, AbilitySet, SEPARATOR};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChampionBlock {
    Ok(AbilitySet),
    Unavailable { champion: String, reason: String },
}

impl ChampionBlock {
    pub fn render(&self) -> String {
        match self {
            ChampionBlock::Ok(set) => set.render(),
            ChampionBlock::Unavailable { champion, reason } => {
                format!("{}\n{}\nunavailable: {}\n", SEPARATOR, header(champion), reason)
            }
        }
    }
}

/// One block per participant, in participant order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub patch: String,
    pub blocks: Vec<ChampionBlock>,
}

impl Report {
    pub fn new(patch: impl Into<String>) -> Self {
        Self { patch: patch.into(), blocks: Vec::new() }
    }

    pub fn push_ok(&mut self, set: AbilitySet) {
        self.blocks.push(ChampionBlock::Ok(set));
    }

    pub fn push_failed(&mut self, champion: impl Into<String>, reason: impl ToString) {
        self.blocks.push(ChampionBlock::Unavailable {
            champion: champion.into(),
            reason: reason.to_string(),
        });
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn render(&self) -> String {
        self.blocks.iter().map(ChampionBlock::render).collect()
    }
}
