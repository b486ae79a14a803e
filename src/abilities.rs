use serde::Serialize;

use crate::error::TrackerError;
use crate::models::ddragon::{ChampionDetail, Spell};

pub const SLOT_LABELS: [&str; 4] = ["Q", "W", "E", "R"];
pub const SEPARATOR: &str = "=====================";
const SLOT_GAP: &str = "        ";

/// Cooldown text for the four ability slots of one champion, in slot order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbilitySet {
    pub champion: String,
    pub cooldowns: [String; 4],
}

impl AbilitySet {
    pub fn from_detail(champion: &str, detail: &ChampionDetail) -> Result<Self, TrackerError> {
        let slot = |index: usize| {
            detail.spells.get(index)
                .map(cooldown_text)
                .ok_or_else(|| TrackerError::MissingSpell {
                    champion: champion.to_string(),
                    slot: index,
                })
        };

        Ok(Self {
            champion: champion.to_string(),
            cooldowns: [slot(0)?, slot(1)?, slot(2)?, slot(3)?],
        })
    }

    pub fn labelled(&self) -> impl Iterator<Item = (&'static str, &str)> {
        SLOT_LABELS.iter().copied().zip(self.cooldowns.iter().map(String::as_str))
    }

    pub fn render(&self) -> String {
        let slots = self.labelled()
            .map(|(label, cooldown)| format!("{}: {}", label, cooldown))
            .collect::<Vec<_>>()
            .join(SLOT_GAP);
        format!("{}\n{}\n{}\n", SEPARATOR, header(&self.champion), slots)
    }
}

pub(crate) fn header(champion: &str) -> String {
    format!("{} Cooldowns:", champion)
}

/// `cooldownBurn` when present, else the per-rank values joined with `/`.
fn cooldown_text(spell: &Spell) -> String {
    if let Some(burn) = spell.cooldown_burn.as_deref().filter(|b| !b.is_empty()) {
        return burn.to_string();
    }

    let ranks: Vec<String> = spell.cooldown.iter().map(|v| v.to_string()).collect();
    match ranks.first() {
        None => "?".to_string(),
        Some(first) if ranks.iter().all(|r| r == first) => first.clone(),
        Some(_) => ranks.join("/"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ddragon::ChampionDetailDocument;

    const KHAZIX: &str = r#"{
        "data": {
            "Khazix": {
                "id": "Khazix",
                "name": "Kha'Zix",
                "spells": [
                    { "id": "KhazixQ", "name": "Taste Their Fear", "cooldown": [4, 4, 4, 4, 4], "cooldownBurn": "4" },
                    { "id": "KhazixW", "name": "Void Spike", "cooldown": [9, 9, 9, 9, 9], "cooldownBurn": "9" },
                    { "id": "KhazixE", "name": "Leap", "cooldown": [20, 18, 16, 14, 12], "cooldownBurn": "20/18/16/14/12" },
                    { "id": "KhazixR", "name": "Void Assault", "cooldown": [100, 85, 70], "cooldownBurn": "100/85/70" }
                ]
            }
        }
    }"#;

    fn khazix() -> ChampionDetail {
        let mut doc: ChampionDetailDocument = serde_json::from_str(KHAZIX).unwrap();
        doc.data.remove("Khazix").unwrap()
    }

    #[test]
    fn extracts_four_cooldowns_in_slot_order() {
        let set = AbilitySet::from_detail("Khazix", &khazix()).unwrap();
        let labelled: Vec<_> = set.labelled().collect();
        assert_eq!(
            labelled,
            vec![("Q", "4"), ("W", "9"), ("E", "20/18/16/14/12"), ("R", "100/85/70")]
        );
    }

    #[test]
    fn renders_block_like_the_panel() {
        let set = AbilitySet::from_detail("Khazix", &khazix()).unwrap();
        assert_eq!(
            set.render(),
            "=====================\nKhazix Cooldowns:\n\
             Q: 4        W: 9        E: 20/18/16/14/12        R: 100/85/70\n"
        );
    }

    #[test]
    fn falls_back_to_rank_values() {
        let mut detail = khazix();
        detail.spells[2].cooldown_burn = None;
        detail.spells[0].cooldown_burn = None;
        detail.spells[1].cooldown = vec![0.5, 0.5];
        detail.spells[1].cooldown_burn = Some(String::new());

        let set = AbilitySet::from_detail("Khazix", &detail).unwrap();
        assert_eq!(set.cooldowns[0], "4");
        assert_eq!(set.cooldowns[1], "0.5");
        assert_eq!(set.cooldowns[2], "20/18/16/14/12");
    }

    #[test]
    fn short_spell_list_names_the_slot() {
        let mut detail = khazix();
        detail.spells.truncate(3);
        match AbilitySet::from_detail("Khazix", &detail) {
            Err(TrackerError::MissingSpell { champion, slot }) => {
                assert_eq!(champion, "Khazix");
                assert_eq!(slot, 3);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
