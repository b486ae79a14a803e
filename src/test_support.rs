use mockito::{Matcher, Mock, ServerGuard};

use crate::config::TrackerConfig;

pub const API_KEY: &str = "RGAPI-test-key";
pub const SUMMONER: &str = include_str!("../tests/fixtures/summoner.json");
pub const ACTIVE_GAME: &str = include_str!("../tests/fixtures/active_game.json");
pub const CHAMPIONS: &str = include_str!("../tests/fixtures/champion.json");
pub const KHAZIX: &str = include_str!("../tests/fixtures/Khazix.json");
pub const AHRI: &str = include_str!("../tests/fixtures/Ahri.json");

/// Points both the platform API and Data Dragon at one mock server.
pub fn config_for(server: &ServerGuard) -> TrackerConfig {
    TrackerConfig {
        api_key: API_KEY.to_string(),
        platform_base_url: Some(server.url()),
        ddragon_base_url: server.url(),
        ..TrackerConfig::default()
    }
}

/// Not yet created; finish with `create_async`.
pub fn platform(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server.mock("GET", path)
        .match_query(Matcher::UrlEncoded("api_key".into(), API_KEY.into()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
}

pub fn ddragon(server: &mut ServerGuard, path: &str, status: usize, body: &str) -> Mock {
    server.mock("GET", path)
        .match_query(Matcher::Any)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
}

pub const SUMMONER_PATH: &str = "/lol/summoner/v4/summoners/by-name/Tester";
pub const GAME_PATH: &str = "/lol/spectator/v4/active-games/by-summoner/enc-summoner-id";
pub const CATALOG_PATH: &str = "/cdn/12.6.1/data/en_US/champion.json";

pub fn detail_path(champion: &str) -> String {
    format!("/cdn/12.6.1/data/en_US/champion/{}.json", champion)
}

pub const NOT_FOUND: &str = r#"{"status":{"message":"Data not found","status_code":404}}"#;
