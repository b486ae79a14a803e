use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::TrackerConfig;
use crate::error::TrackerError;

#[derive(Clone)]
pub struct RiotClient {
    pub(crate) http: Client,
    pub(crate) config: TrackerConfig,
}

impl RiotClient {
    pub fn new(config: TrackerConfig) -> Result<Self, TrackerError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!("lol-cd-tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Platform API URL; each segment is percent-encoded.
    pub(crate) fn platform_url(&self, segments: &[&str]) -> Result<Url, TrackerError> {
        join_segments(&self.config.platform_url(), segments)
    }

    pub(crate) fn ddragon_url(&self, segments: &[&str]) -> Result<Url, TrackerError> {
        join_segments(&self.config.ddragon_base_url, segments)
    }

    /// GET against the platform API with the credential attached.
    pub(crate) async fn get_authed(&self, url: Url) -> Result<reqwest::Response, TrackerError> {
        Ok(self.http
            .get(url)
            .query(&[("api_key", self.config.api_key.as_str())])
            .send().await?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, TrackerError> {
        let resp = self.http.get(url).send().await?;
        read_json(resp).await
    }
}

fn join_segments(base: &str, segments: &[&str]) -> Result<Url, TrackerError> {
    let mut url = Url::parse(base)
        .map_err(|e| TrackerError::Config(format!("bad base URL {}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| TrackerError::Config(format!("base URL {} cannot take a path", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Turns non-2xx into `ApiError` before decoding the body.
pub(crate) async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, TrackerError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(api_error(status, resp).await);
    }
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub(crate) async fn api_error(status: StatusCode, resp: reqwest::Response) -> TrackerError {
    let message = resp.json::<serde_json::Value>().await
        .ok()
        .and_then(|body| body["status"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
    TrackerError::ApiError { status: status.as_u16(), message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RiotClient {
        RiotClient::new(TrackerConfig {
            api_key: "k".into(),
            ..TrackerConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn summoner_names_are_percent_encoded() {
        let url = client()
            .platform_url(&["lol", "summoner", "v4", "summoners", "by-name", "Doublelift Jr/2"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://na1.api.riotgames.com/lol/summoner/v4/summoners/by-name/Doublelift%20Jr%2F2"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let url = join_segments("http://127.0.0.1:1234/", &["api", "versions.json"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1234/api/versions.json");
    }
}
