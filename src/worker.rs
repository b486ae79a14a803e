use serde::Serialize;
use tokio::sync::{broadcast, mpsc};

use crate::error::TrackerError;
use crate::tracker::CooldownTracker;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LookupEvent {
    Started { summoner: String },
    Finished { summoner: String, text: String },
}

/// Runs lookups off the caller's task and publishes their text on a broadcast channel.
pub struct LookupWorker {
    requests: mpsc::Sender<String>,
    sender: broadcast::Sender<LookupEvent>,
}

impl LookupWorker {
    /// Must be called inside a tokio runtime.
    pub fn start(tracker: CooldownTracker) -> (Self, broadcast::Receiver<LookupEvent>) {
        let (tx, rx) = broadcast::channel(64);
        let (req_tx, req_rx) = mpsc::channel(16);

        tokio::spawn(Self::serve(tracker, req_rx, tx.clone()));

        (Self { requests: req_tx, sender: tx }, rx)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LookupEvent> {
        self.sender.subscribe()
    }

    pub async fn submit(&self, summoner: impl Into<String>) -> Result<(), TrackerError> {
        self.requests.send(summoner.into()).await
            .map_err(|_| TrackerError::Config("lookup worker has stopped".into()))
    }

    async fn serve(
        tracker: CooldownTracker,
        mut requests: mpsc::Receiver<String>,
        sender: broadcast::Sender<LookupEvent>,
    ) {
        while let Some(summoner) = requests.recv().await {
            let tracker = tracker.clone();
            let sender = sender.clone();
            // each lookup is independent; a slow one must not hold up the queue
            tokio::spawn(async move {
                let _ = sender.send(LookupEvent::Started { summoner: summoner.clone() });
                let text = tracker.run(&summoner).await;
                let _ = sender.send(LookupEvent::Finished { summoner, text });
            });
        }
        tracing::debug!("Lookup queue closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[tokio::test]
    async fn publishes_started_then_finished() {
        let mut server = mockito::Server::new_async().await;
        let _summoner = platform(&mut server, "/lol/summoner/v4/summoners/by-name/asdf", 404, NOT_FOUND)
            .create_async().await;

        let tracker = CooldownTracker::new(config_for(&server)).unwrap();
        let (worker, mut events) = LookupWorker::start(tracker);
        worker.submit("asdf").await.unwrap();

        match events.recv().await.unwrap() {
            LookupEvent::Started { summoner } => assert_eq!(summoner, "asdf"),
            other => panic!("unexpected event: {:?}", other),
        }
        match events.recv().await.unwrap() {
            LookupEvent::Finished { summoner, text } => {
                assert_eq!(summoner, "asdf");
                assert!(text.contains("Something went wrong"));
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn late_subscribers_see_later_lookups() {
        let mut server = mockito::Server::new_async().await;
        let _summoner = platform(&mut server, SUMMONER_PATH, 200, SUMMONER).create_async().await;
        let _game = platform(&mut server, GAME_PATH, 404, NOT_FOUND).create_async().await;

        let tracker = CooldownTracker::new(config_for(&server)).unwrap();
        let (worker, _initial) = LookupWorker::start(tracker);
        let mut events = worker.subscribe();
        worker.submit("Tester").await.unwrap();

        let finished = loop {
            if let LookupEvent::Finished { text, .. } = events.recv().await.unwrap() {
                break text;
            }
        };
        assert!(finished.contains("not currently in an active game"));
    }
}
