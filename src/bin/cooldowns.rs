use lol_cd_tracker::{CooldownTracker, LookupWorker, LookupEvent, TrackerConfig};

/// `cooldowns <summoner name>`: prints the report for the summoner's live game.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let _guard = lol_cd_tracker::logging::init_logging();

    let name = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if name.trim().is_empty() {
        anyhow::bail!("usage: cooldowns <summoner name>");
    }

    let tracker = CooldownTracker::new(TrackerConfig::load()?)?;
    let (worker, mut events) = LookupWorker::start(tracker);
    worker.submit(name).await?;

    while let Ok(event) = events.recv().await {
        match event {
            LookupEvent::Started { summoner } => eprintln!("Looking up {}...", summoner),
            LookupEvent::Finished { text, .. } => {
                print!("{}", text);
                break;
            }
        }
    }
    Ok(())
}
