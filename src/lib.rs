pub mod abilities;
pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod tracker;
pub mod worker;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::RiotClient;
pub use config::TrackerConfig;
pub use error::TrackerError;
pub use report::Report;
pub use tracker::{CooldownTracker, LookupOutcome};
pub use worker::{LookupEvent, LookupWorker};
