pub mod ddragon;
pub mod spectator;
pub mod summoner;
