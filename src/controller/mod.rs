pub mod prices;
pub mod snapshots;
pub mod version;
