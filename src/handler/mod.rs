pub mod market_snapshots;
