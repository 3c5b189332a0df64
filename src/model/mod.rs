pub use self::{market_snapshot::MarketSnapshot, table::Table};

mod market_snapshot;
mod table;
