pub use self::types::{DataBase, PoolOption, PoolType};

mod market_snapshot;
mod types;
