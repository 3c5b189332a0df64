use std::time::Duration;

use crate::{
    configuration::Config,
    dao::{PoolOption, PoolType},
    error::Error,
    model::{MarketSnapshot, Table},
};

#[derive(Debug)]
pub struct DatabasePool {
    pub market_snapshot: Table<MarketSnapshot>,
    pub pool: PoolType,
}

impl DatabasePool {
    pub async fn new(config: &Config) -> Result<DatabasePool, Error> {
        let pool = PoolOption::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_timeout))
            .connect(config.database_url.as_str())
            .await?;

        Ok(DatabasePool {
            market_snapshot: Table::new(pool.clone()),
            pool,
        })
    }

    pub fn get_pool(&self) -> &PoolType {
        &self.pool
    }
}
