use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::{configuration::Config, error::Error, types::CoinGeckoMarket};

#[derive(Debug)]
pub struct Http {
    pub config: Config,
    client: Client,
}

impl Http {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(Http { config, client })
    }

    /// One outbound request for the current market snapshot. Non-2xx
    /// statuses fail here; retry is the caller's business.
    pub async fn get_markets(&self) -> Result<Vec<CoinGeckoMarket>, Error> {
        let url = self.config.get_markets_url()?;
        debug!("{}", &url);

        let markets = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CoinGeckoMarket>>()
            .await?;

        Ok(markets)
    }
}
