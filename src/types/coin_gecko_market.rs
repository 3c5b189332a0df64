use serde::Deserialize;

/// One record of the CoinGecko `/coins/markets` response. Every field is
/// optional so a single malformed record never aborts the whole batch;
/// the validation gate in the handler decides what survives.
#[derive(Debug, Deserialize)]
pub struct CoinGeckoMarket {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_record() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "current_price": 250000.0,
            "market_cap": 5000000000000.0,
            "total_volume": 100000000000.0,
            "ath": 300000.0
        }"#;

        let market: CoinGeckoMarket = serde_json::from_str(json).unwrap();
        assert_eq!(market.id.as_deref(), Some("bitcoin"));
        assert_eq!(market.current_price, Some(250000.0));
        assert_eq!(market.market_cap, Some(5000000000000.0));
        assert_eq!(market.total_volume, Some(100000000000.0));
    }

    #[test]
    fn deserialize_record_with_missing_and_null_fields() {
        let json = r#"{"id": "deadcoin", "current_price": null}"#;

        let market: CoinGeckoMarket = serde_json::from_str(json).unwrap();
        assert_eq!(market.id.as_deref(), Some("deadcoin"));
        assert!(market.current_price.is_none());
        assert!(market.market_cap.is_none());
        assert!(market.total_volume.is_none());
    }
}
