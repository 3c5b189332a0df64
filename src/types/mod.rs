pub use self::coin_gecko_market::CoinGeckoMarket;

mod coin_gecko_market;
