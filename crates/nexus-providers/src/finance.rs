//! Stock quotes from Alpha Vantage and bitcoin prices from Coindesk.

use reqwest::Client;
use serde::Deserialize;

use crate::client::fetch_json;

const ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";
const COINDESK_URL: &str = "https://api.coindesk.com/v1/bpi/currentprice/BTC.json";

/// A global stock quote.
#[derive(Debug, Clone)]
pub struct StockQuote {
    /// Latest price, as the upstream formats it.
    pub price: String,
    /// Absolute change since the previous close.
    pub change: String,
}

#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CoindeskResponse {
    bpi: Bpi,
}

#[derive(Debug, Deserialize)]
struct Bpi {
    #[serde(rename = "USD")]
    usd: BpiCurrency,
}

#[derive(Debug, Deserialize)]
struct BpiCurrency {
    rate: String,
}

fn quote_from(response: GlobalQuoteResponse) -> Option<StockQuote> {
    // Alpha Vantage answers rate-limit hits with 200 and an empty object.
    let quote = response.global_quote?;
    Some(StockQuote {
        price: quote.price?,
        change: quote.change?,
    })
}

/// Fetches the latest quote for `symbol`.
pub async fn fetch_stock_quote(client: &Client, api_key: &str, symbol: &str) -> Option<StockQuote> {
    let request = client.get(ALPHA_VANTAGE_URL).query(&[
        ("function", "GLOBAL_QUOTE"),
        ("symbol", symbol),
        ("apikey", api_key),
    ]);
    fetch_json::<GlobalQuoteResponse>(request)
        .await
        .and_then(quote_from)
}

/// Fetches the current bitcoin price in USD.
pub async fn fetch_bitcoin_price(client: &Client) -> Option<String> {
    fetch_json::<CoindeskResponse>(client.get(COINDESK_URL))
        .await
        .map(|response| response.bpi.usd.rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_parses_the_spaced_field_names() {
        let payload = r#"{"Global Quote": {
            "01. symbol": "IBM",
            "05. price": "143.5500",
            "09. change": "-0.8200"
        }}"#;
        let quote = quote_from(serde_json::from_str(payload).unwrap()).unwrap();
        assert_eq!(quote.price, "143.5500");
        assert_eq!(quote.change, "-0.8200");
    }

    #[test]
    fn empty_quote_object_is_not_found() {
        let payload = r#"{"Global Quote": {}}"#;
        assert!(quote_from(serde_json::from_str(payload).unwrap()).is_none());
        assert!(quote_from(serde_json::from_str("{}").unwrap()).is_none());
    }

    #[test]
    fn bitcoin_rate_parses() {
        let payload = r#"{"bpi": {"USD": {"code": "USD", "rate": "64,123.45"}}}"#;
        let response: CoindeskResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.bpi.usd.rate, "64,123.45");
    }
}
