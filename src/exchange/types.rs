//! Wire payload shapes and their conversions into domain types
//!
//! Decoding is deliberately lenient: unknown fields are ignored, missing
//! numeric fields default to zero, and numbers arrive sometimes as JSON
//! strings and sometimes as bare numbers depending on the endpoint.
//! Malformed containers are still fatal: a depth payload without
//! `asks`/`bids`, a balance payload without `datas`, an order payload
//! without `result.records`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

use super::ExchangeError;
use crate::account::{AssetBalance, OrderRecord, OrderStatus};
use crate::market::{MarketTrade, Orderbook, PriceLevel, Side, TickerSnapshot};

/// Check the `{code, message}` envelope the exchange wraps around most
/// responses. A present, non-zero code is an exchange-reported error.
pub(crate) fn check_envelope(value: &Value) -> Result<(), ExchangeError> {
    let code = match value.get("code") {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.parse::<i64>().ok(),
        _ => None,
    };
    if let Some(code) = code {
        if code != 0 {
            let message = value
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            return Err(ExchangeError::Api { code, message });
        }
    }
    Ok(())
}

/// Best-effort decimal from a JSON value that may be a string or a number
pub(crate) fn decimal_from_value(value: Option<&Value>) -> Decimal {
    match value {
        Some(Value::String(s)) => Decimal::from_str(s.trim()).unwrap_or_default(),
        Some(Value::Number(n)) => Decimal::from_str(&n.to_string()).unwrap_or_default(),
        _ => Decimal::ZERO,
    }
}

/// Epoch timestamp to [`DateTime<Utc>`]. The exchange mixes second and
/// millisecond precision across endpoints; anything above 1e12 is taken as
/// milliseconds.
pub(crate) fn coerce_timestamp(raw: f64) -> DateTime<Utc> {
    let secs = if raw > 1e12 { raw / 1e3 } else { raw };
    DateTime::from_timestamp_millis((secs * 1000.0).round() as i64).unwrap_or_else(Utc::now)
}

/// `GET /api/v1/depth` payload
#[derive(Debug, Deserialize)]
pub(crate) struct DepthResponse {
    asks: Option<Vec<Vec<String>>>,
    bids: Option<Vec<Vec<String>>>,
}

impl DepthResponse {
    /// Build the domain orderbook. The exchange returns asks ascending and
    /// bids descending, so both arrive best-first; rows with fewer than two
    /// elements or unparseable numbers are skipped.
    pub(crate) fn into_orderbook(self, symbol: &str) -> Result<Orderbook, ExchangeError> {
        let asks = self
            .asks
            .ok_or_else(|| ExchangeError::Payload("depth response missing asks".to_string()))?;
        let bids = self
            .bids
            .ok_or_else(|| ExchangeError::Payload("depth response missing bids".to_string()))?;

        Ok(Orderbook {
            symbol: symbol.to_string(),
            bids: bids.iter().filter_map(|row| parse_level(row)).collect(),
            asks: asks.iter().filter_map(|row| parse_level(row)).collect(),
            fetched_at: Utc::now(),
        })
    }
}

fn parse_level(row: &[String]) -> Option<PriceLevel> {
    let price = Decimal::from_str(row.first()?.trim()).ok()?;
    let amount = Decimal::from_str(row.get(1)?.trim()).ok()?;
    Some(PriceLevel { price, amount })
}

/// `GET /api/v1/tickers` payload: 24h stats for every market on the exchange
#[derive(Debug, Deserialize)]
pub(crate) struct TickersResponse {
    ticker: Option<Vec<TickerEntry>>,
}

impl TickersResponse {
    /// Select the entry for one symbol. The monitored market missing from
    /// the exchange-wide list is a malformed response, not an empty one.
    pub(crate) fn into_snapshot(self, symbol: &str) -> Result<TickerSnapshot, ExchangeError> {
        let entries = self
            .ticker
            .ok_or_else(|| ExchangeError::Payload("tickers response missing ticker".to_string()))?;
        entries
            .into_iter()
            .find(|t| t.symbol.as_deref() == Some(symbol))
            .map(|t| t.into_domain(symbol))
            .ok_or_else(|| ExchangeError::Payload(format!("no ticker entry for {}", symbol)))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TickerEntry {
    symbol: Option<String>,
    last: Option<Value>,
    high: Option<Value>,
    low: Option<Value>,
    vol: Option<Value>,
    change: Option<Value>,
    buy: Option<Value>,
    sell: Option<Value>,
}

impl TickerEntry {
    fn into_domain(self, symbol: &str) -> TickerSnapshot {
        TickerSnapshot {
            symbol: symbol.to_string(),
            last: decimal_from_value(self.last.as_ref()),
            high: decimal_from_value(self.high.as_ref()),
            low: decimal_from_value(self.low.as_ref()),
            volume: decimal_from_value(self.vol.as_ref()),
            change_pct: decimal_from_value(self.change.as_ref()),
            buy: decimal_from_value(self.buy.as_ref()),
            sell: decimal_from_value(self.sell.as_ref()),
        }
    }
}

/// `GET /api/v1/trades` payload. The list arrives either bare or wrapped
/// under `data` or `result` depending on gateway version.
pub(crate) fn trades_from_value(value: Value) -> Result<Vec<MarketTrade>, ExchangeError> {
    let list = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data").or_else(|| map.remove("result")) {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ExchangeError::Payload(
                    "trades response holds no trade list".to_string(),
                ))
            }
        },
        other => {
            return Err(ExchangeError::Payload(format!(
                "unexpected trades payload: {}",
                other
            )))
        }
    };

    let mut trades = Vec::with_capacity(list.len());
    for item in list {
        let entry: TradeEntry = serde_json::from_value(item)
            .map_err(|e| ExchangeError::Payload(format!("bad trade entry: {}", e)))?;
        trades.push(entry.into_domain());
    }
    Ok(trades)
}

#[derive(Debug, Deserialize)]
pub(crate) struct TradeEntry {
    #[serde(default)]
    id: u64,
    time: Option<Value>,
    #[serde(rename = "type")]
    kind: Option<String>,
    price: Option<Value>,
    amount: Option<Value>,
}

impl TradeEntry {
    fn into_domain(self) -> MarketTrade {
        let raw_time = match self.time.as_ref() {
            Some(Value::Number(n)) => n.as_f64().unwrap_or_default(),
            Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
            _ => 0.0,
        };
        MarketTrade {
            id: self.id,
            side: Side::from_label(self.kind.as_deref().unwrap_or("buy")),
            price: decimal_from_value(self.price.as_ref()),
            amount: decimal_from_value(self.amount.as_ref()),
            executed_at: coerce_timestamp(raw_time),
        }
    }
}

/// `GET /api/v1/time` payload: epoch seconds, bare or wrapped under `result`
pub(crate) fn server_time_from_value(value: &Value) -> Result<DateTime<Utc>, ExchangeError> {
    let raw = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Object(map) => map
            .get("result")
            .or_else(|| map.get("data"))
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }),
        _ => None,
    };
    raw.map(coerce_timestamp)
        .ok_or_else(|| ExchangeError::Payload(format!("unexpected time payload: {}", value)))
}

/// `POST /api/v2/private/user` payload: asset name to balance map
#[derive(Debug, Deserialize)]
pub(crate) struct BalancesResponse {
    datas: Option<BTreeMap<String, BalanceEntry>>,
}

impl BalancesResponse {
    /// The BTreeMap keeps assets alphabetical, which is also the display
    /// order.
    pub(crate) fn into_balances(self) -> Result<Vec<AssetBalance>, ExchangeError> {
        let datas = self
            .datas
            .ok_or_else(|| ExchangeError::Payload("balance response missing datas".to_string()))?;
        Ok(datas
            .into_iter()
            .map(|(asset, entry)| AssetBalance {
                asset,
                available: decimal_from_value(entry.available.as_ref()),
                frozen: decimal_from_value(entry.freeze.as_ref()),
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BalanceEntry {
    available: Option<Value>,
    freeze: Option<Value>,
}

/// `POST /api/v2/private/order/pending` and `/order/finished` payloads
#[derive(Debug, Deserialize)]
pub(crate) struct OrdersResponse {
    result: Option<OrdersResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersResult {
    #[serde(default)]
    records: Vec<OrderEntry>,
}

impl OrdersResponse {
    pub(crate) fn into_records(self) -> Result<Vec<OrderRecord>, ExchangeError> {
        let result = self
            .result
            .ok_or_else(|| ExchangeError::Payload("order response missing result".to_string()))?;
        Ok(result.records.into_iter().map(OrderEntry::into_domain).collect())
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderEntry {
    #[serde(default)]
    id: u64,
    side: Option<i64>,
    price: Option<Value>,
    amount: Option<Value>,
    deal_stock: Option<Value>,
    left: Option<Value>,
    status: Option<Value>,
    ctime: Option<Value>,
    mtime: Option<Value>,
}

impl OrderEntry {
    fn into_domain(self) -> OrderRecord {
        let status_code = self.status.as_ref().and_then(Value::as_i64);
        let status_label = self.status.as_ref().and_then(Value::as_str);
        let left = self.left.as_ref().map(|v| decimal_from_value(Some(v)));
        // Side defaults to the exchange's buy code when absent
        let side = Side::from_code(self.side.unwrap_or(2));

        let created_at = self
            .ctime
            .as_ref()
            .or(self.mtime.as_ref())
            .and_then(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            })
            .map(coerce_timestamp);

        OrderRecord {
            id: self.id,
            side,
            price: decimal_from_value(self.price.as_ref()),
            amount: decimal_from_value(self.amount.as_ref()),
            filled: decimal_from_value(self.deal_stock.as_ref()),
            status: OrderStatus::decode(status_code, status_label, left),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_check_envelope_passes_on_zero_code() {
        let value: Value = serde_json::from_str(r#"{"code":0,"message":"ok"}"#).unwrap();
        assert!(check_envelope(&value).is_ok());
        let value: Value = serde_json::from_str(r#"{"code":"0"}"#).unwrap();
        assert!(check_envelope(&value).is_ok());
        let value: Value = serde_json::from_str(r#"{"asks":[]}"#).unwrap();
        assert!(check_envelope(&value).is_ok());
    }

    #[test]
    fn test_check_envelope_surfaces_exchange_error() {
        let value: Value =
            serde_json::from_str(r#"{"code":10011,"message":"invalid signature"}"#).unwrap();
        match check_envelope(&value) {
            Err(ExchangeError::Api { code, message }) => {
                assert_eq!(code, 10011);
                assert_eq!(message, "invalid signature");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_depth_parsing() {
        let json = r#"{
            "asks": [["0.0520", "1200.0"], ["0.0530", "800.0"]],
            "bids": [["0.0500", "1500.0"], ["0.0490", "2000.0"]]
        }"#;
        let depth: DepthResponse = serde_json::from_str(json).unwrap();
        let book = depth.into_orderbook("MCM_USDT").unwrap();

        assert_eq!(book.best_ask(), Some(dec!(0.0520)));
        assert_eq!(book.best_bid(), Some(dec!(0.0500)));
        assert_eq!(book.mid_price(), Some(dec!(0.0510)));
        assert_eq!(book.spread(), Some(dec!(0.0020)));
    }

    #[test]
    fn test_depth_skips_short_rows() {
        let json = r#"{"asks": [["0.052"], ["0.053", "10"]], "bids": []}"#;
        let depth: DepthResponse = serde_json::from_str(json).unwrap();
        let book = depth.into_orderbook("MCM_USDT").unwrap();
        assert_eq!(book.asks.len(), 1);
        assert_eq!(book.best_ask(), Some(dec!(0.053)));
    }

    #[test]
    fn test_depth_missing_sides_is_payload_error() {
        let depth: DepthResponse = serde_json::from_str(r#"{"asks": []}"#).unwrap();
        assert!(matches!(
            depth.into_orderbook("MCM_USDT"),
            Err(ExchangeError::Payload(_))
        ));
    }

    #[test]
    fn test_ticker_selection_and_fields() {
        let json = r#"{"ticker": [
            {"symbol": "BTC_USDT", "last": "65000"},
            {"symbol": "MCM_USDT", "last": "0.0510", "high": "0.0550",
             "low": "0.0480", "vol": "123456.78", "change": "-2.15",
             "buy": "0.0500", "sell": "0.0520"}
        ]}"#;
        let tickers: TickersResponse = serde_json::from_str(json).unwrap();
        let snap = tickers.into_snapshot("MCM_USDT").unwrap();

        assert_eq!(snap.last, dec!(0.0510));
        assert_eq!(snap.high, dec!(0.0550));
        assert_eq!(snap.low, dec!(0.0480));
        assert_eq!(snap.volume, dec!(123456.78));
        assert_eq!(snap.change_pct, dec!(-2.15));
        assert_eq!(snap.buy, dec!(0.0500));
        assert_eq!(snap.sell, dec!(0.0520));
    }

    #[test]
    fn test_ticker_missing_entry_is_payload_error() {
        let json = r#"{"ticker": [{"symbol": "BTC_USDT", "last": "65000"}]}"#;
        let tickers: TickersResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            tickers.into_snapshot("MCM_USDT"),
            Err(ExchangeError::Payload(_))
        ));
    }

    #[test]
    fn test_ticker_missing_fields_default_to_zero() {
        let json = r#"{"ticker": [{"symbol": "MCM_USDT", "last": "0.05"}]}"#;
        let tickers: TickersResponse = serde_json::from_str(json).unwrap();
        let snap = tickers.into_snapshot("MCM_USDT").unwrap();
        assert_eq!(snap.last, dec!(0.05));
        assert_eq!(snap.high, Decimal::ZERO);
        assert_eq!(snap.volume, Decimal::ZERO);
    }

    #[test]
    fn test_trades_bare_list() {
        let value: Value = serde_json::from_str(
            r#"[{"id": 7, "time": 1700000000.5, "type": "sell",
                 "price": "0.0510", "amount": "300"}]"#,
        )
        .unwrap();
        let trades = trades_from_value(value).unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].id, 7);
        assert_eq!(trades[0].side, Side::Sell);
        assert_eq!(trades[0].price, dec!(0.0510));
        assert_eq!(trades[0].executed_at.timestamp_millis(), 1_700_000_000_500);
    }

    #[test]
    fn test_trades_wrapped_under_data() {
        let value: Value = serde_json::from_str(
            r#"{"data": [{"id": 1, "time": 1700000000, "type": "buy",
                          "price": "0.05", "amount": "10"}]}"#,
        )
        .unwrap();
        let trades = trades_from_value(value).unwrap();
        assert_eq!(trades[0].side, Side::Buy);
    }

    #[test]
    fn test_trades_without_list_is_payload_error() {
        let value: Value = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
        assert!(matches!(
            trades_from_value(value),
            Err(ExchangeError::Payload(_))
        ));
    }

    #[test]
    fn test_server_time_bare_and_wrapped() {
        let bare: Value = serde_json::from_str("1700000000").unwrap();
        assert_eq!(
            server_time_from_value(&bare).unwrap().timestamp(),
            1_700_000_000
        );

        let wrapped: Value = serde_json::from_str(r#"{"result": 1700000000}"#).unwrap();
        assert_eq!(
            server_time_from_value(&wrapped).unwrap().timestamp(),
            1_700_000_000
        );
    }

    #[test]
    fn test_timestamp_coercion_seconds_vs_millis() {
        assert_eq!(coerce_timestamp(1.7e9).timestamp(), 1_700_000_000);
        assert_eq!(coerce_timestamp(1.7e12).timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_balances_parsing() {
        let json = r#"{"code": 0, "datas": {
            "MCM": {"available": "1000.5", "freeze": "200"},
            "USDT": {"available": "0", "freeze": "0"}
        }}"#;
        let resp: BalancesResponse = serde_json::from_str(json).unwrap();
        let balances = resp.into_balances().unwrap();

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[0].asset, "MCM");
        assert_eq!(balances[0].total(), dec!(1200.5));
        assert!(balances[1].is_empty());
    }

    #[test]
    fn test_balances_missing_datas_is_payload_error() {
        let resp: BalancesResponse = serde_json::from_str(r#"{"code": 0}"#).unwrap();
        assert!(matches!(
            resp.into_balances(),
            Err(ExchangeError::Payload(_))
        ));
    }

    #[test]
    fn test_order_records_parsing() {
        let json = r#"{"code": 0, "result": {"records": [
            {"id": 123456789, "side": 2, "price": "0.0500", "amount": "1000",
             "deal_stock": "250", "left": "750", "ctime": 1700000000.123},
            {"id": 987654321, "side": 1, "price": "0.0530", "amount": "500",
             "deal_stock": "500", "left": "0", "status": 3}
        ]}}"#;
        let resp: OrdersResponse = serde_json::from_str(json).unwrap();
        let records = resp.into_records().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].side, Side::Buy);
        assert_eq!(records[0].status, OrderStatus::Open);
        assert_eq!(records[0].notional(), dec!(50.0000));
        assert!(records[0].created_at.is_some());
        assert_eq!(records[1].side, Side::Sell);
        assert_eq!(records[1].status, OrderStatus::Filled);
    }

    #[test]
    fn test_empty_records_is_not_an_error() {
        let resp: OrdersResponse =
            serde_json::from_str(r#"{"result": {"records": []}}"#).unwrap();
        assert!(resp.into_records().unwrap().is_empty());
    }

    #[test]
    fn test_decimal_from_value_variants() {
        let s: Value = serde_json::from_str(r#""1.25""#).unwrap();
        let n: Value = serde_json::from_str("1.25").unwrap();
        assert_eq!(decimal_from_value(Some(&s)), dec!(1.25));
        assert_eq!(decimal_from_value(Some(&n)), dec!(1.25));
        assert_eq!(decimal_from_value(None), Decimal::ZERO);
    }
}
