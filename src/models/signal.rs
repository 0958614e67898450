//! Signal record as delivered in the daily report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of an AI model's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

/// One model's trading recommendation for one ticker on one date.
///
/// Reports arrive as JSON with camelCase keys. Individual records can
/// be sparse: an empty `ticker` or a missing `ai_model` is tolerated by
/// the filter pipeline rather than rejected wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub ticker: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

impl Signal {
    pub fn new(ticker: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            ticker: ticker.into(),
            ai_model: None,
            action: None,
            probability: None,
            entry_price: None,
            stop_loss: None,
            take_profit: None,
            timestamp,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.ai_model = Some(model.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    pub fn with_prices(mut self, entry: f64, stop_loss: f64, take_profit: f64) -> Self {
        self.entry_price = Some(entry);
        self.stop_loss = Some(stop_loss);
        self.take_profit = Some(take_profit);
        self
    }

    /// A record without a ticker symbol cannot be matched or grouped.
    pub fn has_ticker(&self) -> bool {
        !self.ticker.is_empty()
    }
}
