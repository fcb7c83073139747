// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription products and prices offered in the upgrade modal.

use serde::{Deserialize, Serialize};

/// Billing period of a recurring price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceInterval {
    Day,
    Week,
    Month,
    Year,
}

crate::simple_display! {
    PriceInterval {
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub id: String,
    pub product_id: String,
    pub active: bool,
    /// Amount in minor currency units (cents).
    pub unit_amount: u64,
    /// ISO 4217 code, lowercase as the billing provider reports it.
    pub currency: String,
    /// `None` for one-time prices.
    pub interval: Option<PriceInterval>,
}

impl Price {
    /// Human-readable amount, e.g. `"12.00 USD / month"`.
    pub fn display_amount(&self) -> String {
        let amount = format!(
            "{}.{:02} {}",
            self.unit_amount / 100,
            self.unit_amount % 100,
            self.currency.to_uppercase()
        );
        match self.interval {
            Some(interval) => format!("{} / {}", amount, interval),
            None => amount,
        }
    }
}

/// A product together with its prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub active: bool,
    #[serde(default)]
    pub prices: Vec<Price>,
}

impl Product {
    /// Active prices, cheapest first.
    pub fn active_prices(&self) -> Vec<&Price> {
        let mut prices: Vec<&Price> = self.prices.iter().filter(|p| p.active).collect();
        prices.sort_by_key(|p| p.unit_amount);
        prices
    }
}

#[cfg(test)]
#[path = "billing_tests.rs"]
mod tests;
