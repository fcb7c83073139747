// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn price(id: &str, amount: u64, active: bool, interval: Option<PriceInterval>) -> Price {
    Price {
        id: id.to_string(),
        product_id: "prod-pro".to_string(),
        active,
        unit_amount: amount,
        currency: "usd".to_string(),
        interval,
    }
}

#[yare::parameterized(
    monthly  = { 1200, Some(PriceInterval::Month), "12.00 USD / month" },
    yearly   = { 9905, Some(PriceInterval::Year),  "99.05 USD / year" },
    one_time = { 500,  None,                       "5.00 USD" },
    zero     = { 0,    Some(PriceInterval::Week),  "0.00 USD / week" },
)]
fn price_display_amount(amount: u64, interval: Option<PriceInterval>, expected: &str) {
    assert_eq!(price("p", amount, true, interval).display_amount(), expected);
}

#[test]
fn active_prices_skip_inactive_and_sort_by_amount() {
    let product = Product {
        id: "prod-pro".to_string(),
        name: "Pro Plan".to_string(),
        description: None,
        active: true,
        prices: vec![
            price("yearly", 9900, true, Some(PriceInterval::Year)),
            price("legacy", 500, false, Some(PriceInterval::Month)),
            price("monthly", 1200, true, Some(PriceInterval::Month)),
        ],
    };
    let ids: Vec<&str> = product.active_prices().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["monthly", "yearly"]);
}

#[test]
fn product_deserializes_without_prices() {
    let product: Product =
        serde_json::from_str(r#"{"id":"prod-1","name":"Pro","active":true}"#).unwrap();
    assert!(product.prices.is_empty());
    assert_eq!(product.description, None);
}
