// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visibility of the "upgrade plan" modal and the products it offers.

use std::sync::Arc;
use tandem_core::{Price, Product};
use tokio::sync::watch;

/// Modal state. Clones share visibility; the product list is fixed at boot.
#[derive(Clone, Debug)]
pub struct SubscriptionModal {
    open: Arc<watch::Sender<bool>>,
    products: Arc<[Product]>,
}

impl SubscriptionModal {
    pub fn new(products: Vec<Product>) -> Self {
        let (open, _rx) = watch::channel(false);
        Self { open: Arc::new(open), products: products.into() }
    }

    pub fn is_open(&self) -> bool {
        *self.open.borrow()
    }

    pub fn set_open(&self, open: bool) {
        self.open.send_if_modified(|current| {
            let changed = *current != open;
            *current = open;
            changed
        });
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.open.subscribe()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Active products only.
    pub fn offered(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.active)
    }

    /// Look up a price by ID across all products.
    pub fn price(&self, price_id: &str) -> Option<&Price> {
        self.products.iter().flat_map(|p| p.prices.iter()).find(|price| price.id == price_id)
    }
}

impl Default for SubscriptionModal {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
#[path = "subscription_tests.rs"]
mod tests;
