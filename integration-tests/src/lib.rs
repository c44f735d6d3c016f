//! Shared fixtures for the integration tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

/// Records which steps ran, in order.
///
/// Clones share the same log, so a recorder can be captured by several
/// closures, or by closures running on different threads.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl Recorder {
    /// Appends a step name to the log.
    pub fn record(&self, name: &'static str) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(name);
    }

    /// Returns every recorded name, oldest first.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns how many times `name` was recorded.
    pub fn count(&self, name: &str) -> usize {
        self.calls()
            .iter()
            .filter(|&&recorded| recorded == name)
            .count()
    }
}

/// A small price list used as a lookup source.
///
/// Prices are in cents. A SKU with no entry has no price.
pub struct Catalogue {
    prices: HashMap<&'static str, i32>,
}

impl Catalogue {
    pub fn new(prices: impl IntoIterator<Item = (&'static str, i32)>) -> Self {
        Self {
            prices: prices.into_iter().collect(),
        }
    }

    pub fn price(&self, sku: &str) -> Option<i32> {
        self.prices.get(sku).copied()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::new([("apple", 120), ("bread", 350), ("cheese", 899)])
    }
}
