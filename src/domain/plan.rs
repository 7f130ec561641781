use crate::utils::error::{Result, ServiceError};
use std::collections::BTreeMap;

pub const DEFAULT_PLAN_PRICES: [(&str, &str); 3] = [
    ("Core", "price_1QtWUdIGaC2gk9oobOvUwioa"),
    ("Growth", "price_1QtWcBIGaC2gk9ookwUgcQPj"),
    ("Premium", "price_1QtWcWIGaC2gk9ooNnWu1RJi"),
];

/// Closed mapping from plan name to the provider's price id.
///
/// Built once at wiring time and never mutated. Lookups are exact and
/// case-sensitive; anything outside the map is an [`ServiceError::UnknownPlan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    prices: BTreeMap<String, String>,
}

impl PlanCatalog {
    pub fn new<I, K, V>(prices: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prices: prices
                .into_iter()
                .map(|(plan, price)| (plan.into(), price.into()))
                .collect(),
        }
    }

    pub fn price_for(&self, plan: &str) -> Result<&str> {
        self.prices
            .get(plan)
            .map(String::as_str)
            .ok_or_else(|| ServiceError::UnknownPlan {
                plan: plan.to_string(),
            })
    }

    pub fn plans(&self) -> impl Iterator<Item = &str> {
        self.prices.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_PLAN_PRICES)
    }
}
