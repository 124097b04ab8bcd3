use model::{ChurnRisk, Customer, LoyaltyTier};
use serde::Serialize;

/// Client-side customer filters. All set filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomerFilter {
    pub search: String,
    pub risk: Option<ChurnRisk>,
    pub tier: Option<LoyaltyTier>,
}

impl CustomerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn risk(mut self, risk: Option<ChurnRisk>) -> Self {
        self.risk = risk;
        self
    }

    pub fn tier(mut self, tier: Option<LoyaltyTier>) -> Self {
        self.tier = tier;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.risk.is_none() && self.tier.is_none()
    }

    pub fn matches(&self, customer: &Customer) -> bool {
        let term = self.search.trim().to_lowercase();
        let matches_search = term.is_empty()
            || customer.first_name.to_lowercase().contains(&term)
            || customer.last_name.to_lowercase().contains(&term)
            || customer.email.to_lowercase().contains(&term);

        matches_search
            && self.risk.map_or(true, |risk| customer.churn_risk == Some(risk))
            && self.tier.map_or(true, |tier| customer.loyalty_tier == Some(tier))
    }
}

pub fn filter_customers(customers: &[Customer], filter: &CustomerFilter) -> Vec<Customer> {
    customers
        .iter()
        .filter(|customer| filter.matches(customer))
        .cloned()
        .collect()
}
