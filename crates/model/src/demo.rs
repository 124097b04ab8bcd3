//! Placeholder datasets shown when the backend is unreachable and the demo
//! fallback policy is enabled. Callers must flag anything built from here as
//! non-live.

use once_cell::sync::Lazy;

use crate::types::{ChurnRisk, Customer, DashboardMetrics, LoyaltyTier, RevenueSeries};

const FIRST_NAMES: [&str; 6] = ["John", "Sarah", "Mike", "Emma", "David", "Lisa"];
const LAST_NAMES: [&str; 6] = ["Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia"];
const CITIES: [&str; 5] = ["New York", "Los Angeles", "Chicago", "Houston", "Phoenix"];

pub const DEMO_CUSTOMER_COUNT: usize = 50;

static CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    (0..DEMO_CUSTOMER_COUNT)
        .map(|i| Customer {
            customer_id: format!("CUST{}", 100_000 + i),
            first_name: FIRST_NAMES[i % FIRST_NAMES.len()].to_string(),
            last_name: LAST_NAMES[i % LAST_NAMES.len()].to_string(),
            email: format!("customer{}@example.com", i),
            phone: Some(format!("+1{}", 5_550_000_000u64 + i as u64)),
            city: CITIES[i % CITIES.len()].to_string(),
            loyalty_tier: Some(LoyaltyTier::ALL[i % LoyaltyTier::ALL.len()]),
            churn_risk: Some(ChurnRisk::ALL[i % ChurnRisk::ALL.len()]),
            avg_monthly_spend: 45.0 + (i % 5) as f64 * 10.0,
        })
        .collect()
});

pub fn customers() -> Vec<Customer> {
    CUSTOMERS.clone()
}

pub fn dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        total_customers: 50_000,
        retention_rate: 65.0,
        churn_rate: 35.0,
        avg_basket_size: 45.0,
        high_risk_customers: 17_500,
        monthly_revenue: 50_000.0,
        campaigns_sent: 1_250,
        campaign_success_rate: 85.5,
        last_updated: None,
    }
}

pub fn revenue_series() -> RevenueSeries {
    RevenueSeries {
        labels: ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
            .iter()
            .map(|m| m.to_string())
            .collect(),
        revenue: vec![45_000.0, 52_000.0, 48_000.0, 61_000.0, 58_000.0, 65_000.0],
        customers: vec![45_000.0, 46_000.0, 45_500.0, 47_000.0, 46_500.0, 47_500.0],
    }
}
