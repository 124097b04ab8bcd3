use std::collections::HashSet;
use std::sync::Arc;

use client::Backend;
use model::{demo, ChurnRisk, Customer, LoyaltyTier, Settings};
use serde::Serialize;
use tracing::warn;

use crate::filter::{filter_customers, CustomerFilter};
use crate::paginate::{paginate, Page};
use crate::slot::Slot;
use crate::state::{ErrorInfo, FallbackPolicy, Provenance, Status, ViewState};

/// Everything the customers screen renders, derived from the fetched
/// collection plus the current filter and page.
#[derive(Debug, Clone, Serialize)]
pub struct CustomersView {
    pub status: Status,
    pub error: Option<ErrorInfo>,
    pub provenance: Provenance,
    pub total_customers: usize,
    pub filter: CustomerFilter,
    pub page: Page<Customer>,
}

impl CustomersView {
    pub fn is_demo(&self) -> bool {
        self.provenance == Provenance::Demo
    }
}

pub struct CustomersPage<B> {
    backend: Arc<B>,
    limit: u32,
    page_size: usize,
    policy: FallbackPolicy,
    slot: Slot<Vec<Customer>>,
    filter: CustomerFilter,
    page: i64,
}

impl<B: Backend> CustomersPage<B> {
    pub fn new(backend: Arc<B>, settings: &Settings) -> Self {
        Self {
            backend,
            limit: settings.customer_limit,
            page_size: settings.page_size,
            policy: FallbackPolicy::from_settings(settings),
            slot: Slot::new("customers"),
            filter: CustomerFilter::default(),
            page: 1,
        }
    }

    pub async fn mount(&self) -> ViewState<Vec<Customer>> {
        self.refresh().await
    }

    pub async fn refresh(&self) -> ViewState<Vec<Customer>> {
        let ticket = self.slot.begin().await;

        match self.backend.customers(self.limit).await {
            Ok(customers) => {
                self.slot.settle_ok(ticket, unique_by_id(customers)).await;
            }
            Err(err) => {
                let fallback = self.policy.fallback(demo::customers);
                if fallback.is_some() {
                    warn!(error = %err, "customers unavailable, showing demo data");
                }
                self.slot
                    .settle_err(ticket, ErrorInfo::from(&err), fallback)
                    .await;
            }
        }

        self.slot.snapshot().await
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search = term.into();
        self.page = 1;
    }

    pub fn set_risk(&mut self, risk: Option<ChurnRisk>) {
        self.filter.risk = risk;
        self.page = 1;
    }

    pub fn set_tier(&mut self, tier: Option<LoyaltyTier>) {
        self.filter.tier = tier;
        self.page = 1;
    }

    pub fn set_filter(&mut self, filter: CustomerFilter) {
        self.filter = filter;
        self.page = 1;
    }

    /// Out-of-range pages are clamped when the view is derived.
    pub fn set_page(&mut self, page: i64) {
        self.page = page;
    }

    pub fn filter(&self) -> &CustomerFilter {
        &self.filter
    }

    pub async fn view(&self) -> CustomersView {
        let state = self.slot.snapshot().await;
        let customers = state.data.as_deref().unwrap_or(&[]);
        let filtered = filter_customers(customers, &self.filter);

        CustomersView {
            status: state.status,
            error: state.error.clone(),
            provenance: state.provenance,
            total_customers: customers.len(),
            filter: self.filter.clone(),
            page: paginate(&filtered, self.page_size, self.page),
        }
    }

    pub async fn customer(&self, customer_id: &str) -> Option<Customer> {
        self.slot
            .snapshot()
            .await
            .data?
            .into_iter()
            .find(|customer| customer.customer_id == customer_id)
    }

    pub async fn state(&self) -> ViewState<Vec<Customer>> {
        self.slot.snapshot().await
    }

    pub async fn unmount(&self) {
        self.slot.invalidate().await;
    }
}

/// Keeps the first record for each `customer_id`, in backend order.
fn unique_by_id(customers: Vec<Customer>) -> Vec<Customer> {
    let total = customers.len();
    let mut seen = HashSet::with_capacity(total);
    let unique: Vec<Customer> = customers
        .into_iter()
        .filter(|customer| seen.insert(customer.customer_id.clone()))
        .collect();

    if unique.len() < total {
        warn!(
            duplicates = total - unique.len(),
            "dropping customers with repeated ids"
        );
    }
    unique
}
