use std::sync::Arc;

use client::{ApiResult, Backend};
use model::{demo, CampaignStatus, DashboardMetrics, RevenueSeries, RiskDistribution};
use serde::Serialize;
use tracing::warn;

use crate::slot::Slot;
use crate::state::{ErrorInfo, FallbackPolicy, ViewState};
use crate::trend::{series_delta, Delta};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub metrics: DashboardMetrics,
    pub revenue: RevenueSeries,
    pub campaigns_ready: bool,
}

impl DashboardSummary {
    /// Churn figures come from the live risk distribution; the remaining
    /// aggregates are whatever the analytics endpoint reports.
    pub fn from_parts(
        metrics: DashboardMetrics,
        revenue: RevenueSeries,
        status: CampaignStatus,
        distribution: RiskDistribution,
    ) -> Self {
        let total = status.total_customers;
        let churn_rate = distribution.statistics.high_risk_percentage;
        let metrics = DashboardMetrics {
            total_customers: total,
            churn_rate,
            retention_rate: 100.0 - churn_rate,
            high_risk_customers: ((churn_rate / 100.0) * total as f64).round() as u64,
            ..metrics
        };
        Self {
            metrics,
            revenue,
            campaigns_ready: status.ready_for_campaign,
        }
    }

    pub fn demo() -> Self {
        Self {
            metrics: demo::dashboard_metrics(),
            revenue: demo::revenue_series(),
            campaigns_ready: false,
        }
    }

    pub fn revenue_delta(&self) -> Option<Delta> {
        series_delta(&self.revenue.revenue)
    }

    pub fn customers_delta(&self) -> Option<Delta> {
        series_delta(&self.revenue.customers)
    }
}

pub struct DashboardPage<B> {
    backend: Arc<B>,
    policy: FallbackPolicy,
    slot: Slot<DashboardSummary>,
}

impl<B: Backend> DashboardPage<B> {
    pub fn new(backend: Arc<B>, policy: FallbackPolicy) -> Self {
        Self {
            backend,
            policy,
            slot: Slot::new("dashboard"),
        }
    }

    pub async fn mount(&self) -> ViewState<DashboardSummary> {
        self.refresh().await
    }

    pub async fn refresh(&self) -> ViewState<DashboardSummary> {
        let ticket = self.slot.begin().await;
        let backend = &self.backend;

        let (metrics, revenue, status, distribution) = tokio::join!(
            backend.dashboard_metrics(),
            backend.revenue_trends(),
            backend.campaign_status(),
            backend.risk_distribution(),
        );

        match combine(metrics, revenue, status, distribution) {
            Ok(summary) => {
                self.slot.settle_ok(ticket, summary).await;
            }
            Err(err) => {
                let fallback = self.policy.fallback(DashboardSummary::demo);
                if fallback.is_some() {
                    warn!(error = %err, "dashboard unavailable, showing demo data");
                }
                self.slot
                    .settle_err(ticket, ErrorInfo::from(&err), fallback)
                    .await;
            }
        }

        self.slot.snapshot().await
    }

    pub async fn state(&self) -> ViewState<DashboardSummary> {
        self.slot.snapshot().await
    }

    pub async fn unmount(&self) {
        self.slot.invalidate().await;
    }
}

fn combine(
    metrics: ApiResult<DashboardMetrics>,
    revenue: ApiResult<RevenueSeries>,
    status: ApiResult<CampaignStatus>,
    distribution: ApiResult<RiskDistribution>,
) -> ApiResult<DashboardSummary> {
    Ok(DashboardSummary::from_parts(
        metrics?,
        revenue?,
        status?,
        distribution?,
    ))
}
