use std::sync::Arc;

use client::{ApiResult, Backend};
use model::{CustomerSegments, DashboardMetrics, RevenueSeries};
use serde::Serialize;

use crate::slot::Slot;
use crate::state::{ErrorInfo, ViewState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsData {
    pub metrics: DashboardMetrics,
    pub revenue: RevenueSeries,
    pub segments: CustomerSegments,
}

/// Analytics needs all three aggregates; a partial result is an error and no
/// placeholder data is substituted.
pub struct AnalyticsPage<B> {
    backend: Arc<B>,
    slot: Slot<AnalyticsData>,
}

impl<B: Backend> AnalyticsPage<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            slot: Slot::new("analytics"),
        }
    }

    pub async fn mount(&self) -> ViewState<AnalyticsData> {
        self.refresh().await
    }

    pub async fn refresh(&self) -> ViewState<AnalyticsData> {
        let ticket = self.slot.begin().await;
        let backend = &self.backend;

        let (metrics, revenue, segments) = tokio::join!(
            backend.dashboard_metrics(),
            backend.revenue_trends(),
            backend.customer_segments(),
        );

        match combine(metrics, revenue, segments) {
            Ok(data) => {
                self.slot.settle_ok(ticket, data).await;
            }
            Err(err) => {
                self.slot
                    .settle_err(ticket, ErrorInfo::from(&err), None)
                    .await;
            }
        }

        self.slot.snapshot().await
    }

    pub async fn state(&self) -> ViewState<AnalyticsData> {
        self.slot.snapshot().await
    }

    pub async fn unmount(&self) {
        self.slot.invalidate().await;
    }
}

fn combine(
    metrics: ApiResult<DashboardMetrics>,
    revenue: ApiResult<RevenueSeries>,
    segments: ApiResult<CustomerSegments>,
) -> ApiResult<AnalyticsData> {
    Ok(AnalyticsData {
        metrics: metrics?,
        revenue: revenue?,
        segments: segments?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{network, FakeBackend};
    use crate::state::Status;
    use client::{ApiError, ErrorKind};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_all_three_succeed() {
        let backend = Arc::new(FakeBackend::default());
        backend.dashboard.ok(DashboardMetrics {
            total_customers: 10,
            ..Default::default()
        });
        backend.revenue.ok(RevenueSeries::default());
        backend.segments.ok(CustomerSegments {
            loyalty_segments: BTreeMap::from([("Gold".to_string(), 4)]),
            ..Default::default()
        });

        let page = AnalyticsPage::new(backend);
        let state = page.mount().await;
        assert_eq!(state.status, Status::Success);

        let data = state.data.unwrap();
        assert_eq!(data.metrics.total_customers, 10);
        assert_eq!(data.segments.loyalty_segments["Gold"], 4);
        assert!(data.revenue.labels.is_empty());
    }

    #[tokio::test]
    async fn test_one_rejection_is_error_not_partial_success() {
        let backend = Arc::new(FakeBackend::default());
        backend.dashboard.ok(DashboardMetrics::default());
        backend.revenue.err(ApiError::Http {
            path: "/api/analytics/revenue-trends".to_string(),
            status: 500,
            body: String::new(),
        });
        backend.segments.ok(CustomerSegments::default());

        let page = AnalyticsPage::new(backend.clone());
        let state = page.mount().await;

        assert_eq!(state.status, Status::Error);
        assert!(state.data.is_none());
        assert_eq!(state.error.unwrap().kind, ErrorKind::Http);

        // All three were issued even though one failed.
        assert_eq!(backend.dashboard.calls(), 1);
        assert_eq!(backend.revenue.calls(), 1);
        assert_eq!(backend.segments.calls(), 1);
    }

    #[tokio::test]
    async fn test_fetches_are_concurrent() {
        let backend = Arc::new(FakeBackend::default());
        let metrics_tx = backend.dashboard.deferred();
        let revenue_tx = backend.revenue.deferred();
        let segments_tx = backend.segments.deferred();

        let page = AnalyticsPage::new(backend.clone());
        let resolve = async {
            // Every fetch must already be in flight before any one resolves.
            while backend.segments.calls() == 0 {
                tokio::task::yield_now().await;
            }
            assert_eq!(backend.dashboard.calls(), 1);
            assert_eq!(backend.revenue.calls(), 1);
            assert!(page.state().await.is_loading());

            segments_tx.send(Ok(CustomerSegments::default())).unwrap();
            revenue_tx.send(Ok(RevenueSeries::default())).unwrap();
            metrics_tx.send(Err(network("reset"))).unwrap();
        };

        let (state, ()) = tokio::join!(page.mount(), resolve);
        assert_eq!(state.status, Status::Error);
        assert!(state.data.is_none());
    }
}
