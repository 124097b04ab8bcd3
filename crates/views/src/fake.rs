//! Scripted [`Backend`] for controller tests. Each endpoint pops replies in
//! call order; deferred replies resolve when the test sends on the channel.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use client::{ApiError, ApiResult, Backend};
use model::{
    CampaignLaunchResult, CampaignRecord, CampaignStatus, ChurnRisk, Customer, CustomerSegments,
    DashboardMetrics, HealthStatus, RevenueSeries, RiskDistribution, TestSendResult,
};
use tokio::sync::oneshot;

enum Reply<T> {
    Now(ApiResult<T>),
    Later(oneshot::Receiver<ApiResult<T>>),
}

pub(crate) struct Script<T> {
    replies: Mutex<VecDeque<Reply<T>>>,
    calls: AtomicUsize,
}

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl<T> Script<T> {
    pub(crate) fn ok(&self, value: T) -> &Self {
        self.push(Reply::Now(Ok(value)));
        self
    }

    pub(crate) fn err(&self, err: ApiError) -> &Self {
        self.push(Reply::Now(Err(err)));
        self
    }

    pub(crate) fn deferred(&self) -> oneshot::Sender<ApiResult<T>> {
        let (tx, rx) = oneshot::channel();
        self.push(Reply::Later(rx));
        tx
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, reply: Reply<T>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    async fn next(&self) -> ApiResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Now(result)) => result,
            Some(Reply::Later(rx)) => rx.await.unwrap_or_else(|_| Err(network("reply dropped"))),
            None => Err(network("no scripted reply")),
        }
    }
}

pub(crate) fn network(message: &str) -> ApiError {
    ApiError::Network {
        path: "/fake".to_string(),
        message: message.to_string(),
    }
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    pub customers: Script<Vec<Customer>>,
    pub dashboard: Script<DashboardMetrics>,
    pub revenue: Script<RevenueSeries>,
    pub segments: Script<CustomerSegments>,
    pub distribution: Script<RiskDistribution>,
    pub status: Script<CampaignStatus>,
    pub history: Script<Vec<CampaignRecord>>,
    pub launch: Script<CampaignLaunchResult>,
    pub test_send: Script<TestSendResult>,
    pub health: Script<HealthStatus>,
    pub launches: Mutex<Vec<(u32, ChurnRisk)>>,
}

impl Backend for FakeBackend {
    async fn customers(&self, _limit: u32) -> ApiResult<Vec<Customer>> {
        self.customers.next().await
    }

    async fn dashboard_metrics(&self) -> ApiResult<DashboardMetrics> {
        self.dashboard.next().await
    }

    async fn revenue_trends(&self) -> ApiResult<RevenueSeries> {
        self.revenue.next().await
    }

    async fn customer_segments(&self) -> ApiResult<CustomerSegments> {
        self.segments.next().await
    }

    async fn risk_distribution(&self) -> ApiResult<RiskDistribution> {
        self.distribution.next().await
    }

    async fn campaign_status(&self) -> ApiResult<CampaignStatus> {
        self.status.next().await
    }

    async fn campaign_history(&self) -> ApiResult<Vec<CampaignRecord>> {
        self.history.next().await
    }

    async fn launch_campaign(
        &self,
        customer_limit: u32,
        churn_risk: ChurnRisk,
    ) -> ApiResult<CampaignLaunchResult> {
        self.launches.lock().unwrap().push((customer_limit, churn_risk));
        self.launch.next().await
    }

    async fn test_campaign(&self) -> ApiResult<TestSendResult> {
        self.test_send.next().await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        self.health.next().await
    }
}
