use std::future::Future;

use model::{
    CampaignLaunchResult, CampaignRecord, CampaignStatus, ChurnRisk, Customer, CustomerSegments,
    DashboardMetrics, HealthStatus, RevenueSeries, RiskDistribution, TestSendResult,
};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::resources::{analytics, campaigns, customers, health, predictions};

/// The set of fetchers page controllers depend on. [`ApiClient`] is the
/// production implementation.
pub trait Backend: Send + Sync + 'static {
    fn customers(&self, limit: u32) -> impl Future<Output = ApiResult<Vec<Customer>>> + Send;

    fn dashboard_metrics(&self) -> impl Future<Output = ApiResult<DashboardMetrics>> + Send;

    fn revenue_trends(&self) -> impl Future<Output = ApiResult<RevenueSeries>> + Send;

    fn customer_segments(&self) -> impl Future<Output = ApiResult<CustomerSegments>> + Send;

    fn risk_distribution(&self) -> impl Future<Output = ApiResult<RiskDistribution>> + Send;

    fn campaign_status(&self) -> impl Future<Output = ApiResult<CampaignStatus>> + Send;

    fn campaign_history(&self) -> impl Future<Output = ApiResult<Vec<CampaignRecord>>> + Send;

    fn launch_campaign(
        &self,
        customer_limit: u32,
        churn_risk: ChurnRisk,
    ) -> impl Future<Output = ApiResult<CampaignLaunchResult>> + Send;

    fn test_campaign(&self) -> impl Future<Output = ApiResult<TestSendResult>> + Send;

    fn health(&self) -> impl Future<Output = ApiResult<HealthStatus>> + Send;
}

impl Backend for ApiClient {
    async fn customers(&self, limit: u32) -> ApiResult<Vec<Customer>> {
        customers::list(self, limit).await
    }

    async fn dashboard_metrics(&self) -> ApiResult<DashboardMetrics> {
        analytics::dashboard(self).await
    }

    async fn revenue_trends(&self) -> ApiResult<RevenueSeries> {
        analytics::revenue_trends(self).await
    }

    async fn customer_segments(&self) -> ApiResult<CustomerSegments> {
        analytics::customer_segments(self).await
    }

    async fn risk_distribution(&self) -> ApiResult<RiskDistribution> {
        predictions::risk_distribution(self).await
    }

    async fn campaign_status(&self) -> ApiResult<CampaignStatus> {
        campaigns::status(self).await
    }

    async fn campaign_history(&self) -> ApiResult<Vec<CampaignRecord>> {
        campaigns::history(self).await
    }

    async fn launch_campaign(
        &self,
        customer_limit: u32,
        churn_risk: ChurnRisk,
    ) -> ApiResult<CampaignLaunchResult> {
        campaigns::launch(self, customer_limit, churn_risk).await
    }

    async fn test_campaign(&self) -> ApiResult<TestSendResult> {
        campaigns::test_send(self).await
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        health::check(self).await
    }
}
