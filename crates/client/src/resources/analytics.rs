use model::{CustomerSegments, DashboardMetrics, RevenueSeries};

use crate::client::{ApiClient, Params};
use crate::error::ApiResult;

pub const DASHBOARD_PATH: &str = "/api/analytics/dashboard";
pub const REVENUE_TRENDS_PATH: &str = "/api/analytics/revenue-trends";
pub const CUSTOMER_SEGMENTS_PATH: &str = "/api/analytics/customer-segments";

pub async fn dashboard(client: &ApiClient) -> ApiResult<DashboardMetrics> {
    client.get(DASHBOARD_PATH, &Params::new()).await
}

pub async fn revenue_trends(client: &ApiClient) -> ApiResult<RevenueSeries> {
    client.get(REVENUE_TRENDS_PATH, &Params::new()).await
}

pub async fn customer_segments(client: &ApiClient) -> ApiResult<CustomerSegments> {
    client.get(CUSTOMER_SEGMENTS_PATH, &Params::new()).await
}
