use model::{
    CampaignHistory, CampaignLaunchResult, CampaignRecord, CampaignStatus, ChurnRisk,
    LaunchResponse, TestSendResult,
};

use crate::client::{ApiClient, Params};
use crate::error::{ApiError, ApiResult};

pub const STATUS_PATH: &str = "/api/campaigns/status";
pub const HISTORY_PATH: &str = "/api/campaigns/history";
pub const LAUNCH_PATH: &str = "/api/campaigns/sms/retention";
pub const TEST_SEND_PATH: &str = "/api/campaigns/sms/test";

pub async fn status(client: &ApiClient) -> ApiResult<CampaignStatus> {
    client.get(STATUS_PATH, &Params::new()).await
}

/// Campaign history in the order the backend returns it.
pub async fn history(client: &ApiClient) -> ApiResult<Vec<CampaignRecord>> {
    let history: CampaignHistory = client.get(HISTORY_PATH, &Params::new()).await?;
    Ok(history.campaigns)
}

pub async fn launch(
    client: &ApiClient,
    customer_limit: u32,
    churn_risk: ChurnRisk,
) -> ApiResult<CampaignLaunchResult> {
    if customer_limit == 0 {
        return Err(ApiError::Validation(
            "customer_limit must be greater than zero".to_string(),
        ));
    }

    let params = Params::new()
        .uint("customer_limit", u64::from(customer_limit))
        .text("churn_risk", churn_risk.as_str());
    let response: LaunchResponse = client.post(LAUNCH_PATH, &params, None).await?;
    Ok(response.into())
}

pub async fn test_send(client: &ApiClient) -> ApiResult<TestSendResult> {
    client.get(TEST_SEND_PATH, &Params::new()).await
}
