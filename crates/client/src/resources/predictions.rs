use model::RiskDistribution;

use crate::client::{ApiClient, Params};
use crate::error::ApiResult;

pub const DISTRIBUTION_PATH: &str = "/api/predictions/stats/distribution";

pub async fn risk_distribution(client: &ApiClient) -> ApiResult<RiskDistribution> {
    client.get(DISTRIBUTION_PATH, &Params::new()).await
}
