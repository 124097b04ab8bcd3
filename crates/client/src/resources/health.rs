use model::HealthStatus;

use crate::client::{ApiClient, Params};
use crate::error::ApiResult;

pub const PATH: &str = "/health";

/// Liveness probe. Any 2xx with a JSON body counts as up.
pub async fn check(client: &ApiClient) -> ApiResult<HealthStatus> {
    client.get(PATH, &Params::new()).await
}
