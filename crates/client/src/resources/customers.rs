use model::{Customer, CustomerPage};

use crate::client::{ApiClient, Params};
use crate::error::{ApiError, ApiResult};

pub const PATH: &str = "/api/customers";
pub const MAX_LIMIT: u32 = 1000;

pub async fn list(client: &ApiClient, limit: u32) -> ApiResult<Vec<Customer>> {
    validate_limit(limit)?;
    let page: CustomerPage = client
        .get(PATH, &Params::new().uint("limit", u64::from(limit)))
        .await?;
    Ok(page.data)
}

fn validate_limit(limit: u32) -> ApiResult<()> {
    if limit == 0 || limit > MAX_LIMIT {
        return Err(ApiError::Validation(format!(
            "customer limit must be between 1 and {}, got {}",
            MAX_LIMIT, limit
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;
    use std::time::Duration;
    use url::Url;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_unwraps_data_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PATH))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"customer_id": "C1", "first_name": "Sarah", "last_name": "Lee",
                     "email": "s@x.io", "city": "Austin", "loyalty_tier": "Gold",
                     "churn_risk": "High", "avg_monthly_spend": 61.2},
                    {"customer_id": "C2", "first_name": "Tom", "last_name": "Ng",
                     "email": "t@x.io", "city": "Reno", "loyalty_tier": "Bronze",
                     "churn_risk": "Low", "avg_monthly_spend": 12.0}
                ],
                "pagination": {"page": 1, "limit": 2, "total": 40, "total_pages": 20,
                               "has_next": true, "has_previous": false}
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(Url::parse(&server.uri()).unwrap(), Duration::from_secs(5))
            .unwrap();
        let customers = list(&client, 2).await.unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].customer_id, "C1");
        assert_eq!(customers[1].city, "Reno");
    }

    #[tokio::test]
    async fn test_list_missing_data_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let client = ApiClient::new(Url::parse(&server.uri()).unwrap(), Duration::from_secs(5))
            .unwrap();
        assert!(list(&client, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_limit_fails_validation() {
        let client = ApiClient::new(
            Url::parse("http://127.0.0.1:1").unwrap(),
            Duration::from_secs(1),
        )
        .unwrap();

        for limit in [0, MAX_LIMIT + 1] {
            let err = list(&client, limit).await.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "limit {}", limit);
        }
    }
}
