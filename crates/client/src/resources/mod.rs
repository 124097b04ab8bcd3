//! One fetcher per backend endpoint. Fetchers never retry, cache or swallow
//! errors; whatever the [`ApiClient`](crate::ApiClient) returns is passed
//! through unchanged.

pub mod analytics;
pub mod campaigns;
pub mod customers;
pub mod health;
pub mod predictions;
