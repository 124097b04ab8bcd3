use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoyaltyTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChurnRisk {
    Low,
    Medium,
    High,
}

impl LoyaltyTier {
    pub const ALL: [LoyaltyTier; 4] = [
        LoyaltyTier::Bronze,
        LoyaltyTier::Silver,
        LoyaltyTier::Gold,
        LoyaltyTier::Platinum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoyaltyTier::Bronze => "Bronze",
            LoyaltyTier::Silver => "Silver",
            LoyaltyTier::Gold => "Gold",
            LoyaltyTier::Platinum => "Platinum",
        }
    }
}

impl ChurnRisk {
    pub const ALL: [ChurnRisk; 3] = [ChurnRisk::Low, ChurnRisk::Medium, ChurnRisk::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChurnRisk::Low => "Low",
            ChurnRisk::Medium => "Medium",
            ChurnRisk::High => "High",
        }
    }
}

impl fmt::Display for LoyaltyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ChurnRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} {value:?}")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl FromStr for LoyaltyTier {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoyaltyTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "loyalty tier",
                value: s.to_string(),
            })
    }
}

impl FromStr for ChurnRisk {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChurnRisk::ALL
            .into_iter()
            .find(|risk| risk.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant {
                kind: "churn risk",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub customer_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub city: String,
    /// Missing or unrecognised tiers are kept as `None`.
    #[serde(default, deserialize_with = "lenient_variant")]
    pub loyalty_tier: Option<LoyaltyTier>,
    /// Not every backend scores churn on the customer record.
    #[serde(default, deserialize_with = "lenient_variant")]
    pub churn_risk: Option<ChurnRisk>,
    #[serde(default)]
    pub avg_monthly_spend: f64,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Envelope returned by `GET /api/customers`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPage {
    #[serde(default)]
    pub data: Vec<Customer>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Availability of a backend dependency, as reported by the campaign service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceState {
    Ready,
    #[default]
    NotConfigured,
    Other(String),
}

impl ServiceState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ServiceState::Ready)
    }
}

impl From<String> for ServiceState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Ready" => ServiceState::Ready,
            "Not configured" => ServiceState::NotConfigured,
            _ => ServiceState::Other(value),
        }
    }
}

impl From<ServiceState> for String {
    fn from(value: ServiceState) -> Self {
        match value {
            ServiceState::Ready => "Ready".to_string(),
            ServiceState::NotConfigured => "Not configured".to_string(),
            ServiceState::Other(other) => other,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceState::Ready => f.write_str("Ready"),
            ServiceState::NotConfigured => f.write_str("Not configured"),
            ServiceState::Other(other) => f.write_str(other),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CampaignStatus {
    pub sms_service: ServiceState,
    pub ai_service: ServiceState,
    pub total_customers: u64,
    pub customers_with_phone: u64,
    /// Gates the launch action.
    pub ready_for_campaign: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CampaignRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub campaign_id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub customers_targeted: u64,
    #[serde(default)]
    pub successful: u64,
    #[serde(default)]
    pub failed: u64,
    #[serde(default)]
    pub success_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CampaignHistory {
    pub total_campaigns: u64,
    pub campaigns: Vec<CampaignRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CampaignDetails {
    pub targeted_customers: u64,
    pub churn_risk_level: Option<ChurnRisk>,
    pub customer_limit: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CampaignResults {
    pub success: bool,
    pub total: u64,
    pub successful: u64,
    pub failed: u64,
    pub error: Option<String>,
}

/// Body of `POST /api/campaigns/sms/retention`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LaunchResponse {
    pub message: String,
    pub campaign_details: Option<CampaignDetails>,
    pub campaign_results: CampaignResults,
}

/// Outcome of one launch action. Never persisted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CampaignLaunchResult {
    Delivered {
        successful: u64,
        failed: u64,
        total: u64,
    },
    Failed {
        error: String,
    },
}

impl From<LaunchResponse> for CampaignLaunchResult {
    fn from(response: LaunchResponse) -> Self {
        let results = response.campaign_results;
        if results.success {
            CampaignLaunchResult::Delivered {
                successful: results.successful,
                failed: results.failed,
                total: results.total,
            }
        } else {
            CampaignLaunchResult::Failed {
                error: results
                    .error
                    .unwrap_or_else(|| "Campaign launch failed".to_string()),
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TestSendResult {
    pub message: String,
    pub note: Option<String>,
    pub result: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardMetrics {
    pub total_customers: u64,
    pub retention_rate: f64,
    pub churn_rate: f64,
    pub avg_basket_size: f64,
    pub high_risk_customers: u64,
    pub monthly_revenue: f64,
    pub campaigns_sent: u64,
    pub campaign_success_rate: f64,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RevenueSeries {
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub customers: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CustomerSegments {
    pub loyalty_segments: BTreeMap<String, u64>,
    pub age_segments: BTreeMap<String, u64>,
    pub city_segments: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskStatistics {
    pub total_customers: u64,
    pub high_risk_percentage: f64,
    pub medium_risk_percentage: f64,
    pub low_risk_percentage: f64,
    pub avg_churn_probability: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RiskDistribution {
    pub distribution: BTreeMap<String, u64>,
    pub statistics: RiskStatistics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

/// Reads an optional enum name, mapping null or unknown names to `None` so
/// one odd record cannot fail the whole collection.
fn lenient_variant<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|name| name.parse().ok()))
}
