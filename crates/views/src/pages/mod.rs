//! One controller per dashboard screen. Each owns its view state and the
//! fetches that feed it; screens only read snapshots.

pub mod analytics;
pub mod campaigns;
pub mod customers;
pub mod dashboard;
pub mod settings;

pub use analytics::{AnalyticsData, AnalyticsPage};
pub use campaigns::{CampaignsPage, CampaignsView, LaunchRejected, LaunchState};
pub use customers::{CustomersPage, CustomersView};
pub use dashboard::{DashboardPage, DashboardSummary};
pub use settings::{ConnectionCheck, SettingsPage, SettingsView};
