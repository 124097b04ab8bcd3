use model::{CampaignLaunchResult, CampaignRecord, Customer, LoyaltyTier};
use views::pages::{
    AnalyticsData, CampaignsView, ConnectionCheck, CustomersView, DashboardSummary, LaunchState,
    SettingsView,
};
use views::{ErrorInfo, Status, ViewState};

use crate::components::card::MetricCard;
use crate::components::chart::{Chart, ChartKind};
use crate::components::format::{currency, percent, thousands};
use crate::components::modal;
use crate::components::table::{render_page, render_rows, Column};

pub const DEMO_BANNER: &str =
    "[demo data] The backend could not be reached; figures below are sample values.";

pub fn error_panel(error: &ErrorInfo) -> String {
    format!("error ({}): {}", error.kind, error.message)
}

/// Banner and error lines shared by every data-backed screen.
fn state_header<T>(state: &ViewState<T>) -> Vec<String> {
    let mut lines = Vec::new();
    if state.is_demo() {
        lines.push(DEMO_BANNER.to_string());
    }
    if let Some(error) = &state.error {
        lines.push(error_panel(error));
    }
    lines
}

fn join(sections: Vec<String>) -> String {
    sections
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn overview(state: &ViewState<DashboardSummary>) -> String {
    let mut sections = state_header(state);
    let Some(summary) = &state.data else {
        if state.status == Status::Loading {
            sections.push("Loading dashboard...".to_string());
        }
        return join(sections);
    };

    let m = &summary.metrics;
    let cards = [
        MetricCard::new("Total Customers", thousands(m.total_customers))
            .with_delta(summary.customers_delta()),
        MetricCard::new("Retention Rate", percent(m.retention_rate)),
        MetricCard::new("Churn Rate", percent(m.churn_rate)),
        MetricCard::new("High-Risk Customers", thousands(m.high_risk_customers)),
        MetricCard::new("Avg Basket Size", currency(m.avg_basket_size)),
        MetricCard::new("Monthly Revenue", currency(m.monthly_revenue))
            .with_delta(summary.revenue_delta()),
        MetricCard::new("Campaigns Sent", thousands(m.campaigns_sent)),
        MetricCard::new("Campaign Success", percent(m.campaign_success_rate)),
    ];
    sections.push(
        cards
            .iter()
            .map(MetricCard::render)
            .collect::<Vec<_>>()
            .join("\n"),
    );

    sections.push(
        Chart::from_series(
            "Revenue Trend",
            ChartKind::Line,
            &summary.revenue.labels,
            &summary.revenue.revenue,
        )
        .render(),
    );
    sections.push(format!(
        "Campaigns: {}",
        if summary.campaigns_ready { "ready" } else { "not ready" }
    ));
    if let Some(at) = state.updated_at {
        sections.push(format!("Last updated {}", at.format("%Y-%m-%d %H:%M:%S UTC")));
    }
    join(sections)
}

pub fn analytics(state: &ViewState<AnalyticsData>) -> String {
    let mut sections = state_header(state);
    let Some(data) = &state.data else {
        if state.status == Status::Loading {
            sections.push("Loading analytics...".to_string());
        }
        return join(sections);
    };

    sections.push(
        [
            MetricCard::new("Retention Rate", percent(data.metrics.retention_rate)),
            MetricCard::new("Avg Basket Size", currency(data.metrics.avg_basket_size)),
            MetricCard::new("Monthly Revenue", currency(data.metrics.monthly_revenue)),
        ]
        .iter()
        .map(MetricCard::render)
        .collect::<Vec<_>>()
        .join("\n"),
    );
    sections.push(
        Chart::from_counts(
            "Loyalty Tiers",
            ChartKind::Pie,
            &data.segments.loyalty_segments,
        )
        .render(),
    );
    sections.push(
        Chart::from_counts("Age Groups", ChartKind::Bar, &data.segments.age_segments).render(),
    );
    sections.push(
        Chart::from_counts("Top Cities", ChartKind::Bar, &data.segments.city_segments).render(),
    );
    sections.push(
        Chart::from_series(
            "Revenue",
            ChartKind::Line,
            &data.revenue.labels,
            &data.revenue.revenue,
        )
        .render(),
    );
    join(sections)
}

const CUSTOMER_COLUMNS: [Column<Customer>; 6] = [
    Column::new("ID", |c: &Customer| c.customer_id.clone()),
    Column::new("Name", |c: &Customer| c.full_name()),
    Column::new("Email", |c: &Customer| c.email.clone()),
    Column::new("Tier", |c: &Customer| tier_badge(c.loyalty_tier)),
    Column::new("Risk", |c: &Customer| or_dash(c.churn_risk)),
    Column::new("Avg Spend", |c: &Customer| currency(c.avg_monthly_spend)),
];

fn tier_badge(tier: Option<LoyaltyTier>) -> String {
    tier.map_or_else(|| "-".to_string(), |tier| format!("[{}]", tier))
}

fn or_dash(value: Option<impl std::fmt::Display>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

pub fn customers(view: &CustomersView, selected: Option<&Customer>) -> String {
    let mut sections = Vec::new();
    if view.is_demo() {
        sections.push(DEMO_BANNER.to_string());
    }
    if let Some(error) = &view.error {
        sections.push(error_panel(error));
    }
    if view.status == Status::Loading && view.total_customers == 0 {
        sections.push("Loading customers...".to_string());
        return join(sections);
    }

    if !view.filter.is_empty() {
        let mut parts = Vec::new();
        if !view.filter.search.trim().is_empty() {
            parts.push(format!("search={:?}", view.filter.search.trim()));
        }
        if let Some(risk) = view.filter.risk {
            parts.push(format!("risk={}", risk));
        }
        if let Some(tier) = view.filter.tier {
            parts.push(format!("tier={}", tier));
        }
        sections.push(format!("Filters: {}", parts.join(", ")));
    }
    sections.push(render_page(&view.page, &CUSTOMER_COLUMNS));

    if let Some(customer) = selected {
        sections.push(customer_modal(customer));
    }
    join(sections)
}

pub fn customer_modal(customer: &Customer) -> String {
    modal::render(
        "Customer Details",
        &[
            ("ID", customer.customer_id.clone()),
            ("Name", customer.full_name()),
            ("Email", customer.email.clone()),
            ("Phone", customer.phone.clone().unwrap_or_else(|| "-".to_string())),
            ("City", customer.city.clone()),
            ("Loyalty Tier", or_dash(customer.loyalty_tier)),
            ("Churn Risk", or_dash(customer.churn_risk)),
            ("Avg Monthly Spend", currency(customer.avg_monthly_spend)),
        ],
    )
}

const HISTORY_COLUMNS: [Column<CampaignRecord>; 6] = [
    Column::new("Campaign", |r: &CampaignRecord| r.campaign_id.clone()),
    Column::new("Date", |r: &CampaignRecord| {
        r.date.clone().unwrap_or_else(|| "-".to_string())
    }),
    Column::new("Targeted", |r: &CampaignRecord| thousands(r.customers_targeted)),
    Column::new("Sent", |r: &CampaignRecord| thousands(r.successful)),
    Column::new("Failed", |r: &CampaignRecord| thousands(r.failed)),
    Column::new("Success", |r: &CampaignRecord| percent(r.success_rate)),
];

pub fn launch_result(result: &CampaignLaunchResult) -> String {
    match result {
        CampaignLaunchResult::Delivered {
            successful,
            failed,
            total,
        } => format!(
            "Campaign sent: {} of {} delivered ({} failed)",
            successful, total, failed
        ),
        CampaignLaunchResult::Failed { error } => format!("Campaign failed: {}", error),
    }
}

pub fn campaigns(view: &CampaignsView) -> String {
    let mut sections = Vec::new();

    match (&view.status.data, &view.status.error) {
        (Some(status), _) => sections.push(
            [
                MetricCard::new("SMS Service", status.sms_service.to_string()),
                MetricCard::new("AI Service", status.ai_service.to_string()),
                MetricCard::new("Total Customers", thousands(status.total_customers)),
                MetricCard::new("With Phone", thousands(status.customers_with_phone)),
            ]
            .iter()
            .map(MetricCard::render)
            .collect::<Vec<_>>()
            .join("\n"),
        ),
        (None, Some(error)) => sections.push(error_panel(error)),
        (None, None) => {}
    }
    sections.push(if view.can_launch {
        "Launch: available".to_string()
    } else {
        "Launch: unavailable until services are ready".to_string()
    });

    match &view.launch {
        LaunchState::Idle => {}
        LaunchState::Launching => sections.push("Launching campaign...".to_string()),
        LaunchState::Finished(result) => sections.push(launch_result(result)),
    }

    match &view.last_test {
        Some(Ok(test)) => sections.push(format!("Test send: {}", test.message)),
        Some(Err(error)) => sections.push(format!("Test send {}", error_panel(error))),
        None => {}
    }

    sections.push(campaign_history(&view.history));
    join(sections)
}

pub fn campaign_history(state: &ViewState<Vec<CampaignRecord>>) -> String {
    let mut sections = state_header(state);
    match &state.data {
        Some(records) if records.is_empty() => sections.push("No campaigns yet.".to_string()),
        Some(records) => sections.push(render_rows(records, &HISTORY_COLUMNS)),
        None => {}
    }
    join(sections)
}

pub fn settings(view: &SettingsView) -> String {
    let s = &view.settings;
    let rows = [
        ("API base URL", s.api_base_url.clone()),
        ("HTTP timeout", format!("{}s", s.http_timeout_secs)),
        ("Customer limit", s.customer_limit.to_string()),
        ("Page size", s.page_size.to_string()),
        (
            "Demo fallback",
            if s.demo_fallback { "on" } else { "off" }.to_string(),
        ),
    ];
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    let mut lines: Vec<String> = rows
        .iter()
        .map(|(k, v)| format!("{:<width$}  {}", k, v, width = width))
        .collect();

    lines.push(String::new());
    lines.push(match &view.connection {
        ConnectionCheck::NotRun => "Connection: not tested".to_string(),
        ConnectionCheck::Connected { status } => format!("Connection: Connected ({})", status),
        ConnectionCheck::Failed(error) => format!("Connection: Failed, {}", error_panel(error)),
    });
    lines.join("\n")
}
