use std::sync::Arc;
use std::time::Duration;

use backoff::{backoff::Backoff, ExponentialBackoff};
use client::Backend;
use model::{Customer, Settings};
use serde::Serialize;
use tracing::{info, warn};
use views::pages::{
    AnalyticsPage, CampaignsPage, ConnectionCheck, CustomersPage, CustomersView, DashboardPage,
    SettingsPage,
};
use views::{CustomerFilter, FallbackPolicy};

use crate::output::OutputFormat;
use crate::screens;
use crate::{CampaignCommand, Command};

#[derive(Serialize)]
struct CustomersOutput {
    #[serde(flatten)]
    view: CustomersView,
    selected: Option<Customer>,
}

pub(crate) async fn run<B: Backend>(
    command: Command,
    backend: Arc<B>,
    settings: Settings,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match command {
        Command::Overview => {
            let page = DashboardPage::new(backend, FallbackPolicy::from_settings(&settings));
            let state = page.mount().await;
            format.print(&state, screens::overview)
        }
        Command::Analytics => {
            let page = AnalyticsPage::new(backend);
            let state = page.mount().await;
            format.print(&state, screens::analytics)
        }
        Command::Customers {
            search,
            risk,
            tier,
            page: page_number,
            show,
        } => {
            let mut page = CustomersPage::new(backend, &settings);
            page.mount().await;
            page.set_filter(CustomerFilter::new().search(search).risk(risk).tier(tier));
            page.set_page(page_number);

            let selected = match show {
                Some(id) => {
                    let found = page.customer(&id).await;
                    if found.is_none() {
                        warn!(customer_id = %id, "customer not found");
                    }
                    found
                }
                None => None,
            };
            let output = CustomersOutput {
                view: page.view().await,
                selected,
            };
            format.print(&output, |out| {
                screens::customers(&out.view, out.selected.as_ref())
            })
        }
        Command::Campaigns { action } => campaigns(action, backend, format).await,
        Command::Settings => {
            let page = SettingsPage::new(backend, settings);
            page.test_connection().await;
            format.print(&page.view().await, screens::settings)
        }
        Command::Health { wait } => {
            let page = SettingsPage::new(backend, settings);
            let check = match wait {
                Some(secs) => {
                    wait_for_health(&page, health_backoff(Duration::from_secs(secs))).await
                }
                None => page.test_connection().await,
            };
            format.print(&page.view().await, screens::settings)?;
            match check {
                ConnectionCheck::Connected { .. } => Ok(()),
                _ => Err(anyhow::anyhow!("backend is not reachable")),
            }
        }
    }
}

async fn campaigns<B: Backend>(
    action: CampaignCommand,
    backend: Arc<B>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let page = CampaignsPage::new(backend);
    match action {
        CampaignCommand::Status => {
            let state = page.refresh_status().await;
            let view = page.view().await;
            format.print(&state, |_| screens::campaigns(&view))
        }
        CampaignCommand::History => {
            let state = page.refresh_history().await;
            format.print(&state, screens::campaign_history)
        }
        CampaignCommand::Launch { limit, risk } => {
            page.mount().await;
            let result = page.launch(limit, risk).await?;
            info!(?result, "campaign launch settled");
            format.print(&page.view().await, screens::campaigns)
        }
        CampaignCommand::Test => {
            let outcome = page.test_send().await;
            format.print(&page.view().await, screens::campaigns)?;
            outcome
                .map(|_| ())
                .map_err(|err| anyhow::anyhow!(screens::error_panel(&err)))
        }
    }
}

pub fn health_backoff(max_wait: Duration) -> ExponentialBackoff {
    ExponentialBackoff {
        max_elapsed_time: Some(max_wait),
        ..Default::default()
    }
}

/// Probes `/health` until it answers or the backoff gives up. Returns the
/// last check either way.
pub async fn wait_for_health<B: Backend>(
    page: &SettingsPage<B>,
    mut backoff: ExponentialBackoff,
) -> ConnectionCheck {
    loop {
        let check = page.test_connection().await;
        if check.is_connected() {
            return check;
        }

        match backoff.next_backoff() {
            Some(delay) => {
                info!(?delay, "backend not reachable, retrying");
                tokio::time::sleep(delay).await;
            }
            None => return check,
        }
    }
}
