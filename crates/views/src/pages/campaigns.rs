use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use client::Backend;
use model::{CampaignLaunchResult, CampaignRecord, CampaignStatus, ChurnRisk, TestSendResult};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::slot::Slot;
use crate::state::{ErrorInfo, Status, ViewState};

/// Request-scoped state of the launch button, independent of the page's
/// status and history fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "result", rename_all = "lowercase")]
pub enum LaunchState {
    Idle,
    Launching,
    Finished(CampaignLaunchResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRejected {
    /// Status has not loaded or the backend reports it is not ready.
    NotReady,
    AlreadyLaunching,
}

impl std::fmt::Display for LaunchRejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LaunchRejected::NotReady => f.write_str("campaign services are not ready"),
            LaunchRejected::AlreadyLaunching => f.write_str("a campaign launch is already running"),
        }
    }
}

impl std::error::Error for LaunchRejected {}

#[derive(Debug, Clone, Serialize)]
pub struct CampaignsView {
    pub status: ViewState<CampaignStatus>,
    pub history: ViewState<Vec<CampaignRecord>>,
    pub launch: LaunchState,
    pub last_test: Option<Result<TestSendResult, ErrorInfo>>,
    pub can_launch: bool,
}

pub struct CampaignsPage<B> {
    backend: Arc<B>,
    status: Slot<CampaignStatus>,
    history: Slot<Vec<CampaignRecord>>,
    launch: Mutex<LaunchState>,
    last_test: RwLock<Option<Result<TestSendResult, ErrorInfo>>>,
}

impl<B: Backend> CampaignsPage<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            status: Slot::new("campaign-status"),
            history: Slot::new("campaign-history"),
            launch: Mutex::new(LaunchState::Idle),
            last_test: RwLock::new(None),
        }
    }

    pub async fn mount(&self) -> CampaignsView {
        tokio::join!(self.refresh_status(), self.refresh_history());
        self.view().await
    }

    pub async fn refresh_status(&self) -> ViewState<CampaignStatus> {
        let ticket = self.status.begin().await;
        match self.backend.campaign_status().await {
            Ok(status) => {
                self.status.settle_ok(ticket, status).await;
            }
            Err(err) => {
                self.status
                    .settle_err(ticket, ErrorInfo::from(&err), None)
                    .await;
            }
        }
        self.status.snapshot().await
    }

    pub async fn refresh_history(&self) -> ViewState<Vec<CampaignRecord>> {
        let ticket = self.history.begin().await;
        match self.backend.campaign_history().await {
            Ok(records) => {
                self.history.settle_ok(ticket, records).await;
            }
            Err(err) => {
                self.history
                    .settle_err(ticket, ErrorInfo::from(&err), None)
                    .await;
            }
        }
        self.history.snapshot().await
    }

    pub async fn can_launch(&self) -> bool {
        let status = self.status.snapshot().await;
        let ready = status.status == Status::Success
            && status.data.map_or(false, |s| s.ready_for_campaign);
        ready && *self.launch_state() != LaunchState::Launching
    }

    /// Launches a retention campaign. History is refreshed once the launch
    /// settles, whether it succeeded or not.
    pub async fn launch(
        &self,
        customer_limit: u32,
        churn_risk: ChurnRisk,
    ) -> Result<CampaignLaunchResult, LaunchRejected> {
        {
            let status = self.status.snapshot().await;
            let ready = status.status == Status::Success
                && status.data.map_or(false, |s| s.ready_for_campaign);
            if !ready {
                return Err(LaunchRejected::NotReady);
            }

            let mut launch = self.launch_state();
            if *launch == LaunchState::Launching {
                return Err(LaunchRejected::AlreadyLaunching);
            }
            *launch = LaunchState::Launching;
        }
        let guard = LaunchGuard { state: &self.launch };

        info!(customer_limit, churn_risk = %churn_risk, "launching retention campaign");
        let result = match self.backend.launch_campaign(customer_limit, churn_risk).await {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "campaign launch failed");
                CampaignLaunchResult::Failed {
                    error: format!("Campaign launch failed ({}): {}", err.kind(), err),
                }
            }
        };

        guard.finish(result.clone());
        self.refresh_history().await;
        Ok(result)
    }

    pub async fn test_send(&self) -> Result<TestSendResult, ErrorInfo> {
        let outcome = self
            .backend
            .test_campaign()
            .await
            .map_err(|err| ErrorInfo::from(&err));
        *self.last_test.write().await = Some(outcome.clone());
        outcome
    }

    /// Clears a finished launch result.
    pub async fn dismiss_result(&self) {
        let mut launch = self.launch_state();
        if matches!(*launch, LaunchState::Finished(_)) {
            *launch = LaunchState::Idle;
        }
    }

    pub async fn view(&self) -> CampaignsView {
        CampaignsView {
            status: self.status.snapshot().await,
            history: self.history.snapshot().await,
            launch: self.launch_state().clone(),
            last_test: self.last_test.read().await.clone(),
            can_launch: self.can_launch().await,
        }
    }

    pub async fn unmount(&self) {
        self.status.invalidate().await;
        self.history.invalidate().await;
    }

    fn launch_state(&self) -> MutexGuard<'_, LaunchState> {
        lock(&self.launch)
    }
}

fn lock(state: &Mutex<LaunchState>) -> MutexGuard<'_, LaunchState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the launch state to `Idle` if a launch is abandoned before it
/// settles.
struct LaunchGuard<'a> {
    state: &'a Mutex<LaunchState>,
}

impl LaunchGuard<'_> {
    fn finish(self, result: CampaignLaunchResult) {
        *lock(self.state) = LaunchState::Finished(result);
        std::mem::forget(self);
    }
}

impl Drop for LaunchGuard<'_> {
    fn drop(&mut self) {
        let mut state = lock(self.state);
        if *state == LaunchState::Launching {
            *state = LaunchState::Idle;
        }
    }
}
