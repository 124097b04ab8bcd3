use std::sync::Arc;

use client::Backend;
use model::Settings;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::state::ErrorInfo;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ConnectionCheck {
    NotRun,
    Connected { status: String },
    Failed(ErrorInfo),
}

impl ConnectionCheck {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionCheck::Connected { .. })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub settings: Settings,
    pub connection: ConnectionCheck,
}

/// Shows the effective configuration and probes `/health` on request.
pub struct SettingsPage<B> {
    backend: Arc<B>,
    settings: Settings,
    check: RwLock<ConnectionCheck>,
}

impl<B: Backend> SettingsPage<B> {
    pub fn new(backend: Arc<B>, settings: Settings) -> Self {
        Self {
            backend,
            settings,
            check: RwLock::new(ConnectionCheck::NotRun),
        }
    }

    pub async fn test_connection(&self) -> ConnectionCheck {
        let check = match self.backend.health().await {
            Ok(health) => ConnectionCheck::Connected {
                status: health.status,
            },
            Err(err) => ConnectionCheck::Failed(ErrorInfo::from(&err)),
        };
        *self.check.write().await = check.clone();
        check
    }

    pub async fn view(&self) -> SettingsView {
        SettingsView {
            settings: self.settings.clone(),
            connection: self.check.read().await.clone(),
        }
    }
}
