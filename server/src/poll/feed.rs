//! Last known deployment list
//!
//! The single shared cell the polling ticks and the manual refresh action
//! both write into. Last write wins; there is no cross-tick ordering, so a
//! slow tick resolving late can overwrite fresher data.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, error};

use crate::deploy::facade::DeployFacade;
use crate::models::deployment::Deployment;

pub struct DeploymentFeed {
    facade: Arc<DeployFacade>,
    page_size: u32,
    latest: RwLock<Vec<Deployment>>,
    last_refresh: RwLock<Option<DateTime<Utc>>>,
}

impl DeploymentFeed {
    pub fn new(facade: Arc<DeployFacade>, page_size: u32) -> Self {
        Self {
            facade,
            page_size,
            latest: RwLock::new(Vec::new()),
            last_refresh: RwLock::new(None),
        }
    }

    /// Fetch the first page and replace the cached list wholesale. On
    /// failure the list is cleared rather than left stale; the refresh
    /// timestamp is stamped either way.
    pub async fn refresh(&self) {
        match self.facade.list_deployments(0, self.page_size).await {
            Ok(page) => {
                debug!("Refreshed deployment list ({} entries)", page.deployments.len());
                *self.latest.write().await = page.deployments;
            }
            Err(e) => {
                error!("Failed to refresh deployments: {}", e);
                self.latest.write().await.clear();
            }
        }
        *self.last_refresh.write().await = Some(Utc::now());
    }

    pub async fn latest(&self) -> Vec<Deployment> {
        self.latest.read().await.clone()
    }

    pub async fn last_refresh(&self) -> Option<DateTime<Utc>> {
        *self.last_refresh.read().await
    }
}
