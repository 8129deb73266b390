//! Server state

use std::sync::Arc;

use crate::deploy::facade::DeployFacade;

/// Server state shared across handlers
pub struct ServerState {
    pub facade: Arc<DeployFacade>,
}

impl ServerState {
    pub fn new(facade: Arc<DeployFacade>) -> Self {
        Self { facade }
    }
}
