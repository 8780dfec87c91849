use crate::client::ApiClient;
use crate::config::Action;
use crate::errors::ClickError;
use crate::identity::{HostIdentity, IdentityHost};
use crate::models::{ClickRequest, ClickSuccess, MineRequest, TapRequest};
use crate::state::DisplayState;
use std::sync::Arc;
use tracing::{error, info, warn};

/// The button handler. Each call is one independent click: gather, validate,
/// send one request, render the outcome.
#[derive(Clone)]
pub struct TapHandler {
    action: Action,
    client: ApiClient,
    host: Arc<dyn IdentityHost>,
    state: DisplayState,
}

impl TapHandler {
    pub fn new(action: Action, client: ApiClient, host: Arc<dyn IdentityHost>, state: DisplayState) -> Self {
        Self {
            action,
            client,
            host,
            state,
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Builds the request body. `field` is the username input; the tap
    /// button has no input of its own and reads the host identity instead.
    pub fn gather(&self, field: &str) -> Result<ClickRequest, ClickError> {
        match self.action {
            Action::Tap => {
                let identity = HostIdentity::probe(self.host.as_ref());
                let init_data = identity.init_data.ok_or(ClickError::MissingInitData)?;
                Ok(ClickRequest::Tap(TapRequest {
                    init_data,
                    platform: identity.platform,
                }))
            }
            Action::Mine => {
                if field.is_empty() {
                    return Err(ClickError::MissingUsername);
                }
                Ok(ClickRequest::Mine(MineRequest {
                    username: field.to_string(),
                }))
            }
        }
    }

    pub async fn click(&self, field: &str) -> Result<ClickSuccess, ClickError> {
        let result = match self.gather(field) {
            Ok(payload) => {
                info!(action = %self.action, "click sent");
                self.client.click(self.action, &payload).await
            }
            Err(err) => Err(err),
        };

        self.render(&result).await;
        result
    }

    /// Re-reads the points total for the host's Telegram user.
    pub async fn refresh_balance(&self) -> Result<ClickSuccess, ClickError> {
        let identity = HostIdentity::probe(self.host.as_ref());
        let result = match identity.telegram_id() {
            Some(telegram_id) => self.client.balance(telegram_id).await,
            None => Err(ClickError::MissingInitData),
        };

        self.render(&result).await;
        result
    }

    async fn render(&self, result: &Result<ClickSuccess, ClickError>) {
        let mut display = self.state.display.lock().await;
        match result {
            Ok(success) => {
                info!(action = %self.action, ?success, "click resolved");
                display.apply_success(success);
            }
            Err(err) => {
                match err {
                    ClickError::Network(source) => error!(action = %self.action, "request failed: {source}"),
                    ClickError::Decode(source) => error!(action = %self.action, "bad response body: {source}"),
                    other if other.is_local() => info!(action = %self.action, "{other}"),
                    other => warn!(action = %self.action, "click rejected: {other}"),
                }
                display.apply_error(err);
            }
        }
    }
}
