use crate::config::{Action, Config};
use crate::errors::ClickError;
use crate::models::{BalanceResponse, ClickRequest, ClickSuccess, ErrorBody, MineResponse, TapResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const BALANCE_ENDPOINT: &str = "balance";

/// Talks to the scoring backend. One request per call, no retries.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            config: config.clone(),
        }
    }

    pub async fn click(&self, action: Action, payload: &ClickRequest) -> Result<ClickSuccess, ClickError> {
        let url = self.config.endpoint_url(action.endpoint());
        debug!(%url, "posting click");

        let response = self.http.post(&url).json(payload).send().await?;
        match action {
            Action::Tap => read_json::<TapResponse>(response).await.map(ClickSuccess::from),
            Action::Mine => read_json::<MineResponse>(response).await.map(ClickSuccess::from),
        }
    }

    pub async fn balance(&self, telegram_id: &str) -> Result<ClickSuccess, ClickError> {
        let url = self.config.endpoint_url(BALANCE_ENDPOINT);
        debug!(%url, telegram_id, "fetching balance");

        let response = self
            .http
            .get(&url)
            .query(&[("telegram_id", telegram_id)])
            .send()
            .await?;
        read_json::<BalanceResponse>(response).await.map(ClickSuccess::from)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClickError> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let body = ErrorBody::from_slice(&bytes);
        if let Some(retry_after_ms) = body.as_ref().and_then(|body| body.retry_after_ms) {
            warn!(%status, retry_after_ms, "backend asked to slow down");
        }
        return Err(ClickError::rejected(status, body));
    }

    Ok(serde_json::from_slice(&bytes)?)
}
