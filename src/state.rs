use crate::errors::ClickError;
use crate::models::{display_number, ClickSuccess};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Text of each display element. Every click overwrites what it touches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Display {
    pub points: String,
    pub status: String,
    pub balance: String,
    pub alert: Option<String>,
}

impl Display {
    pub fn apply_success(&mut self, success: &ClickSuccess) {
        match success {
            ClickSuccess::Points(points) => {
                self.points = display_number(points);
                self.status.clear();
            }
            ClickSuccess::Mined { message, new_balance } => {
                self.status = message.clone();
                self.balance = format!("Balance: {}", display_number(new_balance));
            }
        }
    }

    pub fn apply_error(&mut self, err: &ClickError) {
        match err {
            ClickError::MissingUsername => self.alert = Some(err.to_string()),
            _ => self.status = err.to_string(),
        }
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }
}

#[derive(Clone, Default)]
pub struct DisplayState {
    pub display: Arc<Mutex<Display>>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Display {
        self.display.lock().await.clone()
    }
}
