use std::env;

pub const UNKNOWN_PLATFORM: &str = "unknown";

/// Identity the embedding host (a Telegram Mini App) hands to the page.
///
/// Both accessors are probes: an absent host, or a host without the field,
/// yields `None` rather than an error.
pub trait IdentityHost: Send + Sync {
    fn init_data(&self) -> Option<String>;
    fn platform(&self) -> Option<String>;
}

/// A host snapshot taken at click time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub init_data: Option<String>,
    pub platform: String,
}

impl HostIdentity {
    pub fn probe(host: &dyn IdentityHost) -> Self {
        Self {
            init_data: host.init_data().filter(|value| !value.is_empty()),
            platform: host
                .platform()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| UNKNOWN_PLATFORM.to_string()),
        }
    }

    /// The `user.id` pair of the init token, which the backend keys balances by.
    pub fn telegram_id(&self) -> Option<&str> {
        self.init_data.as_deref().and_then(telegram_id_from_init_data)
    }
}

pub fn telegram_id_from_init_data(init_data: &str) -> Option<&str> {
    init_data
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "user.id")
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}

/// Reads the host identity from `TELEGRAM_INIT_DATA` / `TELEGRAM_PLATFORM`
/// on every probe.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvHost;

impl IdentityHost for EnvHost {
    fn init_data(&self) -> Option<String> {
        env::var("TELEGRAM_INIT_DATA").ok()
    }

    fn platform(&self) -> Option<String> {
        env::var("TELEGRAM_PLATFORM").ok()
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticHost {
    pub init_data: Option<String>,
    pub platform: Option<String>,
}

impl StaticHost {
    pub fn new(init_data: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            init_data: Some(init_data.into()),
            platform: Some(platform.into()),
        }
    }

    pub fn absent() -> Self {
        Self::default()
    }
}

impl IdentityHost for StaticHost {
    fn init_data(&self) -> Option<String> {
        self.init_data.clone()
    }

    fn platform(&self) -> Option<String> {
        self.platform.clone()
    }
}
