use std::{env, fmt, str::FromStr};

pub const DEFAULT_ORIGIN: &str = "https://tap-to-earn-18kw.onrender.com";

/// Which button this session drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Tap,
    Mine,
}

impl Action {
    pub fn endpoint(self) -> &'static str {
        match self {
            Action::Tap => "tap",
            Action::Mine => "mine",
        }
    }

    pub fn default_api_base(self) -> String {
        match self {
            Action::Tap => format!("{DEFAULT_ORIGIN}/api"),
            Action::Mine => DEFAULT_ORIGIN.to_string(),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TAP_ACTION must be 'tap' or 'mine', got '{}'", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tap" => Ok(Action::Tap),
            "mine" => Ok(Action::Mine),
            _ => Err(UnknownAction(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub action: Action,
    pub api_base: String,
}

impl Config {
    pub fn new(action: Action, api_base: impl Into<String>) -> Self {
        Self {
            action,
            api_base: normalize_base(&api_base.into()),
        }
    }

    pub fn resolve() -> Result<Self, UnknownAction> {
        Self::resolve_from(env::var("TAP_ACTION").ok(), env::var("TAP_API_BASE").ok())
    }

    pub fn resolve_from(action: Option<String>, api_base: Option<String>) -> Result<Self, UnknownAction> {
        let action = match action {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => Action::Tap,
        };
        let api_base = api_base
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| action.default_api_base());

        Ok(Self::new(action, api_base))
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.api_base, endpoint)
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}
