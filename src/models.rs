use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TapRequest {
    pub init_data: String,
    pub platform: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MineRequest {
    pub username: String,
}

/// Body of a single click, serialized as-is onto the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ClickRequest {
    Tap(TapRequest),
    Mine(MineRequest),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TapResponse {
    pub points: Number,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MineResponse {
    pub message: String,
    pub new_balance: Number,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    pub points: Number,
}

/// Failure body. Each field is read on its own so a mistyped hint never
/// hides the `error` text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub retry_after_ms: Option<u64>,
}

impl ErrorBody {
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let error = match fields.get("error") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(number)) => Some(display_number(number)),
            Some(Value::Bool(flag)) => Some(flag.to_string()),
            _ => None,
        };

        Some(Self {
            error,
            retry_after_ms: fields.get("retry_after_ms").and_then(Value::as_u64),
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        serde_json::from_slice::<Value>(bytes)
            .ok()
            .as_ref()
            .and_then(Self::from_value)
    }
}

/// Renders a JSON number the way a browser prints it: whole floats lose
/// their trailing `.0`.
pub fn display_number(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.fract() == 0.0 && value.abs() < 1e21 => {
            if value == 0.0 {
                "0".to_string()
            } else {
                format!("{value:.0}")
            }
        }
        _ => number.to_string(),
    }
}

/// Fields a successful click writes into the display.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickSuccess {
    Points(Number),
    Mined { message: String, new_balance: Number },
}

impl From<TapResponse> for ClickSuccess {
    fn from(response: TapResponse) -> Self {
        Self::Points(response.points)
    }
}

impl From<BalanceResponse> for ClickSuccess {
    fn from(response: BalanceResponse) -> Self {
        Self::Points(response.points)
    }
}

impl From<MineResponse> for ClickSuccess {
    fn from(response: MineResponse) -> Self {
        Self::Mined {
            message: response.message,
            new_balance: response.new_balance,
        }
    }
}
