pub mod app;
pub mod client;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod identity;
pub mod models;
pub mod state;
pub mod ui;

pub use app::run;
pub use client::ApiClient;
pub use config::{Action, Config};
pub use handlers::TapHandler;
pub use state::DisplayState;
