pub mod config;
pub mod fallback;
pub mod manager;
pub mod models;
pub mod provider;
pub mod providers;

pub use config::{DashboardConfig, GenericEndpoints};
pub use fallback::{fallback_daily, SERIES_DAYS};
pub use manager::ProviderManager;
pub use models::*;
pub use provider::{ProviderError, ProviderService};
pub use providers::*;

use std::time::Duration;

/// Shared HTTP client for all adapters. The request timeout bounds every
/// poll cycle; there is no retry.
///
/// Builder failure means the TLS backend could not initialize, which is
/// unrecoverable at startup.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("HTTP client")
}
