use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::fallback::fallback_daily;
use crate::models::{ProviderKind, ProviderRecord, RecordStatus, UsagePoint, UsageWindows};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// What an adapter managed to pull out of its upstream on one poll.
#[derive(Debug, Default)]
pub(crate) struct FetchedUsage {
    pub balance: f64,
    pub monthly_total: f64,
    /// Real per-day breakdown, when the upstream supplied one.
    pub daily: Option<Vec<UsagePoint>>,
    pub windows: UsageWindows,
}

/// Adapter-internal result. Every fetch resolves to one of these; nothing
/// escapes an adapter as an error.
#[derive(Debug)]
pub(crate) enum FetchOutcome {
    Data(FetchedUsage),
    /// A credential or endpoint is unset. Expected, no network attempted.
    ConfigMissing(String),
    /// Credential present but no endpoint yielded usable data.
    UpstreamFailed(String),
}

#[async_trait]
pub trait ProviderService: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Produce this provider's record for the current poll. Must always
    /// resolve; failures are folded into the record's status and message.
    async fn fetch(&self, config: &DashboardConfig, today: NaiveDate) -> ProviderRecord;
}

/// Fold an adapter outcome into the uniform record shape.
pub(crate) fn assemble(kind: ProviderKind, outcome: FetchOutcome, today: NaiveDate) -> ProviderRecord {
    let label = kind.label().to_string();
    match outcome {
        FetchOutcome::Data(data) => {
            let (daily, message) = match data.daily {
                Some(series) => (
                    series,
                    format!("Live usage data retrieved from {}.", kind.label()),
                ),
                None => (
                    fallback_daily(kind.seed(), today),
                    format!(
                        "{} totals are live; the daily breakdown is placeholder data.",
                        kind.label()
                    ),
                ),
            };
            ProviderRecord {
                provider: kind,
                label,
                currency: "USD".to_string(),
                balance: data.balance,
                monthly_total: data.monthly_total,
                daily,
                usage_windows: data.windows,
                status: RecordStatus::Ok,
                message: Some(message),
            }
        }
        FetchOutcome::ConfigMissing(reason) => ProviderRecord {
            provider: kind,
            label,
            currency: "USD".to_string(),
            balance: 0.0,
            monthly_total: 0.0,
            daily: fallback_daily(kind.seed(), today),
            usage_windows: UsageWindows::default(),
            status: RecordStatus::Warning,
            message: Some(reason),
        },
        FetchOutcome::UpstreamFailed(detail) => ProviderRecord {
            provider: kind,
            label,
            currency: "USD".to_string(),
            balance: 0.0,
            monthly_total: 0.0,
            daily: fallback_daily(kind.seed(), today),
            usage_windows: UsageWindows::default(),
            status: RecordStatus::Error,
            message: Some(format!("{} usage lookup failed: {}", kind.label(), detail)),
        },
    }
}
