use async_trait::async_trait;
use chrono::NaiveDate;
use log::error;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{DashboardConfig, GenericEndpoints};
use crate::fallback::{round2, SERIES_DAYS};
use crate::models::{ProviderKind, ProviderRecord, UsagePoint, UsageWindows};
use crate::provider::{assemble, FetchOutcome, FetchedUsage, ProviderService};
use crate::providers::send_json;

/// Adapter for providers without a published billing API (Google AI
/// Studio, Groq, Kimi). The usage and balance endpoints come from the
/// environment, so one adapter body serves all three accounts.
pub struct GenericProvider {
    kind: ProviderKind,
    client: Client,
}

impl GenericProvider {
    pub fn new(kind: ProviderKind, client: Client) -> Self {
        debug_assert!(matches!(
            kind,
            ProviderKind::Google | ProviderKind::Groq | ProviderKind::Kimi
        ));
        Self { kind, client }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenericUsageResponse {
    monthly_total: Option<f64>,
    daily: Option<Vec<UsagePoint>>,
    windows: Option<GenericWindows>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenericWindows {
    last5_hours: Option<f64>,
    last7_days: Option<f64>,
    last30_days: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct GenericBalanceResponse {
    balance: Option<f64>,
}

fn summarize(
    usage: Option<GenericUsageResponse>,
    balance: Option<GenericBalanceResponse>,
) -> FetchedUsage {
    let windows = usage
        .as_ref()
        .and_then(|u| u.windows.as_ref())
        .map(|w| UsageWindows {
            last_5h: w.last5_hours,
            last_7d: w.last7_days,
            last_30d: w.last30_days,
        })
        .unwrap_or_default();
    let daily = usage
        .as_ref()
        .and_then(|u| u.daily.clone())
        .filter(|series| series.len() == SERIES_DAYS);
    FetchedUsage {
        balance: round2(balance.and_then(|b| b.balance).unwrap_or(0.0)),
        monthly_total: round2(usage.and_then(|u| u.monthly_total).unwrap_or(0.0)),
        daily,
        windows,
    }
}

impl GenericProvider {
    async fn poll(&self, api_key: &str, endpoints: &GenericEndpoints) -> FetchOutcome {
        let usage_request = endpoints
            .usage_url
            .as_deref()
            .map(|url| send_json::<GenericUsageResponse>(self.client.get(url).bearer_auth(api_key)));
        let balance_request = endpoints.balance_url.as_deref().map(|url| {
            send_json::<GenericBalanceResponse>(self.client.get(url).bearer_auth(api_key))
        });

        let (usage, balance) = tokio::join!(
            async {
                match usage_request {
                    Some(request) => request.await,
                    None => Ok(None),
                }
            },
            async {
                match balance_request {
                    Some(request) => request.await,
                    None => Ok(None),
                }
            },
        );

        let (usage, balance) = match (usage, balance) {
            (Ok(usage), Ok(balance)) => (usage, balance),
            (Err(err), _) | (_, Err(err)) => {
                error!("{} request failed: {}", self.kind.label(), err);
                return FetchOutcome::UpstreamFailed(err.to_string());
            }
        };

        if usage.is_none() && balance.is_none() {
            return FetchOutcome::UpstreamFailed(
                "no endpoint returned usable data".to_string(),
            );
        }

        FetchOutcome::Data(summarize(usage, balance))
    }
}

#[async_trait]
impl ProviderService for GenericProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn fetch(&self, config: &DashboardConfig, today: NaiveDate) -> ProviderRecord {
        let endpoints = match config.generic(self.kind) {
            Some(endpoints) => endpoints,
            None => {
                // new() guards against this pairing.
                return assemble(
                    self.kind,
                    FetchOutcome::ConfigMissing(format!(
                        "{} has no endpoint configuration.",
                        self.kind.label()
                    )),
                    today,
                );
            }
        };

        let outcome = match endpoints.api_key.as_deref() {
            None => FetchOutcome::ConfigMissing(format!(
                "{} is not set.",
                self.kind.credential_var()
            )),
            Some(_) if endpoints.usage_url.is_none() && endpoints.balance_url.is_none() => {
                FetchOutcome::ConfigMissing(format!(
                    "No usage or balance endpoint configured for {}.",
                    self.kind.label()
                ))
            }
            Some(api_key) => self.poll(api_key, endpoints).await,
        };
        assemble(self.kind, outcome, today)
    }
}
