use async_trait::async_trait;
use chrono::NaiveDate;
use log::error;
use reqwest::Client;
use serde::Deserialize;

use crate::config::DashboardConfig;
use crate::fallback::{round2, SERIES_DAYS};
use crate::models::{ProviderKind, ProviderRecord, UsagePoint, UsageWindows};
use crate::provider::{assemble, FetchOutcome, FetchedUsage, ProviderService};
use crate::providers::send_json;

const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
}

impl AnthropicProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct OrgUsageResponse {
    remaining_balance_usd: Option<f64>,
    month_total_usd: Option<f64>,
    daily: Option<Vec<UsagePoint>>,
    usage_windows: Option<OrgUsageWindows>,
}

#[derive(Debug, Deserialize)]
struct OrgUsageWindows {
    five_hour_usd: Option<f64>,
    seven_day_usd: Option<f64>,
    thirty_day_usd: Option<f64>,
}

fn summarize(usage: OrgUsageResponse) -> FetchedUsage {
    let windows = usage
        .usage_windows
        .map(|w| UsageWindows {
            last_5h: w.five_hour_usd,
            last_7d: w.seven_day_usd,
            last_30d: w.thirty_day_usd,
        })
        .unwrap_or_default();
    // A daily series is only trusted when it is the full 30-day window.
    let daily = usage.daily.filter(|series| series.len() == SERIES_DAYS);
    FetchedUsage {
        balance: round2(usage.remaining_balance_usd.unwrap_or(0.0)),
        monthly_total: round2(usage.month_total_usd.unwrap_or(0.0)),
        daily,
        windows,
    }
}

impl AnthropicProvider {
    async fn poll(&self, api_key: &str, base_url: &str) -> FetchOutcome {
        let url = format!("{}/v1/organizations/usage", base_url);
        let request = self
            .client
            .get(&url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION);

        match send_json::<OrgUsageResponse>(request).await {
            Ok(Some(usage)) => FetchOutcome::Data(summarize(usage)),
            Ok(None) => {
                FetchOutcome::UpstreamFailed("usage endpoint returned non-success".to_string())
            }
            Err(err) => {
                error!("Anthropic usage request failed: {}", err);
                FetchOutcome::UpstreamFailed(err.to_string())
            }
        }
    }
}

#[async_trait]
impl ProviderService for AnthropicProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    async fn fetch(&self, config: &DashboardConfig, today: NaiveDate) -> ProviderRecord {
        let outcome = match config.anthropic_api_key.as_deref() {
            None => FetchOutcome::ConfigMissing(format!(
                "{} is not set.",
                self.kind().credential_var()
            )),
            Some(api_key) => self.poll(api_key, &config.anthropic_base_url).await,
        };
        assemble(self.kind(), outcome, today)
    }
}
