use async_trait::async_trait;
use chrono::{Datelike, Duration, NaiveDate};
use log::error;
use reqwest::Client;
use serde::Deserialize;

use crate::config::DashboardConfig;
use crate::fallback::round2;
use crate::models::{ProviderKind, ProviderRecord};
use crate::provider::{assemble, FetchOutcome, FetchedUsage, ProviderService};
use crate::providers::send_json;

pub struct OpenAiProvider {
    client: Client,
}

impl OpenAiProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SubscriptionResponse {
    hard_limit_usd: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct BillingUsageResponse {
    /// Month-to-date spend in cents.
    total_usage: Option<f64>,
}

/// Reduce the two billing responses to (balance, monthly total), both in
/// dollars rounded to cents. `total_usage` arrives cents-denominated;
/// balance is whatever headroom remains under the hard limit.
fn summarize(
    subscription: Option<&SubscriptionResponse>,
    usage: Option<&BillingUsageResponse>,
) -> (f64, f64) {
    let monthly_total = round2(usage.and_then(|u| u.total_usage).unwrap_or(0.0) / 100.0);
    let hard_limit = subscription.and_then(|s| s.hard_limit_usd).unwrap_or(0.0);
    (round2(hard_limit - monthly_total), monthly_total)
}

fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let next_month = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let end = next_month
        .map(|d| d - Duration::days(1))
        .unwrap_or(today);
    (start, end)
}

impl OpenAiProvider {
    async fn poll(&self, api_key: &str, base_url: &str, today: NaiveDate) -> FetchOutcome {
        let (start, end) = month_bounds(today);
        let subscription_url = format!("{}/v1/dashboard/billing/subscription", base_url);
        let usage_url = format!(
            "{}/v1/dashboard/billing/usage?start_date={}&end_date={}",
            base_url,
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
        );

        let (subscription, usage) = tokio::join!(
            send_json::<SubscriptionResponse>(self.client.get(&subscription_url).bearer_auth(api_key)),
            send_json::<BillingUsageResponse>(self.client.get(&usage_url).bearer_auth(api_key)),
        );

        let (subscription, usage) = match (subscription, usage) {
            (Ok(subscription), Ok(usage)) => (subscription, usage),
            (Err(err), _) | (_, Err(err)) => {
                error!("OpenAI billing request failed: {}", err);
                return FetchOutcome::UpstreamFailed(err.to_string());
            }
        };

        if subscription.is_none() && usage.is_none() {
            return FetchOutcome::UpstreamFailed(
                "both billing endpoints returned non-success".to_string(),
            );
        }

        let (balance, monthly_total) = summarize(subscription.as_ref(), usage.as_ref());
        FetchOutcome::Data(FetchedUsage {
            balance,
            monthly_total,
            // The billing endpoints carry no per-day breakdown.
            daily: None,
            windows: Default::default(),
        })
    }
}

#[async_trait]
impl ProviderService for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn fetch(&self, config: &DashboardConfig, today: NaiveDate) -> ProviderRecord {
        let outcome = match config.openai_api_key.as_deref() {
            None => FetchOutcome::ConfigMissing(format!(
                "{} is not set.",
                self.kind().credential_var()
            )),
            Some(api_key) => self.poll(api_key, &config.openai_base_url, today).await,
        };
        assemble(self.kind(), outcome, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_converts_cents_and_derives_balance() {
        let subscription = SubscriptionResponse {
            hard_limit_usd: Some(100.0),
        };
        let usage = BillingUsageResponse {
            total_usage: Some(2500.0),
        };
        let (balance, monthly_total) = summarize(Some(&subscription), Some(&usage));
        assert_eq!(monthly_total, 25.0);
        assert_eq!(balance, 75.0);
    }

    #[test]
    fn summarize_defaults_missing_fields_to_zero() {
        let (balance, monthly_total) = summarize(None, None);
        assert_eq!(balance, 0.0);
        assert_eq!(monthly_total, 0.0);

        let usage = BillingUsageResponse {
            total_usage: Some(1234.0),
        };
        let (balance, monthly_total) = summarize(None, Some(&usage));
        assert_eq!(monthly_total, 12.34);
        assert_eq!(balance, -12.34);
    }

    #[test]
    fn subscription_parse_tolerates_extra_fields() {
        let body = r#"{"object":"billing_subscription","hard_limit_usd":120.5,"plan":{"id":"payg"}}"#;
        let parsed: SubscriptionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.hard_limit_usd, Some(120.5));
    }

    #[test]
    fn month_bounds_cover_the_calendar_month() {
        let (start, end) = month_bounds(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        assert_eq!(start, NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        let (start, end) = month_bounds(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }
}
