use chrono::{SecondsFormat, Utc};
use futures_util::future::join_all;
use log::debug;
use reqwest::Client;

use crate::config::DashboardConfig;
use crate::models::{ProviderKind, UsageSnapshot};
use crate::provider::ProviderService;
use crate::providers::{AnthropicProvider, GenericProvider, OpenAiProvider};

/// Runs every adapter concurrently and joins the results into one
/// timestamped snapshot. Adapters always resolve to a record, so the
/// join itself cannot fail.
pub struct ProviderManager {
    providers: Vec<Box<dyn ProviderService>>,
}

impl ProviderManager {
    pub fn new(client: Client) -> Self {
        Self::with_providers(vec![
            Box::new(OpenAiProvider::new(client.clone())),
            Box::new(AnthropicProvider::new(client.clone())),
            Box::new(GenericProvider::new(ProviderKind::Google, client.clone())),
            Box::new(GenericProvider::new(ProviderKind::Groq, client.clone())),
            Box::new(GenericProvider::new(ProviderKind::Kimi, client)),
        ])
    }

    /// Custom adapter set, primarily for tests.
    pub fn with_providers(providers: Vec<Box<dyn ProviderService>>) -> Self {
        Self { providers }
    }

    pub async fn snapshot(&self, config: &DashboardConfig) -> UsageSnapshot {
        let now = Utc::now();
        let today = now.date_naive();
        debug!("polling {} providers", self.providers.len());

        let records = join_all(
            self.providers
                .iter()
                .map(|provider| provider.fetch(config, today)),
        )
        .await;

        UsageSnapshot {
            updated_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            providers: records,
        }
    }
}
