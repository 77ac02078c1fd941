use chrono::NaiveDate;
use meter_core::{
    AnthropicProvider, DashboardConfig, GenericEndpoints, GenericProvider, OpenAiProvider,
    ProviderKind, ProviderService, RecordStatus,
};
use reqwest::Client;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 24).unwrap()
}

#[tokio::test]
async fn openai_warns_when_credential_is_missing() {
    // Arrange
    let provider = OpenAiProvider::new(Client::new());
    let config = DashboardConfig::default();

    // Act
    let record = provider.fetch(&config, today()).await;

    // Assert
    assert_eq!(record.provider, ProviderKind::OpenAi);
    assert_eq!(record.status, RecordStatus::Warning);
    assert_eq!(record.balance, 0.0);
    assert_eq!(record.monthly_total, 0.0);
    assert_eq!(record.daily.len(), 30);
    assert!(record.message.unwrap().contains("OPENAI_API_KEY"));
}

#[tokio::test]
async fn anthropic_warns_when_credential_is_missing() {
    let provider = AnthropicProvider::new(Client::new());
    let config = DashboardConfig::default();

    let record = provider.fetch(&config, today()).await;

    assert_eq!(record.provider, ProviderKind::Anthropic);
    assert_eq!(record.status, RecordStatus::Warning);
    assert!(record.message.unwrap().contains("ANTHROPIC_API_KEY"));
}

#[tokio::test]
async fn generic_adapters_warn_when_credential_is_missing() {
    let config = DashboardConfig::default();

    for kind in [ProviderKind::Google, ProviderKind::Groq, ProviderKind::Kimi] {
        let provider = GenericProvider::new(kind, Client::new());
        let record = provider.fetch(&config, today()).await;

        assert_eq!(record.provider, kind);
        assert_eq!(record.status, RecordStatus::Warning);
        assert_eq!(record.balance, 0.0);
        assert!(
            record.message.unwrap().contains(kind.credential_var()),
            "message should name the missing variable for {:?}",
            kind
        );
    }
}

#[tokio::test]
async fn generic_adapter_warns_when_no_endpoint_is_configured() {
    // Credential present, but neither endpoint URL set: a config gap, not
    // an upstream failure, and no network call is attempted.
    let config = DashboardConfig {
        groq: GenericEndpoints {
            api_key: Some("gsk-test".to_string()),
            usage_url: None,
            balance_url: None,
        },
        ..DashboardConfig::default()
    };
    let provider = GenericProvider::new(ProviderKind::Groq, Client::new());

    let record = provider.fetch(&config, today()).await;

    assert_eq!(record.status, RecordStatus::Warning);
    assert!(record.message.unwrap().contains("endpoint"));
}

#[tokio::test]
async fn missing_credential_records_carry_no_usage_windows() {
    let provider = AnthropicProvider::new(Client::new());
    let record = provider.fetch(&DashboardConfig::default(), today()).await;

    assert!(record.usage_windows.is_empty());
    let json = serde_json::to_value(&record).unwrap();
    let windows = json.get("usageWindows").unwrap().as_object().unwrap();
    assert!(windows.is_empty(), "absent windows must be omitted, not zeroed");
}
