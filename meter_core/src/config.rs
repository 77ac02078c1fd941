use crate::models::ProviderKind;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";

/// Credential plus optional endpoint URLs for one of the generic
/// adapters. Absence of any of these is a supported configuration state,
/// not a startup failure.
#[derive(Debug, Clone, Default)]
pub struct GenericEndpoints {
    pub api_key: Option<String>,
    pub usage_url: Option<String>,
    pub balance_url: Option<String>,
}

impl GenericEndpoints {
    fn from_env(key_var: &str, usage_var: &str, balance_var: &str) -> Self {
        Self {
            api_key: env_non_empty(key_var),
            usage_url: env_non_empty(usage_var),
            balance_url: env_non_empty(balance_var),
        }
    }
}

/// Everything the adapters read, captured once at process start and
/// passed by reference into each fetch. Adapters never touch the process
/// environment themselves.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub openai_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub google: GenericEndpoints,
    pub groq: GenericEndpoints,
    pub kimi: GenericEndpoints,
    /// Overridable so fixtures can stand in for the live services.
    pub openai_base_url: String,
    pub anthropic_base_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            anthropic_api_key: None,
            google: GenericEndpoints::default(),
            groq: GenericEndpoints::default(),
            kimi: GenericEndpoints::default(),
            openai_base_url: OPENAI_BASE_URL.to_string(),
            anthropic_base_url: ANTHROPIC_BASE_URL.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env_non_empty(ProviderKind::OpenAi.credential_var()),
            anthropic_api_key: env_non_empty(ProviderKind::Anthropic.credential_var()),
            google: GenericEndpoints::from_env(
                ProviderKind::Google.credential_var(),
                "GOOGLE_USAGE_ENDPOINT",
                "GOOGLE_BALANCE_ENDPOINT",
            ),
            groq: GenericEndpoints::from_env(
                ProviderKind::Groq.credential_var(),
                "GROQ_USAGE_ENDPOINT",
                "GROQ_BALANCE_ENDPOINT",
            ),
            kimi: GenericEndpoints::from_env(
                ProviderKind::Kimi.credential_var(),
                "KIMI_USAGE_ENDPOINT",
                "KIMI_BALANCE_ENDPOINT",
            ),
            openai_base_url: env_non_empty("OPENAI_BASE_URL")
                .unwrap_or_else(|| OPENAI_BASE_URL.to_string()),
            anthropic_base_url: env_non_empty("ANTHROPIC_BASE_URL")
                .unwrap_or_else(|| ANTHROPIC_BASE_URL.to_string()),
        }
    }

    pub fn generic(&self, kind: ProviderKind) -> Option<&GenericEndpoints> {
        match kind {
            ProviderKind::Google => Some(&self.google),
            ProviderKind::Groq => Some(&self.groq),
            ProviderKind::Kimi => Some(&self.kimi),
            _ => None,
        }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
