use serde::{Deserialize, Serialize};

/// Closed set of upstream billing accounts the dashboard watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Google,
    Groq,
    Kimi,
}

impl ProviderKind {
    /// Fixed aggregation order. Every snapshot carries exactly one record
    /// per entry, in this order.
    pub const ALL: [ProviderKind; 5] = [
        ProviderKind::OpenAi,
        ProviderKind::Anthropic,
        ProviderKind::Google,
        ProviderKind::Groq,
        ProviderKind::Kimi,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OpenAI",
            ProviderKind::Anthropic => "Anthropic",
            ProviderKind::Google => "Google AI Studio",
            ProviderKind::Groq => "Groq",
            ProviderKind::Kimi => "Kimi",
        }
    }

    /// Seed for the placeholder daily series. Distinct per provider so the
    /// fallback charts are visually distinguishable.
    pub fn seed(&self) -> u32 {
        match self {
            ProviderKind::OpenAi => 1,
            ProviderKind::Anthropic => 2,
            ProviderKind::Google => 3,
            ProviderKind::Groq => 4,
            ProviderKind::Kimi => 5,
        }
    }

    /// Environment variable holding this provider's credential.
    pub fn credential_var(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "OPENAI_API_KEY",
            ProviderKind::Anthropic => "ANTHROPIC_API_KEY",
            ProviderKind::Google => "GOOGLE_AI_STUDIO_API_KEY",
            ProviderKind::Groq => "GROQ_API_KEY",
            ProviderKind::Kimi => "KIMI_API_KEY",
        }
    }
}

/// One day's spend, oldest-first inside a 30-element series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsagePoint {
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Ok,
    Warning,
    Error,
}

/// Rolling-window totals reported verbatim by an upstream. Fields are
/// omitted from the payload when the upstream did not supply them; they
/// are never synthesized or defaulted to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageWindows {
    #[serde(rename = "last5Hours", skip_serializing_if = "Option::is_none")]
    pub last_5h: Option<f64>,
    #[serde(rename = "last7Days", skip_serializing_if = "Option::is_none")]
    pub last_7d: Option<f64>,
    #[serde(rename = "last30Days", skip_serializing_if = "Option::is_none")]
    pub last_30d: Option<f64>,
}

impl UsageWindows {
    pub fn is_empty(&self) -> bool {
        self.last_5h.is_none() && self.last_7d.is_none() && self.last_30d.is_none()
    }
}

/// The unit of aggregation: one provider's state for the current poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    pub provider: ProviderKind,
    pub label: String,
    pub currency: String,
    pub balance: f64,
    pub monthly_total: f64,
    pub daily: Vec<UsagePoint>,
    pub usage_windows: UsageWindows,
    pub status: RecordStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One full aggregation cycle across all providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageSnapshot {
    pub updated_at: String,
    pub providers: Vec<ProviderRecord>,
}
