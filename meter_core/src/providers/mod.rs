mod anthropic;
mod generic;
mod openai;

pub use anthropic::AnthropicProvider;
pub use generic::GenericProvider;
pub use openai::OpenAiProvider;

use log::warn;
use serde::de::DeserializeOwned;

use crate::provider::ProviderError;

/// Issue a prepared request and parse its JSON body.
///
/// Transport failures and malformed bodies propagate as errors; a
/// non-success status degrades to `None` so the caller can fall back for
/// that one field without aborting the whole adapter.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<Option<T>, ProviderError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!("upstream returned {}", status);
        return Ok(None);
    }
    Ok(Some(response.json::<T>().await?))
}
