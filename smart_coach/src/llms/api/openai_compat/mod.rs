pub mod builder;
pub mod completion;

use super::{
    client::{ApiClient, RawProviderResponse},
    config::{ApiConfig, ApiConfigTrait},
    error::ClientError,
};
use crate::{logging::LoggingConfig, requests::RequestConfig};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, Secret};

pub use completion::*;

/// Default v1 API base url
pub const DEEPSEEK_API_BASE_URL: &str = "https://api.deepseek.com/v1";
pub const DEEPSEEK_API_KEY_ENV_VAR: &str = "DEEPSEEK_API_KEY";
pub const DEEPSEEK_MODEL_ENV_VAR: &str = "DEEPSEEK_MODEL";
pub const DEEPSEEK_DEFAULT_MODEL: &str = "deepseek-chat";

pub struct OpenAiCompatBackend {
    pub(crate) client: ApiClient<OpenAiCompatConfig>,
}

impl OpenAiCompatBackend {
    pub fn new(config: OpenAiCompatConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    pub fn config(&self) -> &OpenAiCompatConfig {
        &self.client.config
    }

    pub(crate) async fn completion_request(
        &self,
        request: &ProviderRequest,
    ) -> crate::Result<RawProviderResponse, ClientError> {
        self.client.post(request).await
    }
}

#[derive(Clone, Debug)]
pub struct OpenAiCompatConfig {
    pub api_config: ApiConfig,
    pub logging_config: LoggingConfig,
    pub request_config: RequestConfig,
}

impl Default for OpenAiCompatConfig {
    fn default() -> Self {
        Self {
            api_config: ApiConfig {
                base_url: DEEPSEEK_API_BASE_URL.to_string(),
                completion_path: "/chat/completions".to_string(),
                api_key: None,
                api_key_env_var: DEEPSEEK_API_KEY_ENV_VAR.to_string(),
                model: None,
                model_env_var: DEEPSEEK_MODEL_ENV_VAR.to_string(),
                default_model: DEEPSEEK_DEFAULT_MODEL.to_string(),
                timeout: None,
            },
            logging_config: LoggingConfig {
                logger_name: "smart_coach".to_string(),
                ..Default::default()
            },
            request_config: RequestConfig::default(),
        }
    }
}

impl OpenAiCompatConfig {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ApiConfigTrait for OpenAiCompatConfig {
    fn headers(&self, api_key: &Secret<String>) -> crate::Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::new();
        let mut header_value = HeaderValue::from_str(&format!("Bearer {}", api_key.expose_secret()))
            .map_err(|_| {
                crate::error!("Failed to create header value from authorization value");
                ClientError::InvalidConfig {
                    field: "api_key",
                    reason: "contains characters not allowed in an HTTP header".to_string(),
                }
            })?;
        header_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, header_value);
        Ok(headers)
    }

    fn api_config(&self) -> &ApiConfig {
        &self.api_config
    }
}
