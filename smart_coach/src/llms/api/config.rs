use super::error::ClientError;
use reqwest::header::HeaderMap;
use secrecy::Secret;

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Scheme, host and version prefix, e.g. `https://api.deepseek.com/v1`.
    pub base_url: String,
    pub completion_path: String,
    pub api_key: Option<Secret<String>>,
    pub api_key_env_var: String,
    /// Explicit model id. Takes priority over `model_env_var`.
    pub model: Option<String>,
    pub model_env_var: String,
    pub default_model: String,
    /// Whole-request timeout. `None` leaves reqwest's default, which never times out.
    pub timeout: Option<std::time::Duration>,
}

impl ApiConfig {
    /// Resolve the credential for one call: the explicit value, else the process
    /// environment, else `.env`. Not cached, so a key set after startup is picked up on the
    /// next call.
    pub(crate) fn load_api_key(&self) -> crate::Result<Secret<String>, ClientError> {
        if let Some(api_key) = self.api_key.as_ref() {
            crate::trace!("Using api_key from parameter");
            return Ok(api_key.to_owned());
        }
        crate::trace!("api_key not set. Attempting to load from env or .env");

        match env_var(&self.api_key_env_var) {
            Some(api_key) if !api_key.trim().is_empty() => {
                crate::trace!("Successfully loaded api_key from env");
                Ok(Secret::new(api_key))
            }
            _ => {
                crate::trace!(
                    "{} not found in dotenv, nor was it set manually",
                    self.api_key_env_var
                );
                Err(ClientError::MissingApiKey {
                    env_var: self.api_key_env_var.clone(),
                })
            }
        }
    }

    /// Resolve the model id for one call: explicit, then environment override, then default.
    pub fn load_model(&self) -> String {
        if let Some(model) = &self.model {
            return model.to_owned();
        }
        match env_var(&self.model_env_var) {
            Some(model) if !model.trim().is_empty() => model.trim().to_string(),
            _ => self.default_model.clone(),
        }
    }

    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.completion_path.trim_start_matches('/')
        )
    }
}

pub trait LlmApiConfigTrait {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig;

    fn api_config(&self) -> &ApiConfig;

    fn with_base_url<S: AsRef<str>>(mut self, base_url: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().base_url = base_url.as_ref().to_string();
        self
    }

    fn with_completion_path<S: AsRef<str>>(mut self, path: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().completion_path = path.as_ref().to_string();
        self
    }

    fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().api_key = Some(Secret::from(api_key.into()));
        self
    }

    /// Set the environment variable name for the API key. Default is `DEEPSEEK_API_KEY`.
    fn with_api_key_env_var<S: Into<String>>(mut self, api_key_env_var: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().api_key_env_var = api_key_env_var.into();
        self
    }

    fn with_model<S: Into<String>>(mut self, model: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().model = Some(model.into());
        self
    }

    /// Set the environment variable name for the model override. Default is `DEEPSEEK_MODEL`.
    fn with_model_env_var<S: Into<String>>(mut self, model_env_var: S) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().model_env_var = model_env_var.into();
        self
    }

    fn with_timeout(mut self, timeout: std::time::Duration) -> Self
    where
        Self: Sized,
    {
        self.api_base_config_mut().timeout = Some(timeout);
        self
    }
}

/// Read `name` from the process environment, falling back to a `.env` file.
///
/// The `.env` file is only read, never applied with `set_var`.
fn env_var(name: &str) -> Option<String> {
    if let Ok(value) = std::env::var(name) {
        return Some(value);
    }
    let entries = dotenvy::dotenv_iter().ok()?;
    find_entry(entries, name)
}

fn find_entry<I>(entries: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = dotenvy::Result<(String, String)>>,
{
    entries
        .into_iter()
        .filter_map(Result::ok)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

pub(crate) trait ApiConfigTrait {
    fn headers(&self, api_key: &Secret<String>) -> crate::Result<HeaderMap, ClientError>;

    fn api_config(&self) -> &ApiConfig;
}
