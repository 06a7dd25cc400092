use serde::Deserialize;

const GENERIC_API_ERROR: &str = "model provider request failed";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// No api_key was given and the environment variable is unset. Raised before any call.
    #[error("Failed to load api_key from parameter or {env_var}")]
    MissingApiKey { env_var: String },
    /// A configured value cannot be used to build the request.
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    /// Underlying error from reqwest library after an API call was made
    #[error("http error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// API returned a non-success status. `message` is taken from the error envelope
    /// when there is one.
    #[error("api error {status}: {message}")]
    ApiError {
        status: u16,
        message: String,
        raw_body: String,
    },
    /// Error when a request cannot be serialized
    #[error("failed to serialize api request: {0}")]
    JSONSerialize(serde_json::Error),
}

/// Wrapper to deserialize the error object nested in "error" JSON key
#[derive(Debug, Deserialize)]
pub(crate) struct WrappedError {
    pub(crate) error: ErrorBody,
}

/// Providers send either a full error object or a bare string under "error".
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorBody {
    Detailed(ApiError),
    Message(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiError {
    pub message: String,
    pub r#type: Option<String>,
    pub param: Option<String>,
    pub code: Option<serde_json::Value>,
}

/// Build [`ClientError::ApiError`] from a non-success response. The body may or may not be JSON.
pub(crate) fn map_api_error(status: u16, bytes: &[u8]) -> ClientError {
    let raw_body = String::from_utf8_lossy(bytes).into_owned();
    let message = match serde_json::from_slice::<WrappedError>(bytes) {
        Ok(WrappedError {
            error: ErrorBody::Detailed(api_error),
        }) => {
            tracing::debug!(?api_error);
            api_error.message
        }
        Ok(WrappedError {
            error: ErrorBody::Message(message),
        }) => message,
        Err(e) => {
            tracing::debug!("error body is not a provider envelope: {e}");
            GENERIC_API_ERROR.to_string()
        }
    };
    ClientError::ApiError {
        status,
        message,
        raw_body,
    }
}

pub(crate) fn map_serialization_error(e: serde_json::Error) -> ClientError {
    tracing::error!("failed serialization: {}", e);
    ClientError::JSONSerialize(e)
}
