use super::extract::ExtractionFailure;
use crate::llms::api::ClientError;

/// Every way [`crate::SmartCoach::get_coaching_response`] can fail.
///
/// `Display` is the human-readable message shown to the end user. None of these are
/// retried inside the crate; the caller decides whether to resubmit.
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    /// A required input was empty after trimming. Raised before any network call.
    #[error("{field} is required and cannot be blank")]
    Validation { field: &'static str },
    /// No credential was configured. Raised before any network call.
    #[error("configuration error: {reason}")]
    Configuration { reason: String },
    /// DNS, connection, TLS, timeout or body read failure.
    #[error("could not reach the model provider: {0}")]
    Transport(#[source] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("model provider returned {status_code}: {provider_message}")]
    Upstream {
        status_code: u16,
        provider_message: String,
        raw_body: String,
    },
    /// The provider answered, but the content is not a valid coaching result.
    #[error(transparent)]
    Extraction(#[from] ExtractionFailure),
    /// The request could not be encoded, or the client could not be set up.
    #[error("internal error: {0}")]
    Internal(String),
}

impl CoachError {
    /// The provider text behind the failure: the model output for `Extraction`, the
    /// response body for `Upstream`.
    pub fn raw_text(&self) -> Option<&str> {
        match self {
            CoachError::Extraction(failure) => Some(&failure.raw_text),
            CoachError::Upstream { raw_body, .. } => Some(raw_body),
            _ => None,
        }
    }

    /// True for failures raised before any network call was attempted.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            CoachError::Validation { .. } | CoachError::Configuration { .. }
        )
    }
}

impl From<ClientError> for CoachError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::MissingApiKey { env_var } => CoachError::Configuration {
                reason: format!("no API key was set and {env_var} is not in the environment"),
            },
            ClientError::InvalidConfig { field, reason } => CoachError::Configuration {
                reason: format!("invalid {field}: {reason}"),
            },
            ClientError::Reqwest(e) => CoachError::Transport(e),
            ClientError::ApiError {
                status,
                message,
                raw_body,
            } => CoachError::Upstream {
                status_code: status,
                provider_message: message,
                raw_body,
            },
            ClientError::JSONSerialize(e) => {
                CoachError::Internal(format!("failed to serialize api request: {e}"))
            }
        }
    }
}
