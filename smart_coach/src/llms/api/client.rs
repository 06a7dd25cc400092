use super::{
    config::ApiConfigTrait,
    error::{map_api_error, map_serialization_error, ClientError},
};
use bytes::Bytes;
use serde::Serialize;

/// Body of a successful provider response, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawProviderResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RawProviderResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// HTTP client for one provider endpoint.
///
/// Holds no per-call state, so one instance can serve concurrent calls. Cloning shares
/// reqwest's connection pool.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient<C: ApiConfigTrait> {
    http_client: reqwest::Client,
    pub config: C,
}

impl<C: ApiConfigTrait> ApiClient<C> {
    pub(crate) fn new(config: C) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            config,
        }
    }

    /// Make exactly one POST to the completion endpoint.
    ///
    /// The credential is resolved first; without one no request is built or sent.
    pub(crate) async fn post<I>(&self, request: &I) -> Result<RawProviderResponse, ClientError>
    where
        I: Serialize + std::fmt::Debug,
    {
        let api_config = self.config.api_config();
        let api_key = api_config.load_api_key()?;

        let url = reqwest::Url::parse(&api_config.url()).map_err(|e| ClientError::InvalidConfig {
            field: "base_url",
            reason: e.to_string(),
        })?;

        let serialized_request = serde_json::to_string(request).map_err(map_serialization_error)?;
        crate::trace!("Serialized request: {}", serialized_request);

        let mut request_builder = self
            .http_client
            .post(url)
            .headers(self.config.headers(&api_key)?)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serialized_request);
        if let Some(timeout) = api_config.timeout {
            request_builder = request_builder.timeout(timeout);
        }

        self.execute(request_builder.build()?).await
    }

    async fn execute(&self, request: reqwest::Request) -> Result<RawProviderResponse, ClientError> {
        crate::debug!("POST {}", request.url());
        let response = self.http_client.execute(request).await.map_err(|e| {
            crate::error!("Transport failure: {e}");
            ClientError::Reqwest(e)
        })?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let api_error = map_api_error(status.as_u16(), body.as_ref());
            crate::error!(?api_error);
            return Err(api_error);
        }

        crate::trace!(
            "Serialized response: {}",
            String::from_utf8_lossy(body.as_ref())
        );
        Ok(RawProviderResponse {
            status: status.as_u16(),
            body,
        })
    }
}
