// Public modules
pub mod api;

// Internal imports
use crate::requests::{
    extract_with_stage, CoachError, CoachingInput, ExtractionFailure, StructuredCoachResult,
};
use api::{
    openai_compat::{
        builder::SmartCoachBuilder, ChatCompletionResponse, OpenAiCompatBackend,
        OpenAiCompatConfig, ProviderRequest,
    },
    ClientError, RawProviderResponse,
};

/// Entry point for callers: one input in, one typed result or one typed failure out.
///
/// Holds configuration and a connection pool, nothing per-call. Share it behind an `Arc`
/// or a reference; concurrent calls do not interact.
pub struct SmartCoach {
    backend: OpenAiCompatBackend,
}

impl SmartCoach {
    /// DeepSeek's OpenAI-compatible API with `DEEPSEEK_API_KEY` and `DEEPSEEK_MODEL`.
    pub fn deepseek() -> SmartCoachBuilder {
        SmartCoachBuilder::default()
    }

    pub fn new(mut config: OpenAiCompatConfig) -> crate::Result<Self, CoachError> {
        config
            .logging_config
            .load_logger()
            .map_err(|e| CoachError::Internal(format!("failed to start logger: {e}")))?;
        Ok(Self {
            backend: OpenAiCompatBackend::new(config),
        })
    }

    pub fn config(&self) -> &OpenAiCompatConfig {
        self.backend.config()
    }

    /// Assemble the provider request. The model id is resolved now, at call time.
    pub fn build_request(&self, input: &CoachingInput) -> ProviderRequest {
        let config = self.config();
        ProviderRequest::build(
            input,
            &config.request_config,
            &config.api_config.load_model(),
        )
    }

    /// Send one request and return the successful body untouched.
    pub async fn invoke(
        &self,
        request: &ProviderRequest,
    ) -> crate::Result<RawProviderResponse, ClientError> {
        self.backend.completion_request(request).await
    }

    /// Validate, call the provider once and extract the structured result.
    ///
    /// Nothing is retried. On failure the caller still owns `background` and `question`
    /// and can resubmit them.
    pub async fn get_coaching_response(
        &self,
        background: &str,
        question: &str,
    ) -> crate::Result<StructuredCoachResult, CoachError> {
        let input = CoachingInput::new(background, question)?;
        self.coach(&input).await
    }

    pub async fn coach(
        &self,
        input: &CoachingInput,
    ) -> crate::Result<StructuredCoachResult, CoachError> {
        let request = self.build_request(input);
        crate::info!("{}", request);

        let raw = self.invoke(&request).await.map_err(|e| {
            crate::warn!("coaching request failed: {e}");
            CoachError::from(e)
        })?;

        let result = Self::extract_response(&raw)?;
        crate::debug!(
            "extracted {} questions and {} shortcomings",
            result.smart_questions.total(),
            result.critique.shortcomings.len()
        );
        Ok(result)
    }

    /// Read `choices[0].message.content` from a success body and extract it.
    ///
    /// A body without that content is an extraction failure carrying the whole body.
    pub fn extract_response(
        raw: &RawProviderResponse,
    ) -> crate::Result<StructuredCoachResult, ExtractionFailure> {
        let completion = match serde_json::from_slice::<ChatCompletionResponse>(&raw.body) {
            Ok(completion) => completion,
            Err(e) => {
                crate::error!("success body is not a chat completion: {e}");
                return Err(ExtractionFailure {
                    raw_text: raw.text(),
                    reason: format!("response is not a chat completion: {e}"),
                });
            }
        };
        if let Some(usage) = &completion.usage {
            crate::debug!("{}", usage);
        }
        if completion.finish_reason() == Some("length") {
            crate::warn!("completion stopped at max_tokens; the JSON is likely truncated");
        }

        let Some(content) = completion.content() else {
            crate::error!("chat completion has no message content");
            return Err(ExtractionFailure {
                raw_text: raw.text(),
                reason: "response has no choices[0].message.content".to_string(),
            });
        };

        match extract_with_stage(content) {
            Ok((result, stage)) => {
                crate::debug!("extracted result via {}", stage);
                Ok(result)
            }
            Err(failure) => {
                crate::error!(reason = %failure.reason, "extraction failed");
                Err(failure)
            }
        }
    }
}
