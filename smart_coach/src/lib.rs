//! smart_coach – turn a vague question into a set of SMART questions
//! ==================================================================
//!
//! One call, one round-trip:
//!
//! ```text
//! SmartCoach::get_coaching_response(background, question)
//!       │
//!       ├─→ CoachingInput::new        (non-empty after trim, or CoachError::Validation)
//!       ├─→ ProviderRequest::build    (frozen system instruction + labeled user message)
//!       ├─→ ApiClient::invoke         (POST /chat/completions with bearer credential)
//!       └─→ extract                   (direct parse, then first `{` .. last `}` substring)
//! ```
//!
//! ```rust,no_run
//! use smart_coach::*;
//!
//! # async fn run() -> Result<(), CoachError> {
//! let coach = SmartCoach::deepseek().init()?;
//! let result = coach
//!     .get_coaching_response(
//!         "We are a mid-size SaaS company and retention dropped 20% last quarter.",
//!         "How do we improve retention?",
//!     )
//!     .await?;
//! println!("{}", result.summary);
//! # Ok(())
//! # }
//! ```

#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod llms;
pub mod logging;
pub mod requests;

pub use llms::{
    api::{
        openai_compat::{
            builder::SmartCoachBuilder, ChatCompletionResponse, ChatMessage, OpenAiCompatConfig,
            ProviderRequest, ResponseFormat, DEEPSEEK_API_BASE_URL, DEEPSEEK_API_KEY_ENV_VAR,
            DEEPSEEK_DEFAULT_MODEL, DEEPSEEK_MODEL_ENV_VAR,
        },
        ApiConfig, ApiError, ClientError, LlmApiConfigTrait, RawProviderResponse,
    },
    SmartCoach,
};
pub use logging::{LoggingConfig, LoggingConfigTrait};
pub use requests::{
    extract, CoachError, CoachingInput, Critique, ExtractionFailure, ExtractionStage,
    QuestionWithReasoning, RequestConfig, RequestConfigTrait, SmartQuestions,
    StructuredCoachResult, SYSTEM_INSTRUCTION, SYSTEM_INSTRUCTION_VERSION,
};
