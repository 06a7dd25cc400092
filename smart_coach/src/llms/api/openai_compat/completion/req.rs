use crate::requests::{
    user_message, CoachingInput, RequestConfig, SYSTEM_INSTRUCTION, SYSTEM_INSTRUCTION_VERSION,
};
use serde::{Deserialize, Serialize};

/// Chat completion payload for OpenAI-compatible `/chat/completions` endpoints.
#[derive(Clone, Serialize, Debug, Deserialize, PartialEq)]
pub struct ProviderRequest {
    /// ID of the model to use.
    pub model: String,

    /// Sampling temperature. Lower is more deterministic.
    pub temperature: f32,

    /// Nucleus sampling threshold.
    pub top_p: f32,

    /// The maximum number of tokens to generate in the chat completion.
    pub max_tokens: u32,

    /// The system instruction followed by the user message.
    pub messages: Vec<ChatMessage>,

    /// Asks providers that support it to emit only a JSON object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

impl ProviderRequest {
    /// Assemble the request for one coaching call.
    ///
    /// The system message is always [`SYSTEM_INSTRUCTION`] as-is. The input only ever
    /// reaches the user message.
    pub fn build(input: &CoachingInput, config: &RequestConfig, model: &str) -> Self {
        ProviderRequest {
            model: model.to_owned(),
            temperature: config.temperature,
            top_p: config.top_p,
            max_tokens: config.max_tokens,
            messages: vec![
                ChatMessage::system(SYSTEM_INSTRUCTION),
                ChatMessage::user(user_message(input)),
            ],
            response_format: if config.json_mode {
                Some(ResponseFormat::json_object())
            } else {
                None
            },
        }
    }

    pub fn system_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == "system")
            .map(|m| m.content.as_str())
    }

    pub fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == "user")
            .map(|m| m.content.as_str())
    }
}

impl std::fmt::Display for ProviderRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(f, "ProviderRequest:")?;
        writeln!(f, "    model: {}", self.model)?;
        writeln!(f, "    instruction: {}", SYSTEM_INSTRUCTION_VERSION)?;
        writeln!(f, "    temperature: {}", self.temperature)?;
        writeln!(f, "    top_p: {}", self.top_p)?;
        writeln!(f, "    max_tokens: {}", self.max_tokens)?;
        writeln!(f, "    user: {:?}", self.user_content().unwrap_or_default())?;
        write!(f, "    response_format: {:?}", self.response_format)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResponseFormat {
    pub r#type: String,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            r#type: "json_object".to_string(),
        }
    }
}
