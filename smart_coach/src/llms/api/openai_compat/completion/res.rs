use serde::Deserialize;

/// The parts of an OpenAI-compatible chat completion response the coach reads.
///
/// Everything is optional so that a thin or unusual success body still deserializes;
/// a missing message content is reported by the caller, not here.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatCompletionResponse {
    /// A unique identifier for the chat completion.
    pub id: Option<String>,
    /// The model used for the chat completion.
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<CompletionUsage>,
}

impl ChatCompletionResponse {
    /// Content of the first choice's message.
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.message.as_ref())
            .and_then(|message| message.content.as_deref())
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.finish_reason.as_deref())
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatChoice {
    pub index: Option<u32>,
    pub message: Option<ChatResponseMessage>,
    /// `stop`, `length`, `content_filter`, ...
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ChatResponseMessage {
    pub role: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl std::fmt::Display for CompletionUsage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "prompt_tokens: {}, completion_tokens: {}, total_tokens: {}",
            self.prompt_tokens, self.completion_tokens, self.total_tokens
        )
    }
}
