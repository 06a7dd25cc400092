mod req;
mod res;

pub use req::{ChatMessage, ProviderRequest, ResponseFormat};
pub use res::{ChatChoice, ChatCompletionResponse, ChatResponseMessage, CompletionUsage};
