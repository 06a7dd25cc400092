// Internal modules
mod client;
mod config;
mod error;

// Public modules
pub mod openai_compat;

// Public exports
pub use client::RawProviderResponse;
pub use config::{ApiConfig, LlmApiConfigTrait};
pub use error::{ApiError, ClientError};
