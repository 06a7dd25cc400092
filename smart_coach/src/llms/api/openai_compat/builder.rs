use super::OpenAiCompatConfig;
use crate::{
    llms::{
        api::config::{ApiConfig, LlmApiConfigTrait},
        SmartCoach,
    },
    logging::{LoggingConfig, LoggingConfigTrait},
    requests::{CoachError, RequestConfig, RequestConfigTrait},
};

// Everything here can be implemented for any struct.
#[derive(Default)]
pub struct SmartCoachBuilder {
    pub config: OpenAiCompatConfig,
}

impl SmartCoachBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Start the logger (when enabled) and build the coach.
    ///
    /// The credential is not checked here; it is resolved on every call.
    pub fn init(self) -> crate::Result<SmartCoach, CoachError> {
        SmartCoach::new(self.config)
    }
}

impl LlmApiConfigTrait for SmartCoachBuilder {
    fn api_base_config_mut(&mut self) -> &mut ApiConfig {
        &mut self.config.api_config
    }

    fn api_config(&self) -> &ApiConfig {
        &self.config.api_config
    }
}

impl LoggingConfigTrait for SmartCoachBuilder {
    fn logging_config_mut(&mut self) -> &mut LoggingConfig {
        &mut self.config.logging_config
    }
}

impl RequestConfigTrait for SmartCoachBuilder {
    fn config(&mut self) -> &mut RequestConfig {
        &mut self.config.request_config
    }
}
