// Internal modules
mod error;
mod extract;
mod input;
mod instruction;
mod req_components;
mod result;

// Public exports
pub use error::CoachError;
pub(crate) use extract::extract_with_stage;
pub use extract::{extract, ExtractionFailure, ExtractionStage};
pub use input::CoachingInput;
pub use instruction::{user_message, SYSTEM_INSTRUCTION, SYSTEM_INSTRUCTION_VERSION};
pub use req_components::{RequestConfig, RequestConfigTrait};
pub use result::{Critique, QuestionWithReasoning, SmartQuestions, StructuredCoachResult};
