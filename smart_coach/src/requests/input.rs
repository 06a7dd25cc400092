use super::error::CoachError;

/// The user's situation and the question they want refined.
///
/// Both fields are kept verbatim. Construction through [`CoachingInput::new`] guarantees
/// neither is empty once whitespace is trimmed, which is the only check performed before
/// the provider is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoachingInput {
    background: String,
    question: String,
}

impl CoachingInput {
    pub fn new<B: Into<String>, Q: Into<String>>(
        background: B,
        question: Q,
    ) -> crate::Result<Self, CoachError> {
        let background = background.into();
        let question = question.into();
        if background.trim().is_empty() {
            return Err(CoachError::Validation { field: "background" });
        }
        if question.trim().is_empty() {
            return Err(CoachError::Validation { field: "question" });
        }
        Ok(Self {
            background,
            question,
        })
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}
