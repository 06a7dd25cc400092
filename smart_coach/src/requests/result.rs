use serde::{Deserialize, Serialize};

/// The structured result the provider must return.
///
/// Deserialization is the schema check: every field is required, the five dimensions and
/// the shortcomings must be arrays of strings, and nothing is filled in with a default.
/// Unknown extra fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredCoachResult {
    /// 3-5 sentences restating the provider's understanding of the input.
    pub summary: String,
    pub smart_questions: SmartQuestions,
    pub critique: Critique,
}

/// Refined questions grouped by the SMART dimension they emphasize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartQuestions {
    pub specific: Vec<String>,
    pub measurable: Vec<String>,
    pub action_oriented: Vec<String>,
    pub relevant: Vec<String>,
    pub time_bound: Vec<String>,
}

impl SmartQuestions {
    /// Each dimension with its display title, in S-M-A-R-T order.
    pub fn dimensions(&self) -> [(&'static str, &[String]); 5] {
        [
            ("Specific", self.specific.as_slice()),
            ("Measurable", self.measurable.as_slice()),
            ("Action-oriented", self.action_oriented.as_slice()),
            ("Relevant", self.relevant.as_slice()),
            ("Time-bound", self.time_bound.as_slice()),
        ]
    }

    pub fn total(&self) -> usize {
        self.dimensions().iter().map(|(_, q)| q.len()).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Critique {
    pub shortcomings: Vec<String>,
    pub critical_question: QuestionWithReasoning,
    pub negative_example: QuestionWithReasoning,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionWithReasoning {
    pub question: String,
    pub reasoning: String,
}
