//! Recover a [`StructuredCoachResult`] from a text completion.
//!
//! The provider is a text generator, so its output is not guaranteed to be clean JSON.
//! Two bounded stages are tried, in order:
//!
//! 1. [`ExtractionStage::Direct`] – the whole text parsed and checked against the schema.
//! 2. [`ExtractionStage::BraceBounded`] – the substring from the first `{` to the last `}`
//!    (inclusive) parsed and checked against the schema.
//!
//! Nothing else is attempted; malformed JSON is not repaired.
//!
//! Limitation: the first `{` and the last `}` of the *whole* text are used. Two sibling
//! objects, or stray braces in the surrounding prose, produce a candidate spanning more
//! than one object. That candidate fails to parse and the text is rejected.

use super::result::StructuredCoachResult;

/// Which stage produced the value, or at which stage extraction gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExtractionStage {
    Direct,
    BraceBounded,
}

impl std::fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractionStage::Direct => write!(f, "direct parse"),
            ExtractionStage::BraceBounded => write!(f, "brace-bounded substring"),
        }
    }
}

/// The provider answered, but its content could not be reduced to a valid result.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("model output is not a valid coaching result: {reason}")]
pub struct ExtractionFailure {
    /// The original text, untouched, for display or diagnosis.
    pub raw_text: String,
    pub reason: String,
}

/// Parse `raw_text` into a [`StructuredCoachResult`].
///
/// Pure and deterministic: the same text always gives the same outcome.
pub fn extract(raw_text: &str) -> crate::Result<StructuredCoachResult, ExtractionFailure> {
    extract_with_stage(raw_text).map(|(result, _)| result)
}

pub(crate) fn extract_with_stage(
    raw_text: &str,
) -> crate::Result<(StructuredCoachResult, ExtractionStage), ExtractionFailure> {
    let direct_err = match serde_json::from_str::<StructuredCoachResult>(raw_text) {
        Ok(result) => return Ok((result, ExtractionStage::Direct)),
        Err(e) => e,
    };
    crate::trace!("direct parse failed: {direct_err}");

    let Some(candidate) = brace_bounded(raw_text) else {
        return Err(ExtractionFailure {
            raw_text: raw_text.to_owned(),
            reason: format!("no JSON object found ({direct_err})"),
        });
    };

    match serde_json::from_str::<StructuredCoachResult>(candidate) {
        Ok(result) => {
            crate::warn!(
                "recovered result from {} ({} surrounding bytes ignored)",
                ExtractionStage::BraceBounded,
                raw_text.len() - candidate.len()
            );
            Ok((result, ExtractionStage::BraceBounded))
        }
        Err(e) => Err(ExtractionFailure {
            raw_text: raw_text.to_owned(),
            reason: match e.classify() {
                serde_json::error::Category::Data => format!("schema mismatch: {e}"),
                _ => format!("invalid JSON between first '{{' and last '}}': {e}"),
            },
        }),
    }
}

/// The inclusive slice from the first `{` to the last `}`, if the close comes after the open.
fn brace_bounded(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}
