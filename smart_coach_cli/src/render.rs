use std::fmt::{self, Write};

use colorful::{Color, Colorful};
use indenter::indented;
use smart_coach::{CoachError, QuestionWithReasoning, StructuredCoachResult};

use crate::{
    hints::{BACKGROUND_TIPS, QUESTION_TIPS},
    session::CoachingSession,
};

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title.color(Color::Blue).bold())
}

fn bullets(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    if items.is_empty() {
        return writeln!(indented(f), "(none)");
    }
    for item in items {
        writeln!(indented(f), "- {item}")?;
    }
    Ok(())
}

fn reasoned(f: &mut fmt::Formatter<'_>, item: &QuestionWithReasoning) -> fmt::Result {
    writeln!(indented(f), "{}", item.question)?;
    writeln!(indented(f).with_str("      "), "why: {}", item.reasoning)
}

/// Terminal layout of one coaching result.
pub struct ResultView<'a>(pub &'a StructuredCoachResult);

impl fmt::Display for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        heading(f, "Summary")?;
        writeln!(indented(f), "{}", result.summary)?;
        writeln!(f)?;

        for (title, questions) in result.smart_questions.dimensions() {
            heading(f, title)?;
            bullets(f, questions)?;
        }
        writeln!(f)?;

        heading(f, "Shortcomings of the original question")?;
        bullets(f, &result.critique.shortcomings)?;
        heading(f, "The critical question")?;
        reasoned(f, &result.critique.critical_question)?;
        heading(f, "Avoid asking")?;
        reasoned(f, &result.critique.negative_example)
    }
}

/// One line per session for `history list`.
pub struct SessionLine<'a>(pub &'a CoachingSession);

impl fmt::Display for SessionLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        write!(
            f,
            "{}  {}  {}",
            session.id,
            session.timestamp.format("%Y-%m-%d %H:%M"),
            truncate(&session.original_question, 60)
        )
    }
}

/// Full session for `history show`.
pub struct SessionView<'a>(pub &'a CoachingSession);

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(
            f,
            "Session {} ({})",
            session.id,
            session.timestamp.to_rfc3339()
        )?;
        writeln!(f)?;
        heading(f, "Background")?;
        writeln!(indented(f), "{}", session.background)?;
        heading(f, "Core question")?;
        writeln!(indented(f), "{}", session.original_question)?;
        writeln!(f)?;
        write!(f, "{}", ResultView(&session.response))
    }
}

/// What went wrong, plus what is needed to resubmit.
pub struct FailureView<'a> {
    pub error: &'a CoachError,
    pub background: &'a str,
    pub question: &'a str,
}

impl fmt::Display for FailureView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}",
            format!("Coaching failed: {}", self.error)
                .color(Color::Red)
                .bold()
        )?;
        match self.error {
            CoachError::Extraction(failure) => {
                heading(f, "Raw model output")?;
                writeln!(indented(f), "{}", failure.raw_text)?;
            }
            CoachError::Upstream { raw_body, .. } if !raw_body.is_empty() => {
                heading(f, "Raw provider response")?;
                writeln!(indented(f), "{raw_body}")?;
            }
            _ => (),
        }
        if self.error.is_precondition() {
            return Ok(());
        }
        heading(f, "Your input (unchanged, resubmit to retry)")?;
        writeln!(indented(f), "background: {}", self.background)?;
        writeln!(indented(f), "question: {}", self.question)
    }
}

pub struct Tips;

impl fmt::Display for Tips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "Writing a good background")?;
        for tip in BACKGROUND_TIPS {
            writeln!(indented(f), "- {tip}")?;
        }
        heading(f, "Sharpening the core question")?;
        for tip in QUESTION_TIPS {
            writeln!(indented(f), "- {tip}")?;
        }
        Ok(())
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    let line = text.lines().next().unwrap_or_default();
    if line.chars().count() <= max_chars && line.len() == text.len() {
        return line.to_owned();
    }
    let mut out: String = line.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
