//! Advisory checks on the raw input. None of them block a request.

pub const SPARSE_BACKGROUND_CHARS: usize = 30;
pub const LONG_QUESTION_CHARS: usize = 50;
pub const QUESTION_SOFT_LIMIT_CHARS: usize = 100;

pub const BACKGROUND_TIPS: [&str; 4] = [
    "Give concrete numbers (\"retention fell 20%\" rather than \"retention is low\")",
    "Describe the current pain point and the state you want to reach",
    "Mention what you have already tried and how it went",
    "Name the audience or stakeholders and what they care about most",
];

pub const QUESTION_TIPS: [&str; 4] = [
    "Avoid yes/no questions; start with \"how\" or \"what\"",
    "Focus on one core goal at a time",
    "Make the subject (who) and the action (does what) explicit",
    "Leave out hidden assumptions or conclusions",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputHint {
    SparseBackground { chars: usize },
    LongQuestion { chars: usize },
}

impl std::fmt::Display for InputHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputHint::SparseBackground { chars } => write!(
                f,
                "background is sparse ({chars} chars); more detail gives sharper questions"
            ),
            InputHint::LongQuestion { chars } => write!(
                f,
                "question is long ({chars} / {QUESTION_SOFT_LIMIT_CHARS} chars); consider narrowing it"
            ),
        }
    }
}

pub fn input_hints(background: &str, question: &str) -> Vec<InputHint> {
    let mut hints = Vec::new();
    let chars = background.chars().count();
    if chars < SPARSE_BACKGROUND_CHARS {
        hints.push(InputHint::SparseBackground { chars });
    }
    let chars = question.chars().count();
    if chars > LONG_QUESTION_CHARS {
        hints.push(InputHint::LongQuestion { chars });
    }
    hints
}
