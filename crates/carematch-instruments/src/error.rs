use thiserror::Error;

use crate::session::{Event, Step};

/// Local validation failures of the scorer. None are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("question index {index} is out of range for a {question_count}-item questionnaire")]
    InvalidIndex { index: usize, question_count: usize },

    #[error("answer weight {0} is not one of 0, 1, 2, 3")]
    InvalidWeight(u8),

    #[error("question count must be greater than zero")]
    InvalidQuestionCount,

    #[error("score {0} is negative")]
    InvalidScore(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("cannot {event} during {step}")]
    InvalidTransition { event: Event, step: Step },

    #[error("question {} has no answer yet", .index + 1)]
    Unanswered { index: usize },

    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
}
