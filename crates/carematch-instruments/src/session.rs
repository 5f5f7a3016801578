//! Assessment session state machine.
//!
//! `ModeSelection → Testing { cursor } → Results`, driven one event at a
//! time. Every rejected event leaves the session exactly as it was.

use std::fmt;

use crate::error::{ScoringError, SessionError};
use crate::scoring::{AnswerOption, AnswerSet, ScoreResult};
use crate::{Instrument, QuestionnaireItem};

/// Where the respondent currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ModeSelection,
    /// Answering; `cursor` is the 0-based index of the question on screen.
    Testing { cursor: usize },
    Results,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::ModeSelection => f.write_str("mode selection"),
            Step::Testing { cursor } => write!(f, "testing (question {})", cursor + 1),
            Step::Results => f.write_str("results"),
        }
    }
}

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    /// Choose the answer with this weight for the current question.
    Select(u8),
    Next,
    Previous,
    Back,
    Restart,
    ShowResult,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Start => f.write_str("start"),
            Event::Select(weight) => write!(f, "select answer {weight}"),
            Event::Next => f.write_str("go to the next question"),
            Event::Previous => f.write_str("go to the previous question"),
            Event::Back => f.write_str("go back"),
            Event::Restart => f.write_str("restart"),
            Event::ShowResult => f.write_str("show the result"),
        }
    }
}

pub struct AssessmentSession {
    instrument: Box<dyn Instrument>,
    step: Step,
    answers: AnswerSet,
}

impl AssessmentSession {
    pub fn new(instrument: Box<dyn Instrument>) -> Self {
        Self {
            instrument,
            step: Step::ModeSelection,
            answers: AnswerSet::new(),
        }
    }

    pub fn instrument(&self) -> &dyn Instrument {
        self.instrument.as_ref()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// The question cursor, while testing.
    pub fn cursor(&self) -> Option<usize> {
        match self.step {
            Step::Testing { cursor } => Some(cursor),
            _ => None,
        }
    }

    pub fn current_item(&self) -> Option<&QuestionnaireItem> {
        self.cursor().and_then(|c| self.instrument.item(c))
    }

    pub fn current_answer(&self) -> Option<AnswerOption> {
        self.cursor().and_then(|c| self.answers.get(c))
    }

    /// True on the last question, where `next` finishes the test.
    pub fn is_last_question(&self) -> bool {
        self.cursor()
            .is_some_and(|c| c + 1 == self.instrument.question_count())
    }

    /// Feed one event into the machine.
    pub fn handle(&mut self, event: Event) -> Result<Step, SessionError> {
        match event {
            Event::Start => self.start(),
            Event::Select(weight) => self.select_answer(weight),
            Event::Next => self.next(),
            Event::Previous => self.previous(),
            Event::Back => self.back(),
            Event::Restart => self.restart(),
            Event::ShowResult => self.result().map(|_| self.step),
        }
    }

    /// Begin a fresh attempt: cursor on the first question, no answers.
    pub fn start(&mut self) -> Result<Step, SessionError> {
        self.ensure(Event::Start, matches!(self.step, Step::ModeSelection))?;
        if self.instrument.question_count() == 0 {
            return Err(ScoringError::InvalidQuestionCount.into());
        }
        self.answers.clear();
        self.step = Step::Testing { cursor: 0 };
        Ok(self.step)
    }

    /// Record (or replace) the answer to the current question.
    pub fn select_answer(&mut self, weight: u8) -> Result<Step, SessionError> {
        let cursor = self.testing_cursor(Event::Select(weight))?;
        self.instrument.record(&mut self.answers, cursor, weight)?;
        Ok(self.step)
    }

    /// Advance to the next question, or to the results after the last one.
    /// Blocked until the current question has an answer.
    pub fn next(&mut self) -> Result<Step, SessionError> {
        let cursor = self.testing_cursor(Event::Next)?;
        if !self.answers.contains(cursor) {
            return Err(SessionError::Unanswered { index: cursor });
        }
        self.step = if cursor + 1 < self.instrument.question_count() {
            Step::Testing { cursor: cursor + 1 }
        } else {
            Step::Results
        };
        Ok(self.step)
    }

    /// Step back one question; stays put on the first.
    pub fn previous(&mut self) -> Result<Step, SessionError> {
        let cursor = self.testing_cursor(Event::Previous)?;
        self.step = Step::Testing {
            cursor: cursor.saturating_sub(1),
        };
        Ok(self.step)
    }

    /// Leave the current screen: testing returns to mode selection (answers
    /// are kept until the next `start`), results return to the last question.
    pub fn back(&mut self) -> Result<Step, SessionError> {
        self.step = match self.step {
            Step::Testing { .. } => Step::ModeSelection,
            Step::Results => Step::Testing {
                cursor: self.instrument.question_count() - 1,
            },
            step @ Step::ModeSelection => {
                return Err(SessionError::InvalidTransition {
                    event: Event::Back,
                    step,
                });
            }
        };
        Ok(self.step)
    }

    /// Discard the attempt and return to mode selection.
    pub fn restart(&mut self) -> Result<Step, SessionError> {
        self.ensure(Event::Restart, matches!(self.step, Step::Results))?;
        self.answers.clear();
        self.step = Step::ModeSelection;
        Ok(self.step)
    }

    /// The score of a finished attempt.
    pub fn result(&self) -> Result<ScoreResult, SessionError> {
        self.ensure(Event::ShowResult, matches!(self.step, Step::Results))?;
        Ok(self.instrument.score(&self.answers)?)
    }

    fn testing_cursor(&self, event: Event) -> Result<usize, SessionError> {
        self.cursor().ok_or(SessionError::InvalidTransition {
            event,
            step: self.step,
        })
    }

    fn ensure(&self, event: Event, allowed: bool) -> Result<(), SessionError> {
        if allowed {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                event,
                step: self.step,
            })
        }
    }
}
