//! carematch-instruments
//!
//! Screening questionnaire definitions, scoring, and the assessment session
//! state machine. Pure data and arithmetic, no I/O.

pub mod error;
pub mod instruments;
pub mod scoring;
pub mod session;

use serde::Serialize;

use error::ScoringError;
use scoring::{AnswerSet, BreakdownRow, ScoreResult};

/// Which screening domain an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningDomain {
    Anxiety,
    Depression,
}

/// A fixed questionnaire prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionnaireItem {
    /// 1-based position in the questionnaire.
    pub number: usize,
    pub text: &'static str,
    pub domain: ScreeningDomain,
}

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "gad7_phq9").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The question stem shown above every item.
    fn prompt(&self) -> &str;

    /// Items in presentation order.
    fn items(&self) -> &[QuestionnaireItem];

    fn question_count(&self) -> usize {
        self.items().len()
    }

    fn item(&self, index: usize) -> Option<&QuestionnaireItem> {
        self.items().get(index)
    }

    /// Record an answer, validating the index against this instrument.
    fn record(&self, answers: &mut AnswerSet, index: usize, weight: u8) -> Result<(), ScoringError> {
        answers.record(index, weight, self.question_count())
    }

    fn is_complete(&self, answers: &AnswerSet) -> bool {
        scoring::is_complete(answers, self.question_count())
    }

    fn score(&self, answers: &AnswerSet) -> Result<ScoreResult, ScoringError> {
        scoring::score(answers, self.question_count())
    }

    fn breakdown(&self, answers: &AnswerSet) -> Vec<BreakdownRow> {
        scoring::breakdown(answers, self.question_count())
    }

    /// Format a scored answer set as plain text for terminal output.
    fn summary_text(&self, answers: &AnswerSet) -> Result<String, ScoringError> {
        let result = self.score(answers)?;
        let mut output = format!("## {}\n\n", self.name());
        output.push_str(&format!(
            "Score: {} / {}\nLevel: {} ({})\nTotal: {}\n\n",
            result.display_score,
            scoring::DISPLAY_SCALE,
            result.interpretation.level,
            result.interpretation.description,
            result.total_score,
        ));
        for row in self.breakdown(answers) {
            output.push_str(&format!("- Q{}: {} ({})\n", row.number, row.label, row.weight));
        }
        Ok(output)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![Box::new(instruments::mood_screen::MoodScreen)]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
