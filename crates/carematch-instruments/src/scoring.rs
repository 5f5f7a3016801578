use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScoringError;

/// Largest weight a single answer can carry.
pub const MAX_WEIGHT: u8 = 3;

/// Upper end of the normalized display scale.
pub const DISPLAY_SCALE: u8 = 10;

/// One of the four ordinal frequency choices offered for every item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerOption {
    NotAtAll,
    SeveralDays,
    MoreThanHalfTheDays,
    NearlyEveryDay,
}

impl AnswerOption {
    /// All options in ascending weight order.
    pub const ALL: [AnswerOption; 4] = [
        AnswerOption::NotAtAll,
        AnswerOption::SeveralDays,
        AnswerOption::MoreThanHalfTheDays,
        AnswerOption::NearlyEveryDay,
    ];

    pub fn weight(&self) -> u8 {
        match self {
            AnswerOption::NotAtAll => 0,
            AnswerOption::SeveralDays => 1,
            AnswerOption::MoreThanHalfTheDays => 2,
            AnswerOption::NearlyEveryDay => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnswerOption::NotAtAll => "Not At All",
            AnswerOption::SeveralDays => "Several Days",
            AnswerOption::MoreThanHalfTheDays => "More Than Half The Days",
            AnswerOption::NearlyEveryDay => "Nearly Every Day",
        }
    }
}

impl TryFrom<u8> for AnswerOption {
    type Error = ScoringError;

    fn try_from(weight: u8) -> Result<Self, Self::Error> {
        AnswerOption::ALL
            .into_iter()
            .find(|o| o.weight() == weight)
            .ok_or(ScoringError::InvalidWeight(weight))
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Chosen answers keyed by 0-based question index. At most one entry per
/// index; recording an index again replaces the earlier answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerSet {
    answers: BTreeMap<usize, AnswerOption>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `weight` for question `index` of a `question_count`-item
    /// questionnaire, replacing any previous answer for that index.
    pub fn record(
        &mut self,
        index: usize,
        weight: u8,
        question_count: usize,
    ) -> Result<(), ScoringError> {
        if index >= question_count {
            return Err(ScoringError::InvalidIndex {
                index,
                question_count,
            });
        }
        let option = AnswerOption::try_from(weight)?;
        self.answers.insert(index, option);
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<AnswerOption> {
        self.answers.get(&index).copied()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.answers.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, AnswerOption)> + '_ {
        self.answers.iter().map(|(i, o)| (*i, *o))
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }
}

/// Qualitative bucket derived from the raw total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal anxiety symptoms",
            Severity::Mild => "Mild anxiety symptoms",
            Severity::Moderate => "Moderate anxiety symptoms",
            Severity::Severe => "Severe anxiety symptoms",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive upper bound of each band, ascending. Totals above the last
/// bound are `Severe`.
const SEVERITY_BANDS: [(i32, Severity); 3] = [
    (4, Severity::Minimal),
    (9, Severity::Mild),
    (14, Severity::Moderate),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub level: Severity,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub total_score: i32,
    /// Total normalized to 0–10.
    pub display_score: u8,
    pub interpretation: Interpretation,
}

/// Per-question line of a results listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BreakdownRow {
    /// 1-based question number.
    pub number: usize,
    pub label: String,
    pub weight: u8,
}

/// Functional form of [`AnswerSet::record`]: returns a new set and leaves
/// `answers` untouched.
pub fn record_answer(
    answers: &AnswerSet,
    index: usize,
    weight: u8,
    question_count: usize,
) -> Result<AnswerSet, ScoringError> {
    let mut next = answers.clone();
    next.record(index, weight, question_count)?;
    Ok(next)
}

/// Sum of all recorded weights. Unanswered questions count as zero.
pub fn total_score(answers: &AnswerSet) -> i32 {
    answers.iter().map(|(_, o)| i32::from(o.weight())).sum()
}

/// `round(total / (3 * question_count) * 10)`, rounding halves up and
/// clamping to `[0, 10]`.
pub fn display_score(total: i32, question_count: usize) -> Result<u8, ScoringError> {
    if question_count == 0 {
        return Err(ScoringError::InvalidQuestionCount);
    }
    // u128 holds 3 * usize::MAX * 20 without overflow.
    let count = u128::try_from(question_count).map_err(|_| ScoringError::InvalidQuestionCount)?;
    let max = u128::from(MAX_WEIGHT) * count;
    let total = u128::try_from(total).unwrap_or(0).min(max);
    let scale = u128::from(DISPLAY_SCALE);
    // total * scale / max, rounded half up, in integers.
    let rounded = (2 * total * scale + max) / (2 * max);
    Ok(u8::try_from(rounded).unwrap_or(DISPLAY_SCALE))
}

pub fn interpret(total: i32) -> Result<Interpretation, ScoringError> {
    if total < 0 {
        return Err(ScoringError::InvalidScore(total));
    }
    let level = SEVERITY_BANDS
        .iter()
        .find(|(upper, _)| total <= *upper)
        .map(|(_, level)| *level)
        .unwrap_or(Severity::Severe);

    Ok(Interpretation {
        level,
        description: level.description().to_string(),
    })
}

/// True iff every index in `0..question_count` has exactly one answer and
/// nothing else is present.
pub fn is_complete(answers: &AnswerSet, question_count: usize) -> bool {
    answers.len() == question_count && (0..question_count).all(|i| answers.contains(i))
}

pub fn score(answers: &AnswerSet, question_count: usize) -> Result<ScoreResult, ScoringError> {
    let total_score = total_score(answers);
    Ok(ScoreResult {
        total_score,
        display_score: display_score(total_score, question_count)?,
        interpretation: interpret(total_score)?,
    })
}

pub fn breakdown(answers: &AnswerSet, question_count: usize) -> Vec<BreakdownRow> {
    (0..question_count)
        .map(|index| {
            let answer = answers.get(index);
            BreakdownRow {
                number: index + 1,
                label: answer
                    .map(|o| o.label().to_string())
                    .unwrap_or_else(|| "Not answered".to_string()),
                weight: answer.map(|o| o.weight()).unwrap_or(0),
            }
        })
        .collect()
}
