use serde::Serialize;

use super::domain::{AnswerSet, DoshaTally};
use crate::dosha::Dosha;

/// Stateless scorer turning an answer set into dosha counts and a dominant dosha.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizEngine;

/// Result of scoring one answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizScore {
    pub dominant_dosha: Dosha,
    #[serde(flatten)]
    pub tally: DoshaTally,
}

impl QuizEngine {
    pub fn new() -> Self {
        Self
    }

    /// Counts each recognised tag once. Unrecognised tags are skipped without error.
    pub fn score(&self, answers: &AnswerSet) -> QuizScore {
        let mut tally = DoshaTally::default();
        for dosha in answers.tags().filter_map(Dosha::from_tag) {
            tally.record(dosha);
        }

        QuizScore {
            dominant_dosha: tally.dominant(),
            tally,
        }
    }
}
