use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use super::domain::{AnswerSet, QuizQuestion};
use super::engine::{QuizEngine, QuizScore};
use super::recommend::RecommendationSelector;
use super::repository::QuestionBank;
use crate::catalog::{CatalogReader, Product};
use crate::store::RepositoryError;

/// Service composing the question bank, catalog, scoring engine, and selector.
pub struct DoshaQuizService<Q, C> {
    questions: Arc<Q>,
    catalog: Arc<C>,
    engine: QuizEngine,
    selector: RecommendationSelector,
}

/// Response body for a scored quiz submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOutcome {
    #[serde(flatten)]
    pub score: QuizScore,
    pub recommendations: Vec<Product>,
}

impl<Q, C> DoshaQuizService<Q, C>
where
    Q: QuestionBank + 'static,
    C: CatalogReader + 'static,
{
    pub fn new(questions: Arc<Q>, catalog: Arc<C>, selector: RecommendationSelector) -> Self {
        Self {
            questions,
            catalog,
            engine: QuizEngine::new(),
            selector,
        }
    }

    pub fn questions(&self) -> Result<Vec<QuizQuestion>, QuizServiceError> {
        Ok(self.questions.all_questions()?)
    }

    /// Score a submission and attach recommendations for the dominant dosha.
    pub fn submit(&self, answers: &AnswerSet) -> Result<QuizOutcome, QuizServiceError> {
        let score = self.engine.score(answers);
        let catalog = self.catalog.all_products()?;
        let recommendations = self.selector.recommend(score.dominant_dosha, &catalog);

        info!(
            dominant = %score.dominant_dosha,
            answers = answers.len(),
            recommendations = recommendations.len(),
            limit = self.selector.limit(),
            "dosha quiz scored"
        );

        Ok(QuizOutcome {
            score,
            recommendations,
        })
    }
}

/// Error raised by the quiz service.
#[derive(Debug, thiserror::Error)]
pub enum QuizServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
