//! Dosha quiz: answer scoring, the tie-break cascade, and catalog recommendations.

pub mod domain;
pub mod engine;
pub mod profile;
pub mod recommend;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{AnswerSet, DoshaTally, NewQuizQuestion, QuestionId, QuizQuestion};
pub use engine::{QuizEngine, QuizScore};
pub use profile::DoshaProfile;
pub use recommend::RecommendationSelector;
pub use repository::{default_questions, QuestionBank, QuestionBankWriter};
pub use router::quiz_router;
pub use service::{DoshaQuizService, QuizOutcome, QuizServiceError};
