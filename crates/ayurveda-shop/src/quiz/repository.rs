use super::domain::{NewQuizQuestion, QuestionId, QuizQuestion};
use crate::store::RepositoryError;

/// Read access to the quiz question bank.
pub trait QuestionBank: Send + Sync {
    fn all_questions(&self) -> Result<Vec<QuizQuestion>, RepositoryError>;
    fn question(&self, id: QuestionId) -> Result<Option<QuizQuestion>, RepositoryError>;
}

/// Seeding hook; questions are immutable once stored.
pub trait QuestionBankWriter: Send + Sync {
    fn insert_question(&self, question: NewQuizQuestion) -> Result<QuizQuestion, RepositoryError>;
}

/// Questions seeded into a fresh store.
pub fn default_questions() -> Vec<NewQuizQuestion> {
    let entry = |question: &str, vata: &str, pitta: &str, kapha: &str| NewQuizQuestion {
        question: question.to_string(),
        vata_option: vata.to_string(),
        pitta_option: pitta.to_string(),
        kapha_option: kapha.to_string(),
    };

    vec![
        entry(
            "My body frame is generally:",
            "Slim, I find it difficult to gain weight",
            "Medium, with good muscle tone",
            "Larger, with a tendency to gain weight",
        ),
        entry(
            "My skin tends to be:",
            "Dry, rough, or thin",
            "Warm, reddish, sensitive",
            "Thick, oily, cool",
        ),
        entry(
            "When stressed, I tend to:",
            "Feel anxious or worried",
            "Become irritable or frustrated",
            "Withdraw or become stubborn",
        ),
    ]
}
