use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;

use super::domain::AnswerSet;
use super::profile::DoshaProfile;
use super::repository::QuestionBank;
use super::service::{DoshaQuizService, QuizServiceError};
use crate::catalog::CatalogReader;
use crate::dosha::Dosha;
use crate::error::message_response;

/// Body of `POST /api/dosha-quiz/result`. `answers` stays untyped until validated.
#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub answers: Option<Value>,
}

/// Router builder exposing the question bank and quiz scoring endpoints.
pub fn quiz_router<Q, C>(service: Arc<DoshaQuizService<Q, C>>) -> Router
where
    Q: QuestionBank + 'static,
    C: CatalogReader + 'static,
{
    Router::new()
        .route("/api/dosha-quiz", get(questions_handler::<Q, C>))
        .route("/api/dosha-quiz/result", post(result_handler::<Q, C>))
        .route("/api/dosha-quiz/profiles/:dosha", get(profile_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler<Q, C>(
    State(service): State<Arc<DoshaQuizService<Q, C>>>,
) -> Response
where
    Q: QuestionBank + 'static,
    C: CatalogReader + 'static,
{
    match service.questions() {
        Ok(questions) => (StatusCode::OK, Json(questions)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn result_handler<Q, C>(
    State(service): State<Arc<DoshaQuizService<Q, C>>>,
    payload: Result<Json<QuizSubmission>, JsonRejection>,
) -> Response
where
    Q: QuestionBank + 'static,
    C: CatalogReader + 'static,
{
    let answers = payload
        .ok()
        .and_then(|Json(submission)| submission.answers)
        .and_then(|answers| AnswerSet::from_json(&answers));

    let Some(answers) = answers else {
        return message_response(StatusCode::BAD_REQUEST, "Invalid quiz answers");
    };

    match service.submit(&answers) {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler(Path(dosha): Path<String>) -> Response {
    match dosha.parse::<Dosha>() {
        Ok(dosha) => (StatusCode::OK, Json(DoshaProfile::for_dosha(dosha))).into_response(),
        Err(error) => message_response(StatusCode::NOT_FOUND, error.to_string()),
    }
}

fn error_response(error: QuizServiceError) -> Response {
    match error {
        QuizServiceError::Repository(error) => {
            message_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
