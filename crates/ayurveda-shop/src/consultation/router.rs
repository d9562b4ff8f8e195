use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};

use super::domain::{BookingRequest, PractitionerId};
use super::repository::{BookingRepository, PractitionerDirectory};
use super::service::{BookingError, ConsultationService};
use crate::error::{message_response, validation_response};

/// Router builder exposing practitioner listings and consultation booking.
pub fn consultation_router<P, B>(service: Arc<ConsultationService<P, B>>) -> Router
where
    P: PractitionerDirectory + 'static,
    B: BookingRepository + 'static,
{
    Router::new()
        .route("/api/practitioners", get(list_handler::<P, B>))
        .route("/api/practitioners/:id", get(practitioner_handler::<P, B>))
        .route(
            "/api/practitioners/:id/availability",
            get(availability_handler::<P, B>),
        )
        .route("/api/consultations", post(book_handler::<P, B>))
        .with_state(service)
}

pub(crate) async fn list_handler<P, B>(
    State(service): State<Arc<ConsultationService<P, B>>>,
) -> Response
where
    P: PractitionerDirectory + 'static,
    B: BookingRepository + 'static,
{
    match service.practitioners() {
        Ok(practitioners) => (StatusCode::OK, Json(practitioners)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn practitioner_handler<P, B>(
    State(service): State<Arc<ConsultationService<P, B>>>,
    Path(id): Path<u32>,
) -> Response
where
    P: PractitionerDirectory + 'static,
    B: BookingRepository + 'static,
{
    match service.practitioner(PractitionerId(id)) {
        Ok(practitioner) => (StatusCode::OK, Json(practitioner)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn availability_handler<P, B>(
    State(service): State<Arc<ConsultationService<P, B>>>,
    Path(id): Path<u32>,
) -> Response
where
    P: PractitionerDirectory + 'static,
    B: BookingRepository + 'static,
{
    match service.availability(PractitionerId(id)) {
        Ok(days) => (StatusCode::OK, Json(days)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn book_handler<P, B>(
    State(service): State<Arc<ConsultationService<P, B>>>,
    payload: Result<Json<BookingRequest>, JsonRejection>,
) -> Response
where
    P: PractitionerDirectory + 'static,
    B: BookingRepository + 'static,
{
    let Ok(Json(request)) = payload else {
        return message_response(StatusCode::BAD_REQUEST, "Invalid consultation data");
    };

    match service.book(request) {
        Ok(booking) => (StatusCode::CREATED, Json(booking)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: BookingError) -> Response {
    match error {
        BookingError::Invalid(errors) => validation_response("Invalid consultation data", &errors),
        BookingError::PractitionerNotFound(_) => {
            message_response(StatusCode::NOT_FOUND, "Practitioner not found")
        }
        BookingError::SlotTaken => message_response(
            StatusCode::CONFLICT,
            "The selected time is no longer available",
        ),
        BookingError::Repository(error) => {
            message_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
        }
    }
}
