use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveTime};
use tracing::info;

use super::domain::{
    format_slot, Booking, BookingId, BookingRequest, DayAvailability, Practitioner, PractitionerId,
};
use super::repository::{BookingRepository, PractitionerDirectory};
use super::schedule::ConsultationSchedule;
use crate::error::FieldError;
use crate::store::RepositoryError;

pub type BookingIdSource = Arc<dyn Fn() -> BookingId + Send + Sync>;
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Practitioner listing and consultation booking.
pub struct ConsultationService<P, B> {
    practitioners: Arc<P>,
    bookings: Arc<B>,
    schedule: ConsultationSchedule,
    ids: BookingIdSource,
    clock: Clock,
}

impl<P, B> ConsultationService<P, B>
where
    P: PractitionerDirectory + 'static,
    B: BookingRepository + 'static,
{
    pub fn new(practitioners: Arc<P>, bookings: Arc<B>) -> Self {
        Self {
            practitioners,
            bookings,
            schedule: ConsultationSchedule::standard(),
            ids: Arc::new(BookingId::random),
            clock: Arc::new(|| Local::now().date_naive()),
        }
    }

    pub fn with_ids(mut self, ids: BookingIdSource) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn practitioners(&self) -> Result<Vec<Practitioner>, BookingError> {
        Ok(self.practitioners.all_practitioners()?)
    }

    pub fn practitioner(&self, id: PractitionerId) -> Result<Practitioner, BookingError> {
        self.practitioners
            .practitioner(id)?
            .ok_or(BookingError::PractitionerNotFound(id))
    }

    /// Free start times per bookable day, skipping days that are fully booked.
    pub fn availability(&self, id: PractitionerId) -> Result<Vec<DayAvailability>, BookingError> {
        let practitioner = self.practitioner(id)?;
        let today = (self.clock)();
        let slots = self.schedule.time_slots();
        let mut days = Vec::new();

        for date in self.schedule.bookable_dates(today) {
            let booked = self.bookings.bookings_on(id, date)?;
            let times: Vec<String> = slots
                .iter()
                .filter(|slot| {
                    !booked
                        .iter()
                        .any(|booking| booking.overlaps(date, **slot, practitioner.duration))
                })
                .map(|slot| format_slot(*slot))
                .collect();

            if !times.is_empty() {
                days.push(DayAvailability { date, times });
            }
        }

        Ok(days)
    }

    pub fn book(&self, request: BookingRequest) -> Result<Booking, BookingError> {
        let today = (self.clock)();
        let mut errors = validate_contact(&request);

        let practitioner = self.practitioners.practitioner(request.practitioner_id)?;
        if practitioner.is_none() {
            errors.push(FieldError::new("practitionerId", "unknown practitioner"));
        }

        let date = match NaiveDate::parse_from_str(request.date.trim(), "%Y-%m-%d") {
            Ok(date) if self.schedule.is_bookable_date(today, date) => Some(date),
            Ok(_) => {
                errors.push(FieldError::new(
                    "date",
                    "must be a weekday within the next two weeks",
                ));
                None
            }
            Err(_) => {
                errors.push(FieldError::new("date", "must be formatted YYYY-MM-DD"));
                None
            }
        };

        let time = match NaiveTime::parse_from_str(request.time.trim(), "%H:%M") {
            Ok(time) if self.schedule.is_slot(time) => Some(time),
            Ok(_) => {
                errors.push(FieldError::new(
                    "time",
                    "must be a half-hour slot between 09:00 and 17:00",
                ));
                None
            }
            Err(_) => {
                errors.push(FieldError::new("time", "must be formatted HH:MM"));
                None
            }
        };

        let (Some(practitioner), Some(date), Some(time), true) =
            (practitioner, date, time, errors.is_empty())
        else {
            return Err(BookingError::Invalid(errors));
        };

        let booking = Booking {
            id: (self.ids)(),
            practitioner_id: practitioner.id,
            practitioner_name: practitioner.name,
            client_name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            phone: request.phone.trim().to_string(),
            date,
            time,
            duration_minutes: practitioner.duration,
            fee: practitioner.price,
            concerns: request.concerns.trim().to_string(),
        };

        let stored = self.bookings.insert_booking(booking).map_err(|error| match error {
            RepositoryError::Conflict => BookingError::SlotTaken,
            other => BookingError::Repository(other),
        })?;

        info!(
            booking = %stored.id,
            practitioner = %stored.practitioner_id,
            date = %stored.date,
            time = %format_slot(stored.time),
            "consultation booked"
        );
        Ok(stored)
    }
}

fn validate_contact(request: &BookingRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if request.name.trim().chars().count() < 2 {
        errors.push(FieldError::new("name", "must be at least 2 characters"));
    }
    if !looks_like_email(request.email.trim()) {
        errors.push(FieldError::new("email", "must be a valid email address"));
    }
    if request.phone.trim().chars().count() < 10 {
        errors.push(FieldError::new("phone", "must be at least 10 characters"));
    }
    if request.concerns.trim().chars().count() < 10 {
        errors.push(FieldError::new("concerns", "must be at least 10 characters"));
    }

    errors
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, rest)| !host.is_empty() && !rest.is_empty() && !rest.ends_with('.'))
}

/// Error raised by the consultation service.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("invalid consultation request")]
    Invalid(Vec<FieldError>),
    #[error("practitioner {0} not found")]
    PractitionerNotFound(PractitionerId),
    #[error("the selected time is no longer available")]
    SlotTaken,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_check() {
        assert!(looks_like_email("asha@example.com"));
        assert!(looks_like_email("a.b@mail.example.in"));
        assert!(!looks_like_email("asha.example.com"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("asha@example"));
        assert!(!looks_like_email("asha@.com"));
        assert!(!looks_like_email("asha@example."));
        assert!(!looks_like_email("as ha@example.com"));
    }
}
