//! Practitioner directory and consultation booking on a weekday half-hour grid.

pub mod domain;
pub mod repository;
pub mod router;
pub mod schedule;
pub mod service;

pub use domain::{
    Booking, BookingId, BookingRequest, DayAvailability, NewPractitioner, Practitioner,
    PractitionerId,
};
pub use repository::{
    default_practitioners, BookingRepository, PractitionerDirectory, PractitionerWriter,
};
pub use router::consultation_router;
pub use schedule::ConsultationSchedule;
pub use service::{BookingError, BookingIdSource, Clock, ConsultationService};
