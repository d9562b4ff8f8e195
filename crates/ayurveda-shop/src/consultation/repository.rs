use chrono::NaiveDate;

use super::domain::{Booking, NewPractitioner, Practitioner, PractitionerId};
use crate::store::RepositoryError;

/// Read access to the practitioner directory.
pub trait PractitionerDirectory: Send + Sync {
    fn all_practitioners(&self) -> Result<Vec<Practitioner>, RepositoryError>;
    fn practitioner(&self, id: PractitionerId) -> Result<Option<Practitioner>, RepositoryError>;
}

pub trait PractitionerWriter: Send + Sync {
    fn insert_practitioner(
        &self,
        practitioner: NewPractitioner,
    ) -> Result<Practitioner, RepositoryError>;
}

/// Storage for confirmed consultations.
pub trait BookingRepository: Send + Sync {
    /// Fails with [`RepositoryError::Conflict`] when the session overlaps an existing
    /// booking for the same practitioner.
    fn insert_booking(&self, booking: Booking) -> Result<Booking, RepositoryError>;
    fn bookings_on(
        &self,
        practitioner: PractitionerId,
        date: NaiveDate,
    ) -> Result<Vec<Booking>, RepositoryError>;
}

pub fn default_practitioners() -> Vec<NewPractitioner> {
    vec![
        NewPractitioner {
            name: "Dr. Amrita Patel".to_string(),
            title: "Ayurvedic Physician".to_string(),
            description: "Specializes in women's health, skin conditions, and stress management \
                through Ayurvedic principles."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2".to_string(),
            price: 120.0,
            duration: 60,
        },
        NewPractitioner {
            name: "Dr. Raj Sharma".to_string(),
            title: "Holistic Nutritionist".to_string(),
            description: "Expert in digestive disorders, metabolic health, and dosha-specific \
                dietary protocols."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1622253692010-333f2da6031d".to_string(),
            price: 95.0,
            duration: 45,
        },
        NewPractitioner {
            name: "Maya Johnson".to_string(),
            title: "Wellness Coach".to_string(),
            description: "Focuses on lifestyle optimization, stress reduction, and mind-body \
                practices for balance."
                .to_string(),
            image_url: "https://images.unsplash.com/photo-1594824476967-48c8b964273f".to_string(),
            price: 85.0,
            duration: 60,
        },
    ]
}
