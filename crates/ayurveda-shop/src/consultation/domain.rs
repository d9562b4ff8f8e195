use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Identifier wrapper for practitioners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PractitionerId(pub u32);

impl fmt::Display for PractitionerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Practitioner {
    pub id: PractitionerId,
    pub name: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    /// Session length in minutes.
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPractitioner {
    pub name: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
    pub duration: u32,
}

impl NewPractitioner {
    pub fn into_practitioner(self, id: PractitionerId) -> Practitioner {
        Practitioner {
            id,
            name: self.name,
            title: self.title,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
            duration: self.duration,
        }
    }
}

/// Booking reference handed back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Consultation form as submitted by the storefront. Date and time stay raw until validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(deserialize_with = "deserialize_practitioner_id")]
    pub practitioner_id: PractitionerId,
    pub date: String,
    pub time: String,
    pub concerns: String,
}

/// Confirmed consultation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub practitioner_id: PractitionerId,
    pub practitioner_name: String,
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    #[serde(serialize_with = "serialize_slot_time")]
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub fee: f64,
    pub concerns: String,
}

impl Booking {
    pub fn ends_at(&self) -> NaiveTime {
        self.time + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Whether a session of `duration_minutes` starting at `start` on `date` would overlap.
    pub fn overlaps(&self, date: NaiveDate, start: NaiveTime, duration_minutes: u32) -> bool {
        if self.date != date {
            return false;
        }
        let end = start + Duration::minutes(i64::from(duration_minutes));
        start < self.ends_at() && self.time < end
    }
}

/// Open slots for one day of a practitioner's calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub times: Vec<String>,
}

pub(crate) fn format_slot(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn serialize_slot_time<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_slot(*time))
}

/// The storefront form posts the practitioner id as a string; API clients may send a number.
fn deserialize_practitioner_id<'de, D>(deserializer: D) -> Result<PractitionerId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(PractitionerId(id)),
        RawId::Text(raw) => raw
            .trim()
            .parse::<u32>()
            .map(PractitionerId)
            .map_err(|_| serde::de::Error::custom(format!("invalid practitioner id '{raw}'"))),
    }
}
