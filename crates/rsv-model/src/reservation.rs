//! The canonical reservation entity.

use serde::Serialize;

use crate::date::ReservationDate;
use crate::field::ReservationField;

/// One element of the remote JSON array, before validation.
///
/// Expected to be an object keyed by wire labels; anything else is dropped
/// during normalization.
pub type RawRecord = serde_json::Value;

/// A validated reservation.
///
/// Serializes with the wire labels, in canonical field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    #[serde(rename = "日付")]
    pub date: ReservationDate,
    #[serde(rename = "店舗")]
    pub store: String,
    #[serde(rename = "キャスト")]
    pub cast: String,
    #[serde(rename = "指名")]
    pub appointment_type: Option<String>,
    #[serde(rename = "名前")]
    pub customer_name: String,
    #[serde(rename = "電話番号")]
    pub phone_number: String,
    #[serde(rename = "メール")]
    pub email: Option<String>,
}

impl Reservation {
    /// Text value of a field. The date yields its raw text; absent optional
    /// fields yield `None`.
    #[must_use]
    pub fn text(&self, field: ReservationField) -> Option<&str> {
        match field {
            ReservationField::Date => Some(self.date.raw()),
            ReservationField::Store => Some(&self.store),
            ReservationField::Cast => Some(&self.cast),
            ReservationField::AppointmentType => self.appointment_type.as_deref(),
            ReservationField::CustomerName => Some(&self.customer_name),
            ReservationField::PhoneNumber => Some(&self.phone_number),
            ReservationField::Email => self.email.as_deref(),
        }
    }

    /// Present field values in canonical order.
    pub fn field_values(&self) -> impl Iterator<Item = (ReservationField, &str)> {
        ReservationField::ALL
            .into_iter()
            .filter_map(|field| self.text(field).map(|value| (field, value)))
    }
}
