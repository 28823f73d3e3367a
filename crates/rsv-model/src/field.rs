//! Canonical reservation fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven canonical reservation fields.
///
/// The declaration order is the canonical column order exposed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationField {
    /// Appointment timestamp.
    Date,
    /// Store label.
    Store,
    /// Service provider label.
    Cast,
    /// Appointment type (optional).
    AppointmentType,
    /// Customer name.
    CustomerName,
    /// Customer phone number.
    PhoneNumber,
    /// Customer email (optional).
    Email,
}

impl ReservationField {
    /// All fields in canonical order.
    pub const ALL: [ReservationField; 7] = [
        Self::Date,
        Self::Store,
        Self::Cast,
        Self::AppointmentType,
        Self::CustomerName,
        Self::PhoneNumber,
        Self::Email,
    ];

    /// Fields that must be present and non-empty for a record to be valid.
    pub const REQUIRED: [ReservationField; 5] = [
        Self::Date,
        Self::Store,
        Self::Cast,
        Self::CustomerName,
        Self::PhoneNumber,
    ];

    /// Key used for this field in the remote JSON payload.
    #[must_use]
    pub const fn wire_label(&self) -> &'static str {
        match self {
            Self::Date => "日付",
            Self::Store => "店舗",
            Self::Cast => "キャスト",
            Self::AppointmentType => "指名",
            Self::CustomerName => "名前",
            Self::PhoneNumber => "電話番号",
            Self::Email => "メール",
        }
    }

    /// Column header shown to the user.
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Date => "日付",
            Self::Store => "店舗",
            Self::Cast => "キャスト",
            Self::AppointmentType => "指名タイプ",
            Self::CustomerName => "お名前",
            Self::PhoneNumber => "電話番号",
            Self::Email => "メール",
        }
    }

    /// Whether the field is required for a valid record.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !matches!(self, Self::AppointmentType | Self::Email)
    }

    /// Look up a field by its wire label.
    #[must_use]
    pub fn from_wire_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.wire_label() == label)
    }
}

impl fmt::Display for ReservationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_matches_flag() {
        for field in ReservationField::ALL {
            assert_eq!(
                field.is_required(),
                ReservationField::REQUIRED.contains(&field),
                "{field:?}"
            );
        }
    }

    #[test]
    fn test_wire_label_lookup() {
        assert_eq!(
            ReservationField::from_wire_label("電話番号"),
            Some(ReservationField::PhoneNumber)
        );
        assert_eq!(ReservationField::from_wire_label("phone"), None);
    }

    #[test]
    fn test_display_uses_column_header() {
        assert_eq!(ReservationField::AppointmentType.to_string(), "指名タイプ");
        assert_eq!(ReservationField::CustomerName.to_string(), "お名前");
    }
}
