//! Raw record validation and shaping.
//!
//! A raw record is kept only when the date, store, cast, customer name and
//! phone number are all present and non-empty. Anything else in the payload is
//! stripped. Dropping a record is not an error.

use rsv_model::{RawRecord, Reservation, ReservationDate, ReservationField, ViewerZone};
use serde_json::{Map, Value};

/// Counts from one normalization pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeReport {
    /// Records kept.
    pub accepted: usize,
    /// Records dropped for missing required fields.
    pub dropped: usize,
}

/// Normalize a whole payload, preserving the relative order of valid records.
pub fn normalize_records(
    raw: &[RawRecord],
    zone: ViewerZone,
) -> (Vec<Reservation>, NormalizeReport) {
    let records: Vec<Reservation> = raw
        .iter()
        .filter_map(|record| normalize_record(record, zone))
        .collect();

    let report = NormalizeReport {
        accepted: records.len(),
        dropped: raw.len() - records.len(),
    };

    tracing::debug!(
        accepted = report.accepted,
        dropped = report.dropped,
        "Normalized reservation records"
    );

    (records, report)
}

/// Normalize one raw record, `None` when it is not a valid reservation.
pub fn normalize_record(raw: &RawRecord, zone: ViewerZone) -> Option<Reservation> {
    let object = raw.as_object()?;

    Some(Reservation {
        date: date_value(object, zone)?,
        store: field_text(object, ReservationField::Store)?,
        cast: field_text(object, ReservationField::Cast)?,
        appointment_type: field_text(object, ReservationField::AppointmentType),
        customer_name: field_text(object, ReservationField::CustomerName)?,
        phone_number: field_text(object, ReservationField::PhoneNumber)?,
        email: field_text(object, ReservationField::Email),
    })
}

/// Text form of a field value, `None` when absent or empty.
fn field_text(object: &Map<String, Value>, field: ReservationField) -> Option<String> {
    object.get(field.wire_label()).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Numeric dates are epoch milliseconds.
fn date_value(object: &Map<String, Value>, zone: ViewerZone) -> Option<ReservationDate> {
    match object.get(ReservationField::Date.wire_label())? {
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(ReservationDate::parse(s.as_str(), zone)),
        Value::Number(n) => match n.as_i64() {
            Some(millis) => Some(ReservationDate::from_epoch_millis(millis, zone)),
            None => n
                .as_f64()
                .filter(|f| f.is_finite())
                .map(|f| ReservationDate::from_epoch_millis(f as i64, zone)),
        },
        Value::Bool(b) => Some(ReservationDate::parse(b.to_string(), zone)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn zone() -> ViewerZone {
        ViewerZone::utc()
    }

    #[test]
    fn test_drops_record_with_empty_date() {
        let raw = vec![
            json!({"日付": "2024-01-05T10:00", "店舗": "A", "キャスト": "X", "名前": "Taro", "電話番号": "090-1"}),
            json!({"日付": "", "店舗": "B", "キャスト": "Y", "名前": "Jiro", "電話番号": "090-2"}),
        ];
        let (records, report) = normalize_records(&raw, zone());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer_name, "Taro");
        assert_eq!(report, NormalizeReport { accepted: 1, dropped: 1 });
    }

    #[test]
    fn test_each_required_field_is_enforced() {
        let full = json!({"日付": "2024-01-05", "店舗": "A", "キャスト": "X", "名前": "Taro", "電話番号": "090-1"});
        assert!(normalize_record(&full, zone()).is_some());

        for field in ReservationField::REQUIRED {
            let mut missing = full.clone();
            missing.as_object_mut().unwrap().remove(field.wire_label());
            assert!(normalize_record(&missing, zone()).is_none(), "{field:?}");

            let mut null = full.clone();
            null[field.wire_label()] = Value::Null;
            assert!(normalize_record(&null, zone()).is_none(), "{field:?}");
        }
    }

    #[test]
    fn test_optional_fields_and_extra_keys() {
        let raw = json!({
            "日付": "2024-01-05", "店舗": "A", "キャスト": "X", "名前": "Taro",
            "電話番号": "090-1", "指名": "本指名", "メール": "", "備考": "ignored"
        });
        let record = normalize_record(&raw, zone()).unwrap();
        assert_eq!(record.appointment_type.as_deref(), Some("本指名"));
        assert_eq!(record.email, None);

        let serialized = serde_json::to_value(&record).unwrap();
        assert!(serialized.get("備考").is_none());
        assert_eq!(serialized.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_scalar_coercion() {
        let raw = json!({"日付": "2024-01-05", "店舗": "A", "キャスト": "X", "名前": "Taro", "電話番号": 9012345678_u64});
        let record = normalize_record(&raw, zone()).unwrap();
        assert_eq!(record.phone_number, "9012345678");

        let zero = json!({"日付": "2024-01-05", "店舗": 0, "キャスト": "X", "名前": "Taro", "電話番号": "1"});
        assert_eq!(normalize_record(&zero, zone()).unwrap().store, "0");

        let nested = json!({"日付": "2024-01-05", "店舗": ["A"], "キャスト": "X", "名前": "Taro", "電話番号": "1"});
        assert!(normalize_record(&nested, zone()).is_none());
    }

    #[test]
    fn test_unparseable_date_is_kept() {
        let raw = json!({"日付": "someday", "店舗": "A", "キャスト": "X", "名前": "Taro", "電話番号": "1"});
        let record = normalize_record(&raw, zone()).unwrap();
        assert!(!record.date.is_parsed());
    }

    #[test]
    fn test_numeric_date_is_epoch_millis() {
        let raw = json!({"日付": 1_704_416_400_000_i64, "店舗": "A", "キャスト": "X", "名前": "Taro", "電話番号": "1"});
        let record = normalize_record(&raw, zone()).unwrap();
        assert_eq!(
            record.date.calendar_day().map(|d| d.to_string()),
            Some("2024-01-05".to_string())
        );
    }

    #[test]
    fn test_non_objects_dropped() {
        let raw = vec![json!("row"), json!(42), Value::Null];
        let (records, report) = normalize_records(&raw, zone());
        assert!(records.is_empty());
        assert_eq!(report.dropped, 3);
    }
}
