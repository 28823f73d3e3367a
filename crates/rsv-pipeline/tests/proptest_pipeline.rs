//! Property tests for the view pipeline.

use proptest::prelude::*;
use rsv_model::{ReservationField, SortDirection, SortState, ViewerZone};
use rsv_pipeline::{compare, normalize_records, search, sort_reservations};
use serde_json::{Value, json};

fn field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        "[a-cA-C]{1,3}".prop_map(Value::from),
        (0i64..100).prop_map(Value::from),
    ]
}

fn date_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!("")),
        Just(json!("not a date")),
        (1u32..=28, 0u32..24).prop_map(|(d, h)| json!(format!("2024-01-{d:02}T{h:02}:00"))),
    ]
}

prop_compose! {
    fn raw_record()(
        date in date_value(),
        store in field_value(),
        cast in field_value(),
        name in field_value(),
        phone in field_value(),
        email in field_value(),
        seq in 0usize..10_000,
    ) -> Value {
        json!({
            "日付": date,
            "店舗": store,
            "キャスト": cast,
            "名前": name,
            "電話番号": phone,
            "メール": email,
            "seq": seq,
        })
    }
}

fn sort_key() -> impl Strategy<Value = ReservationField> {
    proptest::sample::select(ReservationField::ALL.to_vec())
}

proptest! {
    #[test]
    fn normalized_records_have_all_required_fields(raw in prop::collection::vec(raw_record(), 0..30)) {
        let (records, report) = normalize_records(&raw, ViewerZone::utc());
        prop_assert_eq!(report.accepted + report.dropped, raw.len());
        for record in &records {
            for field in ReservationField::REQUIRED {
                prop_assert!(record.text(field).is_some_and(|v| !v.is_empty()));
            }
        }
    }

    #[test]
    fn normalization_preserves_relative_order(raw in prop::collection::vec(raw_record(), 0..30)) {
        // Tag each record's phone with its index so order is observable
        let tagged: Vec<Value> = raw
            .into_iter()
            .enumerate()
            .map(|(i, mut record)| {
                if record["電話番号"].is_string() && record["電話番号"] != "" {
                    record["電話番号"] = json!(format!("{i:04}"));
                }
                record
            })
            .collect();
        let (records, _) = normalize_records(&tagged, ViewerZone::utc());
        let order: Vec<&str> = records.iter().map(|r| r.phone_number.as_str()).collect();
        let numeric: Vec<&str> = order.iter().copied().filter(|p| p.len() == 4).collect();
        let mut numeric_sorted = numeric.clone();
        numeric_sorted.sort_unstable();
        prop_assert_eq!(numeric, numeric_sorted);
    }

    #[test]
    fn sort_is_stable_and_ordered(
        raw in prop::collection::vec(raw_record(), 0..30),
        key in sort_key(),
        descending in any::<bool>(),
    ) {
        let (mut records, _) = normalize_records(&raw, ViewerZone::utc());
        // Position tag lives in the email slot for stability checks
        for (i, record) in records.iter_mut().enumerate() {
            record.email = Some(format!("{i:04}"));
        }
        let key = if key == ReservationField::Email { ReservationField::Store } else { key };

        let mut state = SortState::new();
        state.toggle(key);
        if descending {
            state.toggle(key);
        }
        let direction = state.direction();
        sort_reservations(&mut records, &state);

        for pair in records.windows(2) {
            let ordering = compare(&pair[0], &pair[1], key, direction);
            prop_assert_ne!(ordering, std::cmp::Ordering::Greater);
            if ordering == std::cmp::Ordering::Equal {
                prop_assert!(pair[0].email < pair[1].email);
            }
        }
    }

    #[test]
    fn descending_reverses_ascending(
        raw in prop::collection::vec(raw_record(), 0..30),
        key in sort_key(),
    ) {
        let (records, _) = normalize_records(&raw, ViewerZone::utc());
        for a in &records {
            for b in &records {
                prop_assert_eq!(
                    compare(a, b, key, SortDirection::Descending),
                    compare(a, b, key, SortDirection::Ascending).reverse()
                );
            }
        }
    }

    #[test]
    fn search_returns_ordered_subset(
        raw in prop::collection::vec(raw_record(), 0..30),
        term in "[a-cA-C0-9]{0,2}",
    ) {
        let (records, _) = normalize_records(&raw, ViewerZone::utc());
        let found = search(&records, &term);
        let lower = term.to_lowercase();

        let expected: Vec<_> = records
            .iter()
            .filter(|r| r.field_values().any(|(_, v)| v.to_lowercase().contains(&lower)))
            .cloned()
            .collect();
        prop_assert_eq!(found, expected);
    }
}
