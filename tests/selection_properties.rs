// tests/selection_properties.rs

use proptest::prelude::*;
use rhobatch::table::{ModulusRecord, Selection, select_records};
use rhobatch_test_utils::builders::CsvBuilder;

const SELECTION: Selection<'static> = Selection {
    skip_rows: 31,
    name_column: "ModulusName",
    value_column: "Modulus",
};

// Fields may be empty; no commas or quotes so rows need no escaping.
fn rows_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec(("[A-Za-z0-9-]{0,4}", "[0-9]{0,6}"), 0..80)
}

fn table(rows: &[(String, String)]) -> String {
    rows.iter()
        .fold(CsvBuilder::new(), |b, (name, value)| b.row(&[name.as_str(), value.as_str()]))
        .build()
}

proptest! {
    #[test]
    fn selected_count_is_bounded_by_rows_after_the_skip_block(rows in rows_strategy()) {
        let report = select_records(table(&rows).as_bytes(), &SELECTION).unwrap();

        prop_assert_eq!(report.rows_read, rows.len());
        prop_assert!(report.records.len() <= rows.len().saturating_sub(31));
    }

    #[test]
    fn eligible_rows_are_kept_iff_complete_and_in_order(rows in rows_strategy()) {
        let report = select_records(table(&rows).as_bytes(), &SELECTION).unwrap();

        let expected: Vec<ModulusRecord> = rows
            .iter()
            .skip(31)
            .filter(|(name, value)| !name.is_empty() && !value.is_empty())
            .map(|(name, value)| ModulusRecord::new(name.as_str(), value.as_str()))
            .collect();

        prop_assert_eq!(
            report.skipped_incomplete,
            rows.len().saturating_sub(31) - expected.len()
        );
        prop_assert_eq!(report.records, expected);
    }
}
