use std::collections::BTreeSet;

use proptest::prelude::*;
use rusty_outliers::{
    find_outliers, Dataset, IqrParams, OutlierMethod, Partition, QuantileParams, Value,
    ZScoreParams,
};

/// Integer-valued column with occasional gaps.
fn column() -> impl Strategy<Value = Vec<Option<i64>>> {
    prop::collection::vec(prop::option::weighted(0.9, -1_000i64..1_000), 0..60)
}

fn dataset(values: &[Option<i64>]) -> Dataset {
    Dataset::from_columns(vec![(
        "x",
        values
            .iter()
            .map(|v| v.map_or(Value::Null, Value::Integer))
            .collect(),
    )])
    .unwrap()
}

fn method() -> impl Strategy<Value = OutlierMethod> {
    prop_oneof![
        (0.0f64..5.0, 0.0f64..5.0)
            .prop_map(|(left, right)| OutlierMethod::Iqr(IqrParams { left, right, log_scale: false })),
        (0.0f64..5.0, 0.0f64..5.0)
            .prop_map(|(left, right)| OutlierMethod::ZScore(ZScoreParams { left, right, log_scale: false })),
        (0.0f64..0.5, 0.5f64..1.0)
            .prop_map(|(left, right)| OutlierMethod::Quantile(QuantileParams { left, right })),
    ]
}

/// Non-negative column, always inside the `ln(x + 1)` domain.
fn log_column() -> impl Strategy<Value = Vec<Option<i64>>> {
    prop::collection::vec(prop::option::weighted(0.9, 0i64..100_000), 0..60)
}

fn log_method() -> impl Strategy<Value = OutlierMethod> {
    prop_oneof![
        (0.0f64..5.0, 0.0f64..5.0)
            .prop_map(|(left, right)| OutlierMethod::Iqr(IqrParams { left, right, log_scale: true })),
        (0.0f64..5.0, 0.0f64..5.0)
            .prop_map(|(left, right)| OutlierMethod::ZScore(ZScoreParams { left, right, log_scale: true })),
    ]
}

fn ids(ds: &Dataset) -> BTreeSet<usize> {
    ds.indices().into_iter().collect()
}

fn check_partition(ds: &Dataset, part: &Partition) {
    let outliers = ids(&part.outliers);
    let cleaned = ids(&part.cleaned);
    let excluded: BTreeSet<usize> = part.excluded.iter().copied().collect();

    assert!(outliers.is_disjoint(&cleaned));
    assert!(outliers.is_disjoint(&excluded));
    assert!(cleaned.is_disjoint(&excluded));
    assert_eq!(outliers.len() + cleaned.len() + excluded.len(), ds.len());
    assert_eq!(part.outliers.column_names, ds.column_names);
    assert_eq!(part.cleaned.column_names, ds.column_names);
}

proptest! {
    #[test]
    fn every_row_lands_in_exactly_one_place(values in column(), method in method()) {
        let ds = dataset(&values);
        let part = find_outliers(&ds, "x", &method).unwrap();
        check_partition(&ds, &part);

        // excluded rows are exactly the missing ones plus exact bound hits
        for (i, v) in values.iter().enumerate() {
            let on_bound = v.is_some_and(|v| {
                let v = v as f64;
                v == part.bounds.lower || v == part.bounds.upper
            });
            let expect_excluded = v.is_none() || on_bound
                || (v.is_some() && part.bounds.lower.is_nan());
            prop_assert_eq!(part.excluded.contains(&i), expect_excluded);
        }
    }

    #[test]
    fn log_scale_rows_land_in_exactly_one_place(values in log_column(), method in log_method()) {
        let ds = dataset(&values);
        let part = find_outliers(&ds, "x", &method).unwrap();
        check_partition(&ds, &part);

        for (i, v) in values.iter().enumerate() {
            let Some(v) = v else {
                prop_assert!(part.excluded.contains(&i));
                continue;
            };
            let x = (*v as f64).ln_1p();
            let expected = if part.bounds.lower.is_nan() || x == part.bounds.lower || x == part.bounds.upper {
                "excluded"
            } else if x < part.bounds.lower || x > part.bounds.upper {
                "outlier"
            } else {
                "cleaned"
            };
            let actual = if part.excluded.contains(&i) {
                "excluded"
            } else if part.outliers.indices().contains(&i) {
                "outlier"
            } else {
                "cleaned"
            };
            prop_assert_eq!(actual, expected);
        }

        // output rows carry the raw integers, not their logarithms
        for row in part.outliers.rows.iter().chain(&part.cleaned.rows) {
            prop_assert_eq!(row.get("x"), &Value::Integer(values[row.index].unwrap()));
        }

        let again = find_outliers(&ds, "x", &method).unwrap();
        prop_assert_eq!(again.outliers.indices(), part.outliers.indices());
        prop_assert_eq!(again.cleaned.indices(), part.cleaned.indices());
        prop_assert_eq!(again.excluded, part.excluded);
    }

    #[test]
    fn repeated_calls_agree(values in column(), method in method()) {
        let ds = dataset(&values);
        let first = find_outliers(&ds, "x", &method).unwrap();
        let second = find_outliers(&ds, "x", &method).unwrap();
        prop_assert_eq!(first.outliers.indices(), second.outliers.indices());
        prop_assert_eq!(first.cleaned.indices(), second.cleaned.indices());
    }

    #[test]
    fn wider_iqr_fences_never_add_outliers(
        values in column(),
        left in 0.0f64..5.0,
        right in 0.0f64..5.0,
        extra in 0.0f64..5.0,
    ) {
        let ds = dataset(&values);
        let narrow = IqrParams { left, right, log_scale: false };
        let wide = IqrParams { left: left + extra, right: right + extra, log_scale: false };
        let narrow = find_outliers(&ds, "x", &OutlierMethod::Iqr(narrow)).unwrap();
        let wide = find_outliers(&ds, "x", &OutlierMethod::Iqr(wide)).unwrap();
        prop_assert!(ids(&wide.outliers).is_subset(&ids(&narrow.outliers)));
    }

    #[test]
    fn wider_sigma_fences_never_add_outliers(
        values in column(),
        left in 0.0f64..5.0,
        right in 0.0f64..5.0,
        extra in 0.0f64..5.0,
    ) {
        let ds = dataset(&values);
        let narrow = ZScoreParams { left, right, log_scale: false };
        let wide = ZScoreParams { left: left + extra, right: right + extra, log_scale: false };
        let narrow = find_outliers(&ds, "x", &OutlierMethod::ZScore(narrow)).unwrap();
        let wide = find_outliers(&ds, "x", &OutlierMethod::ZScore(wide)).unwrap();
        prop_assert!(wide.outliers.len() <= narrow.outliers.len());
    }

    #[test]
    fn wider_quantile_range_never_adds_outliers(
        values in column(),
        left in 0.0f64..0.5,
        right in 0.5f64..1.0,
        shrink in 0.0f64..1.0,
    ) {
        let ds = dataset(&values);
        let narrow = QuantileParams { left, right };
        let wide = QuantileParams { left: left * shrink, right: right + (1.0 - right) * shrink };
        let narrow = find_outliers(&ds, "x", &OutlierMethod::Quantile(narrow)).unwrap();
        let wide = find_outliers(&ds, "x", &OutlierMethod::Quantile(wide)).unwrap();
        prop_assert!(wide.outliers.len() <= narrow.outliers.len());
    }
}
