use chrono::NaiveDate;
use meter_core::{fallback_daily, ProviderKind, SERIES_DAYS};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 24).unwrap()
}

#[test]
fn series_has_30_ordered_points_ending_today() {
    // Arrange & Act
    let series = fallback_daily(3, today());

    // Assert
    assert_eq!(series.len(), SERIES_DAYS);
    assert_eq!(series.first().unwrap().date, "07-26");
    assert_eq!(series.last().unwrap().date, "08-24");
}

#[test]
fn values_are_floored_and_rounded() {
    let series = fallback_daily(1, today());

    for point in &series {
        assert!(point.value >= 0.1, "value {} below floor", point.value);
        let cents = point.value * 100.0;
        assert!(
            (cents - cents.round()).abs() < 1e-9,
            "value {} not rounded to cents",
            point.value
        );
    }
}

#[test]
fn same_seed_same_day_is_deterministic() {
    assert_eq!(fallback_daily(4, today()), fallback_daily(4, today()));
}

#[test]
fn provider_seeds_yield_pairwise_distinct_series() {
    let all: Vec<_> = ProviderKind::ALL
        .iter()
        .map(|kind| fallback_daily(kind.seed(), today()))
        .collect();

    for (i, left) in all.iter().enumerate() {
        for right in &all[i + 1..] {
            assert_ne!(left, right, "two providers share a fallback curve");
        }
    }
}
