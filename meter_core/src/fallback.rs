use chrono::{Duration, NaiveDate};

use crate::models::UsagePoint;

/// Length of every daily series, real or synthetic.
pub const SERIES_DAYS: usize = 30;

/// Placeholder daily series for the 30 days ending `today`, oldest first.
///
/// Deterministic for a given seed and date: a smooth periodic curve
/// floored at 0.1 and rounded to cents. Used whenever an upstream cannot
/// supply a real per-day breakdown.
pub fn fallback_daily(seed: u32, today: NaiveDate) -> Vec<UsagePoint> {
    (0..SERIES_DAYS)
        .map(|i| {
            let day = today - Duration::days((SERIES_DAYS - 1 - i) as i64);
            let raw = ((i as f64 + seed as f64) / 3.0).sin() * 4.0 + 6.0;
            UsagePoint {
                date: day.format("%m-%d").to_string(),
                value: round2(raw.max(0.1)),
            }
        })
        .collect()
}

/// Round a monetary figure to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
