//! Reduce 3-hourly forecast samples to per-day summaries.
//!
//! Samples are bucketed by calendar date in a caller-supplied time zone. The
//! production path uses the host's local zone rather than the city's own,
//! so samples near midnight can land on a neighbouring day for distant cities.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, TimeZone};

use crate::model::{Condition, DailyForecast, Forecast, ForecastSample};

/// At most this many days are reported; later days are dropped.
pub const MAX_DAYS: usize = 5;

/// Aggregate a fetched forecast using the host's local time zone.
pub fn aggregate_local(forecast: Option<&Forecast>) -> Vec<DailyForecast> {
    match forecast {
        Some(f) => aggregate_daily(&f.samples, &Local),
        None => Vec::new(),
    }
}

pub fn aggregate_daily<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> Vec<DailyForecast> {
    let mut buckets: BTreeMap<NaiveDate, Vec<&ForecastSample>> = BTreeMap::new();

    for sample in samples {
        let date = sample.timestamp.with_timezone(tz).date_naive();
        buckets.entry(date).or_default().push(sample);
    }

    buckets
        .into_iter()
        .take(MAX_DAYS)
        .filter_map(|(date, bucket)| summarize(date, &bucket))
        .collect()
}

fn summarize(date: NaiveDate, bucket: &[&ForecastSample]) -> Option<DailyForecast> {
    let first = bucket.first()?;
    let n = bucket.len() as f64;

    let mut temp_min = f64::INFINITY;
    let mut temp_max = f64::NEG_INFINITY;
    let mut temp_sum = 0.0;
    let mut humidity_sum = 0.0;
    let mut wind_sum = 0.0;

    for s in bucket {
        temp_min = temp_min.min(s.temperature_c);
        temp_max = temp_max.max(s.temperature_c);
        temp_sum += s.temperature_c;
        humidity_sum += f64::from(s.humidity_pct);
        wind_sum += s.wind_speed_mps;
    }

    let condition = dominant_condition(bucket.iter().map(|s| &s.condition))?;

    Some(DailyForecast {
        date,
        temp_min_c: temp_min,
        temp_max_c: temp_max,
        temp_avg_c: temp_sum / n,
        humidity_avg_pct: humidity_sum / n,
        wind_speed_avg_mps: wind_sum / n,
        condition,
        description: first.description.clone(),
        sample_count: bucket.len(),
    })
}

/// Most frequent condition. Ties go to whichever was seen first.
pub fn dominant_condition<'a>(
    conditions: impl IntoIterator<Item = &'a Condition>,
) -> Option<Condition> {
    // insertion-ordered tally
    let mut tally: Vec<(&Condition, usize)> = Vec::new();
    for c in conditions {
        match tally.iter_mut().find(|(seen, _)| *seen == c) {
            Some((_, count)) => *count += 1,
            None => tally.push((c, 1)),
        }
    }

    let mut best: Option<(&Condition, usize)> = None;
    for (c, count) in tally {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((c, count));
        }
    }

    best.map(|(c, _)| c.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, FixedOffset, Utc};

    fn sample(ts: DateTime<Utc>, temp: f64, condition: &str) -> ForecastSample {
        ForecastSample {
            timestamp: ts,
            temperature_c: temp,
            feels_like_c: temp,
            humidity_pct: 50,
            wind_speed_mps: 2.0,
            condition: Condition::from(condition),
            description: format!("{condition} desc"),
        }
    }

    fn day_start(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 0, 0, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn no_samples_no_days() {
        assert!(aggregate_daily(&[], &Utc).is_empty());
        assert!(aggregate_local(None).is_empty());
        assert!(aggregate_local(Some(&Forecast::default())).is_empty());
    }

    #[test]
    fn min_max_avg_over_bucket() {
        let samples = vec![
            sample(day_start(1), 10.0, "Clear"),
            sample(day_start(1) + Duration::hours(3), 20.0, "Clear"),
            sample(day_start(1) + Duration::hours(6), 15.0, "Clear"),
        ];

        let days = aggregate_daily(&samples, &Utc);
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].temp_min_c, 10.0);
        assert_eq!(days[0].temp_max_c, 20.0);
        assert_eq!(days[0].temp_avg_c, 15.0);
        assert_eq!(days[0].sample_count, 3);
    }

    #[test]
    fn humidity_and_wind_are_averaged() {
        let mut a = sample(day_start(1), 0.0, "Clear");
        a.humidity_pct = 40;
        a.wind_speed_mps = 1.0;
        let mut b = sample(day_start(1) + Duration::hours(3), 0.0, "Clear");
        b.humidity_pct = 61;
        b.wind_speed_mps = 4.0;

        let days = aggregate_daily(&[a, b], &Utc);
        assert_eq!(days[0].humidity_avg_pct, 50.5);
        assert_eq!(days[0].wind_speed_avg_mps, 2.5);
    }

    #[test]
    fn majority_condition_wins() {
        let samples = vec![
            sample(day_start(1), 0.0, "Rain"),
            sample(day_start(1) + Duration::hours(3), 0.0, "Rain"),
            sample(day_start(1) + Duration::hours(6), 0.0, "Clouds"),
        ];

        let days = aggregate_daily(&samples, &Utc);
        assert_eq!(days[0].condition, Condition::Rain);
    }

    #[test]
    fn tie_goes_to_first_seen_condition() {
        let samples = vec![
            sample(day_start(1), 0.0, "Clouds"),
            sample(day_start(1) + Duration::hours(3), 0.0, "Rain"),
        ];
        assert_eq!(aggregate_daily(&samples, &Utc)[0].condition, Condition::Clouds);

        let samples = vec![
            sample(day_start(1), 0.0, "Rain"),
            sample(day_start(1) + Duration::hours(3), 0.0, "Clouds"),
        ];
        assert_eq!(aggregate_daily(&samples, &Utc)[0].condition, Condition::Rain);
    }

    #[test]
    fn later_majority_beats_earlier_single() {
        let conditions = [
            Condition::Snow,
            Condition::Clear,
            Condition::Clear,
            Condition::Snow,
            Condition::Clear,
        ];
        assert_eq!(dominant_condition(&conditions), Some(Condition::Clear));
        assert_eq!(dominant_condition(std::iter::empty()), None);
    }

    #[test]
    fn description_comes_from_first_sample() {
        let samples = vec![
            sample(day_start(1), 0.0, "Clouds"),
            sample(day_start(1) + Duration::hours(3), 0.0, "Rain"),
            sample(day_start(1) + Duration::hours(6), 0.0, "Rain"),
        ];

        let day = &aggregate_daily(&samples, &Utc)[0];
        assert_eq!(day.condition, Condition::Rain);
        assert_eq!(day.description, "Clouds desc");
    }

    #[test]
    fn keeps_five_earliest_days_in_order() {
        // fed newest first to make sure ordering comes from the date, not the input
        let samples: Vec<_> = (1..=7)
            .rev()
            .map(|d| sample(day_start(d) + Duration::hours(12), d as f64, "Clear"))
            .collect();

        let days = aggregate_daily(&samples, &Utc);
        let dates: Vec<_> = days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(1), date(2), date(3), date(4), date(5)]);
    }

    #[test]
    fn two_days_of_eight_samples() {
        let mut samples = Vec::new();
        for i in 0..8 {
            samples.push(sample(day_start(1) + Duration::hours(3 * i), i as f64, "Clear"));
        }
        for i in 0..8 {
            samples.push(sample(
                day_start(2) + Duration::hours(3 * i),
                10.0 + i as f64,
                "Clouds",
            ));
        }

        let days = aggregate_daily(&samples, &Utc);
        assert_eq!(days.len(), 2);

        assert_eq!(days[0].date, date(1));
        assert_eq!(days[0].temp_min_c, 0.0);
        assert_eq!(days[0].temp_max_c, 7.0);
        assert_eq!(days[0].temp_avg_c, 3.5);

        assert_eq!(days[1].date, date(2));
        assert_eq!(days[1].temp_min_c, 10.0);
        assert_eq!(days[1].temp_max_c, 17.0);
        assert_eq!(days[1].temp_avg_c, 13.5);
        assert_eq!(days[1].sample_count, 8);
    }

    #[test]
    fn bucketing_follows_the_given_time_zone() {
        // 22:00 UTC on the 1st is already the 2nd in UTC+9
        let samples = vec![
            sample(day_start(1) + Duration::hours(12), 1.0, "Clear"),
            sample(day_start(1) + Duration::hours(22), 2.0, "Clear"),
        ];

        assert_eq!(aggregate_daily(&samples, &Utc).len(), 1);

        let kst = FixedOffset::east_opt(9 * 3600).unwrap();
        let days = aggregate_daily(&samples, &kst);
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(1));
        assert_eq!(days[1].date, date(2));
        assert_eq!(days[1].temp_avg_c, 2.0);
    }
}
