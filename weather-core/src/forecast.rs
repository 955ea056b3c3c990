//! Collapses the three-hourly forecast list into one summary per calendar day.

use std::collections::HashMap;

use chrono::{NaiveDate, TimeZone};

use crate::model::{DailyForecastSummary, ForecastSample, mps_to_kmh, round_display};

/// How many daily summaries the dashboard shows.
pub const FORECAST_DAYS: usize = 3;

struct DayAccumulator<'a> {
    date: NaiveDate,
    first: &'a ForecastSample,
    max: f64,
    min: f64,
}

/// Groups `samples` by their calendar date in `tz`.
///
/// The first sample seen for a date supplies the condition, humidity and wind;
/// temperatures are the max/min over the whole group. Days come out in the
/// order they first appear in `samples`, not sorted by date.
pub fn aggregate<Tz: TimeZone>(samples: &[ForecastSample], tz: &Tz) -> Vec<DailyForecastSummary> {
    let mut days: Vec<DayAccumulator<'_>> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();

    for sample in samples {
        let date = sample.time.with_timezone(tz).date_naive();
        let temp = sample.temperature_c;

        match index.get(&date) {
            Some(&i) => {
                let day = &mut days[i];
                day.max = day.max.max(temp);
                day.min = day.min.min(temp);
            }
            None => {
                index.insert(date, days.len());
                days.push(DayAccumulator { date, first: sample, max: temp, min: temp });
            }
        }
    }

    days.into_iter()
        .map(|day| DailyForecastSummary {
            date: day.date,
            condition: day.first.condition.clone(),
            temp_max_c: round_display(day.max),
            temp_min_c: round_display(day.min),
            humidity_pct: day.first.humidity_pct,
            wind_kmh: mps_to_kmh(day.first.wind_speed_mps),
        })
        .collect()
}

/// The leading summaries that fit on the dashboard.
pub fn display_days(summaries: &[DailyForecastSummary]) -> &[DailyForecastSummary] {
    &summaries[..summaries.len().min(FORECAST_DAYS)]
}
