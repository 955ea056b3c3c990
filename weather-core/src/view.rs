//! Display-ready view state handed to a [`Presenter`](crate::presenter::Presenter).

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::{
    forecast::display_days,
    model::{CurrentWeather, DailyForecastSummary, mps_to_kmh, round_display},
};

pub const DEFAULT_ICON_BASE: &str = "https://openweathermap.org/img/wn";

/// `"Today"`, `"Tomorrow"` or the full weekday name, relative to `today`.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if today.checked_add_days(Days::new(1)) == Some(date) {
        "Tomorrow".to_string()
    } else {
        date.format("%A").to_string()
    }
}

/// e.g. `"Sunday, October 18, 2026"`.
pub fn long_date_label(date: NaiveDate) -> String {
    format!("{}, {} {}, {}", date.format("%A"), date.format("%B"), date.day(), date.year())
}

fn degrees(value: f64) -> String {
    format!("{}°", round_display(value))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentView {
    pub location: String,
    pub date: String,
    pub icon_url: String,
    pub icon_alt: String,
    pub temperature: String,
    pub description: String,
    pub feels_like: String,
    pub visibility: String,
    pub humidity: String,
    pub wind: String,
    pub pressure: String,
}

impl CurrentView {
    pub fn new(current: &CurrentWeather, today: NaiveDate, icon_base: &str) -> Self {
        Self {
            location: format!("{}, {}", current.city, current.country),
            date: long_date_label(today),
            icon_url: current.condition.icon_url(icon_base),
            icon_alt: current.condition.description.clone(),
            temperature: degrees(current.temperature_c),
            description: current.condition.description.clone(),
            feels_like: degrees(current.feels_like_c),
            visibility: format!("{:.1} km", f64::from(current.visibility_m) / 1000.0),
            humidity: format!("{}%", current.humidity_pct),
            wind: format!("{} km/h", mps_to_kmh(current.wind_speed_mps)),
            pressure: format!("{} hPa", current.pressure_hpa),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDayView {
    pub label: String,
    pub icon_url: String,
    pub description: String,
    pub high: String,
    pub low: String,
    pub humidity: String,
    pub wind: String,
}

impl ForecastDayView {
    pub fn new(day: &DailyForecastSummary, today: NaiveDate, icon_base: &str) -> Self {
        Self {
            label: day_label(day.date, today),
            icon_url: day.condition.icon_url(icon_base),
            description: day.condition.description.clone(),
            high: format!("{}°", day.temp_max_c),
            low: format!("{}°", day.temp_min_c),
            humidity: format!("{}%", day.humidity_pct),
            wind: format!("{} km/h", day.wind_kmh),
        }
    }
}

/// Everything the content display needs: current conditions plus the first forecast days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherView {
    pub current: CurrentView,
    pub forecast: Vec<ForecastDayView>,
}

impl WeatherView {
    pub fn build(
        current: &CurrentWeather,
        summaries: &[DailyForecastSummary],
        today: NaiveDate,
        icon_base: &str,
    ) -> Self {
        Self {
            current: CurrentView::new(current, today, icon_base),
            forecast: display_days(summaries)
                .iter()
                .map(|day| ForecastDayView::new(day, today, icon_base))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WeatherCondition;
    use chrono::{DateTime, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn islamabad() -> CurrentWeather {
        CurrentWeather {
            city: "Islamabad".into(),
            country: "PK".into(),
            observation_time: DateTime::<Utc>::from_timestamp(1_792_310_400, 0).unwrap(),
            temperature_c: 24.5,
            feels_like_c: 23.2,
            condition: WeatherCondition { icon: "01d".into(), description: "clear sky".into() },
            visibility_m: 10_000,
            humidity_pct: 45,
            wind_speed_mps: 3.6,
            pressure_hpa: 1012,
        }
    }

    #[test]
    fn day_labels_relative_to_today() {
        let today = date(2026, 10, 18);

        assert_eq!(day_label(today, today), "Today");
        assert_eq!(day_label(date(2026, 10, 19), today), "Tomorrow");
        assert_eq!(day_label(date(2026, 10, 20), today), "Tuesday");
        assert_eq!(day_label(date(2026, 10, 17), today), "Saturday");
    }

    #[test]
    fn tomorrow_crosses_month_and_year_boundaries() {
        assert_eq!(day_label(date(2027, 1, 1), date(2026, 12, 31)), "Tomorrow");
        assert_eq!(day_label(date(2026, 11, 1), date(2026, 10, 31)), "Tomorrow");
    }

    #[test]
    fn long_date_label_spells_out_the_date() {
        assert_eq!(long_date_label(date(2026, 10, 18)), "Sunday, October 18, 2026");
        assert_eq!(long_date_label(date(2026, 3, 5)), "Thursday, March 5, 2026");
    }

    #[test]
    fn current_view_formats_every_field() {
        let view = CurrentView::new(&islamabad(), date(2026, 10, 18), DEFAULT_ICON_BASE);

        assert_eq!(view.location, "Islamabad, PK");
        assert_eq!(view.date, "Sunday, October 18, 2026");
        assert_eq!(view.icon_url, "https://openweathermap.org/img/wn/01d@2x.png");
        assert_eq!(view.icon_alt, "clear sky");
        assert_eq!(view.temperature, "25°");
        assert_eq!(view.feels_like, "23°");
        assert_eq!(view.visibility, "10.0 km");
        assert_eq!(view.humidity, "45%");
        assert_eq!(view.wind, "13 km/h");
        assert_eq!(view.pressure, "1012 hPa");
    }

    #[test]
    fn weather_view_shows_at_most_three_days() {
        let today = date(2026, 10, 18);
        let summaries: Vec<_> = (0..5u64)
            .map(|i| DailyForecastSummary {
                date: today.checked_add_days(Days::new(i)).unwrap(),
                condition: WeatherCondition { icon: "02d".into(), description: "few clouds".into() },
                temp_max_c: 28,
                temp_min_c: 17,
                humidity_pct: 40,
                wind_kmh: 11,
            })
            .collect();

        let view = WeatherView::build(&islamabad(), &summaries, today, DEFAULT_ICON_BASE);

        let labels: Vec<_> = view.forecast.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["Today", "Tomorrow", "Tuesday"]);
        assert_eq!(view.forecast[0].high, "28°");
        assert_eq!(view.forecast[0].low, "17°");
    }
}
