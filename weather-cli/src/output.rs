use std::io::Write;

use weather_core::{Presenter, WeatherView};

/// Renders dashboard states to the terminal.
///
/// Loading and error go to stderr; content goes to stdout, as text or JSON.
#[derive(Debug, Default)]
pub struct TerminalPresenter {
    json: bool,
}

impl TerminalPresenter {
    pub fn new(json: bool) -> Self {
        Self { json }
    }
}

impl Presenter for TerminalPresenter {
    fn show_loading(&mut self) {
        if !self.json {
            eprintln!("Loading weather data...");
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn show_content(&mut self, view: &WeatherView) {
        let rendered = if self.json {
            match serde_json::to_string_pretty(view) {
                Ok(json) => json,
                Err(err) => {
                    eprintln!("Error: failed to serialize weather view: {err}");
                    return;
                }
            }
        } else {
            render_text(view)
        };

        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "{rendered}") {
            tracing::warn!(%err, "failed to write weather view");
        }
    }
}

fn render_text(view: &WeatherView) -> String {
    let c = &view.current;
    let mut out = format!(
        "{}\n{}\n\n  {}  {}\n  Feels like {}\n  Visibility {}   Humidity {}   Wind {}   Pressure {}\n  {}\n",
        c.location,
        c.date,
        c.temperature,
        c.description,
        c.feels_like,
        c.visibility,
        c.humidity,
        c.wind,
        c.pressure,
        c.icon_url,
    );

    if !view.forecast.is_empty() {
        out.push_str("\nForecast\n");
    }
    for day in &view.forecast {
        out.push_str(&format!(
            "  {:<10} {:>4} / {:<4} {}\n",
            day.label, day.high, day.low, day.description
        ));
    }

    out
}
