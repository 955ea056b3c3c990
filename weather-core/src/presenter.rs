use crate::view::WeatherView;

/// The display side of the dashboard.
///
/// Exactly one of these is called per state transition, and each call replaces
/// whatever the previous one showed.
pub trait Presenter {
    fn show_loading(&mut self);

    fn show_error(&mut self, message: &str);

    fn show_content(&mut self, view: &WeatherView);
}
