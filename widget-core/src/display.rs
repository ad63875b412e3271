use crate::view::WeatherView;

/// Where the widget draws. The controller owns exactly one target, acquired
/// at construction, and is the only writer.
///
/// Contract:
/// - `render`/`render_error` fully replace whatever the target showed before.
/// - `set_loading(true)` is called right before a fetch starts and
///   `set_loading(false)` after it settles, on both success and failure.
pub trait DisplayTarget: Send {
    /// Show or hide the loading indicator.
    fn set_loading(&mut self, visible: bool);

    /// Replace the display content with a rendered observation.
    fn render(&mut self, view: &WeatherView);

    /// Replace the display content with an error message.
    fn render_error(&mut self, message: &str);
}
