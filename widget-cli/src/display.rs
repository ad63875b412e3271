use std::io::{self, Write};

use widget_core::{DisplayTarget, WeatherView, view::error_text};

const LOADING_LINE: &str = "⏳ updating…";

/// Renders the widget into an owned block of terminal lines, repainting the
/// block in place on every update so each render fully replaces the last.
pub struct TerminalDisplay<W: Write + Send = io::Stdout> {
    out: W,
    content: Option<String>,
    loading: bool,
    lines_drawn: usize,
}

impl TerminalDisplay<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalDisplay<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> TerminalDisplay<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, content: None, loading: false, lines_drawn: 0 }
    }

    fn repaint(&mut self) {
        let mut block = self.content.clone().unwrap_or_default();
        if self.loading {
            if !block.is_empty() {
                block.push('\n');
            }
            block.push_str(LOADING_LINE);
        }

        if self.lines_drawn > 0 {
            // Cursor up to the start of the previous block, clear to the end
            // of the screen.
            let _ = write!(self.out, "\x1b[{}F\x1b[0J", self.lines_drawn);
        }
        if !block.is_empty() {
            let _ = writeln!(self.out, "{block}");
        }
        let _ = self.out.flush();

        self.lines_drawn = if block.is_empty() { 0 } else { block.lines().count() };
    }
}

impl<W: Write + Send> DisplayTarget for TerminalDisplay<W> {
    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
        self.repaint();
    }

    fn render(&mut self, view: &WeatherView) {
        self.content = Some(view.to_string());
        self.repaint();
    }

    fn render_error(&mut self, message: &str) {
        self.content = Some(error_text(message));
        self.repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display() -> TerminalDisplay<Vec<u8>> {
        TerminalDisplay::with_writer(Vec::new())
    }

    fn view(temperature: i64) -> WeatherView {
        WeatherView {
            location_name: "Brighton, MI".to_string(),
            time: "14:30".to_string(),
            temperature,
            temperature_suffix: "°F",
            icon: "☀️",
            description: "Clear sky",
            windspeed: 5.3,
            windspeed_suffix: "mph",
            wind_compass: "N",
        }
    }

    fn output(display: &TerminalDisplay<Vec<u8>>) -> String {
        String::from_utf8(display.out.clone()).expect("utf-8 output")
    }

    #[test]
    fn first_render_paints_without_clearing() {
        let mut display = display();
        display.render(&view(72));

        let out = output(&display);
        assert!(!out.contains("\x1b["));
        assert!(out.contains("72°F"));
        assert_eq!(display.lines_drawn, 4);
    }

    #[test]
    fn second_render_clears_the_previous_block() {
        let mut display = display();
        display.render(&view(72));
        display.render(&view(55));

        let out = output(&display);
        // The four lines of the first block are cleared before the repaint.
        assert!(out.contains("\x1b[4F\x1b[0J"));
        assert!(out.contains("55°F"));
        assert_eq!(display.lines_drawn, 4);
    }

    #[test]
    fn loading_line_appears_only_while_loading() {
        let mut display = display();
        display.set_loading(true);
        assert_eq!(display.lines_drawn, 1);

        display.render(&view(72));
        assert_eq!(display.lines_drawn, 5);

        display.set_loading(false);
        assert_eq!(display.lines_drawn, 4);

        let out = output(&display);
        let last_paint = out.rsplit("\x1b[").next().expect("painted at least once");
        assert!(!last_paint.contains(LOADING_LINE));
    }

    #[test]
    fn error_render_replaces_content_with_unavailable_heading() {
        let mut display = display();
        display.render(&view(72));
        display.render_error("HTTP error: status 500 Internal Server Error");

        let out = output(&display);
        assert!(out.contains("Weather unavailable"));
        assert!(out.contains("500"));
        assert_eq!(display.lines_drawn, 2);
    }
}
