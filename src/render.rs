//! Draws the weather card as a block of gradient-painted terminal lines.

use crate::gradient::{self, Gradient, select_gradient};
use crate::screen::{ScreenState, WeatherState};

const CARD_WIDTH: usize = 36;

/// Render the screen state to a string of ANSI-colored lines, background
/// blended top to bottom between the gradient's two colors.
pub fn render(state: &ScreenState) -> String {
    let (gradient, lines) = match state {
        ScreenState::Loading => (
            gradient::fallback(),
            placeholder_lines("Loading...", "Loading weather..."),
        ),
        ScreenState::PermissionDenied => (
            gradient::fallback(),
            // No local time on this card; location access was refused
            placeholder_lines("Permission denied", "Location is unavailable"),
        ),
        ScreenState::Failed(message) => {
            (gradient::fallback(), placeholder_lines("Error", message))
        }
        ScreenState::Ready(weather) => (
            select_gradient(&weather.condition, weather.time_of_day, weather.temperature_c),
            card_lines(weather),
        ),
    };
    paint(gradient, &lines)
}

fn card_lines(weather: &WeatherState) -> Vec<String> {
    vec![
        String::new(),
        weather.city.clone(),
        format!("{:.0}°", weather.temperature_c),
        weather.condition.clone(),
        // Blank row when the observation carried no local time
        weather.local_time.clone(),
        String::new(),
    ]
}

fn placeholder_lines(title: &str, body: &str) -> Vec<String> {
    vec![
        String::new(),
        title.to_string(),
        "--°".to_string(),
        body.to_string(),
        String::new(),
        String::new(),
    ]
}

fn paint(gradient: Gradient, lines: &[String]) -> String {
    let steps = lines.len().saturating_sub(1).max(1) as f32;
    let mut out = String::new();
    for (row, line) in lines.iter().enumerate() {
        let bg = gradient.start.lerp(gradient.end, row as f32 / steps);
        out.push_str(&format!(
            "\x1b[38;2;255;255;255;48;2;{};{};{}m{:^width$}\x1b[0m\n",
            bg.r,
            bg.g,
            bg.b,
            line,
            width = CARD_WIDTH
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::TimeOfDay;

    #[test]
    fn ready_card_shows_weather_fields() {
        let rendered = render(&ScreenState::Ready(WeatherState {
            city: "Milan, Italy".into(),
            temperature_c: 12.4,
            condition: "Light rain".into(),
            local_time: "18:30".into(),
            time_of_day: TimeOfDay::Evening,
        }));
        assert!(rendered.contains("Milan, Italy"));
        assert!(rendered.contains("12°"));
        assert!(rendered.contains("Light rain"));
        assert!(rendered.contains("18:30"));
        assert!(rendered.contains("\x1b[38;2;255;255;255;48;2;"));
    }

    #[test]
    fn placeholder_cards_use_fixed_text() {
        let loading = render(&ScreenState::Loading);
        assert!(loading.contains("Loading..."));
        assert!(loading.contains("Loading weather..."));

        let denied = render(&ScreenState::PermissionDenied);
        assert!(denied.contains("Permission denied"));

        let failed = render(&ScreenState::Failed("Try searching for a city".into()));
        assert!(failed.contains("Error"));
        assert!(failed.contains("Try searching for a city"));
    }

    #[test]
    fn every_line_is_reset() {
        let rendered = render(&ScreenState::Loading);
        for line in rendered.lines() {
            assert!(line.ends_with("\x1b[0m"));
        }
    }
}
