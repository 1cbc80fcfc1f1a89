//! Text rendering of session state

use colored::Colorize;
use skycast_weather::{SessionState, WeatherSession};

/// The current result as printable lines, or `None` while idle or loading.
pub fn render<S>(session: &WeatherSession<S>) -> Option<String> {
    match session.state() {
        SessionState::Idle | SessionState::Loading => None,
        SessionState::Failed(message) => Some(message.red().to_string()),
        SessionState::Loaded(snapshot) => {
            let rainfall = session.rainfall_display().unwrap_or_default();
            let temperature = session.temperature_label().unwrap_or_default();
            let clothing = session.clothing_suggestion().unwrap_or_default();
            let toggle = session.unit().toggled().name();

            let heading = format!("Weather in {}, {}", snapshot.place, snapshot.country);

            Some(format!(
                "{}\n  \
                 Rainfall: {} mm\n  \
                 Humidity: {}%\n  \
                 Forecast: {}\n  \
                 Temperature: {}\n  \
                 Clothing Suggestions: {}\n  \
                 (type `unit` to show in {})",
                heading.cyan().bold(),
                rainfall,
                snapshot.humidity,
                snapshot.description,
                temperature,
                clothing,
                toggle,
            ))
        }
    }
}

/// Numbered list, or `empty` when there is nothing to show
pub fn render_list(title: &str, entries: &[String], empty: &str) -> String {
    if entries.is_empty() {
        return format!("{} {}", format!("{}:", title).cyan().bold(), empty.dimmed());
    }
    let mut out = format!("{}:", title).cyan().bold().to_string();
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(&format!("\n  {}. {}", i + 1, entry));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use skycast_weather::{DisplayUnit, LookupError, WeatherSnapshot};

    fn loaded(unit: DisplayUnit) -> WeatherSession<()> {
        colored::control::set_override(false);
        let mut session = WeatherSession::new((), unit);
        let ticket = session.begin("Paris").unwrap();
        session.complete(
            ticket,
            Ok(WeatherSnapshot {
                temperature_f: 59.0,
                humidity: 70.0,
                rainfall_mm: None,
                condition: "Clouds".to_string(),
                description: "broken clouds".to_string(),
                place: "Paris".to_string(),
                country: "FR".to_string(),
                received_at: Utc::now(),
            }),
        );
        session
    }

    #[test]
    fn test_render_loaded() {
        let text = render(&loaded(DisplayUnit::Fahrenheit)).unwrap();
        assert!(text.starts_with("Weather in Paris, FR"));
        assert!(text.contains("Rainfall: N/A mm"));
        assert!(text.contains("Humidity: 70%"));
        assert!(text.contains("Forecast: broken clouds"));
        assert!(text.contains("Temperature: 59.00° F"));
        assert!(text.contains("Clothing Suggestions: Wear light clothes, but keep a jacket handy."));
        assert!(text.contains("show in Celsius"));
    }

    #[test]
    fn test_render_celsius() {
        let text = render(&loaded(DisplayUnit::Celsius)).unwrap();
        assert!(text.contains("Temperature: 15.00° C"));
        assert!(text.contains("show in Fahrenheit"));
    }

    #[test]
    fn test_render_failed_and_idle() {
        colored::control::set_override(false);
        let mut session = WeatherSession::new((), DisplayUnit::Fahrenheit);
        assert!(render(&session).is_none());

        let ticket = session.begin("Zzzzz").unwrap();
        assert!(render(&session).is_none());

        session.complete(ticket, Err(LookupError::Parse("bad".into())));
        assert_eq!(render(&session).as_deref(), Some("Location Not Found"));
    }

    #[test]
    fn test_render_list() {
        colored::control::set_override(false);
        assert_eq!(render_list("Favorites", &[], "none yet"), "Favorites: none yet");
        let entries = vec!["Paris".to_string(), "Oslo".to_string()];
        assert_eq!(
            render_list("Search History", &entries, "empty"),
            "Search History:\n  1. Paris\n  2. Oslo"
        );
    }
}
