use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skycast_core::NetworkError;

/// The only failure text a user ever sees for a lookup
pub const LOCATION_NOT_FOUND: &str = "Location Not Found";

/// Current conditions for one place, normalized from the provider payload.
///
/// Temperature is always stored in Fahrenheit; conversion happens at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_f: f64,
    pub humidity: f64,
    /// Rain over the last hour in millimetres, when reported
    pub rainfall_mm: Option<f64>,
    /// Short category such as "Rain" or "Clouds"
    pub condition: String,
    pub description: String,
    pub place: String,
    pub country: String,
    pub received_at: DateTime<Utc>,
}

/// Wire shape of the provider's current-weather response (only the fields we read)
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentWeatherResponse {
    main: MainReadings,
    weather: Vec<ConditionEntry>,
    #[serde(default)]
    rain: Option<RainReadings>,
    name: String,
    sys: SysInfo,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct ConditionEntry {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct RainReadings {
    #[serde(rename = "1h")]
    one_hour: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct SysInfo {
    #[serde(default)]
    country: String,
}

impl CurrentWeatherResponse {
    pub(crate) fn into_snapshot(self) -> Result<WeatherSnapshot, LookupError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::Parse("response has no weather entries".to_string()))?;

        Ok(WeatherSnapshot {
            temperature_f: self.main.temp,
            humidity: self.main.humidity,
            rainfall_mm: self.rain.and_then(|r| r.one_hour),
            condition: condition.main,
            description: condition.description,
            place: self.name,
            country: self.sys.country,
            received_at: Utc::now(),
        })
    }
}

/// Why a lookup failed. Users only ever see [`LOCATION_NOT_FOUND`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),
    #[error("Provider returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
}

impl LookupError {
    pub fn user_message(&self) -> &'static str {
        LOCATION_NOT_FOUND
    }
}

/// Rejected user input. Nothing in the session changes when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please Enter The Location!")]
    EmptyQuery,
    #[error("Enter a location to save as favorite!")]
    EmptyFavorite,
}

/// Informational messages produced by list operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    FavoriteAdded(String),
    AlreadyFavorite(String),
    HistoryCleared,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::FavoriteAdded(q) => write!(f, "{} has been added to your favorite locations.", q),
            Notice::AlreadyFavorite(q) => {
                write!(f, "{} is already in your favorite locations.", q)
            }
            Notice::HistoryCleared => write!(f, "Search history has been cleared."),
        }
    }
}
