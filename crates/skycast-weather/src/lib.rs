//! Weather lookup for SkyCast
//!
//! Fetches current conditions from an OpenWeatherMap-compatible API and
//! derives what the front end shows: converted temperature, clothing hints,
//! search history and favorites.

pub mod clothing;
pub mod conversion;
pub mod history;
pub mod provider;
pub mod session;
pub mod types;

pub use history::{FavoriteSet, SearchHistory};
pub use provider::{WeatherProvider, WeatherSource};
pub use session::{LookupTicket, SessionState, WeatherSession};
pub use skycast_core::DisplayUnit;
pub use types::*;
