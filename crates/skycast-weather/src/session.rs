//! Weather lookup session: query state, the last result, and the lists built
//! from successful lookups.

use skycast_core::DisplayUnit;

use crate::clothing::clothing_suggestion;
use crate::conversion::{converted_temperature, temperature_label};
use crate::history::{FavoriteSet, SearchHistory};
use crate::provider::WeatherSource;
use crate::types::{LookupError, Notice, ValidationError, WeatherSnapshot};

/// Where the session is in the lookup cycle
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Loading,
    Loaded(WeatherSnapshot),
    Failed(String),
}

/// Handle for one in-flight lookup.
///
/// Only the ticket from the most recent [`WeatherSession::begin`] can complete;
/// older tickets are discarded so a slow response never overwrites a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct LookupTicket {
    generation: u64,
    query: String,
}

impl LookupTicket {
    pub fn query(&self) -> &str {
        &self.query
    }
}

pub struct WeatherSession<S> {
    source: S,
    state: SessionState,
    query: String,
    unit: DisplayUnit,
    history: SearchHistory,
    favorites: FavoriteSet,
    generation: u64,
}

impl<S> WeatherSession<S> {
    pub fn new(source: S, unit: DisplayUnit) -> Self {
        Self {
            source,
            state: SessionState::Idle,
            query: String::new(),
            unit,
            history: SearchHistory::new(),
            favorites: FavoriteSet::new(),
            generation: 0,
        }
    }

    /// Validate `query` and enter `Loading`.
    ///
    /// Leading and trailing whitespace is ignored. An empty query leaves the
    /// session untouched.
    pub fn begin(&mut self, query: &str) -> Result<LookupTicket, ValidationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        self.generation += 1;
        self.query = query.to_string();
        self.state = SessionState::Loading;
        tracing::debug!("Lookup #{} started for {:?}", self.generation, query);

        Ok(LookupTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of a lookup. Returns false if the ticket was stale.
    pub fn complete(
        &mut self,
        ticket: LookupTicket,
        result: Result<WeatherSnapshot, LookupError>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale lookup #{} for {:?} (current #{})",
                ticket.generation,
                ticket.query,
                self.generation
            );
            return false;
        }

        match result {
            Ok(snapshot) => {
                if self.history.record(&ticket.query) {
                    tracing::debug!("Added {:?} to search history", ticket.query);
                }
                self.state = SessionState::Loaded(snapshot);
            }
            Err(e) => {
                tracing::warn!("Lookup for {:?} failed: {}", ticket.query, e);
                self.state = SessionState::Failed(e.user_message().to_string());
            }
        }
        true
    }

    pub fn toggle_unit(&mut self) -> DisplayUnit {
        self.unit = self.unit.toggled();
        self.unit
    }

    /// The weather source lookups go through
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The most recently submitted query
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match &self.state {
            SessionState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    /// Snapshot temperature in the display unit, rounded to two decimals
    pub fn converted_temperature(&self) -> Option<f64> {
        self.snapshot()
            .map(|s| converted_temperature(s.temperature_f, self.unit))
    }

    pub fn temperature_label(&self) -> Option<String> {
        self.snapshot()
            .map(|s| temperature_label(s.temperature_f, self.unit))
    }

    pub fn clothing_suggestion(&self) -> Option<&'static str> {
        self.snapshot()
            .map(|s| clothing_suggestion(&s.condition, s.temperature_f, self.unit))
    }

    /// Rainfall in mm, or "N/A" when missing or zero
    pub fn rainfall_display(&self) -> Option<String> {
        self.snapshot().map(|s| match s.rainfall_mm {
            Some(mm) if mm != 0.0 => mm.to_string(),
            _ => "N/A".to_string(),
        })
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn add_favorite(&mut self, query: &str) -> Result<Notice, ValidationError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ValidationError::EmptyFavorite);
        }

        if self.favorites.insert(query) {
            tracing::debug!("Saved favorite {:?}", query);
            Ok(Notice::FavoriteAdded(query.to_string()))
        } else {
            Ok(Notice::AlreadyFavorite(query.to_string()))
        }
    }

    /// Returns true if `query` was a favorite
    pub fn remove_favorite(&mut self, query: &str) -> bool {
        self.favorites.remove(query)
    }

    pub fn clear_history(&mut self) -> Notice {
        self.history.clear();
        Notice::HistoryCleared
    }
}

impl<S: WeatherSource> WeatherSession<S> {
    /// Look up `query` and apply the result.
    pub async fn submit(&mut self, query: &str) -> Result<&SessionState, ValidationError> {
        let ticket = self.begin(query)?;
        let result = self.source.current(ticket.query()).await;
        self.complete(ticket, result);
        Ok(&self.state)
    }

    /// Make `query` current and look it up; used when picking an entry from
    /// history or favorites.
    pub async fn select(&mut self, query: &str) -> Result<&SessionState, ValidationError> {
        tracing::debug!("Selected {:?} from saved locations", query);
        self.submit(query).await
    }

    /// Repeat the lookup for the current query
    pub async fn refresh(&mut self) -> Result<&SessionState, ValidationError> {
        let query = self.query.clone();
        self.submit(&query).await
    }
}
