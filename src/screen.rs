//! The weather screen: one piece of state fed by two fetch paths.

use std::sync::{Arc, Mutex};

use chrono::{Local, TimeZone, Timelike};
use chrono_tz::Tz;
use tracing::{debug, error, info};

use crate::error::AppError;
use crate::gradient::TimeOfDay;
use crate::location::{LocationError, LocationService};
use crate::weather::{WeatherApi, response::TimelineResponse};

/// City label used for the device-location path
pub const LOCAL_CITY_LABEL: &str = "My location";
const SEARCH_FAILED_HINT: &str = "Try searching for a city";

/// Everything the card needs to draw one observation. Replaced wholesale on
/// every successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherState {
    pub city: String,
    pub temperature_c: f64,
    pub condition: String,
    pub local_time: String,
    pub time_of_day: TimeOfDay,
}

/// What the screen is currently showing. The renderer matches exhaustively;
/// there is no placeholder-string sniffing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ScreenState {
    #[default]
    Loading,
    Ready(WeatherState),
    PermissionDenied,
    Failed(String),
}

#[derive(Debug, Default)]
struct Inner {
    state: ScreenState,
    /// Fetch sequencing: a result is applied only if no newer fetch has been
    /// dispatched since it started.
    generation: u64,
}

/// Screen controller. Both fetch paths catch their own failures; neither
/// propagates an error to the caller.
#[derive(Debug)]
pub struct Screen<L> {
    weather: WeatherApi,
    location: L,
    inner: Arc<Mutex<Inner>>,
}

impl<L: LocationService> Screen<L> {
    pub fn new(weather: WeatherApi, location: L) -> Self {
        Self {
            weather,
            location,
            inner: Arc::default(),
        }
    }

    /// Snapshot of the current screen state.
    pub fn state(&self) -> ScreenState {
        self.lock().state.clone()
    }

    /// Fetch weather for the device's position. Denied permission becomes
    /// `PermissionDenied` without touching the network; any other failure
    /// becomes a generic `Failed` card.
    pub async fn load_local_weather(&self) {
        let generation = self.begin();
        match self.fetch_local().await {
            Ok(weather) => self.apply(generation, ScreenState::Ready(weather)),
            Err(AppError::Location(LocationError::PermissionDenied)) => {
                info!("Location permission denied");
                self.apply(generation, ScreenState::PermissionDenied);
            }
            Err(err) => {
                error!("Failed to load local weather: {err}");
                self.apply(generation, ScreenState::Failed(SEARCH_FAILED_HINT.into()));
            }
        }
    }

    async fn fetch_local(&self) -> Result<WeatherState, AppError> {
        let position = self.location.current_position().await?;
        info!(
            "Got position: {}, {}",
            position.latitude, position.longitude
        );
        let timeline = self
            .weather
            .current_by_coords(position.latitude, position.longitude)
            .await?;
        Ok(weather_state(LOCAL_CITY_LABEL.to_string(), &timeline))
    }

    /// Fetch weather for a free-text place. Empty input is a no-op; a failed
    /// request is logged and leaves the previous state untouched.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let generation = self.begin();
        match self.weather.current_by_query(query).await {
            Ok(timeline) => {
                let city = timeline
                    .resolved_address
                    .clone()
                    .or_else(|| timeline.address.clone())
                    .unwrap_or_else(|| query.to_string());
                self.apply(generation, ScreenState::Ready(weather_state(city, &timeline)));
            }
            Err(err) => {
                error!("Search for {query:?} failed: {err}");
            }
        }
    }

    fn begin(&self) -> u64 {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.generation
    }

    fn apply(&self, generation: u64, state: ScreenState) {
        let mut inner = self.lock();
        if inner.generation == generation {
            inner.state = state;
        } else {
            debug!("Discarding stale fetch result (generation {generation})");
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("screen state lock poisoned")
    }
}

fn weather_state(city: String, timeline: &TimelineResponse) -> WeatherState {
    let current = &timeline.current_conditions;
    let (hour, local_time) = local_clock(current.datetime_epoch, timeline.timezone.as_deref());
    WeatherState {
        city,
        temperature_c: current.temp,
        condition: current.conditions.clone(),
        local_time,
        time_of_day: TimeOfDay::from_hour(hour),
    }
}

/// Local hour and formatted clock at the observed location: the provider's
/// epoch in its IANA timezone, the device timezone when the zone name is
/// missing or unknown, and the device wall clock when there is no epoch.
fn local_clock(epoch: Option<i64>, timezone: Option<&str>) -> (u32, String) {
    if let Some(epoch) = epoch {
        if let Some(tz) = timezone.and_then(|name| name.parse::<Tz>().ok()) {
            if let Some(observed) = tz.timestamp_opt(epoch, 0).single() {
                return (observed.hour(), observed.format("%H:%M").to_string());
            }
        }
        if let Some(observed) = Local.timestamp_opt(epoch, 0).single() {
            return (observed.hour(), observed.format("%H:%M").to_string());
        }
    }
    let now = Local::now();
    (now.hour(), now.format("%H:%M").to_string())
}
