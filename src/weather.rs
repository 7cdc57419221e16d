use tracing::{debug, error, info};
use url::Url;

pub mod response;

use crate::config::Config;
use crate::error::AppError;

const WEATHER_ENDPOINT: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";
const UNIT_GROUP: &str = "metric";

/// Client for the timeline weather API. One GET per call, no caching.
#[derive(Debug, Clone)]
pub struct WeatherApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherApi {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(WEATHER_ENDPOINT.to_string(), config.api_key.clone())
    }

    /// Client against an alternate endpoint, used by tests.
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Current conditions at a coordinate pair.
    pub async fn current_by_coords(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<response::TimelineResponse, AppError> {
        self.current(&format!("{latitude},{longitude}")).await
    }

    /// Current conditions for a free-text place name. The place is sent as a
    /// single percent-encoded path segment.
    pub async fn current_by_query(
        &self,
        place: &str,
    ) -> Result<response::TimelineResponse, AppError> {
        self.current(place).await
    }

    async fn current(&self, location: &str) -> Result<response::TimelineResponse, AppError> {
        info!("Fetching current conditions for location: {location}");
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(location);

        let response = self
            .client
            .get(url)
            .query(&[
                ("unitGroup", UNIT_GROUP),
                ("include", "current"),
                ("contentType", "json"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        if response.status().is_success() {
            let timeline: response::TimelineResponse = response.json().await?;
            debug!("Weather data fetched successfully: {timeline:?}");
            Ok(timeline)
        } else {
            error!("Failed to fetch weather data: {}", response.status());
            Err(AppError::ApiRequestFailed(response.status()))
        }
    }
}
