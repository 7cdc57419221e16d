/// Response structure for the timeline weather endpoint. Only the fields the
/// screen consumes are modeled; anything else in the payload is ignored.
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimelineResponse {
    /// Human-readable label for the resolved place (e.g. "Milan, Italy")
    pub resolved_address: Option<String>,
    /// Raw address echo, used when no resolved label is present
    pub address: Option<String>,
    /// IANA timezone name of the location (e.g. "Europe/Rome")
    pub timezone: Option<String>,
    /// Current weather conditions
    pub current_conditions: CurrentConditions,
}

/// Current observation for the requested location
#[derive(serde::Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Temperature in Celsius (metric unit group)
    pub temp: f64,
    /// Human-readable condition text (e.g. "Partly cloudy")
    #[serde(default)]
    pub conditions: String,
    /// Observation time as epoch seconds, when the provider supplies one
    pub datetime_epoch: Option<i64>,
}
