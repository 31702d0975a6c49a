use anyhow::{Context, Result};
use serde_json::Value;

use crate::config;
use crate::error::ProviderError;
use crate::ports::{CurrentConditions, ForecastPoint, PortFuture, WeatherPort};

const CURRENT_ENDPOINT: &str = "weather";
const FORECAST_ENDPOINT: &str = "forecast";

/// OpenWeatherMap client. One plain GET per lookup: no retry, no caching.
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    units: String,
}

impl OpenWeatherClient {
    /// Builds a client from `config::weather_config()`. Fails when the API key
    /// is absent; the key is only ever supplied through the environment.
    pub fn from_env() -> Result<Self> {
        let cfg = config::weather_config();
        let api_key = cfg
            .api_key
            .clone()
            .context("OPENWEATHER_API_KEY is not set")?;
        let http = reqwest::Client::builder()
            .timeout(config::timeouts().weather_http)
            .build()?;
        Ok(Self {
            http,
            api_base: cfg.api_base.trim_end_matches('/').to_string(),
            api_key,
            units: cfg.units.clone(),
        })
    }

    pub async fn current(&self, city: &str) -> Result<CurrentConditions, ProviderError> {
        let json = self.get_json(CURRENT_ENDPOINT, city).await?;
        parse_current(&json)
    }

    pub async fn forecast(&self, city: &str) -> Result<Vec<ForecastPoint>, ProviderError> {
        let json = self.get_json(FORECAST_ENDPOINT, city).await?;
        parse_forecast(&json)
    }

    async fn get_json(&self, endpoint: &str, city: &str) -> Result<Value, ProviderError> {
        let url = format!("{}/{}", self.api_base, endpoint);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("units", self.units.as_str()),
                ("APPID", self.api_key.as_str()),
            ])
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Status { status, body });
        }
        serde_json::from_str(&body).map_err(|err| ProviderError::Malformed(err.to_string()))
    }
}

impl WeatherPort for OpenWeatherClient {
    fn fetch_current(&self, city: String) -> PortFuture<Result<CurrentConditions, ProviderError>> {
        let client = self.clone();
        Box::pin(async move { client.current(&city).await })
    }

    fn fetch_forecast(
        &self,
        city: String,
    ) -> PortFuture<Result<Vec<ForecastPoint>, ProviderError>> {
        let client = self.clone();
        Box::pin(async move { client.forecast(&city).await })
    }
}

/// Extracts `main.temp` (floored to whole Celsius), `main.humidity` and
/// `weather[0].icon` from a current-conditions or forecast-entry body.
fn parse_current(value: &Value) -> Result<CurrentConditions, ProviderError> {
    let main = value
        .get("main")
        .ok_or_else(|| malformed("missing main"))?;
    let temp = main
        .get("temp")
        .and_then(|v| v.as_f64())
        .ok_or_else(|| malformed("missing main.temp"))?;
    let humidity = main
        .get("humidity")
        .and_then(|v| v.as_i64())
        .ok_or_else(|| malformed("missing main.humidity"))?;
    let icon = value
        .get("weather")
        .and_then(|v| v.as_array())
        .and_then(|list| list.first())
        .and_then(|w| w.get("icon"))
        .and_then(|v| v.as_str())
        .ok_or_else(|| malformed("missing weather[0].icon"))?;
    Ok(CurrentConditions {
        temperature_c: temp.floor() as i32,
        humidity_pct: humidity as i32,
        icon: icon.to_string(),
    })
}

fn parse_forecast(value: &Value) -> Result<Vec<ForecastPoint>, ProviderError> {
    let list = value
        .get("list")
        .and_then(|v| v.as_array())
        .ok_or_else(|| malformed("missing list"))?;
    list.iter().map(parse_point).collect()
}

fn parse_point(entry: &Value) -> Result<ForecastPoint, ProviderError> {
    let conditions = parse_current(entry)?;
    let timestamp = entry
        .get("dt_txt")
        .and_then(|v| v.as_str())
        .map(|v| v.to_string())
        .or_else(|| {
            entry
                .get("dt")
                .and_then(|v| v.as_i64())
                .and_then(format_epoch)
        })
        .ok_or_else(|| malformed("missing dt_txt/dt"))?;
    Ok(ForecastPoint {
        timestamp,
        conditions,
    })
}

fn format_epoch(secs: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(secs, 0).map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
}

fn malformed(what: &str) -> ProviderError {
    ProviderError::Malformed(what.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_current_floors_temperature() {
        let value = json!({
            "main": {"temp": 15.7, "humidity": 80},
            "weather": [{"icon": "10d"}]
        });
        let conditions = parse_current(&value).expect("parse should succeed");
        assert_eq!(conditions.temperature_c, 15);
        assert_eq!(conditions.humidity_pct, 80);
        assert_eq!(conditions.icon, "10d");
    }

    #[test]
    fn parse_current_floors_negative_temperature_down() {
        let value = json!({
            "main": {"temp": -0.3, "humidity": 90},
            "weather": [{"icon": "13d"}]
        });
        let conditions = parse_current(&value).expect("parse should succeed");
        assert_eq!(conditions.temperature_c, -1);
    }

    #[test]
    fn parse_current_rejects_missing_fields() {
        assert!(parse_current(&json!({"weather": [{"icon": "10d"}]})).is_err());
        assert!(parse_current(&json!({"main": {"temp": 1.0}})).is_err());
        assert!(parse_current(&json!({"main": {"temp": 1.0, "humidity": 5}, "weather": []})).is_err());
    }

    #[test]
    fn parse_forecast_collects_ordered_points() {
        let value = json!({
            "list": [
                {
                    "dt_txt": "2026-08-27 12:00:00",
                    "main": {"temp": 21.9, "humidity": 60},
                    "weather": [{"icon": "01d"}]
                },
                {
                    "dt_txt": "2026-08-27 15:00:00",
                    "main": {"temp": 19.2, "humidity": 65},
                    "weather": [{"icon": "02d"}]
                }
            ]
        });
        let points = parse_forecast(&value).expect("parse should succeed");
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].timestamp, "2026-08-27 12:00:00");
        assert_eq!(points[0].conditions.temperature_c, 21);
        assert_eq!(points[1].conditions.temperature_c, 19);
    }

    #[test]
    fn parse_point_falls_back_to_epoch_timestamp() {
        let entry = json!({
            "dt": 1787832000,
            "main": {"temp": 18.0, "humidity": 70},
            "weather": [{"icon": "04n"}]
        });
        let point = parse_point(&entry).expect("parse should succeed");
        assert_eq!(point.timestamp, "2026-08-27 12:00:00");
    }

    #[test]
    fn parse_forecast_rejects_missing_list() {
        assert!(parse_forecast(&json!({"cnt": 0})).is_err());
    }
}
