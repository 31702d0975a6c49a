use std::future::Future;
use std::pin::Pin;

use crate::error::ProviderError;

/// Current observation for a city. Temperature is floored, not rounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentConditions {
    pub temperature_c: i32,
    pub humidity_pct: i32,
    pub icon: String,
}

/// One entry of a multi-point forecast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastPoint {
    pub timestamp: String,
    pub conditions: CurrentConditions,
}

pub type PortFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Weather provider port the dialog depends on (external I/O stays in the implementation).
pub trait WeatherPort: Send + Sync {
    fn fetch_current(&self, city: String) -> PortFuture<Result<CurrentConditions, ProviderError>>;
    fn fetch_forecast(&self, city: String)
        -> PortFuture<Result<Vec<ForecastPoint>, ProviderError>>;
}
