pub mod weather;

pub use weather::{CurrentConditions, ForecastPoint, PortFuture, WeatherPort};
