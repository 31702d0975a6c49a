pub mod config;
pub mod dialog;
pub mod error;
pub mod logging;
pub mod ports;
pub mod provider;
pub mod render;

pub use dialog::{ConversationState, ForecastType, TurnOutcome, TurnSignal, WeatherDialog};
pub use error::{ProviderError, ValidationError};
pub use ports::{CurrentConditions, ForecastPoint, WeatherPort};
pub use provider::OpenWeatherClient;
pub use render::{Reply, WeatherCard};
