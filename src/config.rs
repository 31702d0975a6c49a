use std::sync::OnceLock;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct WeatherConfig {
    pub api_base: String,
    pub api_key: Option<String>,
    pub units: String,
}

impl WeatherConfig {
    /// Builds the weather-provider configuration from environment variables.
    ///
    /// Reads (and defaults):
    /// - `OPENWEATHER_API_BASE` (default `https://api.openweathermap.org/data/2.5`)
    /// - `OPENWEATHER_API_KEY` (optional here; required when the HTTP client is built)
    /// - `OPENWEATHER_UNITS` (default `metric`)
    fn from_env() -> Self {
        let api_base = std::env::var("OPENWEATHER_API_BASE")
            .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5".to_string());
        Self {
            api_base,
            api_key: std::env::var("OPENWEATHER_API_KEY").ok(),
            units: std::env::var("OPENWEATHER_UNITS").unwrap_or_else(|_| "metric".to_string()),
        }
    }
}

static WEATHER_CONFIG: OnceLock<WeatherConfig> = OnceLock::new();

pub fn weather_config() -> &'static WeatherConfig {
    WEATHER_CONFIG.get_or_init(WeatherConfig::from_env)
}

#[derive(Clone, Debug)]
pub struct Timeouts {
    pub weather_http: Duration,
}

impl Timeouts {
    fn from_env() -> Self {
        // Default: weather API 10s. Env: WEATHER_HTTP_TIMEOUT_MS.
        // On expiry the HTTP client errors out and the dialog treats it as a provider failure.
        Self {
            weather_http: env_duration_ms("WEATHER_HTTP_TIMEOUT_MS", 10_000),
        }
    }
}

static TIMEOUTS: OnceLock<Timeouts> = OnceLock::new();

pub fn timeouts() -> &'static Timeouts {
    TIMEOUTS.get_or_init(Timeouts::from_env)
}

#[derive(Clone, Debug)]
pub enum LogMode {
    Stdout,
    File,
}

#[derive(Clone, Debug)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub mode: LogMode,
    pub format: LogFormat,
    pub dir: Option<String>,
    pub file_name: String,
}

impl LoggingConfig {
    fn from_env() -> Self {
        let dir_env = std::env::var("LOG_DIR").ok();
        let mode_env = std::env::var("LOG_MODE").ok();
        let format_env = std::env::var("LOG_FORMAT").ok();

        let format = match format_env.as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        let mode = match mode_env.as_deref() {
            Some("file") => LogMode::File,
            Some("stdout") => LogMode::Stdout,
            _ => {
                if dir_env.is_some() {
                    LogMode::File
                } else {
                    LogMode::Stdout
                }
            }
        };

        let dir = match mode {
            LogMode::File => Some(dir_env.unwrap_or_else(|| "logs".to_string())),
            LogMode::Stdout => None,
        };

        let file_name =
            std::env::var("LOG_FILE_NAME").unwrap_or_else(|_| "weatherbot.log".to_string());

        Self {
            mode,
            format,
            dir,
            file_name,
        }
    }
}

static LOGGING: OnceLock<LoggingConfig> = OnceLock::new();

pub fn logging_config() -> &'static LoggingConfig {
    LOGGING.get_or_init(LoggingConfig::from_env)
}

fn env_duration_ms(key: &str, default_ms: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}
