use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Once;

use chrono::Utc;

use crate::config::{self, LogFormat, LogMode};

static INIT: Once = Once::new();

/// Installs the global logger once, according to `config::logging_config()`.
///
/// Each record becomes one text or JSON line with an RFC3339 timestamp,
/// written to stdout or to the configured file. If the file target cannot be
/// opened, logging falls back to stdout and reports the problem as a warning.
pub fn init() {
    INIT.call_once(|| {
        let cfg = config::logging_config().clone();
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

        let format = cfg.format.clone();
        builder.format(move |buf, record| {
            let ts = Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
            match format {
                LogFormat::Json => writeln!(
                    buf,
                    "{}",
                    serde_json::json!({
                        "ts": ts,
                        "level": record.level().to_string(),
                        "target": record.target(),
                        "msg": record.args().to_string(),
                    })
                ),
                LogFormat::Text => writeln!(
                    buf,
                    "{} {} {} {}",
                    ts,
                    record.level(),
                    record.target(),
                    record.args()
                ),
            }
        });

        let mut init_warning = None;
        match cfg.mode {
            LogMode::File => match open_log_file(cfg.dir.as_deref(), &cfg.file_name) {
                Ok(Some(file)) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Ok(None) => {
                    builder.target(env_logger::Target::Stdout);
                }
                Err(err) => {
                    init_warning = Some(format!("[logging] file target unavailable: {}", err));
                    builder.target(env_logger::Target::Stdout);
                }
            },
            LogMode::Stdout => {
                builder.target(env_logger::Target::Stdout);
            }
        }

        let _ = builder.try_init();
        if let Some(warning) = init_warning {
            log::warn!("{}", warning);
        }
    });
}

fn open_log_file(dir: Option<&str>, file_name: &str) -> std::io::Result<Option<File>> {
    let Some(dir) = dir else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)?;
    let path = Path::new(dir).join(file_name);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Some)
}
