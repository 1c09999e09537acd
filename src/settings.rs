use crate::error::Error;

use config::{Config, Environment, File};
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub site_name: String,
    pub db_path: PathBuf,
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Settings {
    /// Layers the built-in defaults, the optional settings file at `path`
    /// (any extension the `config` crate recognises), `GIG_DIRECTORY_*`
    /// environment variables and finally the command-line overrides.
    pub fn load(path: &str, port: Option<u16>, db_path: Option<&Path>) -> Result<Settings, Error> {
        let settings = Config::builder()
            .set_default("host", "127.0.0.1")?
            .set_default("port", 5000_i64)?
            .set_default("site_name", "Gig Directory")?
            .set_default("db_path", "gig-directory.sqlite3")?
            .set_default("log_filter", "info")?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("GIG_DIRECTORY"))
            .set_override_option("port", port.map(i64::from))?
            .set_override_option("db_path", db_path.map(|p| p.to_string_lossy().into_owned()))?
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
