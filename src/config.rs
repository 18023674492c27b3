//! Application configuration.
//!
//! With nothing configured the server listens on `0.0.0.0:8888`, which is
//! where the frontend expects it.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::Path,
    time::Duration,
};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Uncased,
};

use humantime::format_duration;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error as _};

use anyhow::Error;

/// Full application configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// HTTP server configuration.
    pub http: HttpConfig,
}

/// HTTP server configuration.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    /// The address to bind to.
    pub host: IpAddr,
    /// The port to listen on.
    pub port: u16,
    /// How long in-flight requests get to finish after a shutdown signal.
    #[serde(
        deserialize_with = "deserialize_duration",
        serialize_with = "serialize_duration"
    )]
    pub shutdown_timeout: Duration,
}

impl HttpConfig {
    /// The socket address to listen on.
    pub fn addr(&self) -> SocketAddr {
        (self.host, self.port).into()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8888,
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

/// Reads the configuration.
pub fn read_config(config_file: impl AsRef<Path>) -> Result<Config, Error> {
    Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_file))
        .merge(Env::prefixed("PLAYMATE_").split("__"))
        .merge(Env::raw().filter_map(|k| match k.as_str() {
            "HOST" => Some(Uncased::from("http.host")),
            "PORT" => Some(Uncased::from("http.port")),
            _ => None,
        }))
        .extract()
        .map_err(From::from)
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    humantime::parse_duration(&text).map_err(D::Error::custom)
}

fn serialize_duration<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    format_duration(*duration).to_string().serialize(serializer)
}
