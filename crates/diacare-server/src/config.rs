use std::env;
use std::fmt::Display;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use diacare_storage::backend::StoreUrl;

pub const STORE_URL: &str = "DIACARE_STORE_URL";
pub const PORT: &str = "PORT";
pub const BIND_ADDR: &str = "DIACARE_BIND_ADDR";

const DEFAULT_PORT: u16 = 3000;

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub store_url: StoreUrl,
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let store_url = lookup(STORE_URL)
            .ok_or_else(|| eyre::eyre!("{STORE_URL} must be set (s3://bucket or memory://)"))?
            .parse::<StoreUrl>()?;

        Ok(Self {
            store_url,
            bind_addr: try_load(&lookup, BIND_ADDR, IpAddr::V4(Ipv4Addr::UNSPECIFIED))?,
            port: try_load(&lookup, PORT, DEFAULT_PORT)?,
        })
    }
}

fn try_load<T>(lookup: impl Fn(&str) -> Option<String>, key: &str, default: T) -> eyre::Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| eyre::eyre!("invalid {key} value {raw:?}: {e}")),
        None => {
            tracing::info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
