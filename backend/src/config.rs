//! Environment-sourced configuration.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file. Secrets fall back to the widget's demo values with a warning so a
//! local checkout runs without any setup.

use std::{env, fmt::Display, net::IpAddr, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use dotenv::dotenv;
use tracing::{info, warn};

use crate::domain::Credentials;

const DEFAULT_PORT: &str = "5000";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
const DEFAULT_STATIC_DIR: &str = "client/build";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_ONE_TIME_PASSWORDS: [(&str, &str); 3] =
    [("OTP_1", "OTP123"), ("OTP_2", "OTP456"), ("OTP_3", "OTP789")];

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_address: IpAddr,
    /// Directory holding the built single-page application
    pub static_dir: PathBuf,
    /// Seed the schedule with the demo September 2024 slots
    pub seed_demo_slots: bool,
    pub cors_origin: Option<String>,
    pub credentials: Credentials,
}

impl Config {
    /// Load configuration from `.env` (if present) and the environment
    pub fn load() -> Result<Self> {
        if dotenv().is_ok() {
            info!("Loaded variables from .env");
        }
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_source<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = try_load(&lookup, "PORT", DEFAULT_PORT)?;
        let bind_address = try_load(&lookup, "BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?;
        let static_dir = PathBuf::from(load_or(&lookup, "STATIC_DIR", DEFAULT_STATIC_DIR));
        let seed_demo_slots = try_load(&lookup, "SEED_DEMO_SLOTS", "true")?;
        let cors_origin = lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty());

        let admin_password = read_secret(&lookup, "ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD)?;
        let one_time_passwords = DEFAULT_ONE_TIME_PASSWORDS
            .iter()
            .map(|(key, default)| read_secret(&lookup, key, default))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            port,
            bind_address,
            static_dir,
            seed_demo_slots,
            cors_origin,
            credentials: Credentials::new(admin_password, one_time_passwords),
        })
    }
}

fn load_or<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = load_or(lookup, key, default);
    raw.trim()
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}"))
}

fn read_secret<F>(lookup: &F, key: &str, default: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => {
            let value = value.trim().to_string();
            if value.is_empty() {
                return Err(anyhow!("Secrets misconfigured: {key} is set but empty"));
            }
            Ok(value)
        }
        None => {
            warn!("{key} not set, falling back to the demo value");
            Ok(default.to_string())
        }
    }
}
