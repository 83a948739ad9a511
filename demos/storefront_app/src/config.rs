// demos/storefront_app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT: '{}' (expected pretty or json)", other))),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Upper bound on an accepted JSON body, in bytes.
  pub max_payload_bytes: usize,
  /// How many lines the in-memory cart accepts before refusing more.
  pub cart_max_lines: usize,
  pub log_format: LogFormat,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 8080,
      max_payload_bytes: 4096,
      cart_max_lines: 100,
      log_format: LogFormat::Pretty,
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any key/value source; unset keys keep their defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();

    fn parse_var<T: FromStr>(name: &str, raw: Option<String>, default: T) -> Result<T>
    where
      T::Err: std::fmt::Display,
    {
      match raw {
        Some(value) => value
          .trim()
          .parse::<T>()
          .map_err(|e| AppError::Config(format!("Invalid {}: {}", name, e))),
        None => Ok(default),
      }
    }

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = parse_var("SERVER_PORT", lookup("SERVER_PORT"), defaults.server_port)?;
    let max_payload_bytes = parse_var("MAX_PAYLOAD_BYTES", lookup("MAX_PAYLOAD_BYTES"), defaults.max_payload_bytes)?;
    let cart_max_lines = parse_var("CART_MAX_LINES", lookup("CART_MAX_LINES"), defaults.cart_max_lines)?;
    let log_format = match lookup("LOG_FORMAT") {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => defaults.log_format,
    };

    if max_payload_bytes == 0 {
      return Err(AppError::Config("MAX_PAYLOAD_BYTES must be greater than zero".to_string()));
    }

    Ok(Self {
      server_host,
      server_port,
      max_payload_bytes,
      cart_max_lines,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
