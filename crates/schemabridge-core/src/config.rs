//! Converter configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::{MAX_DECIMAL_PRECISION, MAX_TIME_PRECISION};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Precision used for `DECIMAL` / `NUMERIC` declared without parameters.
    pub default_decimal_precision: u8,

    /// Scale used for `DECIMAL` / `NUMERIC` declared without parameters.
    pub default_decimal_scale: u8,

    /// Fractional-second precision for a bare `TIMESTAMP` / `DATETIME`.
    pub default_timestamp_precision: u8,

    /// Fractional-second precision for a bare `TIME`.
    pub default_time_precision: u8,

    /// Length for a bare `CHAR`.
    pub default_char_length: u32,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            default_decimal_precision: 38,
            default_decimal_scale: 18,
            default_timestamp_precision: 6,
            default_time_precision: 0,
            default_char_length: 1,
        }
    }
}

impl ConverterConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SCHEMABRIDGE_DECIMAL_PRECISION`: default decimal precision
    /// - `SCHEMABRIDGE_DECIMAL_SCALE`: default decimal scale
    /// - `SCHEMABRIDGE_TIMESTAMP_PRECISION`: default timestamp precision
    /// - `SCHEMABRIDGE_TIME_PRECISION`: default time precision
    /// - `SCHEMABRIDGE_CHAR_LENGTH`: default char length
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SCHEMABRIDGE_DECIMAL_PRECISION") {
            if let Ok(v) = s.parse::<u8>() {
                cfg.default_decimal_precision = v;
            }
        }

        if let Ok(s) = std::env::var("SCHEMABRIDGE_DECIMAL_SCALE") {
            if let Ok(v) = s.parse::<u8>() {
                cfg.default_decimal_scale = v;
            }
        }

        if let Ok(s) = std::env::var("SCHEMABRIDGE_TIMESTAMP_PRECISION") {
            if let Ok(v) = s.parse::<u8>() {
                cfg.default_timestamp_precision = v;
            }
        }

        if let Ok(s) = std::env::var("SCHEMABRIDGE_TIME_PRECISION") {
            if let Ok(v) = s.parse::<u8>() {
                cfg.default_time_precision = v;
            }
        }

        if let Ok(s) = std::env::var("SCHEMABRIDGE_CHAR_LENGTH") {
            if let Ok(v) = s.parse::<u32>() {
                cfg.default_char_length = v;
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_decimal_precision == 0
            || self.default_decimal_precision > MAX_DECIMAL_PRECISION
        {
            return Err(Error::Config(format!(
                "decimal precision must be in 1..={}, got {}",
                MAX_DECIMAL_PRECISION, self.default_decimal_precision
            )));
        }
        if self.default_decimal_scale > self.default_decimal_precision {
            return Err(Error::Config(format!(
                "decimal scale {} exceeds precision {}",
                self.default_decimal_scale, self.default_decimal_precision
            )));
        }
        if self.default_timestamp_precision > MAX_TIME_PRECISION {
            return Err(Error::Config(format!(
                "timestamp precision must be at most {}, got {}",
                MAX_TIME_PRECISION, self.default_timestamp_precision
            )));
        }
        if self.default_time_precision > MAX_TIME_PRECISION {
            return Err(Error::Config(format!(
                "time precision must be at most {}, got {}",
                MAX_TIME_PRECISION, self.default_time_precision
            )));
        }
        if self.default_char_length == 0 {
            return Err(Error::Config("char length must be positive".into()));
        }
        Ok(())
    }
}
