//! Generic converter for SQL-style type strings.
//!
//! Accepted shape: `NAME [ '(' p [, s] ')' ] [UNSIGNED] [NOT NULL | NULL]`,
//! case-insensitive. Integer display widths such as `INT(11)` are ignored.

use schemabridge_core::config::ConverterConfig;
use schemabridge_core::error::{Error, Result};
use schemabridge_core::schema::{DataType, LogicalType, MAX_DECIMAL_PRECISION, MAX_TIME_PRECISION};

use crate::converter::RawTypeConverter;

#[derive(Debug, Clone, Default)]
pub struct SqlTypeConverter {
    config: ConverterConfig,
}

impl SqlTypeConverter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    fn resolve(&self, raw: &str, parsed: &ParsedType) -> Result<DataType> {
        let unsupported = || Error::UnsupportedType(raw.trim().to_string());
        let p = &parsed.params;

        let dt = match parsed.name.as_str() {
            "BOOLEAN" | "BOOL" => DataType::Boolean,
            "BIT" => match p.first() {
                Some(&n) if n > 1 => DataType::Binary,
                _ => DataType::Boolean,
            },
            "TINYINT" if parsed.unsigned => DataType::Int16,
            "TINYINT" => DataType::Int8,
            "SMALLINT" if parsed.unsigned => DataType::Int32,
            "SMALLINT" => DataType::Int16,
            "INT" | "INTEGER" | "MEDIUMINT" if parsed.unsigned => DataType::Int64,
            "INT" | "INTEGER" | "MEDIUMINT" => DataType::Int32,
            "BIGINT" if parsed.unsigned => DataType::Decimal128 {
                precision: 20,
                scale: 0,
            },
            "BIGINT" => DataType::Int64,
            "FLOAT" | "REAL" => DataType::Float32,
            "DOUBLE" => DataType::Float64,
            "DECIMAL" | "NUMERIC" => {
                let (precision, scale) = match p.as_slice() {
                    [] => (
                        u32::from(self.config.default_decimal_precision),
                        u32::from(self.config.default_decimal_scale),
                    ),
                    [precision] => (*precision, 0),
                    [precision, scale] => (*precision, *scale),
                    _ => return Err(unsupported()),
                };
                if precision == 0
                    || precision > u32::from(MAX_DECIMAL_PRECISION)
                    || scale > precision
                {
                    return Err(unsupported());
                }
                DataType::Decimal128 {
                    precision: precision as u8,
                    scale: scale as u8,
                }
            }
            "CHAR" => match p.as_slice() {
                [] => DataType::Char {
                    length: self.config.default_char_length,
                },
                [0] => return Err(unsupported()),
                [length] => DataType::Char { length: *length },
                _ => return Err(unsupported()),
            },
            "VARCHAR" | "STRING" | "TEXT" => DataType::Utf8,
            "BINARY" | "VARBINARY" | "BYTES" | "BLOB" => DataType::Binary,
            "DATE" => DataType::Date32,
            "TIME" => DataType::Time {
                precision: self
                    .time_precision(p, self.config.default_time_precision)
                    .ok_or_else(unsupported)?,
            },
            "TIMESTAMP" | "DATETIME" => DataType::Timestamp {
                precision: self
                    .time_precision(p, self.config.default_timestamp_precision)
                    .ok_or_else(unsupported)?,
            },
            _ => return Err(unsupported()),
        };
        Ok(dt)
    }

    fn time_precision(&self, params: &[u32], default: u8) -> Option<u8> {
        match params {
            [] => Some(default),
            [p] if *p <= u32::from(MAX_TIME_PRECISION) => Some(*p as u8),
            _ => None,
        }
    }
}

impl RawTypeConverter for SqlTypeConverter {
    fn apply(&self, type_string: &str) -> Result<LogicalType> {
        let resolved = parse_type_string(type_string).and_then(|parsed| {
            self.resolve(type_string, &parsed)
                .map(|dt| LogicalType::new(dt).with_nullable(!parsed.not_null))
        });
        #[cfg(feature = "tracing")]
        if let Err(e) = &resolved {
            tracing::debug!(type_string, error = %e, "sql converter rejected type");
        }
        resolved
    }
}

#[derive(Debug, PartialEq, Eq)]
struct ParsedType {
    name: String,
    params: Vec<u32>,
    unsigned: bool,
    not_null: bool,
}

fn parse_type_string(raw: &str) -> Result<ParsedType> {
    let unsupported = || Error::UnsupportedType(raw.trim().to_string());
    let upper = raw.trim().to_ascii_uppercase();
    if upper.is_empty() {
        return Err(unsupported());
    }

    let (name, params, rest) = match upper.find('(') {
        Some(open) => {
            let close = upper[open..].find(')').ok_or_else(unsupported)? + open;
            let params = upper[open + 1..close]
                .split(',')
                .map(|s| s.trim().parse::<u32>().map_err(|_| unsupported()))
                .collect::<Result<Vec<_>>>()?;
            (upper[..open].trim(), params, &upper[close + 1..])
        }
        None => {
            let end = upper.find(char::is_whitespace).unwrap_or(upper.len());
            (&upper[..end], Vec::new(), &upper[end..])
        }
    };

    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(unsupported());
    }

    let mut unsigned = false;
    let mut not_null = false;
    let mut tokens = rest.split_whitespace();
    while let Some(tok) = tokens.next() {
        match tok {
            "UNSIGNED" => unsigned = true,
            "NULL" => {}
            "NOT" => match tokens.next() {
                Some("NULL") => not_null = true,
                _ => return Err(unsupported()),
            },
            _ => return Err(unsupported()),
        }
    }

    Ok(ParsedType {
        name: name.to_string(),
        params,
        unsigned,
        not_null,
    })
}
