//! Resolve runtime value classes to logical column types.
//!
//! Parameter defaults (decimal precision/scale, time and timestamp
//! precision) come from `ConverterConfig`, the same source the SQL
//! converter uses, so a bare `timestamp` resolves identically on both paths.

use schemabridge_core::config::ConverterConfig;
use schemabridge_core::error::{Error, Result};
use schemabridge_core::field::{FieldClass, FieldConf};
use schemabridge_core::schema::{DataType, LogicalType, MAX_DECIMAL_PRECISION, MAX_TIME_PRECISION};

/// Logical type for one value class. All resolved types are nullable.
pub fn field_type(class: FieldClass, config: &ConverterConfig) -> LogicalType {
    let data_type = match class {
        FieldClass::Boolean => DataType::Boolean,
        FieldClass::Byte => DataType::Int8,
        FieldClass::Short => DataType::Int16,
        FieldClass::Integer => DataType::Int32,
        FieldClass::Long => DataType::Int64,
        FieldClass::Float => DataType::Float32,
        FieldClass::Double => DataType::Float64,
        FieldClass::BigDecimal => DataType::Decimal128 {
            precision: config.default_decimal_precision,
            scale: config.default_decimal_scale,
        },
        FieldClass::String => DataType::Utf8,
        FieldClass::Date => DataType::Date32,
        FieldClass::Time => DataType::Time {
            precision: config.default_time_precision,
        },
        FieldClass::Timestamp => DataType::Timestamp {
            precision: config.default_timestamp_precision,
        },
        FieldClass::Bytes => DataType::Binary,
    };
    LogicalType::new(data_type)
}

/// Logical types for a sequence of classes, in order.
pub fn field_types(classes: &[FieldClass], config: &ConverterConfig) -> Vec<LogicalType> {
    classes.iter().map(|&c| field_type(c, config)).collect()
}

/// Logical type for a declared column.
///
/// Starts from the class type and applies the column's `precision`/`scale`
/// (decimals, times, timestamps) and `not_null`. Out-of-range parameters are
/// rejected with `Error::Config`.
pub fn declared_field_type(field: &FieldConf, config: &ConverterConfig) -> Result<LogicalType> {
    let invalid = |msg: String| Error::Config(format!("column '{}': {}", field.name, msg));

    let base = field_type(field.field_class(), config);
    let data_type = match base.data_type {
        DataType::Decimal128 { precision, scale }
            if field.precision.is_some() || field.scale.is_some() =>
        {
            let precision = field.precision.unwrap_or(precision);
            let scale = match field.precision {
                Some(_) => field.scale.unwrap_or(0),
                None => field.scale.unwrap_or(scale),
            };
            if precision == 0 || precision > MAX_DECIMAL_PRECISION {
                return Err(invalid(format!(
                    "decimal precision must be in 1..={}, got {}",
                    MAX_DECIMAL_PRECISION, precision
                )));
            }
            if scale > precision {
                return Err(invalid(format!(
                    "decimal scale {} exceeds precision {}",
                    scale, precision
                )));
            }
            DataType::Decimal128 { precision, scale }
        }
        DataType::Time { .. } if field.precision.is_some() => DataType::Time {
            precision: declared_time_precision(field)?,
        },
        DataType::Timestamp { .. } if field.precision.is_some() => DataType::Timestamp {
            precision: declared_time_precision(field)?,
        },
        other => other,
    };
    Ok(LogicalType::new(data_type).with_nullable(!field.not_null))
}

fn declared_time_precision(field: &FieldConf) -> Result<u8> {
    let precision = field.precision.unwrap_or_default();
    if precision > MAX_TIME_PRECISION {
        return Err(Error::Config(format!(
            "column '{}': fractional-second precision must be at most {}, got {}",
            field.name, MAX_TIME_PRECISION, precision
        )));
    }
    Ok(precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_map_in_order() {
        let types = field_types(
            &[FieldClass::Long, FieldClass::String, FieldClass::BigDecimal],
            &ConverterConfig::default(),
        );
        let rendered: Vec<String> = types.iter().map(|t| t.to_string()).collect();
        assert_eq!(rendered, vec!["BIGINT", "STRING", "DECIMAL(38, 18)"]);
        assert!(types.iter().all(|t| t.nullable));
    }

    #[test]
    fn timestamp_default_follows_config() {
        let cfg = ConverterConfig {
            default_timestamp_precision: 3,
            ..Default::default()
        };
        assert_eq!(
            field_type(FieldClass::Timestamp, &cfg).data_type,
            DataType::Timestamp { precision: 3 }
        );
    }

    #[test]
    fn declared_precision_and_scale_apply() {
        let cfg = ConverterConfig::default();
        let mut price = FieldConf::new("price", "decimal(10,2)");
        price.precision = Some(10);
        price.scale = Some(2);
        assert_eq!(
            declared_field_type(&price, &cfg).unwrap().data_type,
            DataType::Decimal128 {
                precision: 10,
                scale: 2
            }
        );

        let mut ts = FieldConf::new("ts", "timestamp").not_null();
        ts.precision = Some(3);
        assert_eq!(
            declared_field_type(&ts, &cfg).unwrap(),
            LogicalType::new(DataType::Timestamp { precision: 3 }).not_null()
        );

        // Precision on a class that takes none is ignored.
        let mut id = FieldConf::new("id", "int");
        id.precision = Some(10);
        assert_eq!(
            declared_field_type(&id, &cfg).unwrap().data_type,
            DataType::Int32
        );
    }

    #[test]
    fn declared_parameters_out_of_range_are_rejected() {
        let cfg = ConverterConfig::default();
        let mut wide = FieldConf::new("amount", "decimal");
        wide.precision = Some(40);
        assert!(matches!(declared_field_type(&wide, &cfg), Err(Error::Config(_))));

        let mut skewed = FieldConf::new("amount", "decimal");
        skewed.precision = Some(4);
        skewed.scale = Some(5);
        assert!(matches!(declared_field_type(&skewed, &cfg), Err(Error::Config(_))));

        let mut ts = FieldConf::new("ts", "datetime");
        ts.precision = Some(12);
        assert!(matches!(declared_field_type(&ts, &cfg), Err(Error::Config(_))));
    }
}
