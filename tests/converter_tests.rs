//! SQL type-string converter tests

use schemabridge_core::config::ConverterConfig;
use schemabridge_core::error::Error;
use schemabridge_core::schema::{DataType, LogicalType};
use schemabridge_table::{create_row_type, RawTypeConverter, SqlTypeConverter};

fn dt(conv: &SqlTypeConverter, s: &str) -> DataType {
    conv.apply(s)
        .unwrap_or_else(|e| panic!("{s:?} failed: {e}"))
        .data_type
}

#[test]
fn test_basic_names() {
    let conv = SqlTypeConverter::default();
    assert_eq!(dt(&conv, "INT"), DataType::Int32);
    assert_eq!(dt(&conv, "integer"), DataType::Int32);
    assert_eq!(dt(&conv, "BigInt"), DataType::Int64);
    assert_eq!(dt(&conv, "tinyint"), DataType::Int8);
    assert_eq!(dt(&conv, "smallint"), DataType::Int16);
    assert_eq!(dt(&conv, "bool"), DataType::Boolean);
    assert_eq!(dt(&conv, "real"), DataType::Float32);
    assert_eq!(dt(&conv, "double"), DataType::Float64);
    assert_eq!(dt(&conv, "VARCHAR"), DataType::Utf8);
    assert_eq!(dt(&conv, "varchar(255)"), DataType::Utf8);
    assert_eq!(dt(&conv, "text"), DataType::Utf8);
    assert_eq!(dt(&conv, "blob"), DataType::Binary);
    assert_eq!(dt(&conv, "date"), DataType::Date32);
}

#[test]
fn test_integer_display_width_is_ignored() {
    let conv = SqlTypeConverter::default();
    assert_eq!(dt(&conv, "INT(11)"), DataType::Int32);
    assert_eq!(dt(&conv, "tinyint(1)"), DataType::Int8);
}

#[test]
fn test_unsigned_integers_widen() {
    let conv = SqlTypeConverter::default();
    assert_eq!(dt(&conv, "TINYINT UNSIGNED"), DataType::Int16);
    assert_eq!(dt(&conv, "SMALLINT UNSIGNED"), DataType::Int32);
    assert_eq!(dt(&conv, "INT(10) UNSIGNED"), DataType::Int64);
    assert_eq!(
        dt(&conv, "BIGINT UNSIGNED"),
        DataType::Decimal128 {
            precision: 20,
            scale: 0
        }
    );
}

#[test]
fn test_bit_width() {
    let conv = SqlTypeConverter::default();
    assert_eq!(dt(&conv, "BIT"), DataType::Boolean);
    assert_eq!(dt(&conv, "BIT(1)"), DataType::Boolean);
    assert_eq!(dt(&conv, "BIT(8)"), DataType::Binary);
}

#[test]
fn test_decimal_parameters_and_defaults() {
    let conv = SqlTypeConverter::default();
    assert_eq!(
        dt(&conv, "DECIMAL(10, 2)"),
        DataType::Decimal128 {
            precision: 10,
            scale: 2
        }
    );
    assert_eq!(
        dt(&conv, "numeric(7)"),
        DataType::Decimal128 {
            precision: 7,
            scale: 0
        }
    );
    assert_eq!(
        dt(&conv, "decimal"),
        DataType::Decimal128 {
            precision: 38,
            scale: 18
        }
    );

    let narrow = SqlTypeConverter::new(ConverterConfig {
        default_decimal_precision: 20,
        default_decimal_scale: 4,
        ..Default::default()
    });
    assert_eq!(
        dt(&narrow, "DECIMAL"),
        DataType::Decimal128 {
            precision: 20,
            scale: 4
        }
    );
}

#[test]
fn test_invalid_decimal_parameters() {
    let conv = SqlTypeConverter::default();
    for raw in ["DECIMAL(0)", "DECIMAL(39, 2)", "DECIMAL(5, 6)", "DECIMAL(1, 2, 3)"] {
        assert_eq!(
            conv.apply(raw).unwrap_err(),
            Error::UnsupportedType(raw.to_string())
        );
    }
}

#[test]
fn test_temporal_precision() {
    let conv = SqlTypeConverter::default();
    assert_eq!(dt(&conv, "TIMESTAMP"), DataType::Timestamp { precision: 6 });
    assert_eq!(dt(&conv, "datetime(3)"), DataType::Timestamp { precision: 3 });
    assert_eq!(dt(&conv, "TIME"), DataType::Time { precision: 0 });
    assert_eq!(dt(&conv, "TIME(9)"), DataType::Time { precision: 9 });
    assert!(conv.apply("TIMESTAMP(10)").is_err());
}

#[test]
fn test_char_length() {
    let conv = SqlTypeConverter::default();
    assert_eq!(dt(&conv, "CHAR"), DataType::Char { length: 1 });
    assert_eq!(dt(&conv, "char(8)"), DataType::Char { length: 8 });
    assert!(conv.apply("CHAR(0)").is_err());
}

#[test]
fn test_nullability_suffixes() {
    let conv = SqlTypeConverter::default();
    assert_eq!(
        conv.apply("VARCHAR(32) NOT NULL").unwrap(),
        LogicalType::new(DataType::Utf8).not_null()
    );
    assert!(conv.apply("INT NULL").unwrap().nullable);
    assert!(conv.apply("INT").unwrap().nullable);
    assert!(conv.apply("INT NOT").is_err());
}

#[test]
fn test_unknown_types_are_unsupported() {
    let conv = SqlTypeConverter::default();
    for raw in ["UNKNOWN", "geometry", "", "INT UNSIGNED ZEROFILL"] {
        assert!(
            matches!(conv.apply(raw), Err(Error::UnsupportedType(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn test_sql_converter_drives_row_type() {
    let conv = SqlTypeConverter::default();
    let row = create_row_type(
        &["id", "name", "amount", "ts"],
        &["BIGINT NOT NULL", "VARCHAR(64)", "DECIMAL(12,2)", "TIMESTAMP(3)"],
        &conv,
    )
    .unwrap();
    assert_eq!(
        row.to_string(),
        "ROW<`id` BIGINT NOT NULL, `name` STRING, `amount` DECIMAL(12, 2), `ts` TIMESTAMP(3)> NOT NULL"
    );
}

#[test]
fn test_sql_converter_failure_aborts_row() {
    let conv = SqlTypeConverter::default();
    let err = create_row_type(&["a", "b"], &["INT", "UNKNOWN"], &conv).unwrap_err();
    assert_eq!(err, Error::UnsupportedType("UNKNOWN".into()));
}

#[test]
fn test_converter_is_shareable_across_threads() {
    let conv = std::sync::Arc::new(SqlTypeConverter::default());
    let handles: Vec<_> = ["INT", "BIGINT", "DATE", "DOUBLE"]
        .into_iter()
        .map(|s| {
            let conv = conv.clone();
            std::thread::spawn(move || conv.apply(s).map(|t| t.data_type))
        })
        .collect();
    let resolved: Vec<DataType> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(
        resolved,
        vec![
            DataType::Int32,
            DataType::Int64,
            DataType::Date32,
            DataType::Float64
        ]
    );
}
