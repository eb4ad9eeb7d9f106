use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use quarry_core::stmt::Value;
use quarry_sql::Formatter;

#[test]
fn escape_constant() {
    let formatter = Formatter::new();
    let date = NaiveDate::from_ymd_opt(2019, 5, 15)
        .unwrap()
        .and_hms_opt(12, 45, 0)
        .unwrap();

    assert_eq!(formatter.escape_constant(&Value::from(10.45)), "10.45::float");
    assert_eq!(formatter.escape_constant(&Value::from("test")), "'test'::text");
    assert_eq!(formatter.escape_constant(&Value::from(true)), "true::bool");
    assert_eq!(
        formatter.escape_constant(&Value::from(date)),
        "'2019-05-15 12:45:00.000'::timestamp"
    );
    assert_eq!(formatter.escape_constant(&Value::Null), "NULL::text");
}

#[test]
fn escape_non_finite_floats() {
    let formatter = Formatter::new();

    assert_eq!(formatter.escape(&Value::F64(f64::NAN), false), "'NaN'::float8");
    assert_eq!(
        formatter.escape(&Value::F64(f64::INFINITY), false),
        "'Infinity'::float8"
    );
    assert_eq!(
        formatter.escape(&Value::F64(f64::NEG_INFINITY), false),
        "'-Infinity'::float8"
    );
    assert_eq!(formatter.escape(&Value::F64(-2.5), false), "-2.5");
}

#[test]
fn escape_bytes() {
    let formatter = Formatter::new();
    let bytes = Value::Bytes(vec![0x01, 0x02, 0xff]);

    assert_eq!(formatter.escape(&bytes, false), r"'\x0102ff'");
    assert_eq!(formatter.escape_constant(&bytes), r"'\x0102ff'::bytea");
    assert_eq!(formatter.escape(&Value::Bytes(vec![]), false), r"'\x'");
}

#[test]
fn escape_strings() {
    let formatter = Formatter::new();

    assert_eq!(formatter.escape(&Value::from("it's"), false), "'it''s'");
    assert_eq!(formatter.escape(&Value::from("it's"), true), "it''s");
    assert_eq!(
        formatter.escape(&Value::from(r#"say "hi""#), false),
        r#"'say "hi"'"#
    );
}

#[test]
fn escape_lists() {
    let formatter = Formatter::new();

    // Scalars are stored as JSON text
    assert_eq!(
        formatter.escape(&Value::from(vec![1, 2, 3]), false),
        "'[1,2,3]'"
    );

    // A list of objects expands element by element
    let objects = Value::List(vec![
        [("a", 1)].into_iter().collect(),
        [("a", 2)].into_iter().collect(),
    ]);
    assert_eq!(
        formatter.escape(&objects, false),
        r#"'{"a":1}', '{"a":2}'"#
    );
}

#[test]
fn escape_name() {
    let formatter = Formatter::new();
    assert_eq!(formatter.escape_name("Person"), r#""Person""#);
    assert_eq!(formatter.escape_name("sales.orders"), r#""sales"."orders""#);
}

#[test]
fn prepare() {
    let formatter = Formatter::new();
    let sql = formatter
        .prepare(
            r#"SELECT * FROM "Person" WHERE "name"=? AND "age">?"#,
            &[Value::from("Alice"), Value::from(18)],
        )
        .unwrap();

    assert_eq!(
        sql,
        r#"SELECT * FROM "Person" WHERE "name"='Alice' AND "age">18"#
    );
}
