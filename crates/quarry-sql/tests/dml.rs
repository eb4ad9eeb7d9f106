use pretty_assertions::assert_eq;
use quarry_core::stmt::{Delete, Expr, Insert, Update};
use quarry_sql::{Formatter, Statement};

#[test]
fn insert() {
    let formatter = Formatter::new();
    let stmt = Insert::new("Person").value("name", "Alice").value("age", 30);

    assert_eq!(
        formatter.format(&stmt.into()).unwrap(),
        r#"INSERT INTO "Person" ("name", "age") VALUES ('Alice', 30)"#
    );
}

#[test]
fn insert_without_values_fails() {
    let formatter = Formatter::new();
    let err = formatter
        .format(&Insert::new("Person").into())
        .unwrap_err();
    assert!(err.is_invalid_statement());
}

#[test]
fn update() {
    let formatter = Formatter::new();
    let stmt = Update::new("Person")
        .set("name", "O'Brien")
        .filter(Expr::eq(Expr::field("id"), 1));

    assert_eq!(
        formatter.format(&stmt.into()).unwrap(),
        r#"UPDATE "Person" SET "name"='O''Brien' WHERE ("Person"."id"=1)"#
    );
}

#[test]
fn delete() {
    let formatter = Formatter::new();
    let stmt = Delete::new("Person").filter(Expr::eq(Expr::field("id"), 1));

    assert_eq!(
        formatter.format(&stmt.into()).unwrap(),
        r#"DELETE FROM "Person" WHERE ("Person"."id"=1)"#
    );
}

#[test]
fn core_statement_converts() {
    let formatter = Formatter::new();
    let stmt: Statement = quarry_core::stmt::Statement::from(Delete::new("Person")).into();

    assert_eq!(formatter.format(&stmt).unwrap(), r#"DELETE FROM "Person""#);
}
