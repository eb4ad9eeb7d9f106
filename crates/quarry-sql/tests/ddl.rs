use pretty_assertions::assert_eq;
use quarry_core::{
    schema::FieldDescriptor,
    stmt::{Expr, QueryExpression},
};
use quarry_sql::{Formatter, Statement};

fn format(stmt: Statement) -> String {
    Formatter::new().format(&stmt).unwrap()
}

#[test]
fn create_table() {
    let sql = format(Statement::create_table(
        "Person",
        vec![
            FieldDescriptor::new("id", "Counter").primary(),
            FieldDescriptor::new("name", "Text").size(120).nullable(false),
            FieldDescriptor::new("email", "Text").size(255),
        ],
    ));

    assert_eq!(
        sql,
        r#"CREATE TABLE "Person" ("id" SERIAL, "name" varchar(120) NOT NULL, "email" varchar(255) NULL, PRIMARY KEY ("id"))"#
    );
}

#[test]
fn create_table_if_not_exists_with_schema() {
    let sql = format(Statement::create_table_if_not_exists(
        "sales.orders",
        vec![FieldDescriptor::new("id", "Integer").primary()],
    ));

    assert_eq!(
        sql,
        r#"CREATE TABLE IF NOT EXISTS "sales"."orders" ("id" int NOT NULL, PRIMARY KEY ("id"))"#
    );
}

#[test]
fn create_table_without_fields_fails() {
    let err = Formatter::new()
        .format(&Statement::create_table("Person", vec![]))
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn add_column() {
    assert_eq!(
        format(Statement::add_column(
            "Person",
            FieldDescriptor::new("birthDate", "Date")
        )),
        r#"ALTER TABLE "Person" ADD COLUMN "birthDate" date NULL"#
    );
}

#[test]
fn alter_column() {
    assert_eq!(
        format(Statement::alter_column(
            "Person",
            FieldDescriptor::new("name", "Text").size(200).nullable(false)
        )),
        r#"ALTER TABLE "Person" ALTER COLUMN "name" TYPE varchar(200), ALTER COLUMN "name" SET NOT NULL"#
    );
}

#[test]
fn alter_counter_column_keeps_its_type() {
    assert_eq!(
        format(Statement::alter_column(
            "Person",
            FieldDescriptor::new("id", "Counter").primary()
        )),
        r#"ALTER TABLE "Person" ALTER COLUMN "id" SET NOT NULL"#
    );
}

#[test]
fn indexes() {
    assert_eq!(
        format(Statement::create_index(
            "idx_person_name",
            "Person",
            ["familyName", "givenName"]
        )),
        r#"CREATE INDEX "idx_person_name" ON "Person" ("familyName", "givenName")"#
    );
    assert_eq!(
        format(Statement::drop_index(None, "idx_person_name")),
        r#"DROP INDEX "public"."idx_person_name""#
    );
}

#[test]
fn views() {
    let query = QueryExpression::new()
        .from("Person")
        .select([Expr::field("id"), Expr::field("name")]);

    assert_eq!(
        format(Statement::create_view("PersonView", query)),
        r#"CREATE VIEW "PersonView" AS SELECT "Person"."id", "Person"."name" FROM "Person""#
    );
    assert_eq!(
        format(Statement::drop_view_if_exists("PersonView")),
        r#"DROP VIEW IF EXISTS "PersonView""#
    );
}
