use super::{ty, Comma, Context, Ident, ToSql, TypeMode};
use crate::stmt::{
    AddColumn, AlterColumn, CreateIndex, CreateTable, CreateView, Delete, DropIndex, DropView,
    Insert, JoinKind, QueryExpression, Statement, Update,
};

use quarry_core::{Error, Result};

impl ToSql for &Statement {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        match self {
            Statement::AddColumn(stmt) => stmt.to_sql(cx, dst),
            Statement::AlterColumn(stmt) => stmt.to_sql(cx, dst),
            Statement::CreateIndex(stmt) => stmt.to_sql(cx, dst),
            Statement::CreateTable(stmt) => stmt.to_sql(cx, dst),
            Statement::CreateView(stmt) => stmt.to_sql(cx, dst),
            Statement::Delete(stmt) => stmt.to_sql(cx, dst),
            Statement::DropIndex(stmt) => stmt.to_sql(cx, dst),
            Statement::DropView(stmt) => stmt.to_sql(cx, dst),
            Statement::Insert(stmt) => stmt.to_sql(cx, dst),
            Statement::Query(stmt) => limit_select(cx, stmt, dst),
            Statement::Raw(sql) => sql.to_sql(cx, dst),
            Statement::Update(stmt) => stmt.to_sql(cx, dst),
        }
    }
}

pub(super) fn select(cx: &Context<'_>, query: &QueryExpression, dst: &mut String) -> Result<()> {
    let cx = &cx.with_collection(query.collection());

    dst.push_str("SELECT ");
    if query.distinct {
        dst.push_str("DISTINCT ");
    }

    if query.select.is_empty() {
        dst.push('*');
    } else {
        fmt!(cx, dst, Comma(&query.select));
    }

    if let Some(from) = &query.from {
        fmt!(cx, dst, " FROM " Ident(&from.name));
        if let Some(alias) = &from.alias {
            fmt!(cx, dst, " AS " Ident(alias));
        }
    }

    for join in &query.joins {
        let kind = match join.kind {
            JoinKind::Inner => " INNER JOIN ",
            JoinKind::Left => " LEFT JOIN ",
            JoinKind::Right => " RIGHT JOIN ",
        };
        fmt!(cx, dst, kind Ident(&join.entity.name));
        if let Some(alias) = &join.entity.alias {
            fmt!(cx, dst, " AS " Ident(alias));
        }
        let on = &join.on;
        fmt!(cx, dst, " ON " on);
    }

    filter(cx, query.filter.as_ref(), dst)?;

    if !query.group_by.is_empty() {
        fmt!(cx, dst, " GROUP BY " Comma(&query.group_by));
    }

    if !query.order_by.is_empty() {
        fmt!(cx, dst, " ORDER BY " Comma(&query.order_by));
    }

    Ok(())
}

pub(super) fn limit_select(
    cx: &Context<'_>,
    query: &QueryExpression,
    dst: &mut String,
) -> Result<()> {
    select(cx, query, dst)?;

    // OFFSET is only emitted together with LIMIT
    if let Some(take) = query.take {
        fmt!(cx, dst, " LIMIT " take);
        if let Some(skip) = query.skip {
            fmt!(cx, dst, " OFFSET " skip);
        }
    }
    Ok(())
}

fn filter(cx: &Context<'_>, expr: Option<&crate::stmt::Expr>, dst: &mut String) -> Result<()> {
    let Some(expr) = expr else {
        return Ok(());
    };

    let sql = cx.escape(expr)?;
    if !sql.is_empty() {
        fmt!(cx, dst, " WHERE " sql.as_str());
    }
    Ok(())
}

impl ToSql for &Insert {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        if self.values.is_empty() {
            return Err(Error::invalid_statement(format!(
                "insert into `{}` has no values",
                self.into
            )));
        }

        let columns = self.values.keys().map(Ident);
        let values = self.values.values();
        fmt!(cx, dst, "INSERT INTO " Ident(&self.into) " (" Comma(columns) ") VALUES (" Comma(values) ")");
        Ok(())
    }
}

impl ToSql for &Update {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        if self.assignments.is_empty() {
            return Err(Error::invalid_statement(format!(
                "update of `{}` has no assignments",
                self.target
            )));
        }

        let cx = &cx.with_collection(Some(self.target.as_str()));
        let assignments = self
            .assignments
            .iter()
            .map(|(column, value)| Assignment(column, value));
        fmt!(cx, dst, "UPDATE " Ident(&self.target) " SET " Comma(assignments));
        filter(cx, self.filter.as_ref(), dst)
    }
}

struct Assignment<'a>(&'a str, &'a crate::stmt::Value);

impl ToSql for Assignment<'_> {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        fmt!(cx, dst, Ident(self.0) "=" self.1);
        Ok(())
    }
}

impl ToSql for &Delete {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        let cx = &cx.with_collection(Some(self.from.as_str()));
        fmt!(cx, dst, "DELETE FROM " Ident(&self.from));
        filter(cx, self.filter.as_ref(), dst)
    }
}

impl ToSql for &CreateTable {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::invalid_argument(format!(
                "table `{}` needs at least one field",
                self.name
            )));
        }

        let if_not_exists = if self.if_not_exists {
            "IF NOT EXISTS "
        } else {
            ""
        };
        let columns = self.fields.iter().map(|field| ColumnDef(field, TypeMode::Create));

        fmt!(cx, dst, "CREATE TABLE " if_not_exists Ident(&self.name) " (" Comma(columns));

        let primary_key: Vec<_> = self
            .fields
            .iter()
            .filter(|field| field.primary)
            .map(|field| Ident(&field.name))
            .collect();
        if !primary_key.is_empty() {
            fmt!(cx, dst, ", PRIMARY KEY (" Comma(primary_key) ")");
        }

        dst.push(')');
        Ok(())
    }
}

/// A column name followed by its type.
struct ColumnDef<'a>(&'a quarry_core::schema::FieldDescriptor, TypeMode);

impl ToSql for ColumnDef<'_> {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        let ty = ty::format_type(self.0, self.1);
        fmt!(cx, dst, Ident(&self.0.name) " " ty.as_str());
        Ok(())
    }
}

impl ToSql for &AddColumn {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        fmt!(cx, dst, "ALTER TABLE " Ident(&self.table) " ADD COLUMN " ColumnDef(&self.field, TypeMode::Create));
        Ok(())
    }
}

impl ToSql for &AlterColumn {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        if self.changes.is_empty() {
            return Err(Error::invalid_statement(format!(
                "alter column `{}` has no changes",
                self.column
            )));
        }

        let column = Ident(&self.column).to_string();
        let mut actions = vec![];

        if let Some(field) = &self.changes.ty {
            let ty = ty::format_type(field, TypeMode::Bare);
            actions.push(format!("ALTER COLUMN {column} TYPE {ty}"));
        }

        match self.changes.nullable {
            Some(true) => actions.push(format!("ALTER COLUMN {column} DROP NOT NULL")),
            Some(false) => actions.push(format!("ALTER COLUMN {column} SET NOT NULL")),
            None => {}
        }

        fmt!(cx, dst, "ALTER TABLE " Ident(&self.table) " " Comma(&actions));
        Ok(())
    }
}

impl ToSql for &CreateIndex {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        if self.columns.is_empty() {
            return Err(Error::invalid_argument(format!(
                "index `{}` needs at least one column",
                self.name
            )));
        }

        let columns = self.columns.iter().map(Ident);
        fmt!(cx, dst, "CREATE INDEX " Ident(&self.name) " ON " Ident(&self.on) " (" Comma(columns) ")");
        Ok(())
    }
}

impl ToSql for &DropIndex {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        fmt!(cx, dst, "DROP INDEX " Ident(&self.schema) "." Ident(&self.name));
        Ok(())
    }
}

impl ToSql for &CreateView {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        fmt!(cx, dst, "CREATE VIEW " Ident(&self.name) " AS ");
        limit_select(cx, &self.query, dst)
    }
}

impl ToSql for &DropView {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        fmt!(cx, dst, "DROP VIEW " if_exists Ident(&self.name));
        Ok(())
    }
}
