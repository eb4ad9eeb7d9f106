use super::{statement, Comma, Context, Delimited, Ident, ResolvingMember, ToSql};
use crate::stmt::{
    CompareOp, Expr, ExprCompare, ExprField, ExprLogical, LogicalOp, OrderBy, SelectField, Value,
};

use quarry_core::Result;

impl ToSql for &Expr {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        match self {
            Expr::Value(value) => value.to_sql(cx, dst),
            Expr::Field(field) => field.to_sql(cx, dst),
            Expr::Compare(compare) => compare.to_sql(cx, dst),
            Expr::Logical(logical) => logical.to_sql(cx, dst),
            Expr::Method(method) => {
                dst.push_str(&cx.call(&method.name, &method.args)?);
                Ok(())
            }
            Expr::Json(json) => json.to_sql(cx, dst),
            Expr::Query(query) => {
                dst.push('(');
                statement::limit_select(cx, query, dst)?;
                dst.push(')');
                Ok(())
            }
        }
    }
}

impl ToSql for &ExprField {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        if self.is_member_path() {
            let mut event = ResolvingMember {
                target: self
                    .collection
                    .as_deref()
                    .or(cx.collection())
                    .map(str::to_string),
                member: self.name.clone(),
                resolved: None,
            };
            cx.formatter.resolve_member(&mut event);

            if let Some(expr) = event.resolved {
                return expr.to_sql(cx, dst);
            }

            // The first segment names the collection
            match &self.collection {
                Some(collection) => fmt!(cx, dst, Ident(collection) "." Ident(&self.name)),
                None => fmt!(cx, dst, Ident(&self.name)),
            }
            return Ok(());
        }

        match self.collection.as_deref().or(cx.collection()) {
            Some(collection) => fmt!(cx, dst, Ident(collection) "." Ident(&self.name)),
            None => fmt!(cx, dst, Ident(&self.name)),
        }
        Ok(())
    }
}

impl ToSql for &ExprCompare {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        let op = match self.op {
            CompareOp::Text => "text",
            CompareOp::Regex => "regex",
            CompareOp::In | CompareOp::Nin => return in_list(cx, self, dst),
            _ => {
                let lhs = cx.escape(&self.lhs)?;
                if lhs.is_empty() {
                    return Ok(());
                }

                match (self.op, &*self.rhs) {
                    (CompareOp::Eq, Expr::Value(Value::Null)) => {
                        fmt!(cx, dst, lhs.as_str() " IS NULL")
                    }
                    (CompareOp::Ne, Expr::Value(Value::Null)) => {
                        fmt!(cx, dst, lhs.as_str() " IS NOT NULL")
                    }
                    (op, rhs) => {
                        let op = match op {
                            CompareOp::Eq => "=",
                            CompareOp::Ne => "<>",
                            CompareOp::Lt => "<",
                            CompareOp::Lte => "<=",
                            CompareOp::Gt => ">",
                            CompareOp::Gte => ">=",
                            _ => unreachable!(),
                        };
                        fmt!(cx, dst, "(" lhs.as_str() op rhs ")");
                    }
                }
                return Ok(());
            }
        };

        let args = [(*self.lhs).clone(), (*self.rhs).clone()];
        dst.push_str(&cx.call(op, &args)?);
        Ok(())
    }
}

fn in_list(cx: &Context<'_>, expr: &ExprCompare, dst: &mut String) -> Result<()> {
    let negate = expr.op == CompareOp::Nin;
    let lhs = cx.escape(&expr.lhs)?;
    if lhs.is_empty() {
        return Ok(());
    }
    let op = if negate { " NOT IN (" } else { " IN (" };

    match &*expr.rhs {
        // `x IN ()` is a syntax error
        Expr::Value(Value::List(items)) if items.is_empty() => {
            dst.push_str(if negate { "TRUE" } else { "FALSE" });
        }
        Expr::Value(Value::List(items)) => {
            fmt!(cx, dst, "(" lhs.as_str() op Comma(items) "))")
        }
        Expr::Query(query) => {
            fmt!(cx, dst, "(" lhs.as_str() op);
            statement::limit_select(cx, query, dst)?;
            dst.push_str("))");
        }
        rhs => fmt!(cx, dst, "(" lhs.as_str() op rhs "))"),
    }
    Ok(())
}

impl ToSql for &ExprLogical {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        // Operands that compile to nothing are dropped
        let operands = self
            .operands
            .iter()
            .map(|operand| cx.escape(operand))
            .filter(|operand| !matches!(operand, Ok(sql) if sql.is_empty()))
            .collect::<Result<Vec<_>>>()?;

        if operands.is_empty() {
            return Ok(());
        }

        match self.op {
            LogicalOp::And | LogicalOp::Or if operands.len() == 1 => {
                dst.push_str(&operands[0]);
            }
            LogicalOp::And => fmt!(cx, dst, "(" Delimited(&operands, " AND ") ")"),
            LogicalOp::Or => fmt!(cx, dst, "(" Delimited(&operands, " OR ") ")"),
            LogicalOp::Not => fmt!(cx, dst, "NOT (" Delimited(&operands, " AND ") ")"),
            LogicalOp::Nor => fmt!(cx, dst, "NOT (" Delimited(&operands, " OR ") ")"),
        }
        Ok(())
    }
}

impl ToSql for &SelectField {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        // Plain fields keep their column name; computed entries are named
        // after their alias or json key.
        let alias = match (&self.alias, &self.expr) {
            (Some(alias), _) => Some(&alias[..]),
            (None, Expr::Field(field)) if !field.is_member_path() => None,
            (None, _) => self.name(),
        };

        fmt!(cx, dst, &self.expr);
        if let Some(alias) = alias {
            fmt!(cx, dst, " AS " Ident(alias));
        }
        Ok(())
    }
}

impl ToSql for &OrderBy {
    fn to_sql(self, cx: &Context<'_>, dst: &mut String) -> Result<()> {
        let direction = match self.direction {
            crate::stmt::Direction::Asc => " ASC",
            crate::stmt::Direction::Desc => " DESC",
        };
        fmt!(cx, dst, &self.expr direction);
        Ok(())
    }
}
