use super::Expr;

/// One entry of a select list: an expression with an optional alias.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectField {
    pub expr: Expr,
    pub alias: Option<String>,
}

impl SelectField {
    pub fn new(expr: impl Into<Expr>) -> SelectField {
        SelectField {
            expr: expr.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The name this entry is known by in a result row: its alias, otherwise
    /// the field's last member segment, otherwise the last key of a
    /// `jsonGet` path.
    pub fn name(&self) -> Option<&str> {
        if let Some(alias) = &self.alias {
            return Some(alias);
        }
        match &self.expr {
            Expr::Field(field) => Some(field.member_name()),
            Expr::Json(super::ExprJson::Get(path)) => path.rsplit('.').next(),
            _ => None,
        }
    }
}

impl From<Expr> for SelectField {
    fn from(value: Expr) -> Self {
        SelectField::new(value)
    }
}
