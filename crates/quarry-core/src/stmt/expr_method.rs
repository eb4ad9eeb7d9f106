use super::Expr;

/// A call to a named function, e.g. `startsWith(name, 'A')`.
///
/// The formatter looks the name up (case-insensitively) in its method table.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprMethod {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Expr {
    pub fn method(name: impl Into<String>, args: impl IntoIterator<Item = Expr>) -> Expr {
        ExprMethod {
            name: name.into(),
            args: args.into_iter().collect(),
        }
        .into()
    }
}

impl From<ExprMethod> for Expr {
    fn from(value: ExprMethod) -> Self {
        Expr::Method(value)
    }
}
