use super::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    In,
    Nin,
    /// Text search; formatted through the `text` method.
    Text,
    /// Regular expression match; formatted through the `regex` method.
    Regex,
}

/// A comparison: `lhs <op> rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprCompare {
    pub lhs: Box<Expr>,
    pub op: CompareOp,
    pub rhs: Box<Expr>,
}

impl Expr {
    pub fn compare(lhs: impl Into<Expr>, op: CompareOp, rhs: impl Into<Expr>) -> Expr {
        ExprCompare {
            lhs: Box::new(lhs.into()),
            op,
            rhs: Box::new(rhs.into()),
        }
        .into()
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::compare(lhs, CompareOp::Eq, rhs)
    }

    pub fn ne(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::compare(lhs, CompareOp::Ne, rhs)
    }

    pub fn lt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::compare(lhs, CompareOp::Lt, rhs)
    }

    pub fn lte(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::compare(lhs, CompareOp::Lte, rhs)
    }

    pub fn gt(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::compare(lhs, CompareOp::Gt, rhs)
    }

    pub fn gte(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::compare(lhs, CompareOp::Gte, rhs)
    }

    pub fn in_list(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::compare(lhs, CompareOp::In, rhs)
    }

    pub fn not_in_list(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::compare(lhs, CompareOp::Nin, rhs)
    }
}

impl From<ExprCompare> for Expr {
    fn from(value: ExprCompare) -> Self {
        Expr::Compare(value)
    }
}
