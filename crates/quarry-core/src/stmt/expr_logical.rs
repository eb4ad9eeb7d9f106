use super::Expr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
    Not,
    Nor,
}

/// A logical combination of filter expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprLogical {
    pub op: LogicalOp,
    pub operands: Vec<Expr>,
}

impl Expr {
    pub fn and(operands: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::logical(LogicalOp::And, operands)
    }

    pub fn or(operands: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::logical(LogicalOp::Or, operands)
    }

    pub fn not(operand: impl Into<Expr>) -> Expr {
        Expr::logical(LogicalOp::Not, [operand.into()])
    }

    pub fn nor(operands: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::logical(LogicalOp::Nor, operands)
    }

    fn logical(op: LogicalOp, operands: impl IntoIterator<Item = Expr>) -> Expr {
        ExprLogical {
            op,
            operands: operands.into_iter().collect(),
        }
        .into()
    }
}

impl From<ExprLogical> for Expr {
    fn from(value: ExprLogical) -> Self {
        Expr::Logical(value)
    }
}
