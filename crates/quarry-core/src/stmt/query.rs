use super::*;

/// An engine-independent `SELECT`.
///
/// Built with the chained methods below; the formatter only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryExpression {
    /// Projected fields. Empty selects every column.
    pub select: Vec<SelectField>,

    pub from: Option<QueryEntity>,

    pub joins: Vec<Join>,

    pub filter: Option<Expr>,

    pub group_by: Vec<Expr>,

    pub order_by: Vec<OrderBy>,

    pub take: Option<u64>,

    pub skip: Option<u64>,

    pub distinct: bool,
}

impl QueryExpression {
    pub fn new() -> QueryExpression {
        QueryExpression::default()
    }

    pub fn from(mut self, entity: impl Into<QueryEntity>) -> Self {
        self.from = Some(entity.into());
        self
    }

    pub fn select<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<SelectField>,
    {
        self.select = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the filter, replacing any previous one.
    pub fn filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter = Some(expr.into());
        self
    }

    /// Adds a condition to the filter with `AND`.
    pub fn and_filter(mut self, expr: impl Into<Expr>) -> Self {
        self.filter = Some(match self.filter.take() {
            None => expr.into(),
            Some(Expr::Logical(ExprLogical {
                op: LogicalOp::And,
                mut operands,
            })) => {
                operands.push(expr.into());
                Expr::and(operands)
            }
            Some(prev) => Expr::and([prev, expr.into()]),
        });
        self
    }

    pub fn join(mut self, kind: JoinKind, entity: impl Into<QueryEntity>, on: Expr) -> Self {
        self.joins.push(Join {
            kind,
            entity: entity.into(),
            on,
        });
        self
    }

    pub fn group_by(mut self, expr: impl Into<Expr>) -> Self {
        self.group_by.push(expr.into());
        self
    }

    pub fn order_by(mut self, expr: impl Into<Expr>) -> Self {
        self.order_by.push(OrderBy {
            expr: expr.into(),
            direction: Direction::Asc,
        });
        self
    }

    pub fn order_by_descending(mut self, expr: impl Into<Expr>) -> Self {
        self.order_by.push(OrderBy {
            expr: expr.into(),
            direction: Direction::Desc,
        });
        self
    }

    pub fn take(mut self, n: u64) -> Self {
        self.take = Some(n);
        self
    }

    pub fn skip(mut self, n: u64) -> Self {
        self.skip = Some(n);
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Returns `true` if the query limits or offsets its result.
    pub fn is_paged(&self) -> bool {
        self.take.is_some() || self.skip.is_some()
    }

    /// The name fields without an explicit collection resolve against.
    pub fn collection(&self) -> Option<&str> {
        self.from.as_ref().map(QueryEntity::reference)
    }
}
