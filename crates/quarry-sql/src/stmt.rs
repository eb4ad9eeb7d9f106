mod add_column;
pub use add_column::AddColumn;

mod alter_column;
pub use alter_column::{AlterColumn, AlterColumnChanges};

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod create_view;
pub use create_view::CreateView;

mod drop_index;
pub use drop_index::DropIndex;

mod drop_view;
pub use drop_view::DropView;

pub use quarry_core::stmt::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AddColumn(AddColumn),
    AlterColumn(AlterColumn),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    CreateView(CreateView),
    Delete(Delete),
    DropIndex(DropIndex),
    DropView(DropView),
    Insert(Insert),
    Query(QueryExpression),
    /// SQL text passed through untouched.
    Raw(String),
    Update(Update),
}

impl Statement {
    pub fn raw(sql: impl Into<String>) -> Self {
        Statement::Raw(sql.into())
    }

    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }
}

impl From<quarry_core::stmt::Statement> for Statement {
    fn from(value: quarry_core::stmt::Statement) -> Self {
        match value {
            quarry_core::stmt::Statement::Query(stmt) => Statement::Query(stmt),
            quarry_core::stmt::Statement::Insert(stmt) => Statement::Insert(stmt),
            quarry_core::stmt::Statement::Update(stmt) => Statement::Update(stmt),
            quarry_core::stmt::Statement::Delete(stmt) => Statement::Delete(stmt),
        }
    }
}

impl From<QueryExpression> for Statement {
    fn from(value: QueryExpression) -> Self {
        Statement::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}

impl From<&str> for Statement {
    fn from(value: &str) -> Self {
        Statement::Raw(value.to_string())
    }
}

impl From<String> for Statement {
    fn from(value: String) -> Self {
        Statement::Raw(value)
    }
}
