#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod member;
pub use member::{Resolver, ResolvingMember};

mod method;
pub use method::Method;

mod params;

// Fragment serializers
mod expr;
mod json;
mod statement;
mod ty;
pub use ty::TypeMode;
mod value;

use crate::stmt::{Expr, QueryExpression, Statement, Value};

use quarry_core::{schema::FieldDescriptor, Error, Result};
use std::{collections::HashMap, fmt::Debug, sync::Arc};

/// Formats query expressions and statements as PostgreSQL text.
///
/// Function calls in an expression (`startsWith`, `round`, `jsonObject`,
/// ...) are looked up by name in a dispatch table built by
/// [`Formatter::new`]. Names are matched case-insensitively. Callers may add
/// or replace entries with [`Formatter::register`].
#[derive(Clone)]
pub struct Formatter {
    /// Method handlers keyed by lowercase name
    methods: HashMap<String, Method>,

    /// Subscribers notified for every dotted member reference
    resolvers: Vec<Resolver>,
}

/// State handed to method handlers while an expression is being formatted.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    formatter: &'a Formatter,

    /// The collection unqualified fields belong to
    collection: Option<&'a str>,
}

impl Formatter {
    pub fn new() -> Formatter {
        let mut formatter = Formatter {
            methods: HashMap::new(),
            resolvers: vec![],
        };
        method::register_builtins(&mut formatter);
        formatter
    }

    /// Registers a method handler, replacing any handler with the same name.
    pub fn register<F>(&mut self, name: &str, handler: F) -> &mut Self
    where
        F: Fn(&Context<'_>, &[Expr]) -> Result<String> + Send + Sync + 'static,
    {
        self.methods
            .insert(name.to_ascii_lowercase(), Arc::new(handler));
        self
    }

    /// Subscribes to member resolution. See [`ResolvingMember`].
    pub fn on_resolving_member<F>(&mut self, subscriber: F) -> &mut Self
    where
        F: Fn(&mut ResolvingMember) + Send + Sync + 'static,
    {
        self.resolvers.push(Arc::new(subscriber));
        self
    }

    /// Formats a statement.
    ///
    /// Queries that take or skip rows get a `LIMIT`/`OFFSET` clause; raw SQL
    /// is returned unchanged.
    pub fn format(&self, stmt: &Statement) -> Result<String> {
        let cx = Context::new(self);
        let mut ret = String::new();
        stmt.to_sql(&cx, &mut ret)?;
        Ok(ret)
    }

    /// Formats a query without its `LIMIT`/`OFFSET` clause.
    pub fn format_select(&self, query: &QueryExpression) -> Result<String> {
        let mut ret = String::new();
        statement::select(&Context::new(self), query, &mut ret)?;
        Ok(ret)
    }

    /// Formats a query, appending `LIMIT n` when it takes rows and
    /// `OFFSET m` when it also skips rows. A skip without a take is ignored.
    pub fn format_limit_select(&self, query: &QueryExpression) -> Result<String> {
        let mut ret = String::new();
        statement::limit_select(&Context::new(self), query, &mut ret)?;
        Ok(ret)
    }

    /// Formats a filter expression. Filters that compile to nothing (e.g.
    /// `contains(name, '')`) return an empty string.
    pub fn format_where(&self, expr: &Expr) -> Result<String> {
        Context::new(self).escape(expr)
    }

    /// Escapes a literal. `unquoted` drops the surrounding single quotes of
    /// text literals.
    pub fn escape(&self, value: &Value, unquoted: bool) -> String {
        value::escape(value, unquoted)
    }

    /// Escapes a literal and appends an explicit type cast, so untyped
    /// parameters do not trip the server's type inference.
    pub fn escape_constant(&self, value: &Value) -> String {
        value::escape_constant(value)
    }

    /// Quotes an identifier, splitting `schema.table` on the dot.
    pub fn escape_name(&self, name: &str) -> String {
        Ident(name).to_string()
    }

    /// Substitutes `?` placeholders with escaped values.
    ///
    /// Placeholders inside quoted literals and identifiers are left alone.
    /// The number of placeholders must match the number of values.
    pub fn prepare(&self, sql: &str, values: &[Value]) -> Result<String> {
        params::prepare(sql, values)
    }

    /// Maps a field descriptor to a PostgreSQL column type.
    pub fn format_type(&self, field: &FieldDescriptor, mode: TypeMode) -> String {
        ty::format_type(field, mode)
    }

    fn method(&self, name: &str) -> Option<&Method> {
        self.methods.get(&name.to_ascii_lowercase())
    }

    fn resolve_member(&self, event: &mut ResolvingMember) {
        for resolver in &self.resolvers {
            resolver(event);
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::new()
    }
}

impl Debug for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut methods: Vec<_> = self.methods.keys().collect();
        methods.sort();
        f.debug_struct("Formatter")
            .field("methods", &methods)
            .field("resolvers", &self.resolvers.len())
            .finish()
    }
}

impl<'a> Context<'a> {
    fn new(formatter: &'a Formatter) -> Context<'a> {
        Context {
            formatter,
            collection: None,
        }
    }

    fn with_collection(self, collection: Option<&'a str>) -> Context<'a> {
        Context {
            formatter: self.formatter,
            collection: collection.or(self.collection),
        }
    }

    pub fn formatter(&self) -> &'a Formatter {
        self.formatter
    }

    /// The collection unqualified fields resolve against.
    pub fn collection(&self) -> Option<&'a str> {
        self.collection
    }

    /// Formats an expression.
    pub fn escape(&self, expr: &Expr) -> Result<String> {
        let mut ret = String::new();
        expr.to_sql(self, &mut ret)?;
        Ok(ret)
    }

    /// Formats an expression, dropping the quotes around text literals.
    pub fn escape_unquoted(&self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Value(value) => Ok(value::escape(value, true)),
            expr => self.escape(expr),
        }
    }

    /// Formats a nested query, including its `LIMIT`/`OFFSET` clause.
    pub fn format_query(&self, query: &QueryExpression) -> Result<String> {
        let mut ret = String::new();
        statement::limit_select(self, query, &mut ret)?;
        Ok(ret)
    }

    /// Calls a method from the dispatch table.
    pub fn call(&self, name: &str, args: &[Expr]) -> Result<String> {
        let Some(method) = self.formatter.method(name) else {
            return Err(Error::invalid_statement(format!(
                "method `{name}` is not supported"
            )));
        };
        method(self, args)
    }
}
