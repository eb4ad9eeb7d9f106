pub mod serializer;
pub use serializer::{Context, Formatter, Method, Resolver, ResolvingMember, TypeMode};

pub mod stmt;
pub use stmt::Statement;
