mod column;
pub use column::ColumnMetadata;

mod field;
pub use field::FieldDescriptor;

mod index;
pub use index::IndexDescriptor;

mod migration;
pub use migration::Migration;

mod name;
pub use name::{QualifiedName, DEFAULT_SCHEMA};

mod ty;
pub use ty::LogicalType;
