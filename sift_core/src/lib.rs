//! Data-driven predicate compilation for searchable record types.
//!
//! This crate turns filter clause trees sent by a query interface into
//! compiled conditions: each condition pairs a deferred expression tree a
//! backend translator can render with an executable closure for in-process
//! evaluation. A field catalog declares what may be filtered and how, and
//! the [`Record`] trait is the seam record types implement to become
//! filterable.

pub mod builder;
pub mod catalog;
pub mod condition;
pub mod errors;
pub mod filter;
pub mod record;

pub use builder::{ListConditionHook, build, build_with_hook};
pub use catalog::{DataType, FieldCatalog, FieldDescriptor, SearchCatalog};
pub use condition::{CombineOperator, Condition, ElementPredicate, Expr, Parameter, parameter_for};
pub use errors::BuildError;
pub use filter::{FilterClause, LogicOperator, SearchOperator};
pub use record::{FieldShape, FieldValue, Record, resolve_path};
