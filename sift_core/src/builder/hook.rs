//! Extension seam for collection-valued fields

use std::sync::Arc;

use crate::condition::{ElementPredicate, Parameter};
use crate::record::FieldValue;

/// Callback consulted once per collection-valued clause.
///
/// Receives the clause's field identifier, the bound element parameter the
/// predicate tree must reference, and the coerced literal. Returning `None`
/// declines the clause, leaving an unconstrained existence quantifier.
pub type ListConditionHook =
    dyn Fn(&str, &Arc<Parameter>, &FieldValue) -> Option<ElementPredicate> + Send + Sync;
