//! Recursive predicate builder
//!
//! Walks a filter clause tree and compiles each clause into a dual
//! representation [`Condition`], folding siblings left to right under their
//! logic operators. The first failing clause fails the whole build.
//!
//! Dispatch per clause, in priority order: collection-shaped fields become
//! existence quantifiers, timestamp fields compare by calendar date (with a
//! null guard when nullable), existence-comparison fields test set/unset,
//! enumerations parse their symbolic value, and everything else is a direct
//! comparison. A dotted field identifier prepends a null guard on its first
//! segment.

mod coerce;
mod hook;
mod wildcard;

pub use hook::ListConditionHook;

use std::sync::Arc;

use log::debug;

use crate::catalog::{DataType, FieldCatalog};
use crate::condition::{CombineOperator, Condition, Parameter};
use crate::errors::BuildError;
use crate::filter::{FilterClause, LogicOperator};
use crate::record::{FieldShape, FieldValue, Record};
use coerce::{coerce_literal, parse_boolean};
use wildcard::rewrite_literal;

/// Compile a filter clause tree into one condition.
///
/// Fails with [`BuildError::EmptyFilter`] when no clauses are given.
pub fn build<T, C>(clauses: &[FilterClause], catalog: &C) -> Result<Condition<T>, BuildError>
where
    T: Record + 'static,
    C: FieldCatalog,
{
    build_conditions(clauses, catalog, None, None)?.ok_or(BuildError::EmptyFilter)
}

/// Compile a filter clause tree, consulting `hook` for collection-valued
/// clauses.
pub fn build_with_hook<T, C>(
    clauses: &[FilterClause],
    catalog: &C,
    hook: &ListConditionHook,
) -> Result<Condition<T>, BuildError>
where
    T: Record + 'static,
    C: FieldCatalog,
{
    build_conditions(clauses, catalog, None, Some(hook))?.ok_or(BuildError::EmptyFilter)
}

/// Fold a clause list into a running condition, starting from `seed`.
///
/// Each clause's contribution is combined with the running result under the
/// clause's logic operator: `And` short-circuits as and-also, `Or` as
/// or-else. A clause with children first folds them into its own
/// contribution, so a group binds tighter than the sibling chain.
pub fn build_conditions<T, C>(
    clauses: &[FilterClause],
    catalog: &C,
    seed: Option<Condition<T>>,
    hook: Option<&ListConditionHook>,
) -> Result<Option<Condition<T>>, BuildError>
where
    T: Record + 'static,
    C: FieldCatalog,
{
    let mut result = seed;

    for clause in clauses {
        let mut contribution = compile_clause(clause, catalog, hook)?;

        if !clause.children.is_empty() {
            contribution =
                build_conditions(&clause.children, catalog, Some(contribution.clone()), hook)?
                    .unwrap_or(contribution);
        }

        result = Some(match result {
            None => contribution,
            Some(previous) => match clause.logic {
                LogicOperator::And => previous.and_also(contribution),
                LogicOperator::Or => previous.or_else(contribution),
            },
        });
    }

    Ok(result)
}

fn compile_clause<T, C>(
    clause: &FilterClause,
    catalog: &C,
    hook: Option<&ListConditionHook>,
) -> Result<Condition<T>, BuildError>
where
    T: Record + 'static,
    C: FieldCatalog,
{
    let segments: Vec<String> = clause.field_id.split('.').map(str::to_string).collect();
    let first = segments[0].clone();

    let descriptor = catalog
        .resolve(&clause.field_id)
        .ok_or_else(|| BuildError::FieldNotConfigured {
            field_id: clause.field_id.clone(),
        })?;
    let shape = T::shape(&first).ok_or_else(|| BuildError::FieldNotResolved {
        field_id: clause.field_id.clone(),
    })?;

    let op = clause.operator.to_combine_operator(catalog.wildcard_dialect());
    let raw = if catalog.wildcard_dialect() {
        rewrite_literal(op, clause.value.clone())
    } else {
        clause.value.clone()
    };

    debug!(
        "compiling clause: field={} operator={} shape={:?}",
        clause.field_id, op, shape
    );

    let condition = if shape == FieldShape::Collection {
        let coerced = coerce_literal(&raw, descriptor.data_type)
            .ok_or_else(|| conversion_error(clause, descriptor.data_type))?;
        let item = Arc::new(Parameter::new("item"));
        let element = hook.and_then(|hook| hook(&clause.field_id, &item, &coerced));
        if element.is_none() {
            debug!(
                "no element predicate for collection field '{}'; quantifier tests bare existence",
                clause.field_id
            );
        }
        Condition::exists(&first, item, element, op != CombineOperator::Equal)
    } else if descriptor.data_type == DataType::Timestamp {
        let coerced = coerce_literal(&raw, DataType::Timestamp)
            .ok_or_else(|| conversion_error(clause, DataType::Timestamp))?;
        let compare = Condition::comparison(segments.clone(), op, Some(coerced), true)?;
        if shape == FieldShape::Nullable {
            // guard the nullable timestamp before projecting its date
            let guard =
                Condition::comparison(segments.clone(), CombineOperator::NotEqual, None, false)?;
            guard.and_also(compare)
        } else {
            compare
        }
    } else if descriptor.existence_comparison {
        let set = parse_boolean(&clause.value)
            .ok_or_else(|| conversion_error(clause, DataType::Boolean))?;
        let op = if set {
            CombineOperator::NotEqual
        } else {
            CombineOperator::Equal
        };
        Condition::comparison(segments.clone(), op, None, false)?
    } else if descriptor.is_enumeration() {
        let wanted = clause.value.trim();
        let symbol = descriptor
            .valid_values
            .iter()
            .map(|(value, _)| value)
            .find(|value| value.eq_ignore_ascii_case(wanted))
            .cloned()
            .ok_or_else(|| conversion_error(clause, descriptor.data_type))?;
        Condition::comparison(segments.clone(), op, Some(FieldValue::Enum(symbol)), false)?
    } else {
        let coerced = coerce_literal(&raw, descriptor.data_type)
            .ok_or_else(|| conversion_error(clause, descriptor.data_type))?;
        Condition::comparison(segments.clone(), op, Some(coerced), false)?
    };

    // A navigation path is only reachable when its first segment is set
    if segments.len() > 1 && shape != FieldShape::Collection {
        let guard = Condition::comparison(vec![first], CombineOperator::NotEqual, None, false)?;
        Ok(guard.and_also(condition))
    } else {
        Ok(condition)
    }
}

fn conversion_error(clause: &FilterClause, expected: DataType) -> BuildError {
    BuildError::ValueConversionFailed {
        field_id: clause.field_id.clone(),
        value: clause.value.clone(),
        expected,
    }
}
