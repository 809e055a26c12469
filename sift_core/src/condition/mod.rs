//! Dual-representation conditions
//!
//! A [`Condition`] carries two renditions of the same predicate: a deferred
//! [`Expr`] tree a query translator can push to a backend, and an executable
//! closure for in-process evaluation. Both are produced together by the same
//! constructor, so they cannot drift apart.

mod compare;
mod expr;
mod params;

pub use expr::{Expr, Parameter};
pub use params::parameter_for;

use std::fmt;
use std::sync::Arc;

use compare::compare_values;

use crate::errors::BuildError;
use crate::record::{FieldValue, Record, resolve_path};

/// Internal operators conditions are constructed with.
///
/// Comparison operators relate a field to a literal; the wildcard-pattern
/// (`Like*`) family carries `%` markers for backends that want them. The
/// combinator operators join two boolean conditions; `AndAlso` and `OrElse`
/// short-circuit, `And`, `Or` and `Xor` evaluate both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Contains,
    NotContains,
    StartsWith,
    NotStartsWith,
    EndsWith,
    NotEndsWith,
    Like,
    NotLike,
    LikeStartsWith,
    LikeNotStartsWith,
    LikeEndsWith,
    LikeNotEndsWith,
    And,
    Or,
    Xor,
    AndAlso,
    OrElse,
    Not,
}

impl CombineOperator {
    pub fn name(&self) -> &'static str {
        match self {
            CombineOperator::Equal => "Equal",
            CombineOperator::NotEqual => "NotEqual",
            CombineOperator::GreaterThan => "GreaterThan",
            CombineOperator::GreaterThanOrEqual => "GreaterThanOrEqual",
            CombineOperator::LessThan => "LessThan",
            CombineOperator::LessThanOrEqual => "LessThanOrEqual",
            CombineOperator::Contains => "Contains",
            CombineOperator::NotContains => "NotContains",
            CombineOperator::StartsWith => "StartsWith",
            CombineOperator::NotStartsWith => "NotStartsWith",
            CombineOperator::EndsWith => "EndsWith",
            CombineOperator::NotEndsWith => "NotEndsWith",
            CombineOperator::Like => "Like",
            CombineOperator::NotLike => "NotLike",
            CombineOperator::LikeStartsWith => "LikeStartsWith",
            CombineOperator::LikeNotStartsWith => "LikeNotStartsWith",
            CombineOperator::LikeEndsWith => "LikeEndsWith",
            CombineOperator::LikeNotEndsWith => "LikeNotEndsWith",
            CombineOperator::And => "And",
            CombineOperator::Or => "Or",
            CombineOperator::Xor => "Xor",
            CombineOperator::AndAlso => "AndAlso",
            CombineOperator::OrElse => "OrElse",
            CombineOperator::Not => "Not",
        }
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, CombineOperator::Equal | CombineOperator::NotEqual)
    }

    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            CombineOperator::GreaterThan
                | CombineOperator::GreaterThanOrEqual
                | CombineOperator::LessThan
                | CombineOperator::LessThanOrEqual
        )
    }

    pub fn is_text(&self) -> bool {
        matches!(
            self,
            CombineOperator::Contains
                | CombineOperator::NotContains
                | CombineOperator::StartsWith
                | CombineOperator::NotStartsWith
                | CombineOperator::EndsWith
                | CombineOperator::NotEndsWith
                | CombineOperator::Like
                | CombineOperator::NotLike
                | CombineOperator::LikeStartsWith
                | CombineOperator::LikeNotStartsWith
                | CombineOperator::LikeEndsWith
                | CombineOperator::LikeNotEndsWith
        )
    }
}

impl fmt::Display for CombineOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-element predicate for a collection field, supplied by a list
/// condition hook. Like [`Condition`], it pairs a deferred tree (over the
/// element parameter) with an executable closure (over element values).
pub struct ElementPredicate {
    pub expr: Expr,
    pub eval: Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>,
}

/// A compiled predicate over a record type.
pub struct Condition<T> {
    expr: Expr,
    eval: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Clone for Condition<T> {
    fn clone(&self) -> Self {
        Self {
            expr: self.expr.clone(),
            eval: Arc::clone(&self.eval),
        }
    }
}

impl<T> fmt::Debug for Condition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").field("expr", &self.expr).finish()
    }
}

impl<T: Record + 'static> Condition<T> {
    /// Build a leaf comparison of a field path against a literal.
    ///
    /// A `None` literal is the null literal: with `Equal` the condition
    /// holds when the field is unset, with `NotEqual` when it is set.
    /// A set literal compared against an unset field is always false.
    /// `date_only` wraps the field access so translators project the
    /// calendar date; the local evaluator always compares timestamps by
    /// date.
    pub fn comparison(
        path: Vec<String>,
        op: CombineOperator,
        literal: Option<FieldValue>,
        date_only: bool,
    ) -> Result<Self, BuildError> {
        validate_leaf(op, literal.as_ref())?;

        let parameter = parameter_for::<T>();
        let mut field = Expr::property_path(&parameter, &path);
        if date_only {
            field = Expr::DateOnly(Box::new(field));
        }
        let expr = Expr::Binary {
            op,
            left: Box::new(field),
            right: Box::new(Expr::Literal(literal.clone())),
        };

        let eval: Arc<dyn Fn(&T) -> bool + Send + Sync> = match literal {
            None => Arc::new(move |record| {
                let set = resolve_path(record, &path).is_some();
                if op == CombineOperator::Equal { !set } else { set }
            }),
            Some(literal) => Arc::new(move |record| match resolve_path(record, &path) {
                Some(value) => compare_values(&value, op, &literal),
                None => false,
            }),
        };

        Ok(Self { expr, eval })
    }

    /// Build an existence quantifier over a collection field.
    ///
    /// With an element predicate the condition holds when some element
    /// satisfies it; without one, when the collection is non-empty. An
    /// unset or non-collection field never satisfies the quantifier.
    /// `negate` wraps the quantifier in a logical not.
    pub fn exists(
        field_name: &str,
        item: Arc<Parameter>,
        element: Option<ElementPredicate>,
        negate: bool,
    ) -> Self {
        let parameter = parameter_for::<T>();
        let source = Expr::Property {
            base: Box::new(Expr::Parameter(Arc::clone(&parameter))),
            name: field_name.to_string(),
        };
        let (predicate, element_eval) = match element {
            Some(element) => (Some(Box::new(element.expr)), Some(element.eval)),
            None => (None, None),
        };
        let expr = Expr::Exists {
            source: Box::new(source),
            item,
            predicate,
        };

        let name = field_name.to_string();
        let eval: Arc<dyn Fn(&T) -> bool + Send + Sync> =
            Arc::new(move |record| match record.field(&name) {
                Some(FieldValue::Collection(items)) => match &element_eval {
                    Some(matches) => items.iter().any(|item| matches(item)),
                    None => !items.is_empty(),
                },
                _ => false,
            });

        let condition = Self { expr, eval };
        if negate { condition.negate() } else { condition }
    }
}

impl<T: 'static> Condition<T> {
    /// Logical negation of this condition.
    pub fn negate(self) -> Self {
        let eval = self.eval;
        Self {
            expr: Expr::Not(Box::new(self.expr)),
            eval: Arc::new(move |record| !eval(record)),
        }
    }

    /// Non-short-circuit conjunction; both sides always evaluate.
    pub fn and(self, other: Self) -> Self {
        let (l, r) = (self.eval, other.eval);
        Self {
            expr: binary(CombineOperator::And, self.expr, other.expr),
            eval: Arc::new(move |record| l(record) & r(record)),
        }
    }

    /// Non-short-circuit disjunction; both sides always evaluate.
    pub fn or(self, other: Self) -> Self {
        let (l, r) = (self.eval, other.eval);
        Self {
            expr: binary(CombineOperator::Or, self.expr, other.expr),
            eval: Arc::new(move |record| l(record) | r(record)),
        }
    }

    /// Exclusive or; both sides always evaluate.
    pub fn xor(self, other: Self) -> Self {
        let (l, r) = (self.eval, other.eval);
        Self {
            expr: binary(CombineOperator::Xor, self.expr, other.expr),
            eval: Arc::new(move |record| l(record) ^ r(record)),
        }
    }

    /// Short-circuit conjunction; the right side is skipped when the left
    /// is false.
    pub fn and_also(self, other: Self) -> Self {
        let (l, r) = (self.eval, other.eval);
        Self {
            expr: binary(CombineOperator::AndAlso, self.expr, other.expr),
            eval: Arc::new(move |record| l(record) && r(record)),
        }
    }

    /// Short-circuit disjunction; the right side is skipped when the left
    /// is true.
    pub fn or_else(self, other: Self) -> Self {
        let (l, r) = (self.eval, other.eval);
        Self {
            expr: binary(CombineOperator::OrElse, self.expr, other.expr),
            eval: Arc::new(move |record| l(record) || r(record)),
        }
    }

    /// Combine two conditions under an internal operator.
    ///
    /// `Equal` and `NotEqual` here compare the boolean outcomes of the two
    /// sides. Comparison operators such as `GreaterThan` have no meaning
    /// between boolean conditions and fail the build.
    pub fn combine(left: Self, op: CombineOperator, right: Self) -> Result<Self, BuildError> {
        match op {
            CombineOperator::And => Ok(left.and(right)),
            CombineOperator::Or => Ok(left.or(right)),
            CombineOperator::Xor => Ok(left.xor(right)),
            CombineOperator::AndAlso => Ok(left.and_also(right)),
            CombineOperator::OrElse => Ok(left.or_else(right)),
            CombineOperator::Equal => {
                let (l, r) = (left.eval, right.eval);
                Ok(Self {
                    expr: binary(op, left.expr, right.expr),
                    eval: Arc::new(move |record| l(record) == r(record)),
                })
            }
            CombineOperator::NotEqual => {
                let (l, r) = (left.eval, right.eval);
                Ok(Self {
                    expr: binary(op, left.expr, right.expr),
                    eval: Arc::new(move |record| l(record) != r(record)),
                })
            }
            other => Err(BuildError::UnsupportedOperator {
                operator: other.name().to_string(),
                context: "combining two conditions".to_string(),
            }),
        }
    }

    /// Evaluate this condition against one record.
    pub fn matches(&self, record: &T) -> bool {
        (self.eval)(record)
    }

    /// The deferred expression tree for backend translation.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Filter a sequence in process, keeping the records that match.
    pub fn filter<'a, I>(&self, records: I) -> Vec<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
    {
        records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect()
    }
}

fn binary(op: CombineOperator, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// Which operators a leaf may be constructed with, by literal type.
fn validate_leaf(op: CombineOperator, literal: Option<&FieldValue>) -> Result<(), BuildError> {
    let (allowed, context) = match literal {
        None => (op.is_equality(), "the null literal"),
        Some(FieldValue::String(_)) => (op.is_equality() || op.is_text(), "a string literal"),
        Some(FieldValue::Enum(_)) => (op.is_equality(), "an enumeration literal"),
        Some(FieldValue::Integer(_) | FieldValue::Long(_)) => {
            (op.is_equality() || op.is_ordering(), "an integer literal")
        }
        Some(FieldValue::Timestamp(_)) => {
            (op.is_equality() || op.is_ordering(), "a timestamp literal")
        }
        Some(FieldValue::Boolean(_)) => (op.is_equality(), "a boolean literal"),
        Some(FieldValue::Record(_) | FieldValue::Collection(_)) => (false, "a composite literal"),
    };
    if allowed {
        Ok(())
    } else {
        Err(BuildError::UnsupportedOperator {
            operator: op.name().to_string(),
            context: context.to_string(),
        })
    }
}
