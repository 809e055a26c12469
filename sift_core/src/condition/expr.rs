//! Deferred expression tree
//!
//! The backend-agnostic half of a condition: a tree a downstream query
//! translator can walk and render. Bound variables appear as shared
//! [`Parameter`] instances; translators match them by identity
//! (`Arc::ptr_eq`), not by name.

use std::sync::Arc;

use crate::condition::CombineOperator;
use crate::record::FieldValue;

/// A bound variable standing for "the current record" (or the current
/// collection element) inside a deferred expression tree.
#[derive(Debug)]
pub struct Parameter {
    name: String,
}

impl Parameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One node of the deferred expression tree.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Reference to a bound variable
    Parameter(Arc<Parameter>),
    /// Member access on a base expression
    Property { base: Box<Expr>, name: String },
    /// Calendar-date projection of a timestamp expression
    DateOnly(Box<Expr>),
    /// A literal; `None` is the null literal
    Literal(Option<FieldValue>),
    /// Binary comparison or boolean combination
    Binary {
        op: CombineOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Logical negation
    Not(Box<Expr>),
    /// Existence quantifier: at least one element of `source` satisfies
    /// `predicate` (or merely exists, when no predicate was supplied)
    Exists {
        source: Box<Expr>,
        item: Arc<Parameter>,
        predicate: Option<Box<Expr>>,
    },
}

impl Expr {
    /// Build a member-access chain from a bound variable through a
    /// navigation path.
    pub fn property_path(parameter: &Arc<Parameter>, path: &[String]) -> Expr {
        let mut expr = Expr::Parameter(Arc::clone(parameter));
        for segment in path {
            expr = Expr::Property {
                base: Box::new(expr),
                name: segment.clone(),
            };
        }
        expr
    }

    /// The leftmost bound-variable reference in this tree, if any.
    ///
    /// Useful for translators and for asserting that independently built
    /// conditions share one canonical parameter instance.
    pub fn root_parameter(&self) -> Option<&Arc<Parameter>> {
        match self {
            Expr::Parameter(parameter) => Some(parameter),
            Expr::Property { base, .. } => base.root_parameter(),
            Expr::DateOnly(inner) => inner.root_parameter(),
            Expr::Literal(_) => None,
            Expr::Binary { left, right, .. } => {
                left.root_parameter().or_else(|| right.root_parameter())
            }
            Expr::Not(inner) => inner.root_parameter(),
            Expr::Exists { source, .. } => source.root_parameter(),
        }
    }
}
