//! Evaluation error taxonomy.
//!
//! Evaluation is total at the public boundary — unresolvable references
//! degrade to `Value::Undefined` rather than failing the render. The
//! strict `try_evaluate` entry surfaces this taxonomy instead, for
//! diagnostics and tests.

use thiserror::Error;

/// An unresolvable reference inside an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Call to a function name missing from the registry.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// Element property path with no recognized form.
    #[error("unknown element property: {0}")]
    UnknownProperty(String),

    /// Navigator property name outside the fixed set.
    #[error("unknown navigator property: {0}")]
    UnknownNavigatorProperty(String),

    /// An `el.`/`parent.` reference evaluated without a context element.
    #[error("no context element for '{0}'")]
    MissingContext(String),

    /// A `parent.` reference on an element with no parent.
    #[error("no parent element for '{0}'")]
    MissingParent(String),

    /// `element(id)` found nothing.
    #[error("element not found: {0}")]
    MissingElement(String),
}

/// Result alias for strict evaluation.
pub type EvalResult<T> = Result<T, EvalError>;
