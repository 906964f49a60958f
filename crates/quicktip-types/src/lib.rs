//! Shared types for the quicktip engine.
//!
//! This crate defines the dynamically-typed [`Value`] model with its
//! coercion and equality policy, the fixed operator enums, and the
//! evaluation error taxonomy used across the engine.

mod error;
mod op;
mod value;

pub use error::{EvalError, EvalResult};
pub use op::{ArithOp, CompareOp};
pub use value::Value;
