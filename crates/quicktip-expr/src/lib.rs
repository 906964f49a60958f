//! quicktip expression core.
//!
//! Classifies raw expression text into a closed variant type via an
//! ordered matcher table ([`classify::MATCH_ORDER`]) and evaluates the
//! resulting tree against an [`Environment`] — the capability trait
//! supplying element and navigator queries. The core is stateless and
//! reentrant; nodes are built fresh per evaluation pass and discarded.

pub mod classify;
mod env;
mod eval;
mod expr;

pub use classify::classify;
pub use env::Environment;
pub use eval::Evaluator;
pub use expr::{Call, ElementProperty, Expr, Literal, NavigatorProperty, Sided, Ternary};
