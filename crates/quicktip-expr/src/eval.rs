//! Expression evaluation — walks classified nodes and produces Values.

use quicktip_types::{ArithOp, CompareOp, EvalError, EvalResult, Value};
use std::cmp::Ordering;

use crate::env::Environment;
use crate::expr::{Call, Expr};

/// Evaluates expression trees against an [`Environment`].
///
/// The public [`evaluate`](Evaluator::evaluate) is total: unresolvable
/// references (unknown function, unknown property, missing element)
/// degrade to [`Value::Undefined`] at the point of failure and the
/// value flows on through the enclosing expression.
/// [`try_evaluate`](Evaluator::try_evaluate) propagates the first such
/// failure instead, for diagnostics and tests.
pub struct Evaluator<'e, E: Environment> {
    env: &'e E,
}

impl<'e, E: Environment> Evaluator<'e, E> {
    pub fn new(env: &'e E) -> Self {
        Self { env }
    }

    /// Evaluate an expression to a Value. Never fails.
    pub fn evaluate(&self, expr: &Expr, ctx: Option<&E::Element>) -> Value {
        self.eval_expr(expr, ctx, false).unwrap_or(Value::Undefined)
    }

    /// Strict evaluation: the first unresolvable reference is an error.
    pub fn try_evaluate(&self, expr: &Expr, ctx: Option<&E::Element>) -> EvalResult<Value> {
        self.eval_expr(expr, ctx, true)
    }

    fn eval_expr(
        &self,
        expr: &Expr,
        ctx: Option<&E::Element>,
        strict: bool,
    ) -> EvalResult<Value> {
        match expr {
            Expr::Literal(lit) => Ok(Value::coerce(&lit.text)),

            // Only the selected branch is evaluated — the other one's
            // element lookups and function calls must not occur.
            Expr::Ternary(t) => {
                let condition = self.eval_expr(&t.condition, ctx, strict)?;
                if condition.is_truthy() {
                    self.eval_expr(&t.truthy, ctx, strict)
                } else {
                    self.eval_expr(&t.falsy, ctx, strict)
                }
            }

            // Both sides always evaluate; no short-circuit.
            Expr::Comparison(s) => {
                let left = self.eval_expr(&s.left, ctx, strict)?;
                let right = self.eval_expr(&s.right, ctx, strict)?;
                Ok(Value::Bool(apply_comparison(s.op, &left, &right)))
            }
            Expr::Operation(s) => {
                let left = self.eval_expr(&s.left, ctx, strict)?;
                let right = self.eval_expr(&s.right, ctx, strict)?;
                Ok(apply_operation(s.op, &left, &right))
            }

            Expr::Call(call) => self.soften(self.eval_call(call), strict),
            Expr::Element(prop) => self.soften(self.resolve_element(&prop.path, ctx), strict),
            Expr::Navigator(prop) => self.soften(self.resolve_navigator(&prop.name), strict),
        }
    }

    /// In lenient mode an unresolvable reference becomes Undefined.
    fn soften(&self, result: EvalResult<Value>, strict: bool) -> EvalResult<Value> {
        match result {
            Err(_) if !strict => Ok(Value::Undefined),
            other => other,
        }
    }

    // ── Function registry ────────────────────────────────────────────

    /// Dispatch a call against the fixed registry. Arguments arrive as
    /// raw strings. The one builtin resolves a UI element by id and
    /// yields the id as a string handle marker.
    fn eval_call(&self, call: &Call) -> EvalResult<Value> {
        match call.name.as_str() {
            "element" => {
                let id = call.args.first().map(String::as_str).unwrap_or("");
                match self.env.element_by_id(id) {
                    Some(_) => Ok(Value::String(id.to_string())),
                    None => Err(EvalError::MissingElement(id.to_string())),
                }
            }
            other => Err(EvalError::UnknownFunction(other.to_string())),
        }
    }

    // ── Property resolution ──────────────────────────────────────────

    /// Resolve an element property path against the context element.
    /// A `parent.` prefix re-dispatches with the ancestor as context.
    fn resolve_element(&self, path: &str, ctx: Option<&E::Element>) -> EvalResult<Value> {
        let el = ctx.ok_or_else(|| EvalError::MissingContext(path.to_string()))?;

        if let Some(rest) = path.strip_prefix("parent.") {
            let parent = self
                .env
                .parent(el)
                .ok_or_else(|| EvalError::MissingParent(path.to_string()))?;
            return self.resolve_element(rest, Some(&parent));
        }
        if let Some(key) = path.strip_prefix("data.") {
            // An absent attribute is an absent value, not an error.
            return Ok(match self.env.data_attr(el, key) {
                Some(v) => Value::String(v),
                None => Value::Undefined,
            });
        }
        if let Some(key) = path.strip_prefix("style.") {
            return Ok(match self.env.inline_style(el, key) {
                Some(v) => Value::String(v),
                None => Value::Undefined,
            });
        }

        match path {
            "checked" => Ok(Value::Bool(self.env.is_checked(el))),
            "value" => Ok(match self.env.value(el) {
                Some(v) => Value::String(v),
                None => Value::Undefined,
            }),
            other => Err(EvalError::UnknownProperty(other.to_string())),
        }
    }

    /// Resolve a navigator property. Names are case-insensitive and the
    /// set is fixed; no context element is involved.
    fn resolve_navigator(&self, name: &str) -> EvalResult<Value> {
        match name.to_ascii_lowercase().as_str() {
            "ua" | "useragent" => Ok(Value::String(self.env.user_agent())),
            "secure" | "securecontext" | "issecurecontext" => {
                Ok(Value::Bool(self.env.is_secure_context()))
            }
            other => Err(EvalError::UnknownNavigatorProperty(other.to_string())),
        }
    }
}

// ── Operator application ─────────────────────────────────────────────

fn apply_comparison(op: CompareOp, left: &Value, right: &Value) -> bool {
    match op {
        CompareOp::Less => matches!(left.compare(right), Some(Ordering::Less)),
        CompareOp::LessEq => matches!(
            left.compare(right),
            Some(Ordering::Less | Ordering::Equal)
        ),
        CompareOp::Greater => matches!(left.compare(right), Some(Ordering::Greater)),
        CompareOp::GreaterEq => matches!(
            left.compare(right),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        CompareOp::Eq => left.loose_eq(right),
        CompareOp::NotEq => !left.loose_eq(right),
        CompareOp::StrictEq => left.strict_eq(right),
        CompareOp::StrictNotEq => !left.strict_eq(right),
    }
}

/// Arithmetic follows IEEE-754 on the coerced numeric operands —
/// division by zero gives Infinity, invalid operations give NaN, no
/// error is raised. `+` concatenates when either side is a string.
fn apply_operation(op: ArithOp, left: &Value, right: &Value) -> Value {
    if op == ArithOp::Add
        && (matches!(left, Value::String(_)) || matches!(right, Value::String(_)))
    {
        return Value::String(format!("{left}{right}"));
    }

    let (a, b) = (left.as_number(), right.as_number());
    Value::Number(match op {
        ArithOp::Add => a + b,
        ArithOp::Sub => a - b,
        ArithOp::Mul => a * b,
        ArithOp::Div => a / b,
        ArithOp::Mod => a % b,
        ArithOp::Pow => a.powf(b),
    })
}
