//! Operator enums for the sided (binary) expression forms.
//!
//! Each kind carries its token table in the order the classifier scans
//! for it: longer spellings first, so `<=` wins over `<` and `===`
//! over `==` at the same position.

use serde::{Deserialize, Serialize};

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompareOp {
    LessEq,
    GreaterEq,
    StrictEq,
    StrictNotEq,
    Eq,
    NotEq,
    Less,
    Greater,
}

impl CompareOp {
    /// Token spellings, longest first. Scan order is a precedence
    /// policy — reordering this table changes how text parses.
    pub const TOKENS: &'static [&'static str] =
        &["<=", ">=", "===", "!==", "==", "!=", "<", ">"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "<=" => Some(Self::LessEq),
            ">=" => Some(Self::GreaterEq),
            "===" => Some(Self::StrictEq),
            "!==" => Some(Self::StrictNotEq),
            "==" => Some(Self::Eq),
            "!=" => Some(Self::NotEq),
            "<" => Some(Self::Less),
            ">" => Some(Self::Greater),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::LessEq => "<=",
            Self::GreaterEq => ">=",
            Self::StrictEq => "===",
            Self::StrictNotEq => "!==",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Less => "<",
            Self::Greater => ">",
        }
    }
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl ArithOp {
    /// Token spellings in classifier scan order.
    pub const TOKENS: &'static [&'static str] = &["+", "-", "*", "/", "%", "^"];

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            "%" => Some(Self::Mod),
            "^" => Some(Self::Pow),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
        }
    }
}
