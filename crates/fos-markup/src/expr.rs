//! Value Expressions
//!
//! Attribute value expressions as handed over by the template parser, and
//! the small static evaluator that folds literal-only expressions.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Attribute value / child expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Expr {
    String { value: String },
    Number { value: f64 },
    Boolean { value: bool },
    Null,
    Undefined,
    Identifier { name: String },
    Member { object: Box<Expr>, property: String },
    Call {
        callee: Box<Expr>,
        #[serde(default)]
        arguments: Vec<Expr>,
    },
    /// Template literal; `quasis` are the raw string parts
    Template {
        quasis: Vec<String>,
        #[serde(default)]
        expressions: Vec<Expr>,
    },
    Unary { operator: UnaryOp, argument: Box<Expr> },
    Binary { operator: BinaryOp, left: Box<Expr>, right: Box<Expr> },
    Logical { operator: LogicalOp, left: Box<Expr>, right: Box<Expr> },
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    /// Arrow function or function expression
    Function,
    /// Anything the parser did not model
    Opaque {
        #[serde(default)]
        source: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "typeof")]
    TypeOf,
    #[serde(rename = "void")]
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    #[serde(rename = "==")]
    LooseEq,
    #[serde(rename = "!=")]
    LooseNe,
    #[serde(rename = "===")]
    StrictEq,
    #[serde(rename = "!==")]
    StrictNe,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOp {
    #[serde(rename = "&&")]
    And,
    #[serde(rename = "||")]
    Or,
    #[serde(rename = "??")]
    Nullish,
}

impl Expr {
    pub fn str(value: impl Into<String>) -> Self {
        Self::String { value: value.into() }
    }

    pub fn num(value: f64) -> Self {
        Self::Number { value }
    }

    pub fn bool(value: bool) -> Self {
        Self::Boolean { value }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    pub fn unary(operator: UnaryOp, argument: Expr) -> Self {
        Self::Unary { operator, argument: Box::new(argument) }
    }

    pub fn binary(operator: BinaryOp, left: Expr, right: Expr) -> Self {
        Self::Binary { operator, left: Box::new(left), right: Box::new(right) }
    }

    pub fn logical(operator: LogicalOp, left: Expr, right: Expr) -> Self {
        Self::Logical { operator, left: Box::new(left), right: Box::new(right) }
    }

    /// Fold the expression to a value if it only involves literals.
    ///
    /// Every operand must itself be statically known; short-circuiting does
    /// not rescue an expression with a non-literal operand.
    pub fn evaluate(&self) -> Option<Value> {
        match self {
            Self::String { value } => Some(Value::String(value.clone())),
            Self::Number { value } => Some(Value::Number(*value)),
            Self::Boolean { value } => Some(Value::Boolean(*value)),
            Self::Null => Some(Value::Null),
            Self::Undefined => Some(Value::Undefined),
            Self::Template { quasis, expressions } if expressions.is_empty() => {
                Some(Value::String(quasis.concat()))
            }
            Self::Unary { operator, argument } => {
                let value = argument.evaluate()?;
                match operator {
                    UnaryOp::Not => Some(Value::Boolean(!value.truthy())),
                    UnaryOp::Minus => Some(Value::Number(-value.to_number())),
                    UnaryOp::Plus => Some(Value::Number(value.to_number())),
                    UnaryOp::TypeOf | UnaryOp::Void => None,
                }
            }
            Self::Binary { operator, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                operator.apply(&left, &right)
            }
            Self::Logical { operator, left, right } => {
                let left = left.evaluate()?;
                let right = right.evaluate()?;
                Some(match operator {
                    LogicalOp::And if left.truthy() => right,
                    LogicalOp::And => left,
                    LogicalOp::Or if left.truthy() => left,
                    LogicalOp::Or => right,
                    LogicalOp::Nullish if left.is_nullish() => right,
                    LogicalOp::Nullish => left,
                })
            }
            _ => None,
        }
    }
}

impl BinaryOp {
    /// Apply a comparison operator; arithmetic is left to runtime.
    fn apply(self, left: &Value, right: &Value) -> Option<Value> {
        let result = match self {
            Self::LooseEq => left.loose_eq(right),
            Self::LooseNe => !left.loose_eq(right),
            Self::StrictEq => left == right,
            Self::StrictNe => left != right,
            Self::Lt => left.compare(right) == Some(Ordering::Less),
            Self::Le => matches!(left.compare(right), Some(Ordering::Less | Ordering::Equal)),
            Self::Gt => left.compare(right) == Some(Ordering::Greater),
            Self::Ge => matches!(left.compare(right), Some(Ordering::Greater | Ordering::Equal)),
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Rem => return None,
        };
        Some(Value::Boolean(result))
    }
}

/// Statically known primitive value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    Undefined,
}

impl Value {
    pub fn truthy(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Boolean(b) => *b,
            Self::Null | Self::Undefined => false,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null | Self::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean, or a string spelling one (`"true"`, `"FALSE"`)
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Self::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        }
    }

    /// Numeric conversion with JS `Number()` semantics (decimal forms only)
    pub fn to_number(&self) -> f64 {
        match self {
            Self::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
            Self::Number(n) => *n,
            Self::Boolean(true) => 1.0,
            Self::Boolean(false) | Self::Null => 0.0,
            Self::Undefined => f64::NAN,
        }
    }

    /// Abstract (`==`) equality
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (a, b) if a.is_nullish() || b.is_nullish() => a.is_nullish() && b.is_nullish(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Boolean(_), _) => Value::Number(self.to_number()).loose_eq(other),
            (_, Self::Boolean(_)) => self.loose_eq(&Value::Number(other.to_number())),
            _ => self.to_number() == other.to_number(),
        }
    }

    /// Relational comparison; `None` when either side is NaN
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            _ => self.to_number().partial_cmp(&other.to_number()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{}", n),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Null => f.write_str("null"),
            Self::Undefined => f.write_str("undefined"),
        }
    }
}
