use crate::error::Error;
use std::fmt::{self, Debug, Formatter};

/// Implementation function of an operator. The evaluator always passes
/// exactly as many values as the operator's arity, in stack order: for a
/// binary operator the left operand comes first.
pub type Apply = fn(&[f64]) -> Result<f64, Error>;

/// Number of operands an operator consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand: sign, factorial and the named functions
    Unary,
    /// Two operands
    Binary,
}

impl Arity {
    /// Get the operand count for this arity
    pub fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Grouping direction among operators of equal precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// Grouping proceeds left to right
    Left,
    /// Grouping proceeds right to left
    Right,
}

/// Descriptor for a single operator. There is exactly one static instance
/// per symbol-and-arity pair, all of them built in the `ops` module and
/// shared by reference for the life of the process.
pub struct Operator {
    /// Canonical spelling, the key used for table lookups
    pub symbol: &'static str,
    /// Human-readable name used in messages; `asin` displays as `arcsin`
    pub display: &'static str,
    /// Operand count
    pub arity: Arity,
    /// Binding strength; a lower rank binds tighter
    pub rank: i32,
    /// Grouping direction
    pub assoc: Assoc,
    /// Implementation applied by the evaluator
    pub apply: Apply,
}

impl Operator {
    /// Descriptor for a binary operator
    pub const fn binary(symbol: &'static str, rank: i32, assoc: Assoc, apply: Apply) -> Operator {
        Operator {
            symbol,
            display: symbol,
            arity: Arity::Binary,
            rank,
            assoc,
            apply,
        }
    }

    /// Descriptor for a unary operator
    pub const fn unary(
        symbol: &'static str,
        display: &'static str,
        rank: i32,
        assoc: Assoc,
        apply: Apply,
    ) -> Operator {
        Operator {
            symbol,
            display,
            arity: Arity::Unary,
            rank,
            assoc,
            apply,
        }
    }

    /// Check if the operator takes two operands
    pub fn is_binary(&self) -> bool {
        self.arity == Arity::Binary
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(&self) -> bool {
        self.assoc == Assoc::Left
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(&self) -> bool {
        self.assoc == Assoc::Right
    }
}

impl Debug for Operator {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{:?}({})", self.arity, self.symbol)
    }
}

impl PartialEq for Operator {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.arity == other.arity
    }
}

/// Possible tokens to find in the input string. Every token carries the
/// byte offset of its first character, used only for diagnostics; no
/// token outlives the evaluation of the line it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal or a named constant, resolved to its value
    Number {
        /// The parsed value
        value: f64,
        /// Byte offset in the input
        pos: usize,
    },
    /// A unary or binary operator
    Op {
        /// The operator's descriptor
        op: &'static Operator,
        /// Byte offset in the input
        pos: usize,
    },
    /// Left parenthesis
    LParen {
        /// Byte offset in the input
        pos: usize,
    },
    /// Right parenthesis
    RParen {
        /// Byte offset in the input
        pos: usize,
    },
}

impl Token {
    /// Byte offset of the token's first character in the input
    pub fn pos(&self) -> usize {
        match *self {
            Self::Number { pos, .. }
            | Self::Op { pos, .. }
            | Self::LParen { pos }
            | Self::RParen { pos } => pos,
        }
    }
}
