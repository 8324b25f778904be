use std::error;
use std::fmt::{self, Display, Formatter};

/// Error type for the shunter crate
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed token arrangement: unknown or misplaced operator symbols,
    /// unbalanced parentheses, missing or leftover operands
    SyntaxError(String),
    /// A word that is neither a known constant nor a function name
    NameError(String),
    /// An operator was applied outside its numeric domain
    MathError(String),
}

impl Display for Error {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::SyntaxError(ref message) => write!(fmt, "SyntaxError: {}", message),
            Self::NameError(ref message) => write!(fmt, "NameError: {}", message),
            Self::MathError(ref message) => write!(fmt, "MathError: {}", message),
        }
    }
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match *self {
            Self::SyntaxError(ref message)
            | Self::NameError(ref message)
            | Self::MathError(ref message) => message,
        }
    }

    fn cause(&self) -> Option<&dyn error::Error> {
        match *self {
            Self::SyntaxError(_) | Self::NameError(_) | Self::MathError(_) => None,
        }
    }
}
