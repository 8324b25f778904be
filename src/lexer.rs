use crate::error::Error;
use crate::ops::{self, BINARY, CONSTANTS, UNARY};
use crate::token::Token;
use std::iter::Peekable;
use std::str::CharIndices;

/// An helper struct for scanning the input into tokens
pub struct Lexer<'a> {
    input: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &str) -> Lexer {
        Lexer {
            input: input.char_indices().peekable(),
        }
    }

    /// Scan the whole input and return its tokens in source order.
    ///
    /// Overloaded symbols are resolved against the token just produced:
    /// wherever an operand is still expected, `-` and `+` read as signs;
    /// after a value they read as binary operators, and `!` as the
    /// postfix factorial.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token(tokens.last().copied())? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    fn next_token(&mut self, prev: Option<Token>) -> Result<Option<Token>, Error> {
        while let Some((pos, c)) = self.input.next() {
            let token = match c {
                c if c.is_whitespace() => continue,
                c if c.is_ascii_lowercase() => self.word(pos, c)?,
                c if c.is_ascii_digit() => self.number(pos, c)?,
                '.' if self.next_is_digit() => self.number(pos, '.')?,
                '(' => Token::LParen { pos },
                ')' => Token::RParen { pos },
                symbol => resolve_symbol(symbol, pos, prev)?,
            };
            return Ok(Some(token));
        }
        Ok(None)
    }

    /// A run of lowercase letters: a constant or a function name
    fn word(&mut self, pos: usize, first: char) -> Result<Token, Error> {
        let mut name = String::new();
        name.push(first);
        while let Some(&(_, c)) = self.input.peek() {
            if c.is_ascii_lowercase() {
                self.input.next();
                name.push(c);
            } else {
                break;
            }
        }
        if let Some(&value) = CONSTANTS.get(name.as_str()) {
            Ok(Token::Number { value, pos })
        } else if let Some(&op) = UNARY.get(name.as_str()) {
            Ok(Token::Op { op, pos })
        } else {
            Err(Error::NameError(format!(
                "name '{}' is not defined",
                name
            )))
        }
    }

    /// A literal: digits with at most one decimal point, where both
    /// `26.` and `.15` are accepted
    fn number(&mut self, pos: usize, first: char) -> Result<Token, Error> {
        let mut digits = String::new();
        digits.push(first);
        let mut seen_dot = first == '.';
        while let Some(&(_, c)) = self.input.peek() {
            if c.is_ascii_digit() || (c == '.' && !seen_dot) {
                seen_dot = seen_dot || c == '.';
                self.input.next();
                digits.push(c);
            } else {
                break;
            }
        }
        match digits.parse::<f64>() {
            Ok(value) => Ok(Token::Number { value, pos }),
            Err(_) => Err(Error::SyntaxError(format!("invalid number: {}", digits))),
        }
    }

    fn next_is_digit(&mut self) -> bool {
        matches!(self.input.peek(), Some(&(_, c)) if c.is_ascii_digit())
    }
}

/// True when the next symbol can only be a prefix operator: at the very
/// start, after `(`, or after an operator that still wants an operand on
/// its right
fn expects_right_unary(prev: Option<Token>) -> bool {
    match prev {
        None | Some(Token::LParen { .. }) => true,
        Some(Token::Op { op, .. }) => op.is_binary() || op.is_right_associative(),
        Some(Token::Number { .. }) | Some(Token::RParen { .. }) => false,
    }
}

fn resolve_symbol(symbol: char, pos: usize, prev: Option<Token>) -> Result<Token, Error> {
    let key = symbol.to_string();
    let unary = UNARY.get(key.as_str()).copied();
    let binary = BINARY.get(key.as_str()).copied();
    if expects_right_unary(prev) {
        match (unary, binary) {
            (Some(op), _) if op.is_right_associative() => Ok(Token::Op { op, pos }),
            (None, None) => Err(Error::SyntaxError(format!(
                "invalid operator: {}",
                symbol
            ))),
            _ => Err(Error::SyntaxError(format!(
                "operator '{}' is in the wrong place",
                symbol
            ))),
        }
    } else {
        match (unary, binary) {
            (Some(op), _) if op.is_left_associative() => Ok(Token::Op { op, pos }),
            (_, Some(op)) => Ok(Token::Op { op, pos }),
            (None, None) => Err(Error::SyntaxError(format!(
                "invalid operator: {}",
                symbol
            ))),
            _ => Err(Error::SyntaxError(format!(
                "operator '{}' is in the wrong place",
                symbol
            ))),
        }
    }
}

/// Insert multiplication operators where juxtaposition implies them:
/// between a number or `)` on the left and a number or `(` on the right.
/// The inserted token inherits the position of the right-hand token.
/// Function words are operators, not values, so `sin 2` is left alone.
pub fn insert_implicit_mul(mut tokens: Vec<Token>) -> Vec<Token> {
    let mut i = 0;
    while i + 1 < tokens.len() {
        let value_on_left = matches!(tokens[i], Token::Number { .. } | Token::RParen { .. });
        let value_on_right = matches!(tokens[i + 1], Token::Number { .. } | Token::LParen { .. });
        if value_on_left && value_on_right {
            let pos = tokens[i + 1].pos();
            tokens.insert(i + 1, Token::Op { op: &ops::MUL, pos });
            i += 1;
        }
        i += 1;
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{ASIN, EXP, FACTORIAL, MINUS, MUL, NEG, PLUS, SIN, SQRT};
    use crate::token::Operator;
    use std::f64::consts;
    use test_case::test_case;

    fn num(value: f64, pos: usize) -> Token {
        Token::Number { value, pos }
    }

    fn op(op: &'static Operator, pos: usize) -> Token {
        Token::Op { op, pos }
    }

    #[test_case("2 + 2" => Ok(vec![num(2.0, 0), op(&PLUS, 2), num(2.0, 4)]) ; "spaced addition")]
    #[test_case("2+2" => Ok(vec![num(2.0, 0), op(&PLUS, 1), num(2.0, 2)]) ; "dense addition")]
    #[test_case("-2" => Ok(vec![op(&NEG, 0), num(2.0, 1)]) ; "leading minus negates")]
    #[test_case("2-2" => Ok(vec![num(2.0, 0), op(&MINUS, 1), num(2.0, 2)]) ; "minus after a value subtracts")]
    #[test_case("(-2)" => Ok(vec![Token::LParen { pos: 0 }, op(&NEG, 1), num(2.0, 2), Token::RParen { pos: 3 }]) ; "minus after left paren negates")]
    #[test_case("2^-3" => Ok(vec![num(2.0, 0), op(&EXP, 1), op(&NEG, 2), num(3.0, 3)]) ; "minus after binary operator negates")]
    #[test_case("--2" => Ok(vec![op(&NEG, 0), op(&NEG, 1), num(2.0, 2)]) ; "minus after a sign negates again")]
    #[test_case("5!" => Ok(vec![num(5.0, 0), op(&FACTORIAL, 1)]) ; "factorial is postfix")]
    #[test_case("sqrt 9" => Ok(vec![op(&SQRT, 0), num(9.0, 5)]) ; "function word")]
    #[test_case("arcsin" => Ok(vec![op(&ASIN, 0)]) ; "alias words resolve to the same operator")]
    #[test_case("pi" => Ok(vec![num(consts::PI, 0)]) ; "constant word")]
    #[test_case("26." => Ok(vec![num(26.0, 0)]) ; "trailing decimal point")]
    #[test_case(".15" => Ok(vec![num(0.15, 0)]) ; "leading decimal point")]
    #[test_case("1.2.3" => Ok(vec![num(1.2, 0), num(0.3, 3)]) ; "second dot starts a new literal")]
    #[test_case("2 $ 2" => Err(Error::SyntaxError("invalid operator: $".into())) ; "unknown symbol")]
    #[test_case("*2" => Err(Error::SyntaxError("operator '*' is in the wrong place".into())) ; "binary operator without left operand")]
    #[test_case("!2" => Err(Error::SyntaxError("operator '!' is in the wrong place".into())) ; "postfix operator without operand")]
    #[test_case("2 + * 2" => Err(Error::SyntaxError("operator '*' is in the wrong place".into())) ; "two binary operators in a row")]
    #[test_case("foo" => Err(Error::NameError("name 'foo' is not defined".into())) ; "unknown word")]
    #[test_case("." => Err(Error::SyntaxError("invalid operator: .".into())) ; "lone dot")]
    fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
        Lexer::new(input).tokenize()
    }

    #[test_case("2(3)" => vec![num(2.0, 0), op(&MUL, 1), Token::LParen { pos: 1 }, num(3.0, 2), Token::RParen { pos: 3 }] ; "number against group")]
    #[test_case("(2)(3)" => vec![Token::LParen { pos: 0 }, num(2.0, 1), Token::RParen { pos: 2 }, op(&MUL, 3), Token::LParen { pos: 3 }, num(3.0, 4), Token::RParen { pos: 5 }] ; "group against group")]
    #[test_case("2 3 4" => vec![num(2.0, 0), op(&MUL, 2), num(3.0, 2), op(&MUL, 4), num(4.0, 4)] ; "triple adjacency inserts twice")]
    #[test_case("sin 2" => vec![op(&SIN, 0), num(2.0, 4)] ; "function application is not multiplication")]
    #[test_case("4.2e" => vec![num(4.2, 0), op(&MUL, 3), num(consts::E, 3)] ; "number against constant")]
    fn implicit_mul(input: &str) -> Vec<Token> {
        insert_implicit_mul(Lexer::new(input).tokenize().unwrap())
    }

    #[test]
    fn long_whitespace_runs() {
        let input = format!("2{}2", " ".repeat(100_000));
        let expected = vec![num(2.0, 0), num(2.0, 100_001)];
        assert_eq!(Lexer::new(&input).tokenize(), Ok(expected));
        assert_eq!(Lexer::new(&" ".repeat(100_000)).tokenize(), Ok(vec![]));
    }
}
