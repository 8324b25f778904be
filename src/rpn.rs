use crate::error::Error;
use crate::token::Token;

/// Rank of a stacked `(`: looser than every real operator, so the
/// precedence rule never removes it and only a matching `)` does.
const PAREN_RANK: i32 = 9999;

/// Reorder an infix token sequence into reverse Polish notation with the
/// shunting yard algorithm.
///
/// Precedence is compared on raw signed ranks, lower rank binding
/// tighter. The unary operators' negative ranks therefore win every tie
/// against a binary operator, which is what makes `-2^2` square the
/// negated value.
pub fn to_rpn(tokens: Vec<Token>) -> Result<Vec<Token>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number { .. } => output.push(token),
            Token::LParen { .. } => stack.push(token),
            Token::RParen { .. } => loop {
                match stack.pop() {
                    Some(Token::LParen { .. }) => break,
                    Some(top) => output.push(top),
                    None => {
                        return Err(Error::SyntaxError("too many right parentheses".into()));
                    }
                }
            },
            Token::Op { op, .. } => {
                while let Some(&top) = stack.last() {
                    let top_rank = match top {
                        Token::Op { op: top_op, .. } => top_op.rank,
                        Token::LParen { .. } => PAREN_RANK,
                        other => panic!("Internal bug: found {:?} in operator stack", other),
                    };
                    let pop_me = op.is_left_associative() && op.rank >= top_rank;
                    let pop_me = pop_me || op.is_right_associative() && op.rank > top_rank;
                    if pop_me {
                        stack.pop();
                        output.push(top);
                    } else {
                        break;
                    }
                }
                stack.push(token);
            }
        }
    }

    while let Some(token) = stack.pop() {
        match token {
            Token::LParen { .. } => {
                return Err(Error::SyntaxError("too many left parentheses".into()));
            }
            Token::Op { .. } => output.push(token),
            other => panic!("Internal bug: found {:?} in operator stack", other),
        }
    }
    Ok(output)
}

/// Reduce a token sequence in reverse Polish order to a single value
/// with a stack: numbers push, an operator pops as many values as its
/// arity and pushes the result of applying it.
///
/// # Panics
///
/// Panics on parenthesis tokens; [`to_rpn`] never emits them.
pub fn eval_rpn(tokens: Vec<Token>) -> Result<f64, Error> {
    let mut stack: Vec<f64> = Vec::new();
    for token in tokens {
        match token {
            Token::Number { value, .. } => stack.push(value),
            Token::Op { op, .. } => {
                let nargs = op.arity.count();
                if stack.len() < nargs {
                    return Err(Error::SyntaxError(format!(
                        "not enough values for {}",
                        op.display
                    )));
                }
                let args = stack.split_off(stack.len() - nargs);
                stack.push((op.apply)(&args)?);
            }
            other => panic!("Internal bug: {:?} left after conversion to RPN", other),
        }
    }
    if stack.len() == 1 {
        Ok(stack[0])
    } else {
        Err(Error::SyntaxError("malformed expression".into()))
    }
}
