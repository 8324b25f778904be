use crate::error::Error;
use crate::token::{Assoc, Operator};
use hashbrown::HashMap;
use std::f64::consts;

fn pow(args: &[f64]) -> Result<f64, Error> {
    let (base, exponent) = (args[0], args[1]);
    if base == 0.0 && exponent < 0.0 {
        return Err(Error::MathError("division by zero".into()));
    }
    if base < 0.0 && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(Error::MathError(
            "negative number cannot be raised to a fractional power".into(),
        ));
    }
    Ok(libm::pow(base, exponent))
}

fn div(args: &[f64]) -> Result<f64, Error> {
    if args[1] == 0.0 {
        return Err(Error::MathError("division by zero".into()));
    }
    Ok(args[0] / args[1])
}

fn mul(args: &[f64]) -> Result<f64, Error> {
    Ok(args[0] * args[1])
}

fn add(args: &[f64]) -> Result<f64, Error> {
    Ok(args[0] + args[1])
}

fn sub(args: &[f64]) -> Result<f64, Error> {
    Ok(args[0] - args[1])
}

/// Factorial over `f64`, defined for non-negative integral values only.
/// The running product saturates to infinity, so huge arguments still
/// terminate after a couple hundred multiplications.
fn factorial(args: &[f64]) -> Result<f64, Error> {
    let num = args[0];
    if num.fract() != 0.0 {
        return Err(Error::MathError(format!(
            "cannot calculate factorial of {}: number must be an integer",
            num
        )));
    }
    if num < 0.0 {
        return Err(Error::MathError(format!(
            "cannot calculate factorial of {}: number must be non-negative",
            num
        )));
    }
    let mut product: f64 = 1.0;
    let mut factor = 2.0;
    while factor <= num && product.is_finite() {
        product *= factor;
        factor += 1.0;
    }
    Ok(product)
}

fn neg(args: &[f64]) -> Result<f64, Error> {
    Ok(-args[0])
}

fn pos(args: &[f64]) -> Result<f64, Error> {
    Ok(args[0])
}

fn sqrt(args: &[f64]) -> Result<f64, Error> {
    if args[0] < 0.0 {
        return Err(Error::MathError(format!(
            "cannot calculate sqrt of {}: number must be non-negative",
            args[0]
        )));
    }
    Ok(args[0].sqrt())
}

fn sin(args: &[f64]) -> Result<f64, Error> {
    if !args[0].is_finite() {
        return Err(Error::MathError(format!(
            "cannot calculate sin of {}: number must be finite",
            args[0]
        )));
    }
    Ok(args[0].sin())
}

fn cos(args: &[f64]) -> Result<f64, Error> {
    if !args[0].is_finite() {
        return Err(Error::MathError(format!(
            "cannot calculate cos of {}: number must be finite",
            args[0]
        )));
    }
    Ok(args[0].cos())
}

fn tan(args: &[f64]) -> Result<f64, Error> {
    if !args[0].is_finite() {
        return Err(Error::MathError(format!(
            "cannot calculate tan of {}: number must be finite",
            args[0]
        )));
    }
    Ok(args[0].tan())
}

fn asin(args: &[f64]) -> Result<f64, Error> {
    if !(-1.0..=1.0).contains(&args[0]) {
        return Err(Error::MathError(format!(
            "cannot calculate arcsin of {}: number must be between -1 and 1",
            args[0]
        )));
    }
    Ok(args[0].asin())
}

fn acos(args: &[f64]) -> Result<f64, Error> {
    if !(-1.0..=1.0).contains(&args[0]) {
        return Err(Error::MathError(format!(
            "cannot calculate arccos of {}: number must be between -1 and 1",
            args[0]
        )));
    }
    Ok(args[0].acos())
}

fn atan(args: &[f64]) -> Result<f64, Error> {
    Ok(args[0].atan())
}

// Binary operators: rank 1 binds tightest, and only the exponent is
// right associative.
pub static EXP: Operator = Operator::binary("^", 1, Assoc::Right, pow);
pub static DIV: Operator = Operator::binary("/", 2, Assoc::Left, div);
pub static MUL: Operator = Operator::binary("*", 2, Assoc::Left, mul);
pub static PLUS: Operator = Operator::binary("+", 3, Assoc::Left, add);
pub static MINUS: Operator = Operator::binary("-", 3, Assoc::Left, sub);

// Unary operators use negative ranks so they always bind tighter than
// the binary ones; the postfix factorial outranks even the sign.
pub static FACTORIAL: Operator = Operator::unary("!", "!", -2, Assoc::Left, factorial);
pub static NEG: Operator = Operator::unary("-", "-", -1, Assoc::Right, neg);
pub static POS: Operator = Operator::unary("+", "+", -1, Assoc::Right, pos);
pub static SQRT: Operator = Operator::unary("sqrt", "sqrt", -1, Assoc::Right, sqrt);
pub static SIN: Operator = Operator::unary("sin", "sin", -1, Assoc::Right, sin);
pub static COS: Operator = Operator::unary("cos", "cos", -1, Assoc::Right, cos);
pub static TAN: Operator = Operator::unary("tan", "tan", -1, Assoc::Right, tan);
pub static ASIN: Operator = Operator::unary("asin", "arcsin", -1, Assoc::Right, asin);
pub static ACOS: Operator = Operator::unary("acos", "arccos", -1, Assoc::Right, acos);
pub static ATAN: Operator = Operator::unary("atan", "arctan", -1, Assoc::Right, atan);

lazy_static! {
    /// Binary operator table, keyed by symbol
    pub static ref BINARY: HashMap<&'static str, &'static Operator> = {
        let mut map = HashMap::<&'static str, &'static Operator>::new();
        map.insert("^", &EXP);
        map.insert("/", &DIV);
        map.insert("*", &MUL);
        map.insert("+", &PLUS);
        map.insert("-", &MINUS);
        map.shrink_to_fit();
        map
    };

    /// Unary operator table, keyed by symbol; `arcsin`, `arccos` and
    /// `arctan` are alias keys for the same `asin`, `acos` and `atan`
    /// descriptors
    pub static ref UNARY: HashMap<&'static str, &'static Operator> = {
        let mut map = HashMap::<&'static str, &'static Operator>::new();
        map.insert("!", &FACTORIAL);
        map.insert("-", &NEG);
        map.insert("+", &POS);
        map.insert("sqrt", &SQRT);
        map.insert("sin", &SIN);
        map.insert("cos", &COS);
        map.insert("tan", &TAN);
        map.insert("asin", &ASIN);
        map.insert("acos", &ACOS);
        map.insert("atan", &ATAN);
        map.insert("arcsin", &ASIN);
        map.insert("arccos", &ACOS);
        map.insert("arctan", &ATAN);
        map.shrink_to_fit();
        map
    };

    /// Named constants, usable anywhere a number is
    pub static ref CONSTANTS: HashMap<&'static str, f64> = {
        let mut map = HashMap::<&'static str, f64>::new();
        map.insert("e", consts::E);
        map.insert("pi", consts::PI);
        map.shrink_to_fit();
        map
    };
}
