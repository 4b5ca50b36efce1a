use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FractionError {
    #[error("Invalid literal for Fraction: {0:?}")]
    Invalid(String),

    #[error("Denominator cannot be zero")]
    ZeroDenominator,

    #[error("Cannot convert {0} to a fraction")]
    NonFinite(f64),
}

/// Exact rational number, always stored in lowest terms with `den > 0`.
#[derive(Debug, Clone)]
pub struct Fraction {
    pub num: BigInt,
    pub den: BigInt,
}

impl Fraction {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den < BigInt::zero() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn try_new(num: BigInt, den: BigInt) -> Result<Self, FractionError> {
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Fraction::new(num, den))
    }

    /// Exact value of a float: `0.1` becomes `3602879701896397 / 36028797018963968`.
    pub fn from_f64(value: f64) -> Result<Self, FractionError> {
        if !value.is_finite() {
            return Err(FractionError::NonFinite(value));
        }

        let (mantissa, exponent, sign) = num_traits::Float::integer_decode(value);
        let num = BigInt::from(mantissa) * BigInt::from(sign);
        let shift = exponent.unsigned_abs() as usize;

        if exponent >= 0 {
            Ok(Fraction::new(num << shift, BigInt::one()))
        } else {
            Ok(Fraction::new(num, BigInt::one() << shift))
        }
    }

    /// Nearest `f64`. Values whose parts overflow `f64` come back as infinity or NaN.
    pub fn to_f64(&self) -> f64 {
        let num = self.num.to_f64().unwrap_or(f64::NAN);
        let den = self.den.to_f64().unwrap_or(f64::NAN);
        num / den
    }

    pub fn checked_div(&self, rhs: &Fraction) -> Option<Fraction> {
        if rhs.is_zero() {
            return None;
        }
        Some(Fraction::new(&self.num * &rhs.den, &self.den * &rhs.num))
    }

    pub fn abs(&self) -> Fraction {
        Fraction {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }
}

fn parse_integer(s: &str) -> Option<BigInt> {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if s.starts_with('-') {
        -magnitude
    } else {
        magnitude
    })
}

// [sign] digits [. digits] [e|E [sign] digits], at least one mantissa digit
fn parse_decimal(s: &str) -> Option<Fraction> {
    let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&s[..idx], s[idx + 1..].parse::<i32>().ok()?),
        None => (s, 0),
    };

    let unsigned = mantissa
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(mantissa);
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if !int_part
        .bytes()
        .chain(frac_part.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let digits = format!("{}{}", int_part, frac_part);
    let mut num = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    if mantissa.starts_with('-') {
        num = -num;
    }

    let scale = exponent.checked_sub(i32::try_from(frac_part.len()).ok()?)?;
    let power = BigInt::from(10).pow(scale.unsigned_abs());
    if scale >= 0 {
        Some(Fraction::new(num * power, BigInt::one()))
    } else {
        Some(Fraction::new(num, power))
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    /// Accepts `n`, `n/d` (integers only) and decimal or scientific literals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let literal = s.trim();
        let invalid = || FractionError::Invalid(s.to_string());

        if let Some((num, den)) = literal.split_once('/') {
            let num = parse_integer(num.trim()).ok_or_else(invalid)?;
            let den = parse_integer(den.trim()).ok_or_else(invalid)?;
            return Fraction::try_new(num, den);
        }

        parse_decimal(literal).ok_or_else(invalid)
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Fraction {
        Fraction {
            num: value,
            den: BigInt::one(),
        }
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Fraction {
        Fraction::from(BigInt::from(value))
    }
}

impl ops::Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        if self.den == rhs.den {
            return Fraction::new(self.num + rhs.num, self.den);
        }

        Fraction::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        self + -rhs
    }
}

impl ops::Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Div for Fraction {
    type Output = Fraction;

    fn div(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl ops::Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        Fraction::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl One for Fraction {
    fn one() -> Fraction {
        Fraction::from(BigInt::one())
    }
}

impl Zero for Fraction {
    fn zero() -> Fraction {
        Fraction::from(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq<Fraction> for Fraction {
    fn eq(&self, rhs: &Fraction) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, rhs: &i64) -> bool {
        self.num == &self.den * rhs
    }
}

impl PartialOrd<Fraction> for Fraction {
    fn partial_cmp(&self, rhs: &Fraction) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl Eq for Fraction {}
impl Ord for Fraction {
    fn cmp(&self, rhs: &Fraction) -> Ordering {
        // denominators are positive, cross multiplication keeps the order
        (&self.num * &rhs.den).cmp(&(&rhs.num * &self.den))
    }
}

impl std::iter::Sum<Fraction> for Fraction {
    fn sum<I: Iterator<Item = Fraction>>(iter: I) -> Fraction {
        iter.fold(Fraction::zero(), |acc, f| acc + f)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
