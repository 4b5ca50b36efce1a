//! Small algebra helpers over exact fractions.
//!
//! Everything here is exact except [`quadratic_roots`], which takes its square
//! root in `f64` and converts the result back into fractions.

use crate::rings::fraction::{Fraction, FractionError};

/// `b² - 4ac`
pub fn discriminant(a: &Fraction, b: &Fraction, c: &Fraction) -> Fraction {
    b.clone() * b.clone() - Fraction::from(4) * a.clone() * c.clone()
}

/// Roots of `ax² + bx + c`, smaller-sign root first: `(-b - √Δ) / 2a`, then
/// `(-b + √Δ) / 2a`.
///
/// `-b / 2a` is exact, `√Δ / 2a` is an `f64`, and each root is the exact fraction
/// of the float sum. Irrational roots are therefore only as good as `f64`.
/// A negative discriminant makes the square root NaN, which comes back as
/// [`FractionError::NonFinite`]; `a == 0` is [`FractionError::ZeroDenominator`].
pub fn quadratic_roots(
    a: &Fraction,
    b: &Fraction,
    c: &Fraction,
) -> Result<(Fraction, Fraction), FractionError> {
    let bottom = Fraction::from(2) * a.clone();
    let right = discriminant(a, b, c).to_f64().sqrt() / bottom.to_f64();
    let left = (-b.clone())
        .checked_div(&bottom)
        .ok_or(FractionError::ZeroDenominator)?
        .to_f64();

    Ok((
        Fraction::from_f64(left - right)?,
        Fraction::from_f64(left + right)?,
    ))
}

/// `(a + b)² = a² + 2ab + b²`, as the three terms.
pub fn expand_binomial(a: &Fraction, b: &Fraction) -> (Fraction, Fraction, Fraction) {
    (
        a.clone() * a.clone(),
        Fraction::from(2) * a.clone() * b.clone(),
        b.clone() * b.clone(),
    )
}

pub fn decimals(values: &[Fraction]) -> Vec<f64> {
    values.iter().map(Fraction::to_f64).collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(s: &str) -> Fraction {
        s.parse().unwrap()
    }

    #[test]
    fn test_discriminant() {
        assert_eq!(discriminant(&frac("1"), &frac("-3"), &frac("2")), 1);
        assert_eq!(discriminant(&frac("1"), &frac("2"), &frac("5")), -16);
        assert_eq!(
            discriminant(&frac("1/2"), &frac("1/3"), &frac("-1/4")),
            frac("11/18")
        );
    }

    #[test]
    fn test_quadratic_roots() {
        let (r1, r2) = quadratic_roots(&frac("1"), &frac("-3"), &frac("2")).unwrap();
        assert_eq!((r1, r2), (frac("1"), frac("2")));

        let (r1, r2) = quadratic_roots(&frac("2"), &frac("-1"), &frac("0")).unwrap();
        assert_eq!((r1, r2), (frac("0"), frac("1/2")));

        let (r1, r2) = quadratic_roots(&frac("-1"), &frac("0"), &frac("4")).unwrap();
        assert_eq!((r1, r2), (frac("2"), frac("-2")));
    }

    #[test]
    fn test_quadratic_roots_irrational() {
        let (r1, r2) = quadratic_roots(&frac("1"), &frac("0"), &frac("-2")).unwrap();
        let sqrt_2 = Fraction::from_f64(2f64.sqrt()).unwrap();
        assert_eq!(r2, sqrt_2);
        assert_eq!(r1, -sqrt_2);
        assert!((r2.to_f64() * r2.to_f64() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_quadratic_roots_inexact_boundary() {
        assert!(matches!(
            quadratic_roots(&frac("1"), &frac("0"), &frac("1")),
            Err(FractionError::NonFinite(x)) if x.is_nan()
        ));
        assert_eq!(
            quadratic_roots(&frac("0"), &frac("2"), &frac("1")),
            Err(FractionError::ZeroDenominator)
        );
    }

    #[test]
    fn test_expand_binomial() {
        assert_eq!(
            expand_binomial(&frac("1"), &frac("2")),
            (frac("1"), frac("4"), frac("4"))
        );
        assert_eq!(
            expand_binomial(&frac("-1/2"), &frac("3")),
            (frac("1/4"), frac("-3"), frac("9"))
        );
    }

    #[test]
    fn test_decimals() {
        assert_eq!(decimals(&[frac("1/4"), frac("-3"), frac("0")]), vec![0.25, -3.0, 0.0]);
    }
}
