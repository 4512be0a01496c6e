//! Single-point evaluation.

use crate::poly::{Coeff, Exp, Poly};

/// Computes `x^exp` with O(log exp) multiplications.
///
/// `x^0` is 1 even for `x = 0`; `0^exp` is 0 for positive `exp`; `x = 1`
/// short-circuits. Overflow is not guarded, matching the rest of the
/// coefficient arithmetic.
#[must_use]
pub fn coeff_pow(x: Coeff, exp: Exp) -> Coeff {
    if x == 1 || exp == 0 {
        return 1;
    }
    if x == 0 {
        return 0;
    }

    let half = coeff_pow(x, exp / 2);
    if exp % 2 == 1 {
        half * half * x
    } else {
        half * half
    }
}

impl Poly {
    /// Evaluates the polynomial at `x0 = x`, substituting `x` for the
    /// outermost variable.
    ///
    /// The result is a polynomial in the remaining variables; it is only
    /// a constant when `self` had a single variable. Consumes `self`.
    #[must_use]
    pub fn at(self, x: Coeff) -> Self {
        match self {
            Self::Coeff(c) => Self::Coeff(c),
            Self::Monos(monos) => {
                let mut acc = Self::zero();
                for m in monos {
                    let exp = m.exp();
                    acc = acc.add(m.into_poly().scale(coeff_pow(x, exp)));
                }
                acc
            }
        }
    }
}
