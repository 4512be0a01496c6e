//! Ring arithmetic on canonical polynomials.
//!
//! All operations consume their operands and return a canonical result.
//! The standard operator traits (`+`, `-`, `*`, unary `-`, `+=`) forward
//! to the named methods.

use std::cmp::Ordering;
use std::mem;
use std::ops;

use crate::poly::{Coeff, Mono, Poly};

impl Poly {
    /// Adds two polynomials.
    #[must_use]
    pub fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Coeff(a), Self::Coeff(b)) => Self::Coeff(a + b),
            (Self::Coeff(c), Self::Monos(monos)) | (Self::Monos(monos), Self::Coeff(c)) => {
                add_coeff(monos, c)
            }
            (Self::Monos(a), Self::Monos(b)) => merge_monos(a, b),
        }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(self) -> Self {
        self.scale(-1)
    }

    /// Subtracts `rhs` from `self`.
    #[must_use]
    pub fn sub(self, rhs: Self) -> Self {
        self.add(rhs.neg())
    }

    /// Multiplies a polynomial by a coefficient.
    ///
    /// Multiplying by 0 collapses the whole tree to the zero polynomial.
    #[must_use]
    pub fn scale(mut self, c: Coeff) -> Self {
        self.scale_in(c);
        self.normalize();
        self
    }

    fn scale_in(&mut self, c: Coeff) {
        if c == 0 {
            *self = Self::zero();
            return;
        }
        match self {
            Self::Coeff(a) => *a *= c,
            Self::Monos(monos) => {
                for m in monos.iter_mut() {
                    m.poly.scale_in(c);
                }
            }
        }
    }

    /// Multiplies two polynomials.
    ///
    /// A constant operand reduces to [`Poly::scale`]; otherwise the full
    /// Cartesian product of monomials is formed and canonicalized.
    #[must_use]
    pub fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Coeff(c), p) | (p, Self::Coeff(c)) => p.scale(c),
            (Self::Monos(a), Self::Monos(b)) => {
                let mut monos = Vec::with_capacity(a.len() * b.len());
                for m in &a {
                    for n in &b {
                        monos.push(Mono::new(
                            m.poly().clone().mul(n.poly().clone()),
                            m.exp() + n.exp(),
                        ));
                    }
                }
                Self::from_monos(monos)
            }
        }
    }
}

/// Merges a coefficient into the exponent-0 slot of a monomial sequence.
fn add_coeff(mut monos: Vec<Mono>, c: Coeff) -> Poly {
    match monos.last_mut() {
        // Sorted descending, so an exponent-0 monomial can only be last.
        Some(last) if last.exp == 0 => {
            let sub = mem::replace(&mut last.poly, Poly::zero());
            last.poly = sub.add(Poly::Coeff(c));
        }
        _ => monos.push(Mono::new(Poly::Coeff(c), 0)),
    }

    let mut poly = Poly::Monos(monos);
    poly.normalize();
    poly
}

/// Merges two exponent-descending monomial sequences, adding the
/// sub-polynomials of matching exponents recursively.
fn merge_monos(a: Vec<Mono>, b: Vec<Mono>) -> Poly {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let mut left = a.into_iter();
    let mut right = b.into_iter();
    let mut x = left.next();
    let mut y = right.next();

    loop {
        match (x.take(), y.take()) {
            (Some(m), Some(n)) => match m.exp.cmp(&n.exp) {
                Ordering::Greater => {
                    merged.push(m);
                    x = left.next();
                    y = Some(n);
                }
                Ordering::Less => {
                    merged.push(n);
                    x = Some(m);
                    y = right.next();
                }
                Ordering::Equal => {
                    let exp = m.exp;
                    merged.push(Mono::new(m.poly.add(n.poly), exp));
                    x = left.next();
                    y = right.next();
                }
            },
            (Some(m), None) => {
                merged.push(m);
                x = left.next();
            }
            (None, Some(n)) => {
                merged.push(n);
                y = right.next();
            }
            (None, None) => break,
        }
    }

    let mut poly = Poly::Monos(merged);
    poly.normalize();
    poly
}

impl ops::Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Poly::add(self, rhs)
    }
}

impl ops::AddAssign for Poly {
    fn add_assign(&mut self, rhs: Self) {
        let lhs = mem::take(self);
        *self = lhs.add(rhs);
    }
}

impl ops::Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Poly::sub(self, rhs)
    }
}

impl ops::Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Poly::mul(self, rhs)
    }
}

impl ops::Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self {
        Poly::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(poly: Poly, exp: i32) -> Mono {
        Mono::new(poly, exp)
    }

    /// `2x^2 + 3x + 1`
    fn quadratic() -> Poly {
        Poly::from_monos(vec![
            mono(Poly::from_coeff(2), 2),
            mono(Poly::from_coeff(3), 1),
            mono(Poly::from_coeff(1), 0),
        ])
    }

    #[test]
    fn add_constants() {
        assert_eq!(
            Poly::from_coeff(2).add(Poly::from_coeff(3)),
            Poly::from_coeff(5)
        );
    }

    #[test]
    fn add_constant_into_existing_slot() {
        // (2x^2 + 3x + 1) + 4 = 2x^2 + 3x + 5
        let sum = quadratic().add(Poly::from_coeff(4));
        assert_eq!(
            sum,
            Poly::from_monos(vec![
                mono(Poly::from_coeff(2), 2),
                mono(Poly::from_coeff(3), 1),
                mono(Poly::from_coeff(5), 0),
            ])
        );
    }

    #[test]
    fn add_constant_creates_slot() {
        // x + 1
        let x = Poly::from_monos(vec![mono(Poly::from_coeff(1), 1)]);
        let sum = x.add(Poly::one());
        assert_eq!(
            sum,
            Poly::from_monos(vec![
                mono(Poly::from_coeff(1), 1),
                mono(Poly::from_coeff(1), 0),
            ])
        );
    }

    #[test]
    fn add_merges_matching_exponents() {
        // (x^2 + x) + (x^2 - x) = 2x^2
        let p = Poly::from_monos(vec![
            mono(Poly::from_coeff(1), 2),
            mono(Poly::from_coeff(1), 1),
        ]);
        let q = Poly::from_monos(vec![
            mono(Poly::from_coeff(1), 2),
            mono(Poly::from_coeff(-1), 1),
        ]);
        assert_eq!(
            p.add(q),
            Poly::from_monos(vec![mono(Poly::from_coeff(2), 2)])
        );
    }

    #[test]
    fn add_inverse_is_zero() {
        let p = quadratic();
        assert!(p.clone().add(p.neg()).is_zero());
    }

    #[test]
    fn add_zero_is_identity() {
        let p = quadratic();
        assert_eq!(p.clone().add(Poly::zero()), p);
    }

    #[test]
    fn sub_is_lhs_minus_rhs() {
        // 5 - 2 = 3
        assert_eq!(
            Poly::from_coeff(5).sub(Poly::from_coeff(2)),
            Poly::from_coeff(3)
        );
    }

    #[test]
    fn scale_by_zero_collapses() {
        assert!(quadratic().scale(0).is_zero());
    }

    #[test]
    fn scale_recurses_into_subtrees() {
        // (2y)x^1 scaled by 3 is (6y)x^1
        let inner = Poly::from_monos(vec![mono(Poly::from_coeff(2), 1)]);
        let p = Poly::from_monos(vec![mono(inner, 1)]);
        let scaled = p.scale(3);
        let expected_inner = Poly::from_monos(vec![mono(Poly::from_coeff(6), 1)]);
        assert_eq!(scaled, Poly::from_monos(vec![mono(expected_inner, 1)]));
    }

    #[test]
    fn mul_by_constant_scales() {
        let p = quadratic();
        assert_eq!(p.clone().mul(Poly::from_coeff(2)), p.scale(2));
    }

    #[test]
    fn mul_binomial_square() {
        // (x + 1)^2 = x^2 + 2x + 1
        let xp1 = Poly::from_monos(vec![
            mono(Poly::from_coeff(1), 1),
            mono(Poly::from_coeff(1), 0),
        ]);
        let sq = xp1.clone().mul(xp1);
        assert_eq!(
            sq,
            Poly::from_monos(vec![
                mono(Poly::from_coeff(1), 2),
                mono(Poly::from_coeff(2), 1),
                mono(Poly::from_coeff(1), 0),
            ])
        );
    }

    #[test]
    fn mul_by_zero_is_zero() {
        assert!(quadratic().mul(Poly::zero()).is_zero());
    }

    #[test]
    fn operator_traits_forward() {
        let p = quadratic();
        let q = quadratic();
        assert_eq!(p.clone() + q.clone(), p.clone().add(q.clone()));
        assert_eq!(-p.clone(), p.clone().neg());
        assert_eq!(p.clone() - q.clone(), p.clone().sub(q.clone()));
        assert_eq!(p.clone() * q.clone(), p.mul(q));
    }

    #[test]
    fn add_assign_consumes_rhs() {
        let mut p = quadratic();
        p += Poly::from_coeff(4);
        assert_eq!(p, quadratic().add(Poly::from_coeff(4)));
    }
}
