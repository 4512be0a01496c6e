//! Sparse polynomials over nested variables.
//!
//! A polynomial is either a constant coefficient or a non-empty sum of
//! monomials. A monomial `(e, q)` at nesting depth `d` denotes
//! `q * x_d^e`, where `q` is itself a polynomial over the variables at
//! depths `d+1, d+2, ...`. Variable indices are implicit in tree depth.
//!
//! Every live polynomial satisfies the canonical-form invariants:
//! monomials are sorted by strictly decreasing exponent, exponents are
//! pairwise distinct, no monomial holds an identically-zero
//! sub-polynomial, and the single-monomial form `(0, coeff)` is always
//! collapsed to that coefficient. The invariants hold recursively at
//! every depth.

use std::fmt;
use std::mem;

/// Coefficient type. Arithmetic on coefficients does not guard overflow.
pub type Coeff = i64;

/// Exponent type. Stored exponents are non-negative; the value -1 is
/// reserved for the degree of the zero polynomial.
pub type Exp = i32;

/// A sparse polynomial over nested variables.
///
/// Structural equality is semantic equality because both sides of a
/// comparison are always in canonical form.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Poly {
    /// A constant with respect to every remaining variable.
    Coeff(Coeff),
    /// A non-empty sum of monomials sorted by strictly decreasing
    /// exponent.
    Monos(Vec<Mono>),
}

/// A monomial `poly * x_d^exp`, where `d` is the nesting depth of the
/// containing polynomial.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Mono {
    pub(crate) exp: Exp,
    pub(crate) poly: Poly,
}

impl Mono {
    /// Creates the monomial `poly * x^exp`.
    #[must_use]
    pub fn new(poly: Poly, exp: Exp) -> Self {
        Self { exp, poly }
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exp(&self) -> Exp {
        self.exp
    }

    /// Returns the sub-polynomial.
    #[must_use]
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    /// Consumes the monomial and returns its sub-polynomial.
    #[must_use]
    pub fn into_poly(self) -> Poly {
        self.poly
    }
}

impl Poly {
    /// Creates the zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self::Coeff(0)
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub const fn one() -> Self {
        Self::Coeff(1)
    }

    /// Lifts a coefficient to a constant polynomial.
    #[must_use]
    pub const fn from_coeff(c: Coeff) -> Self {
        Self::Coeff(c)
    }

    /// Builds a polynomial from an owned monomial sequence.
    ///
    /// The sequence may be unsorted and may repeat exponents; it is
    /// canonicalized: sorted descending, equal exponents merged by
    /// recursive addition, zero monomials dropped, degenerate forms
    /// collapsed. An empty sequence yields the zero polynomial.
    #[must_use]
    pub fn from_monos(mut monos: Vec<Mono>) -> Self {
        if monos.is_empty() {
            return Self::zero();
        }

        monos.sort_by(|a, b| b.exp.cmp(&a.exp));

        // Merge runs of equal exponents; the tie-break order of the sort
        // does not matter since addition is commutative.
        let mut merged: Vec<Mono> = Vec::with_capacity(monos.len());
        for m in monos {
            match merged.last_mut() {
                Some(last) if last.exp == m.exp => {
                    let sub = mem::replace(&mut last.poly, Poly::zero());
                    last.poly = sub.add(m.poly);
                }
                _ => merged.push(m),
            }
        }

        let mut poly = Self::Monos(merged);
        poly.normalize();
        poly
    }

    /// Returns true if this is identically zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Coeff(0))
    }

    /// Returns true if this is constant with respect to every variable.
    #[must_use]
    pub fn is_coeff(&self) -> bool {
        matches!(self, Self::Coeff(_))
    }

    /// Returns the monomial sequence, empty for a constant.
    #[must_use]
    pub(crate) fn monos(&self) -> &[Mono] {
        match self {
            Self::Coeff(_) => &[],
            Self::Monos(monos) => monos,
        }
    }

    /// Restores the canonical-form invariants after a mutation.
    ///
    /// Expects exponents at each level to be distinct and sorted
    /// descending already; prunes zero monomials and collapses the
    /// degenerate `(0, coeff)` form, recursively at every depth.
    /// Idempotent on canonical trees.
    pub(crate) fn normalize(&mut self) {
        if let Self::Monos(monos) = self {
            for m in monos.iter_mut() {
                m.poly.normalize();
            }
            monos.retain(|m| !m.poly.is_zero());

            if monos.is_empty() {
                *self = Self::zero();
            } else if monos.len() == 1 && monos[0].exp == 0 && monos[0].poly.is_coeff() {
                *self = mem::replace(&mut monos[0].poly, Self::zero());
            }
        }
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.poly, self.exp)
    }
}

impl fmt::Display for Poly {
    /// Renders the canonical text: a constant as its decimal value, a sum
    /// as `(sub,exp)` monomials joined by `+` in stored (descending
    /// exponent) order. No trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Coeff(c) => write!(f, "{c}"),
            Self::Monos(monos) => {
                for (i, m) in monos.iter().enumerate() {
                    if i > 0 {
                        write!(f, "+")?;
                    }
                    write!(f, "{m}")?;
                }
                Ok(())
            }
        }
    }
}
