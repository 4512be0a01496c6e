//! Degree queries.
//!
//! By convention the zero polynomial has degree -1 and every other
//! constant has degree 0, for both the total degree and the per-variable
//! degree.

use crate::poly::{Exp, Poly};

impl Poly {
    /// Computes the total degree: the maximum over all monomial paths of
    /// the sum of exponents from the root to a constant leaf.
    #[must_use]
    pub fn deg(&self) -> Exp {
        if self.is_zero() {
            return -1;
        }
        let mut max = 0;
        self.deg_walk(0, &mut max);
        max
    }

    fn deg_walk(&self, acc: Exp, max: &mut Exp) {
        match self {
            Self::Coeff(_) => *max = (*max).max(acc),
            Self::Monos(monos) => {
                for m in monos {
                    m.poly().deg_walk(acc + m.exp(), max);
                }
            }
        }
    }

    /// Computes the degree with respect to the variable at nesting depth
    /// `idx`: the maximum exponent seen at exactly that depth.
    ///
    /// A variable deeper than the tree contributes exponent 0.
    #[must_use]
    pub fn deg_by(&self, idx: usize) -> Exp {
        if self.is_zero() {
            return -1;
        }
        let mut max = 0;
        self.deg_by_walk(idx, 0, &mut max);
        max
    }

    fn deg_by_walk(&self, idx: usize, depth: usize, max: &mut Exp) {
        if let Self::Monos(monos) = self {
            if depth == idx {
                // Sorted descending, so the first monomial carries the
                // largest exponent at this depth.
                if let Some(m) = monos.first() {
                    *max = (*max).max(m.exp());
                }
            } else {
                for m in monos {
                    m.poly().deg_by_walk(idx, depth + 1, max);
                }
            }
        }
    }
}
