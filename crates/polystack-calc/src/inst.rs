//! The calculator instruction set.

use polystack_poly::{Coeff, Poly};

/// One executable instruction, including the implicit push performed by
/// a polynomial literal line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inst {
    /// Push the zero polynomial.
    Zero,
    /// Print 1 if the top is a constant, 0 otherwise.
    IsCoeff,
    /// Print 1 if the top is identically zero, 0 otherwise.
    IsZero,
    /// Push a deep copy of the top.
    Clone,
    /// Negate the top in place.
    Neg,
    /// Pop two, push their sum.
    Add,
    /// Pop two, push their product.
    Mul,
    /// Pop two, push top minus second.
    Sub,
    /// Print 1 if the top two are equal, 0 otherwise.
    IsEq,
    /// Print the total degree of the top.
    Deg,
    /// Print the degree of the top with respect to one variable.
    DegBy(usize),
    /// Pop the top, push its evaluation at `x0 = x`.
    At(Coeff),
    /// Print the canonical text of the top.
    Print,
    /// Pop and discard the top.
    Pop,
    /// Pop the top and `k` further polynomials, push the composition.
    Compose(usize),
    /// Push a parsed polynomial literal.
    Push(Poly),
}
